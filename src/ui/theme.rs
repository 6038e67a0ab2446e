use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub movement: Color,
    pub arithmetic: Color,
    pub io: Color,
    pub debug: Color,
    pub border_focused: Color,
    pub border_normal: Color,
    pub current_line_bg: Color,
    pub match_bg: Color, // Matching bracket highlight
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    movement: Color::Rgb(148, 226, 213),       // Cyan for < >
    arithmetic: Color::Rgb(166, 227, 161),     // Green for + -
    io: Color::Rgb(245, 194, 231),             // Pink for . ,
    debug: Color::Rgb(249, 226, 175),          // Yellow for !! commands
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    current_line_bg: Color::Rgb(50, 50, 70),   // Slightly lighter BG for current line
    match_bg: Color::Rgb(88, 91, 112),
};
