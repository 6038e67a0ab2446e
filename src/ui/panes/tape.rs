//! Tape pane rendering
//!
//! Shows a window of cells centred on the data pointer, one cell per row:
//! index, decimal value, hex value and the printable character (if any).
//! The window wraps around the ends of the tape exactly like the machine.

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Data needed to render the tape pane
pub struct TapeRenderData<'a> {
    /// `(index, value)` rows, top to bottom
    pub window: &'a [(usize, u8)],
    pub pointer: usize,
    pub loop_depth: usize,
}

/// Number of cells on each side of the pointer that fit in `area`
pub fn window_radius(area: Rect) -> usize {
    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    visible_height.saturating_sub(1) / 2
}

fn printable(value: u8) -> String {
    if value.is_ascii_graphic() || value == b' ' {
        format!("'{}'", value as char)
    } else {
        String::new()
    }
}

/// Render the tape pane
pub fn render_tape_pane(frame: &mut Frame, area: Rect, data: TapeRenderData, is_focused: bool) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(format!(
            " Tape (ptr {}, loop depth {}) ",
            data.pointer, data.loop_depth
        ))
        .borders(Borders::ALL)
        .border_style(border_style);

    let items: Vec<ListItem> = data
        .window
        .iter()
        .map(|&(index, value)| {
            let is_pointer = index == data.pointer;
            let marker = if is_pointer { "▶ " } else { "  " };

            let value_style = if is_pointer {
                Style::default()
                    .bg(DEFAULT_THEME.secondary)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD)
            } else if value == 0 {
                Style::default().fg(DEFAULT_THEME.comment)
            } else {
                Style::default().fg(DEFAULT_THEME.fg)
            };

            ListItem::new(Line::from(vec![
                Span::styled(marker, Style::default().fg(DEFAULT_THEME.secondary)),
                Span::styled(
                    format!("{:>6} ", index),
                    Style::default().fg(DEFAULT_THEME.comment),
                ),
                Span::styled(format!(" {:>3} ", value), value_style),
                Span::styled(
                    format!(" 0x{:02x} ", value),
                    Style::default().fg(DEFAULT_THEME.primary),
                ),
                Span::styled(printable(value), Style::default().fg(DEFAULT_THEME.io)),
            ]))
        })
        .collect();

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radius_fits_inside_borders() {
        assert_eq!(window_radius(Rect::new(0, 0, 20, 13)), 5);
        assert_eq!(window_radius(Rect::new(0, 0, 20, 2)), 0);
    }

    #[test]
    fn test_printable_characters_only() {
        assert_eq!(printable(b'A'), "'A'");
        assert_eq!(printable(b' '), "' '");
        assert_eq!(printable(10), "");
    }
}
