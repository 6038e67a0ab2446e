//! Source code pane rendering with instruction highlighting
//!
//! Displays the program with each instruction byte coloured by kind,
//! everything else dimmed as a comment. The next instruction to execute is
//! drawn on an orange background and, when it is a bracket, its partner is
//! highlighted too.

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Scroll state for the source pane
pub struct SourceScrollState {
    pub offset: usize,
    pub target_line_row: Option<usize>,
}

/// Data needed to render the source pane
pub struct SourceRenderData<'a> {
    pub source: &'a str,
    /// Byte offset of the next instruction (may equal `source.len()` at halt)
    pub instruction_pointer: usize,
    pub matching_bracket: Option<usize>,
    pub halted: bool,
}

fn instruction_style(c: char) -> Style {
    match c {
        '<' | '>' => Style::default().fg(DEFAULT_THEME.movement),
        '+' | '-' => Style::default().fg(DEFAULT_THEME.arithmetic),
        '.' | ',' => Style::default().fg(DEFAULT_THEME.io),
        '[' | ']' => Style::default()
            .fg(DEFAULT_THEME.primary)
            .add_modifier(Modifier::BOLD),
        '!' => Style::default().fg(DEFAULT_THEME.debug),
        _ => Style::default().fg(DEFAULT_THEME.comment),
    }
}

/// Split source into `(byte offset of line start, line text)`
fn lines_with_offsets(source: &str) -> Vec<(usize, &str)> {
    let mut offset = 0;
    source
        .split('\n')
        .map(|line| {
            let start = offset;
            offset += line.len() + 1;
            (start, line)
        })
        .collect()
}

/// 1-based line containing byte `offset`
fn line_of(lines: &[(usize, &str)], offset: usize) -> usize {
    lines.partition_point(|(start, _)| *start <= offset).max(1)
}

fn highlight_line<'a>(
    start: usize,
    line: &'a str,
    data: &SourceRenderData<'_>,
    is_current: bool,
) -> Vec<Span<'a>> {
    let mut spans = Vec::new();
    for (i, c) in line.char_indices() {
        if c == '\r' {
            continue;
        }
        let offset = start + i;
        let mut style = instruction_style(c);

        if !data.halted && offset == data.instruction_pointer {
            style = style
                .bg(DEFAULT_THEME.secondary)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD);
        } else if Some(offset) == data.matching_bracket {
            style = style.bg(DEFAULT_THEME.match_bg);
        } else if is_current {
            style = style.bg(DEFAULT_THEME.current_line_bg);
        }

        spans.push(Span::styled(&line[i..i + c.len_utf8()], style));
    }
    spans
}

/// Render the source code pane
pub fn render_source_pane(
    frame: &mut Frame,
    area: Rect,
    data: SourceRenderData,
    is_focused: bool,
    scroll_state: &mut SourceScrollState,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(" Source Code ")
        .borders(Borders::ALL)
        .border_style(border_style);

    let lines = lines_with_offsets(data.source);
    let total_lines = lines.len();
    let current_line = line_of(&lines, data.instruction_pointer);

    let visible_height = area.height.saturating_sub(2).max(1) as usize; // Account for borders (2), min 1

    // Initialize target_line_row to center if not set
    let target_row = scroll_state
        .target_line_row
        .unwrap_or(visible_height / 2)
        .min(visible_height.saturating_sub(1));
    scroll_state.target_line_row = Some(target_row);

    // Keep the current line at the target visual row
    scroll_state.offset = current_line.saturating_sub(1).saturating_sub(target_row);
    if total_lines > visible_height {
        scroll_state.offset = scroll_state.offset.min(total_lines - visible_height);
    } else {
        scroll_state.offset = 0;
    }

    let visible_lines: Vec<Line> = lines
        .iter()
        .enumerate()
        .skip(scroll_state.offset)
        .take(visible_height)
        .map(|(idx, (start, line))| {
            let line_num = idx + 1;
            let is_current = line_num == current_line && !data.halted;
            let num_style = if is_current {
                Style::default()
                    .fg(DEFAULT_THEME.secondary)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.comment)
            };

            let mut spans = vec![Span::styled(format!("{:4} ", line_num), num_style)];
            spans.extend(highlight_line(*start, line, &data, is_current));
            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(visible_lines).block(block);
    frame.render_widget(paragraph, area);
}
