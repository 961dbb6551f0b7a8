//! Intro console rendering

use std::time::Duration;

use ratatui::{prelude::*, widgets::Paragraph};

use super::helpers::centered_rect;
use crate::theme::{cursor_visible, CONSOLE_BG, CONSOLE_GREEN};

/// Draw the typed prefix centered on a black console with a blinking cursor
pub fn render_intro(frame: &mut Frame, typed: &str, elapsed: Duration) {
    let area = frame.area();
    let style = Style::default().fg(CONSOLE_GREEN).bg(CONSOLE_BG);

    frame.render_widget(Paragraph::new("").style(style), area);

    let mut lines: Vec<Line> = typed
        .split('\n')
        .map(|l| Line::from(Span::styled(l.to_string(), style)))
        .collect();

    let cursor = if cursor_visible(elapsed) { "|" } else { " " };
    if let Some(last) = lines.last_mut() {
        last.spans.push(Span::styled(cursor, style));
    }

    let width = lines.iter().map(Line::width).max().unwrap_or(1) as u16;
    let height = lines.len() as u16;
    let text_area = centered_rect(area, width, height);

    frame.render_widget(Paragraph::new(lines).style(style), text_area);
}
