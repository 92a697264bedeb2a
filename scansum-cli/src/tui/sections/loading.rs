//! Busy section shown while a backend request is in flight.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::app::Request;
use crate::tui::theme;

const FRAMES: [&str; 8] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧"];

pub fn render(frame: &mut Frame, area: Rect, request: Request, tick: usize) {
    let spinner = FRAMES[tick % FRAMES.len()];
    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(format!("  {spinner} "), theme::SPINNER),
            Span::raw(format!("{}...", request.label())),
        ]),
    ];
    let block = Block::default().borders(Borders::ALL).title(" Working ");
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

pub fn footer_hints() -> Vec<(&'static str, &'static str)> {
    vec![("q", "quit")]
}
