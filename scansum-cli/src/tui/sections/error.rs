//! Error banner section.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::theme;

pub fn render(frame: &mut Frame, area: Rect, message: Option<&str>) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", message.unwrap_or("Something went wrong")),
            theme::ERROR,
        )),
        Line::from(""),
        Line::from(Span::styled(
            "  Press r to go back and try again.",
            theme::TEXT_DIM,
        )),
    ];
    let block = Block::default().borders(Borders::ALL).title(" Error ");
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

pub fn footer_hints() -> Vec<(&'static str, &'static str)> {
    vec![("r", "retry"), ("s", "sample data"), ("u", "upload"), ("q", "quit")]
}
