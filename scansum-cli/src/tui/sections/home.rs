//! Landing section: instructions plus the backend warning, if any.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::theme;

pub fn render(frame: &mut Frame, area: Rect, health_warning: &Option<String>) {
    let mut lines = vec![
        Line::from(""),
        Line::from("  Load host-scan data, then request an analysis from the backend."),
        Line::from(""),
        Line::from(vec![
            Span::styled("  s", theme::FOOTER_KEY),
            Span::raw("  load the bundled sample data"),
        ]),
        Line::from(vec![
            Span::styled("  u", theme::FOOTER_KEY),
            Span::raw("  upload a local hosts JSON file"),
        ]),
        Line::from(vec![
            Span::styled("  t", theme::FOOTER_KEY),
            Span::raw("  cycle the summary type"),
        ]),
    ];
    if let Some(warning) = health_warning {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("  {warning}"),
            theme::WARNING,
        )));
    }

    let block = Block::default().borders(Borders::ALL).title(" Welcome ");
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

pub fn footer_hints() -> Vec<(&'static str, &'static str)> {
    vec![
        ("s", "sample data"),
        ("u", "upload"),
        ("t", "summary type"),
        ("q", "quit"),
    ]
}
