//! Loaded-hosts preview section.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::widgets::{Block, Borders, Paragraph};

use scansum_render::{host_count_label, preview_lines};
use scansum_types::Host;

pub fn render(frame: &mut Frame, area: Rect, hosts: &[Host], scroll: u16) {
    let title = format!(" Loaded Data \u{2014} {} ", host_count_label(hosts.len()));
    let block = Block::default().borders(Borders::ALL).title(title);
    frame.render_widget(
        Paragraph::new(preview_lines(hosts))
            .block(block)
            .scroll((scroll, 0)),
        area,
    );
}

pub fn footer_hints() -> Vec<(&'static str, &'static str)> {
    vec![
        ("a", "analyze"),
        ("t", "summary type"),
        ("s", "sample data"),
        ("u", "upload"),
        ("\u{2191}\u{2193}", "scroll"),
        ("q", "quit"),
    ]
}
