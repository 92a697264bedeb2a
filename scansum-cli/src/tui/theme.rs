//! Styles for the TUI chrome.  Data styling lives in scansum-render.

use ratatui::style::{Color, Modifier, Style};

pub const TITLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
pub const TEXT_DIM: Style = Style::new().fg(Color::DarkGray);
pub const WARNING: Style = Style::new().fg(Color::Yellow);
pub const ERROR: Style = Style::new().fg(Color::Red).add_modifier(Modifier::BOLD);
pub const SPINNER: Style = Style::new().fg(Color::Cyan);
pub const INPUT: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

pub const FOOTER_KEY: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
pub const FOOTER_BG: Style = Style::new().bg(Color::Black);
