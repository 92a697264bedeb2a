//! Color constants and styling helpers shared by the rendering functions.

use ratatui::style::{Color, Modifier, Style};

use scansum_types::RiskLevel;

// Labels and chrome
pub const LABEL: Style = Style::new().add_modifier(Modifier::BOLD);
pub const CARD_TITLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
pub const TEXT_DIM: Style = Style::new().fg(Color::DarkGray);
pub const TEXT_ERROR: Style = Style::new().fg(Color::Red);

// Vulnerability counts
pub const VULN: Style = Style::new().fg(Color::Yellow);
pub const VULN_CRITICAL: Style = Style::new().fg(Color::Red).add_modifier(Modifier::BOLD);

// Malware hits are always a critical alert
pub const MALWARE: Style = Style::new().fg(Color::Red).add_modifier(Modifier::BOLD);

// Risk levels
pub const RISK_LOW: Style = Style::new().fg(Color::Green);
pub const RISK_MEDIUM: Style = Style::new().fg(Color::Yellow);
pub const RISK_HIGH: Style = Style::new().fg(Color::LightRed);
pub const RISK_CRITICAL: Style = Style::new().fg(Color::Red).add_modifier(Modifier::BOLD);

// Markdown
pub const MD_HEADING: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
pub const MD_CODE: Style = Style::new().fg(Color::Yellow);

pub fn risk_style(level: RiskLevel) -> Style {
    match level {
        RiskLevel::Low => RISK_LOW,
        RiskLevel::Medium => RISK_MEDIUM,
        RiskLevel::High => RISK_HIGH,
        RiskLevel::Critical => RISK_CRITICAL,
    }
}
