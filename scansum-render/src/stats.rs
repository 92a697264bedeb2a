//! Statistics cards — one block per metric present in the aggregate.

use ratatui::text::{Line, Span};

use scansum_types::{RiskLevel, SummaryStats};

use crate::theme;

/// How many entries the top-countries / top-organizations cards show.
const TOP_N: usize = 3;

/// Build the statistics section.
///
/// Cards appear in fixed order; a metric absent from `stats` yields no
/// card. Total Hosts is the exception and always renders, defaulting to 0.
pub fn stats_cards(stats: &SummaryStats) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    card(&mut lines, "Total Hosts", stats.total_hosts.unwrap_or(0));

    if let Some(n) = stats.total_vulnerabilities {
        card(&mut lines, "Total Vulnerabilities", n);
    }
    if let Some(n) = stats.critical_vulnerability_hosts {
        card(&mut lines, "Critical Vulnerability Hosts", n);
    }
    if let Some(n) = stats.malware_detected_hosts
        && n > 0
    {
        title(&mut lines, "Malware Detected");
        let noun = if n == 1 { "host" } else { "hosts" };
        lines.push(Line::from(Span::styled(
            format!("  {n} {noun}"),
            theme::MALWARE,
        )));
        lines.push(Line::from(""));
    }
    if let Some(n) = stats.total_services {
        card(&mut lines, "Total Services", n);
    }

    if !stats.top_countries.is_empty() {
        title(&mut lines, "Top Countries");
        for (name, count) in stats.top_countries.iter().take(TOP_N) {
            lines.push(ranked_entry(name, *count, None));
        }
        lines.push(Line::from(""));
    }
    if !stats.top_organizations.is_empty() {
        title(&mut lines, "Top Organizations");
        for (name, count) in stats.top_organizations.iter().take(TOP_N) {
            lines.push(ranked_entry(name, *count, None));
        }
        lines.push(Line::from(""));
    }
    if !stats.risk_levels.is_empty() {
        title(&mut lines, "Risk Distribution");
        for (level, count) in &stats.risk_levels {
            let style = RiskLevel::parse(level).map(theme::risk_style);
            lines.push(ranked_entry(&level.to_uppercase(), *count, style));
        }
        lines.push(Line::from(""));
    }

    // Drop the trailing separator
    if lines.last().is_some_and(|l| l.spans.is_empty()) {
        lines.pop();
    }
    lines
}

fn title(lines: &mut Vec<Line<'static>>, text: &str) {
    lines.push(Line::from(Span::styled(text.to_string(), theme::CARD_TITLE)));
}

fn card(lines: &mut Vec<Line<'static>>, name: &str, value: u64) {
    title(lines, name);
    lines.push(Line::from(format!("  {value}")));
    lines.push(Line::from(""));
}

fn ranked_entry(name: &str, count: u64, style: Option<ratatui::style::Style>) -> Line<'static> {
    let label = if name.is_empty() { "Unknown" } else { name };
    let name_span = match style {
        Some(s) => Span::styled(format!("  {label:<24}"), s),
        None => Span::raw(format!("  {label:<24}")),
    };
    Line::from(vec![name_span, Span::raw(count.to_string())])
}
