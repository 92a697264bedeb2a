//! Analysis results section.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use scansum_render::{
    format_processing_time, format_timestamp, markdown_lines, stats_cards, theme,
};
use scansum_types::AnalysisResult;

/// Placeholder used when the backend sends no risk assessment.
const NO_RISKS: &str = "No specific risks identified";

pub fn render(frame: &mut Frame, area: Rect, result: Option<&AnalysisResult>, scroll: u16) {
    let lines = match result {
        Some(result) => results_lines(result),
        None => vec![Line::from(Span::styled(
            "  No analysis yet.",
            theme::TEXT_DIM,
        ))],
    };
    let block = Block::default().borders(Borders::ALL).title(" Analysis ");
    frame.render_widget(
        Paragraph::new(lines).block(block).scroll((scroll, 0)),
        area,
    );
}

pub fn footer_hints() -> Vec<(&'static str, &'static str)> {
    vec![
        ("a", "re-analyze"),
        ("t", "summary type"),
        ("s", "sample data"),
        ("u", "upload"),
        ("\u{2191}\u{2193}", "scroll"),
        ("q", "quit"),
    ]
}

/// Build the full report body.  Pure, so the one-shot printer and the
/// tests share it with the TUI.
pub fn results_lines(result: &AnalysisResult) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    section_title(&mut lines, "Summary");
    lines.extend(markdown_lines(&result.summary));

    if !result.key_insights.is_empty() {
        lines.push(Line::from(""));
        section_title(&mut lines, "Key Insights");
        for insight in &result.key_insights {
            for (i, line) in markdown_lines(insight).into_iter().enumerate() {
                let prefix = if i == 0 { "\u{2022} " } else { "  " };
                let mut spans = vec![Span::raw(prefix)];
                spans.extend(line.spans);
                lines.push(Line::from(spans));
            }
        }
    }

    lines.push(Line::from(""));
    section_title(&mut lines, "Risk Assessment");
    lines.extend(markdown_lines(
        result.risk_assessment.as_deref().unwrap_or(NO_RISKS),
    ));

    if let Some(stats) = &result.stats {
        lines.push(Line::from(""));
        section_title(&mut lines, "Statistics");
        lines.extend(stats_cards(stats));
    }

    let mut meta = Vec::new();
    if let Some(seconds) = result.processing_time {
        meta.push(format!("Processed in {}", format_processing_time(seconds)));
    }
    if let Some(ts) = &result.timestamp {
        meta.push(format!("Generated at {}", format_timestamp(ts)));
    }
    if !meta.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            meta.join("  \u{2022}  "),
            theme::TEXT_DIM,
        )));
    }

    lines
}

fn section_title(lines: &mut Vec<Line<'static>>, text: &str) {
    lines.push(Line::from(Span::styled(
        text.to_string(),
        theme::MD_HEADING,
    )));
    lines.push(Line::from(""));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(lines: &[Line]) -> Vec<String> {
        lines
            .iter()
            .map(|l| {
                l.spans
                    .iter()
                    .map(|s| s.content.as_ref())
                    .collect::<String>()
            })
            .collect()
    }

    #[test]
    fn minimal_result_still_shows_risk_placeholder() {
        let result = AnalysisResult {
            summary: "All quiet.".into(),
            ..Default::default()
        };
        let text = plain(&results_lines(&result));
        assert!(text.contains(&"All quiet.".to_string()));
        assert!(text.contains(&"Risk Assessment".to_string()));
        assert!(text.contains(&NO_RISKS.to_string()));
        assert!(!text.iter().any(|l| l.contains("Key Insights")));
        assert!(!text.iter().any(|l| l.contains("Statistics")));
    }

    #[test]
    fn insights_render_as_bullets() {
        let result = AnalysisResult {
            summary: "s".into(),
            key_insights: vec!["**SSH** exposed".into(), "Outdated TLS".into()],
            ..Default::default()
        };
        let text = plain(&results_lines(&result));
        assert!(text.contains(&"\u{2022} SSH exposed".to_string()));
        assert!(text.contains(&"\u{2022} Outdated TLS".to_string()));
    }

    #[test]
    fn explicit_risk_assessment_replaces_placeholder() {
        let result = AnalysisResult {
            summary: "s".into(),
            risk_assessment: Some("Two hosts are critical.".into()),
            ..Default::default()
        };
        let text = plain(&results_lines(&result));
        assert!(text.contains(&"Two hosts are critical.".to_string()));
        assert!(!text.contains(&NO_RISKS.to_string()));
    }

    #[test]
    fn metadata_line_renders_when_present() {
        let result = AnalysisResult {
            summary: "s".into(),
            processing_time: Some(2.5),
            ..Default::default()
        };
        let text = plain(&results_lines(&result));
        assert!(text.iter().any(|l| l.contains("Processed in 2.50s")));
    }

    #[test]
    fn stats_section_appears_with_stats() {
        let result = AnalysisResult {
            summary: "s".into(),
            stats: Some(scansum_types::SummaryStats {
                total_hosts: Some(3),
                ..Default::default()
            }),
            ..Default::default()
        };
        let text = plain(&results_lines(&result));
        assert!(text.contains(&"Statistics".to_string()));
        assert!(text.contains(&"Total Hosts".to_string()));
    }
}
