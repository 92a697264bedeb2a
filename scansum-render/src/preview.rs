//! Host preview fragments — one block per host, present fields only.

use ratatui::text::{Line, Span};

use scansum_types::Host;

use crate::theme;

/// How many hosts the preview section shows before truncating.
pub const PREVIEW_LIMIT: usize = 5;

/// Build the display block for one host.
///
/// The header carries the IP and, when present, an upper-cased risk badge.
/// Detail lines follow in fixed order; a field absent from the record
/// produces no line at all.
pub fn host_preview(host: &Host) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    let mut header = vec![Span::styled(host.ip.clone(), theme::LABEL)];
    if let Some(level) = host.risk_level {
        header.push(Span::raw("  "));
        header.push(Span::styled(
            format!("{} RISK", level.label().to_uppercase()),
            theme::risk_style(level),
        ));
    }
    lines.push(Line::from(header));

    if !host.ports.is_empty() {
        lines.push(detail(
            "Ports",
            host.ports
                .iter()
                .map(|p| p.to_string())
                .collect::<Vec<_>>()
                .join(", "),
        ));
    }
    if !host.protocols.is_empty() {
        lines.push(detail("Protocols", host.protocols.join(", ")));
    }
    match (&host.city, &host.country) {
        (Some(city), Some(country)) => {
            lines.push(detail("Location", format!("{city}, {country}")));
        }
        (None, Some(country)) => lines.push(detail("Country", country.clone())),
        _ => {}
    }
    if let Some(ref org) = host.organization {
        lines.push(detail("Org", org.clone()));
    }
    if let Some(ref hostname) = host.hostname {
        lines.push(detail("Hostname", hostname.clone()));
    }
    if host.vulnerability_count > 0 {
        let style = if host.has_critical_vulns {
            theme::VULN_CRITICAL
        } else {
            theme::VULN
        };
        lines.push(Line::from(vec![
            Span::styled("  Vulnerabilities: ", theme::LABEL),
            Span::styled(host.vulnerability_count.to_string(), style),
        ]));
    }
    if let Some(ref malware) = host.malware_detected {
        lines.push(Line::from(vec![
            Span::styled("  Malware: ", theme::LABEL),
            Span::styled(malware.name.clone(), theme::MALWARE),
        ]));
    }

    lines
}

/// Build the full preview section: the first [`PREVIEW_LIMIT`] hosts,
/// followed by a truncation notice when more are loaded.
pub fn preview_lines(hosts: &[Host]) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (i, host) in hosts.iter().take(PREVIEW_LIMIT).enumerate() {
        if i > 0 {
            lines.push(Line::from(""));
        }
        lines.extend(host_preview(host));
    }
    if hosts.len() > PREVIEW_LIMIT {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("... and {} more hosts", hosts.len() - PREVIEW_LIMIT),
            theme::TEXT_DIM,
        )));
    }
    lines
}

/// "1 host" / "7 hosts" label for the preview header.
pub fn host_count_label(n: usize) -> String {
    if n == 1 {
        "1 host".into()
    } else {
        format!("{n} hosts")
    }
}

fn detail(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {label}: "), theme::LABEL),
        Span::raw(value),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use scansum_types::{MalwareDetection, RiskLevel};

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
    fn bare_host_renders_only_the_header() {
        let lines = host_preview(&Host::new("10.0.0.1"));
        assert_eq!(plain(&lines), vec!["10.0.0.1"]);
    }

    #[test]
    fn absent_fields_produce_no_lines() {
        let mut host = Host::new("10.0.0.2");
        host.country = Some("Japan".into());
        host.vulnerability_count = 0;
        let text = plain(&host_preview(&host));
        assert_eq!(text, vec!["10.0.0.2", "  Country: Japan"]);
        assert!(!text.iter().any(|l| l.contains("Vulnerabilities")));
        assert!(!text.iter().any(|l| l.contains("Location")));
    }

    #[test]
    fn full_host_renders_fields_in_fixed_order() {
        let host = Host {
            ip: "203.0.113.7".into(),
            ports: vec![22, 443],
            protocols: vec!["ssh".into(), "https".into()],
            city: Some("Berlin".into()),
            country: Some("Germany".into()),
            organization: Some("Example AG".into()),
            hostname: Some("web1.example.de".into()),
            vulnerability_count: 3,
            has_critical_vulns: true,
            malware_detected: Some(MalwareDetection {
                name: "Cobalt Strike".into(),
                family: None,
                confidence: None,
            }),
            risk_level: Some(RiskLevel::Critical),
        };
        let text = plain(&host_preview(&host));
        assert_eq!(
            text,
            vec![
                "203.0.113.7  CRITICAL RISK",
                "  Ports: 22, 443",
                "  Protocols: ssh, https",
                "  Location: Berlin, Germany",
                "  Org: Example AG",
                "  Hostname: web1.example.de",
                "  Vulnerabilities: 3",
                "  Malware: Cobalt Strike",
            ]
        );
    }

    #[test]
    fn preview_truncates_past_five_hosts() {
        let hosts: Vec<Host> = (1..=8).map(|i| Host::new(format!("10.0.0.{i}"))).collect();
        let text = plain(&preview_lines(&hosts));
        assert!(text.contains(&"10.0.0.5".to_string()));
        assert!(!text.contains(&"10.0.0.6".to_string()));
        assert_eq!(text.last().unwrap(), "... and 3 more hosts");
    }

    #[test]
    fn preview_of_five_or_fewer_has_no_notice() {
        let hosts: Vec<Host> = (1..=5).map(|i| Host::new(format!("10.0.0.{i}"))).collect();
        let text = plain(&preview_lines(&hosts));
        assert!(!text.iter().any(|l| l.contains("more hosts")));
    }

    #[test]
    fn host_count_pluralization() {
        assert_eq!(host_count_label(1), "1 host");
        assert_eq!(host_count_label(0), "0 hosts");
        assert_eq!(host_count_label(12), "12 hosts");
    }
}
