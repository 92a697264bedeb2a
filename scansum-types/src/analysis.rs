use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Aggregate statistics computed by the backend for one analysis.
///
/// Every field is independently optional; the renderer draws a card only
/// for fields that are present. The three maps preserve server ordering,
/// which defines the display order of the top-N lists.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SummaryStats {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_hosts: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_vulnerabilities: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub critical_vulnerability_hosts: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub malware_detected_hosts: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_services: Option<u64>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub top_countries: IndexMap<String, u64>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub top_organizations: IndexMap<String, u64>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub risk_levels: IndexMap<String, u64>,
}

/// The `data` payload of a successful `/summarize` response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Narrative summary, Markdown.
    pub summary: String,
    /// Bullet insights, each one a Markdown fragment.
    #[serde(default)]
    pub key_insights: Vec<String>,
    /// Markdown risk assessment; the renderer substitutes a fixed
    /// placeholder when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_assessment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<SummaryStats>,
    /// Server-side processing time in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processing_time: Option<f64>,
    /// ISO datetime of the analysis.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analysis_result_minimal() {
        let parsed: AnalysisResult =
            serde_json::from_str(r#"{"summary": "All quiet."}"#).unwrap();
        assert_eq!(parsed.summary, "All quiet.");
        assert!(parsed.key_insights.is_empty());
        assert!(parsed.risk_assessment.is_none());
        assert!(parsed.stats.is_none());
    }

    #[test]
    fn stats_map_order_preserved() {
        let json = r#"{
            "total_hosts": 4,
            "top_countries": {"US": 10, "DE": 5, "FR": 3, "JP": 1}
        }"#;
        let stats: SummaryStats = serde_json::from_str(json).unwrap();
        let keys: Vec<&str> = stats.top_countries.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["US", "DE", "FR", "JP"]);
        assert_eq!(stats.total_hosts, Some(4));
        assert!(stats.total_services.is_none());
    }

    #[test]
    fn analysis_result_full() {
        let json = r##"{
            "summary": "# Overview\nTwo hosts at risk.",
            "key_insights": ["**SSH** exposed", "Outdated TLS"],
            "risk_assessment": "High overall risk.",
            "stats": {"total_hosts": 2, "risk_levels": {"high": 1, "low": 1}},
            "processing_time": 3.2,
            "timestamp": "2025-06-01T12:00:00"
        }"##;
        let result: AnalysisResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.key_insights.len(), 2);
        assert_eq!(result.processing_time, Some(3.2));
        let stats = result.stats.unwrap();
        assert_eq!(stats.risk_levels.get("high"), Some(&1));
    }
}
