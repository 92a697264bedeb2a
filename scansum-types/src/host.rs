use serde::{Deserialize, Serialize};

/// Categorical severity label attached to a host by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }

    /// Parse a wire-format (lowercase) risk level string.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            "critical" => Some(Self::Critical),
            _ => None,
        }
    }
}

/// Malware hit reported for a host. The backend guarantees at least a name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MalwareDetection {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
}

/// One scanned network endpoint and its metadata, as received from the API.
///
/// Records are immutable snapshots; `ip` is the only identity. Everything
/// beyond `ip` is optional on the wire and absent fields stay absent when
/// the record is echoed back to `/summarize`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Host {
    pub ip: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ports: Vec<u16>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub protocols: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    #[serde(default)]
    pub vulnerability_count: u32,
    #[serde(default)]
    pub has_critical_vulns: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub malware_detected: Option<MalwareDetection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_level: Option<RiskLevel>,
}

impl Host {
    pub fn new(ip: impl Into<String>) -> Self {
        Self {
            ip: ip.into(),
            ports: Vec::new(),
            protocols: Vec::new(),
            city: None,
            country: None,
            organization: None,
            hostname: None,
            vulnerability_count: 0,
            has_critical_vulns: false,
            malware_detected: None,
            risk_level: None,
        }
    }
}

/// The `data` payload of `/sample-data` and `/upload` responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostData {
    pub hosts: Vec<Host>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,
}

/// Parse a local host-data document.
///
/// Accepts the same two shapes the backend accepts on upload: an object
/// with a `hosts` array, or a bare array of host records.
pub fn parse_hosts_document(content: &str) -> Result<Vec<Host>, serde_json::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Document {
        Wrapped { hosts: Vec<Host> },
        Bare(Vec<Host>),
    }

    match serde_json::from_str::<Document>(content)? {
        Document::Wrapped { hosts } => Ok(hosts),
        Document::Bare(hosts) => Ok(hosts),
    }
}
