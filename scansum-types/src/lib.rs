pub mod analysis;
pub mod host;

pub use analysis::{AnalysisResult, SummaryStats};
pub use host::{Host, HostData, MalwareDetection, RiskLevel, parse_hosts_document};
