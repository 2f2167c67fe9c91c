use serde::Deserialize;

/// Optional file-based configuration. Every field mirrors a CLI argument
/// and only applies when that argument was left at its default.
#[derive(Debug, Default, Deserialize)]
pub struct ConfigFile {
    pub url: Option<String>,
    pub benchmark: Option<bool>,
    pub quiet: Option<bool>,
    #[serde(alias = "concurrency")]
    pub concurrent: Option<usize>,
    #[serde(alias = "duration")]
    pub time: Option<u64>,
    pub delay: Option<f64>,
    pub dns_pool: Option<bool>,
    pub dns_servers: Option<Vec<String>>,
    pub timeout: Option<u64>,
}
