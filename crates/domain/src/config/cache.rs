use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    /// How long a cached provider payload stays valid, in seconds
    /// (default: 86400 — 24 hours)
    #[serde(default = "default_ttl_seconds")]
    pub ttl_seconds: u64,

    /// Upper bound on cached (country, year) payloads (default: 10000)
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,

    /// Interval between background sweeps of expired entries, in seconds
    /// (default: 300)
    #[serde(default = "default_compaction_interval_secs")]
    pub compaction_interval_secs: u64,
}

fn default_ttl_seconds() -> u64 {
    86_400
}

fn default_max_entries() -> usize {
    10_000
}

fn default_compaction_interval_secs() -> u64 {
    300
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_seconds: default_ttl_seconds(),
            max_entries: default_max_entries(),
            compaction_interval_secs: default_compaction_interval_secs(),
        }
    }
}
