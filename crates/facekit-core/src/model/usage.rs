use serde::{Deserialize, Serialize};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// API call quota for the application key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Usage {
    pub used: u32,
    pub remaining: u32,
    pub limit: u32,

    /// Human-readable reset time as formatted by the service
    pub reset_time_text: String,

    /// Unix seconds when the quota resets
    pub reset_time: u64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace_limit: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace_used: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace_remaining: Option<u32>,
}

impl Usage {
    pub fn reset_at(&self) -> SystemTime {
        UNIX_EPOCH + Duration::from_secs(self.reset_time)
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining == 0
    }
}
