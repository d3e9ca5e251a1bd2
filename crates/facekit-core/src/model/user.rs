use serde::{Deserialize, Serialize};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Training state of one user id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserStatus {
    pub uid: String,

    /// Number of saved tags backing the model
    #[serde(default)]
    pub training_set_size: u32,

    /// Unix seconds of the last successful training
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_trained: Option<u64>,

    #[serde(default)]
    pub training_in_progress: bool,
}

impl UserStatus {
    pub fn last_trained_at(&self) -> Option<SystemTime> {
        self.last_trained
            .map(|secs| UNIX_EPOCH + Duration::from_secs(secs))
    }

    /// Saved tags exist but no model was ever trained from them.
    pub fn needs_training(&self) -> bool {
        self.training_set_size > 0 && self.last_trained.is_none() && !self.training_in_progress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untrained_user() {
        let s: UserStatus = serde_json::from_str(
            r#"{"uid": "a@ns", "training_set_size": 2, "last_trained": null, "training_in_progress": false}"#,
        )
        .unwrap();
        assert!(s.needs_training());
        assert!(s.last_trained_at().is_none());
    }

    #[test]
    fn test_last_trained_at() {
        let s: UserStatus =
            serde_json::from_str(r#"{"uid": "a@ns", "last_trained": 1298372316}"#).unwrap();
        let at = s.last_trained_at().unwrap();
        assert_eq!(
            at.duration_since(UNIX_EPOCH).unwrap().as_secs(),
            1_298_372_316
        );
        assert!(!s.needs_training());
    }
}
