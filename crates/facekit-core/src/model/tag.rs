//! Results of tag management calls and face grouping.

use super::de::{opt_string_from_scalar, string_from_scalar};
use serde::{Deserialize, Serialize};

/// A tag committed by `tags/save`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedTag {
    /// Permanent tag id
    pub tid: String,

    /// The temporary id it was saved from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detected_tid: Option<String>,
}

/// A tag deleted by `tags/remove`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemovedTag {
    pub tid: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub removed_tid: Option<String>,
}

/// A cluster of faces the service believes belong to one person.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    #[serde(deserialize_with = "string_from_scalar")]
    pub gid: String,

    /// Known identity of the group, when recognized
    #[serde(
        default,
        deserialize_with = "opt_string_from_scalar",
        skip_serializing_if = "Option::is_none"
    )]
    pub uid: Option<String>,

    /// Tag ids in this group
    #[serde(default)]
    pub tids: Vec<String>,
}

impl Group {
    pub fn len(&self) -> usize {
        self.tids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tids.is_empty()
    }

    pub fn is_recognized(&self) -> bool {
        self.uid.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_with_integer_gid() {
        let g: Group =
            serde_json::from_str(r#"{"gid": 2, "tids": ["t1", "t2"], "uid": null}"#).unwrap();
        assert_eq!(g.gid, "2");
        assert_eq!(g.len(), 2);
        assert!(!g.is_recognized());
    }

    #[test]
    fn test_saved_tag_requires_tid() {
        let result = serde_json::from_str::<SavedTag>(r#"{"detected_tid": "TEMP_x"}"#);
        assert!(result.is_err());
    }
}
