//! Typed response bodies, one per endpoint family.

use crate::model::{Face, Group, Photo, RemovedTag, SavedTag, Usage, UserStatus};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Body of detect, recognize, tags/get and facebook/get.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhotoResponse {
    pub photos: Vec<Photo>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<Usage>,
}

/// Body of tags/save.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveTagResponse {
    pub saved_tags: Vec<SavedTag>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Body of tags/remove.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoveTagResponse {
    pub removed_tags: Vec<RemovedTag>,
}

/// Body of faces/train: every requested uid lands in exactly one bucket.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrainResponse {
    /// Users trained for the first time
    #[serde(default)]
    pub created: Vec<UserStatus>,

    /// Users whose model was retrained with new tags
    #[serde(default)]
    pub updated: Vec<UserStatus>,

    /// Users with no new tags since the last training
    #[serde(default)]
    pub unchanged: Vec<UserStatus>,

    /// Users whose training is still running
    #[serde(default)]
    pub in_progress: Vec<UserStatus>,

    /// Users without any saved tags
    #[serde(default)]
    pub no_training_set: Vec<UserStatus>,
}

impl TrainResponse {
    /// Number of users reported across all buckets.
    pub fn total(&self) -> usize {
        self.created.len()
            + self.updated.len()
            + self.unchanged.len()
            + self.in_progress.len()
            + self.no_training_set.len()
    }
}

/// Body of faces/status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub user_statuses: Vec<UserStatus>,
}

/// Body of faces/group.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupResponse {
    #[serde(default)]
    pub photos: Vec<Photo>,

    pub groups: Vec<Group>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<Usage>,
}

impl GroupResponse {
    pub fn group(&self, gid: &str) -> Option<&Group> {
        self.groups.iter().find(|g| g.gid == gid)
    }

    /// Faces across all photos whose tag id belongs to `group`.
    pub fn faces_in<'a>(&'a self, group: &'a Group) -> impl Iterator<Item = &'a Face> + 'a {
        self.photos
            .iter()
            .flat_map(|p| p.tags.iter())
            .filter(move |f| group.tids.iter().any(|t| *t == f.tid))
    }
}

/// Body of account/users: namespace -> user ids.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsersResponse {
    pub users: BTreeMap<String, Vec<String>>,
}

impl UsersResponse {
    /// Users registered in `namespace` (empty if the namespace is unknown).
    pub fn users_in(&self, namespace: &str) -> &[String] {
        self.users
            .get(namespace)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn all_users(&self) -> impl Iterator<Item = &str> {
        self.users.values().flatten().map(String::as_str)
    }
}

/// Body of account/limits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitsResponse {
    pub usage: Usage,
}

/// Body of calls whose only payload is the status envelope (tags/add).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ack {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
