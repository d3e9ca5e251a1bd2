//! Remote endpoints and the detector mode shared by every call.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Default face.com API host.
pub const DEFAULT_ENDPOINT: &str = "http://api.face.com";

/// REST methods exposed by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Detect,
    Recognize,
    Train,
    Status,
    Group,
    GetTags,
    AddTag,
    SaveTags,
    RemoveTags,
    Facebook,
    Users,
    Limits,
}

impl Endpoint {
    /// Path relative to the API host.
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Detect => "faces/detect.json",
            Endpoint::Recognize => "faces/recognize.json",
            Endpoint::Train => "faces/train.json",
            Endpoint::Status => "faces/status.json",
            Endpoint::Group => "faces/group.json",
            Endpoint::GetTags => "tags/get.json",
            Endpoint::AddTag => "tags/add.json",
            Endpoint::SaveTags => "tags/save.json",
            Endpoint::RemoveTags => "tags/remove.json",
            Endpoint::Facebook => "facebook/get.json",
            Endpoint::Users => "account/users.json",
            Endpoint::Limits => "account/limits.json",
        }
    }

    /// Absolute URL of this endpoint under `base`.
    pub fn url(self, base: &str) -> String {
        format!("{}/{}", base.trim_end_matches('/'), self.path())
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Face detector mode.
///
/// `Aggressive` finds more faces at the cost of more false positives and
/// slower responses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Detector {
    #[default]
    Normal,
    Aggressive,
}

impl Detector {
    /// Value of the `detector` form parameter.
    pub fn as_param(self) -> &'static str {
        match self {
            Detector::Normal => "Normal",
            Detector::Aggressive => "Aggressive",
        }
    }
}

impl fmt::Display for Detector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Detector::Normal => f.write_str("normal"),
            Detector::Aggressive => f.write_str("aggressive"),
        }
    }
}
