//! Photos and the faces (tags) detected in them.

use super::de::{opt_string_from_scalar, string_from_scalar};
use super::geometry::{Point, Rect};
use serde::{Deserialize, Serialize};

/// A photo as returned by detect, recognize, group and tag lookups.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Photo {
    /// Public URL of the photo (face.com hosts uploaded files)
    pub url: String,

    /// face.com photo id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pid: Option<String>,

    /// Width in pixels
    pub width: u32,

    /// Height in pixels
    pub height: u32,

    /// Faces found in the photo
    #[serde(default)]
    pub tags: Vec<Face>,
}

impl Photo {
    /// First face, if any.
    pub fn face(&self) -> Option<&Face> {
        self.tags.first()
    }

    pub fn faces(&self) -> &[Face] {
        &self.tags
    }

    pub fn face_count(&self) -> usize {
        self.tags.len()
    }
}

/// A detected face, i.e. a tag on a photo.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Face {
    /// Tag id. Detected-but-unsaved tags carry a `TEMP_` prefix.
    pub tid: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    #[serde(default)]
    pub recognizable: bool,

    /// Confidence threshold the service used for recognition guesses
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold: Option<f32>,

    #[serde(default)]
    pub confirmed: bool,

    /// Tag was placed by hand rather than by the detector
    #[serde(default)]
    pub manual: bool,

    #[serde(
        default,
        deserialize_with = "opt_string_from_scalar",
        skip_serializing_if = "Option::is_none"
    )]
    pub tagger_id: Option<String>,

    #[serde(
        default,
        deserialize_with = "opt_string_from_scalar",
        skip_serializing_if = "Option::is_none"
    )]
    pub gid: Option<String>,

    /// Face width, percent of photo width
    pub width: f32,

    /// Face height, percent of photo height
    pub height: f32,

    pub center: Point,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eye_left: Option<Point>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eye_right: Option<Point>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mouth_left: Option<Point>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mouth_center: Option<Point>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mouth_right: Option<Point>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nose: Option<Point>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ear_left: Option<Point>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ear_right: Option<Point>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chin: Option<Point>,

    /// Head pose in degrees
    #[serde(default)]
    pub yaw: f32,
    #[serde(default)]
    pub roll: f32,
    #[serde(default)]
    pub pitch: f32,

    /// Recognition candidates
    #[serde(default)]
    pub uids: Vec<Guess>,

    #[serde(default)]
    pub attributes: Attributes,
}

impl Face {
    /// Candidate with the highest confidence.
    pub fn best_guess(&self) -> Option<&Guess> {
        self.uids
            .iter()
            .max_by(|a, b| a.confidence.total_cmp(&b.confidence))
    }

    /// Bounding box in percent-of-photo coordinates.
    pub fn bounding_rect(&self) -> Rect {
        Rect::from_center(self.center, self.width, self.height)
    }

    /// Whether this tag has not been saved yet.
    pub fn is_temporary(&self) -> bool {
        self.tid.starts_with("TEMP_")
    }
}

/// A recognition candidate for a face.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guess {
    pub uid: String,
    pub confidence: f32,
}

/// Classifier outputs attached to a face. Absent when the service skipped them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Attributes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub face: Option<Attribute>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Attribute>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub glasses: Option<Attribute>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub smiling: Option<Attribute>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<Attribute>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lips: Option<Attribute>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age_est: Option<Attribute>,
}

/// One classifier output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    #[serde(deserialize_with = "string_from_scalar")]
    pub value: String,
    #[serde(default)]
    pub confidence: f32,
}

impl Attribute {
    /// `value` read as a boolean flag ("true"/"false").
    pub fn as_bool(&self) -> Option<bool> {
        self.value.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FACE_JSON: &str = r#"{
        "tid": "TEMP_F@0c95576847e9cd7123f1e304476b59ae_59ec9bb2ad15f_45.00_30.50_0_1",
        "recognizable": true,
        "threshold": null,
        "uids": [
            {"uid": "alice@acme", "confidence": 41},
            {"uid": "bob@acme", "confidence": 87}
        ],
        "gid": null,
        "label": "",
        "confirmed": false,
        "manual": false,
        "tagger_id": null,
        "width": 10.0,
        "height": 14.0,
        "center": {"x": 45.0, "y": 30.5},
        "eye_left": {"x": 42.1, "y": 27.3},
        "nose": {"x": 45.2, "y": 31.0},
        "ear_left": null,
        "yaw": -12.5,
        "roll": 2.1,
        "pitch": 0.5,
        "attributes": {
            "face": {"value": "true", "confidence": 81},
            "smiling": {"value": true, "confidence": 92},
            "age_est": {"value": 31, "confidence": 40}
        }
    }"#;

    #[test]
    fn test_face_parses_landmarks_and_attributes() {
        let face: Face = serde_json::from_str(FACE_JSON).unwrap();
        assert!(face.is_temporary());
        assert!(face.recognizable);
        assert_eq!(face.center, Point::new(45.0, 30.5));
        assert_eq!(face.nose, Some(Point::new(45.2, 31.0)));
        assert_eq!(face.ear_left, None);
        assert_eq!(face.chin, None);

        let smiling = face.attributes.smiling.as_ref().unwrap();
        assert_eq!(smiling.as_bool(), Some(true));
        assert_eq!(face.attributes.age_est.as_ref().unwrap().value, "31");
        assert!(face.attributes.gender.is_none());
    }

    #[test]
    fn test_best_guess_picks_highest_confidence() {
        let face: Face = serde_json::from_str(FACE_JSON).unwrap();
        let guess = face.best_guess().unwrap();
        assert_eq!(guess.uid, "bob@acme");
        assert_eq!(guess.confidence, 87.0);
    }

    #[test]
    fn test_bounding_rect_contains_landmarks() {
        let face: Face = serde_json::from_str(FACE_JSON).unwrap();
        let rect = face.bounding_rect();
        assert!(rect.contains_point(face.center));
        assert!(rect.contains_point(face.eye_left.unwrap()));
        assert_eq!(rect.width(), 10.0);
    }

    #[test]
    fn test_face_requires_tid() {
        let json = r#"{"width": 1, "height": 1, "center": {"x": 0, "y": 0}}"#;
        let err = serde_json::from_str::<Face>(json).unwrap_err();
        assert!(err.to_string().contains("tid"));
    }

    #[test]
    fn test_photo_without_tags() {
        let photo: Photo =
            serde_json::from_str(r#"{"url": "http://x/y.jpg", "width": 640, "height": 480}"#)
                .unwrap();
        assert_eq!(photo.face_count(), 0);
        assert!(photo.face().is_none());
        assert!(photo.pid.is_none());
    }
}
