//! Value objects built from face.com responses.
//!
//! Each type is deserialized once from JSON and not mutated afterwards.
//! Required fields are enforced by serde; optional fields default to `None`
//! and lists to empty.

mod de;
mod geometry;
mod photo;
mod tag;
mod usage;
mod user;

pub use geometry::{Point, Rect};
pub use photo::{Attribute, Attributes, Face, Guess, Photo};
pub use tag::{Group, RemovedTag, SavedTag};
pub use usage::Usage;
pub use user::UserStatus;
