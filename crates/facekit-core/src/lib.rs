//! Facekit Core - Typed client for the face.com detection and recognition API.
//!
//! Every remote operation is a form-encoded POST (multipart when an image is
//! uploaded) that returns a JSON document. This crate assembles the
//! parameters, sends them and maps the reply onto plain data types.
//!
//! # Architecture
//!
//! ```text
//! FaceClient → Params (+ api_key/api_secret/detector/user_auth) → Responder → JSON → typed response
//! ```
//!
//! The [`Responder`] trait is the only seam to the network, so tests and
//! embedders can substitute their own transport.
//!
//! # Usage
//!
//! ```rust,ignore
//! use facekit_core::{Config, FaceClient};
//!
//! #[tokio::main]
//! async fn main() -> facekit_core::Result<()> {
//!     let config = Config::load()?;
//!     let client = FaceClient::from_config(&config)?;
//!
//!     let photos = client.detect(&["http://example.com/team.jpg"]).await?;
//!     println!("Faces: {}", photos[0].face_count());
//!     Ok(())
//! }
//! ```

// Module declarations
pub mod api;
pub mod client;
pub mod config;
pub mod credentials;
pub mod error;
pub mod model;
pub mod params;
pub mod responder;
pub mod response;

#[cfg(test)]
mod test_support;

// Re-exports for convenient access
pub use api::{Detector, Endpoint, DEFAULT_ENDPOINT};
pub use client::{FaceClient, NewTag, TagOrder, TagQuery};
pub use config::Config;
pub use credentials::UserAuth;
pub use error::{ClientError, ConfigError, FaceError, Result, ServerError};
pub use model::{Face, Group, Guess, Photo, Point, Rect, RemovedTag, SavedTag, Usage, UserStatus};
pub use params::{ParamValue, Params};
pub use responder::{HttpResponder, Responder};
pub use response::{
    Ack, GroupResponse, LimitsResponse, PhotoResponse, RemoveTagResponse, SaveTagResponse,
    StatusResponse, TrainResponse, UsersResponse,
};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_default_user_agent_carries_version() {
        let http = config::HttpConfig::default();
        assert!(http.user_agent.ends_with(VERSION));
    }
}
