//! The face.com API facade.
//!
//! One async method per remote operation. Each call assembles its form
//! parameters on top of the application credentials, POSTs them through the
//! configured [`Responder`] and parses the reply into a typed result.

use crate::api::{Detector, Endpoint, DEFAULT_ENDPOINT};
use crate::config::{Config, HttpConfig};
use crate::credentials::UserAuth;
use crate::error::{ClientError, Result};
use crate::model::{RemovedTag, SavedTag, Usage, UserStatus};
use crate::params::{join_list, Params};
use crate::responder::{HttpResponder, Responder};
use crate::response::{
    self, Ack, GroupResponse, LimitsResponse, PhotoResponse, RemoveTagResponse, SaveTagResponse,
    StatusResponse, TrainResponse, UsersResponse,
};
use serde::de::DeserializeOwned;
use std::path::Path;
use std::sync::Arc;

/// Sort order for `tags/get`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagOrder {
    Recent,
    Random,
}

impl TagOrder {
    pub fn as_param(self) -> &'static str {
        match self {
            TagOrder::Recent => "recent",
            TagOrder::Random => "random",
        }
    }
}

/// Selection for `tags/get`. Empty lists and `None` fields are not sent.
#[derive(Debug, Clone, Default)]
pub struct TagQuery {
    pub pids: Vec<String>,
    pub urls: Vec<String>,
    pub uids: Vec<String>,
    pub order: Option<TagOrder>,
    /// Server-side filter expression, e.g. `gender=female`
    pub filter: Option<String>,
    /// Only return photos where all `uids` appear together
    pub together: bool,
    pub limit: Option<u32>,
}

/// A manual tag for `tags/add`. Coordinates are percent of the photo.
#[derive(Debug, Clone)]
pub struct NewTag {
    pub url: String,
    pub x: f32,
    pub y: f32,
    pub width: u32,
    pub height: u32,
    pub uid: String,
    pub label: Option<String>,
    pub tagger_id: Option<String>,
}

/// Client for the face.com REST API.
pub struct FaceClient {
    responder: Arc<dyn Responder>,
    base_url: String,
    /// Sent with every call: api_key, api_secret, detector
    required: Params,
    auth: UserAuth,
    detector: Detector,
}

impl FaceClient {
    /// Client with the default HTTP transport.
    pub fn new(api_key: &str, api_secret: &str) -> Result<Self> {
        let responder = HttpResponder::new(&HttpConfig::default())?;
        Ok(Self::with_responder(api_key, api_secret, Arc::new(responder)))
    }

    /// Client that sends requests through `responder`.
    pub fn with_responder(api_key: &str, api_secret: &str, responder: Arc<dyn Responder>) -> Self {
        let mut required = Params::new();
        required
            .put("api_key", api_key)
            .put("api_secret", api_secret);

        let mut client = Self {
            responder,
            base_url: DEFAULT_ENDPOINT.to_string(),
            required,
            auth: UserAuth::new(),
            detector: Detector::Normal,
        };
        client.set_detector(Detector::Normal);
        client
    }

    /// Client built from a loaded [`Config`]: endpoint, detector, timeouts and
    /// `${ENV_VAR}`-resolved credentials.
    pub fn from_config(config: &Config) -> Result<Self> {
        let responder = HttpResponder::new(&config.http)?;
        Self::from_config_with_responder(config, Arc::new(responder))
    }

    pub fn from_config_with_responder(
        config: &Config,
        responder: Arc<dyn Responder>,
    ) -> Result<Self> {
        let api_key = config.api_key()?;
        let api_secret = config.api_secret()?;
        let mut client = Self::with_responder(&api_key, &api_secret, responder)
            .with_base_url(config.api.endpoint.trim());
        client.set_detector(config.api.detector);
        Ok(client)
    }

    /// Point the client at another API host.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // --- Settings ---

    pub fn set_detector(&mut self, detector: Detector) {
        self.detector = detector;
        self.required.put("detector", detector.as_param());
    }

    pub fn detector(&self) -> Detector {
        self.detector
    }

    pub fn set_aggressive(&mut self, aggressive: bool) {
        self.set_detector(if aggressive {
            Detector::Aggressive
        } else {
            Detector::Normal
        });
    }

    pub fn is_aggressive(&self) -> bool {
        self.detector == Detector::Aggressive
    }

    pub fn set_facebook_oauth2(&mut self, fb_user_id: &str, oauth_token: &str) {
        self.auth.set_facebook(fb_user_id, oauth_token);
    }

    pub fn set_twitter_oauth(&mut self, oauth_user: &str, oauth_secret: &str, oauth_token: &str) {
        self.auth.set_twitter(oauth_user, oauth_secret, oauth_token);
    }

    pub fn clear_facebook_creds(&mut self) {
        self.auth.clear_facebook();
    }

    pub fn clear_twitter_creds(&mut self) {
        self.auth.clear_twitter();
    }

    // --- Faces ---

    /// Detect faces in one or more photo URLs.
    pub async fn detect<S: AsRef<str>>(&self, urls: &[S]) -> Result<PhotoResponse> {
        let mut params = self.base_params(false);
        params.put("urls", require_list("urls", urls)?);

        self.execute(Endpoint::Detect, None, &params).await
    }

    /// Detect faces in a local image file. The response holds exactly that photo.
    pub async fn detect_file(&self, image: impl AsRef<Path>) -> Result<PhotoResponse> {
        let image = require_file(image.as_ref())?;
        let params = self.base_params(false);

        let resp: PhotoResponse = self.execute(Endpoint::Detect, Some(image), &params).await?;
        resp.require_photo(Endpoint::Detect)
    }

    /// Match faces in photo URLs against trained `uids` (e.g. `all@namespace`).
    pub async fn recognize<S: AsRef<str>, U: AsRef<str>>(
        &self,
        urls: &[S],
        uids: &[U],
    ) -> Result<PhotoResponse> {
        let mut params = self.base_params(true);
        params.put("urls", require_list("urls", urls)?);
        params.put("uids", require_list("uids", uids)?);

        self.execute(Endpoint::Recognize, None, &params).await
    }

    /// Match faces in a local image file against trained `uids`.
    pub async fn recognize_file<U: AsRef<str>>(
        &self,
        image: impl AsRef<Path>,
        uids: &[U],
    ) -> Result<PhotoResponse> {
        let image = require_file(image.as_ref())?;
        let mut params = self.base_params(true);
        params.put("uids", require_list("uids", uids)?);

        let resp: PhotoResponse = self
            .execute(Endpoint::Recognize, Some(image), &params)
            .await?;
        resp.require_photo(Endpoint::Recognize)
    }

    /// Commit saved tags into the recognition model of each uid.
    pub async fn train<U: AsRef<str>>(&self, uids: &[U]) -> Result<TrainResponse> {
        let mut params = self.base_params(true);
        params.put("uids", require_list("uids", uids)?);

        self.execute(Endpoint::Train, None, &params).await
    }

    /// Training status of each uid.
    pub async fn status<U: AsRef<str>>(&self, uids: &[U]) -> Result<Vec<UserStatus>> {
        let mut params = self.base_params(true);
        params.put("uids", require_list("uids", uids)?);

        let resp: StatusResponse = self.execute(Endpoint::Status, None, &params).await?;
        Ok(resp.user_statuses)
    }

    /// Cluster the faces found in photo URLs by identity.
    pub async fn group<S: AsRef<str>, U: AsRef<str>>(
        &self,
        urls: &[S],
        uids: &[U],
    ) -> Result<GroupResponse> {
        let mut params = self.base_params(true);
        params.put("uids", require_list("uids", uids)?);
        params.put("urls", require_list("urls", urls)?);

        self.execute(Endpoint::Group, None, &params).await
    }

    /// Cluster the faces found in a local image file by identity.
    pub async fn group_file<U: AsRef<str>>(
        &self,
        image: impl AsRef<Path>,
        uids: &[U],
    ) -> Result<GroupResponse> {
        let image = require_file(image.as_ref())?;
        let mut params = self.base_params(true);
        params.put("uids", require_list("uids", uids)?);

        self.execute(Endpoint::Group, Some(image), &params).await
    }

    // --- Tags ---

    /// Photos with saved tags matching `query`.
    pub async fn get_tags(&self, query: &TagQuery) -> Result<PhotoResponse> {
        let mut params = self.base_params(true);
        params
            .put_list("pids", &query.pids)
            .put_list("urls", &query.urls)
            .put_list("uids", &query.uids)
            .put_opt("order", query.order.map(TagOrder::as_param))
            .put_opt("filter", query.filter.as_deref())
            .put("together", query.together)
            .put_opt("limit", query.limit);

        self.execute(Endpoint::GetTags, None, &params).await
    }

    /// Add a manual tag to a photo.
    pub async fn add_tag(&self, tag: &NewTag) -> Result<()> {
        let uid = require("uid", &tag.uid)?;
        let url = require("url", &tag.url)?;

        let mut params = self.base_params(true);
        params
            .put("url", url)
            .put("x", tag.x)
            .put("y", tag.y)
            .put("width", tag.width)
            .put("height", tag.height)
            .put("uid", uid)
            .put_opt("label", tag.label.as_deref())
            .put_opt("tagger_id", tag.tagger_id.as_deref());

        let _: Ack = self.execute(Endpoint::AddTag, None, &params).await?;
        Ok(())
    }

    /// Save detected tags under `uid`, turning temporary tag ids into permanent ones.
    pub async fn save_tags<T: AsRef<str>>(
        &self,
        tids: &[T],
        uid: &str,
        label: Option<&str>,
    ) -> Result<Vec<SavedTag>> {
        let uid = require("uid", uid)?;
        let mut params = self.base_params(true);
        params
            .put("tids", require_list("tids", tids)?)
            .put("uid", uid)
            .put_opt("label", label);

        let resp: SaveTagResponse = self.execute(Endpoint::SaveTags, None, &params).await?;
        Ok(resp.saved_tags)
    }

    /// Remove saved tags.
    pub async fn remove_tags<T: AsRef<str>>(&self, tids: &[T]) -> Result<Vec<RemovedTag>> {
        let mut params = self.base_params(true);
        params.put("tids", require_list("tids", tids)?);

        let resp: RemoveTagResponse = self.execute(Endpoint::RemoveTags, None, &params).await?;
        Ok(resp.removed_tags)
    }

    // --- Facebook ---

    /// Tagged Facebook photos of each uid (needs Facebook credentials).
    pub async fn facebook_get<U: AsRef<str>>(&self, uids: &[U]) -> Result<PhotoResponse> {
        let mut params = self.base_params(true);
        params.put("uids", require_list("uids", uids)?);

        self.execute(Endpoint::Facebook, None, &params).await
    }

    // --- Account ---

    /// Registered user ids per private namespace.
    pub async fn users<N: AsRef<str>>(&self, namespaces: &[N]) -> Result<UsersResponse> {
        let mut params = self.base_params(false);
        params.put("namespaces", require_list("namespaces", namespaces)?);

        self.execute(Endpoint::Users, None, &params).await
    }

    /// Current API quota.
    pub async fn limits(&self) -> Result<Usage> {
        let params = self.base_params(false);

        let resp: LimitsResponse = self.execute(Endpoint::Limits, None, &params).await?;
        Ok(resp.usage)
    }

    // --- Internals ---

    /// Application credentials plus, when asked and available, `user_auth`.
    fn base_params(&self, with_user_auth: bool) -> Params {
        let mut params = Params::new();
        if with_user_auth {
            params.put_opt("user_auth", self.auth.to_auth_string());
        }
        params.extend(&self.required);
        params
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        image: Option<&Path>,
        params: &Params,
    ) -> Result<T> {
        let url = endpoint.url(&self.base_url);
        tracing::info!("POSTing to: {}", url);
        tracing::info!("Detector mode [{}]", self.detector);
        tracing::info!("POST parameters: {}", params);

        let form = params.to_form();
        let body = match image {
            Some(path) => self.responder.post_file(path, &url, &form).await?,
            None => self.responder.post(&url, &form).await?,
        };

        response::parse(endpoint, &body)
    }
}

fn require<'a>(name: &'static str, value: &'a str) -> Result<&'a str> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ClientError::MissingArgument(name).into());
    }
    Ok(value)
}

fn require_list<S: AsRef<str>>(name: &'static str, items: &[S]) -> Result<String> {
    join_list(items).ok_or_else(|| ClientError::MissingArgument(name).into())
}

fn require_file(path: &Path) -> Result<&Path> {
    if !path.is_file() {
        return Err(ClientError::FileNotFound(path.to_path_buf()).into());
    }
    Ok(path)
}
