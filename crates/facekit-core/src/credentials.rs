//! Third-party user credentials forwarded as the `user_auth` parameter.
//!
//! face.com resolves Facebook and Twitter identities on behalf of the caller;
//! the tokens are only held in memory for the lifetime of the client.

use std::collections::BTreeMap;

const FB_USER: &str = "fb_user";
const FB_OAUTH_TOKEN: &str = "fb_oauth_token";
const TWITTER_OAUTH_USER: &str = "twitter_oauth_user";
const TWITTER_OAUTH_SECRET: &str = "twitter_oauth_secret";
const TWITTER_OAUTH_TOKEN: &str = "twitter_oauth_token";

/// In-memory Facebook/Twitter credentials.
#[derive(Debug, Clone, Default)]
pub struct UserAuth {
    entries: BTreeMap<&'static str, String>,
}

impl UserAuth {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use Facebook OAuth2 credentials.
    pub fn set_facebook(&mut self, user_id: &str, oauth_token: &str) {
        self.entries.insert(FB_USER, user_id.to_string());
        self.entries.insert(FB_OAUTH_TOKEN, oauth_token.to_string());
    }

    /// Use Twitter OAuth credentials.
    pub fn set_twitter(&mut self, oauth_user: &str, oauth_secret: &str, oauth_token: &str) {
        self.entries.insert(TWITTER_OAUTH_USER, oauth_user.to_string());
        self.entries.insert(TWITTER_OAUTH_SECRET, oauth_secret.to_string());
        self.entries.insert(TWITTER_OAUTH_TOKEN, oauth_token.to_string());
    }

    pub fn clear_facebook(&mut self) {
        self.entries.remove(FB_USER);
        self.entries.remove(FB_OAUTH_TOKEN);
    }

    pub fn clear_twitter(&mut self) {
        self.entries.remove(TWITTER_OAUTH_USER);
        self.entries.remove(TWITTER_OAUTH_SECRET);
        self.entries.remove(TWITTER_OAUTH_TOKEN);
    }

    pub fn has_facebook(&self) -> bool {
        self.entries.contains_key(FB_USER)
    }

    pub fn has_twitter(&self) -> bool {
        self.entries.contains_key(TWITTER_OAUTH_USER)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render as `key:value,key:value`, or `None` when nothing is set.
    pub fn to_auth_string(&self) -> Option<String> {
        if self.entries.is_empty() {
            return None;
        }
        Some(
            self.entries
                .iter()
                .map(|(k, v)| format!("{k}:{v}"))
                .collect::<Vec<_>>()
                .join(","),
        )
    }
}
