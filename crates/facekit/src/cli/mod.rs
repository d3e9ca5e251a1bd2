//! Command implementations and the state they share.

pub mod account;
pub mod config;
pub mod faces;
pub mod tags;

use anyhow::Context as _;
use clap::Args;
use facekit_core::{Config, FaceClient};
use serde::Serialize;
use std::path::PathBuf;

/// Flags that shape the client for every API command.
#[derive(Args, Debug, Default)]
pub struct SessionArgs {
    /// Use the aggressive detector (slower, finds more faces)
    #[arg(long, global = true)]
    pub aggressive: bool,

    /// Print single-line JSON instead of pretty-printed
    #[arg(long, global = true)]
    pub compact: bool,

    /// Facebook user id for user_auth
    #[arg(long, global = true, env = "FACE_FB_USER")]
    pub fb_user: Option<String>,

    /// Facebook OAuth2 access token
    #[arg(
        long,
        global = true,
        env = "FACE_FB_OAUTH_TOKEN",
        hide_env_values = true
    )]
    pub fb_oauth_token: Option<String>,

    /// Twitter OAuth user
    #[arg(long, global = true, env = "FACE_TWITTER_OAUTH_USER")]
    pub twitter_user: Option<String>,

    /// Twitter OAuth secret
    #[arg(
        long,
        global = true,
        env = "FACE_TWITTER_OAUTH_SECRET",
        hide_env_values = true
    )]
    pub twitter_secret: Option<String>,

    /// Twitter OAuth token
    #[arg(
        long,
        global = true,
        env = "FACE_TWITTER_OAUTH_TOKEN",
        hide_env_values = true
    )]
    pub twitter_token: Option<String>,
}

/// A configured client plus output settings.
pub struct Session {
    pub client: FaceClient,
    pub pretty: bool,
}

impl Session {
    pub fn open(config: &Config, args: &SessionArgs) -> anyhow::Result<Self> {
        let client = FaceClient::from_config(config).context(
            "Could not create the face.com client.\n\n  \
             Hint: export FACE_API_KEY and FACE_API_SECRET, or set them in `facekit config path`.",
        )?;
        Self::with_client(client, config, args)
    }

    fn with_client(
        mut client: FaceClient,
        config: &Config,
        args: &SessionArgs,
    ) -> anyhow::Result<Self> {
        if args.aggressive {
            client.set_aggressive(true);
        }

        match (&args.fb_user, &args.fb_oauth_token) {
            (Some(user), Some(token)) => client.set_facebook_oauth2(user, token),
            (None, None) => {}
            _ => anyhow::bail!("--fb-user and --fb-oauth-token must be given together"),
        }

        match (&args.twitter_user, &args.twitter_secret, &args.twitter_token) {
            (Some(user), Some(secret), Some(token)) => {
                client.set_twitter_oauth(user, secret, token)
            }
            (None, None, None) => {}
            _ => anyhow::bail!(
                "--twitter-user, --twitter-secret and --twitter-token must be given together"
            ),
        }

        Ok(Self {
            client,
            pretty: config.output.pretty && !args.compact,
        })
    }

    /// Write `value` to stdout as JSON.
    pub fn print<T: Serialize + ?Sized>(&self, value: &T) -> anyhow::Result<()> {
        println!("{}", render_json(value, self.pretty)?);
        Ok(())
    }
}

fn render_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> anyhow::Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}

/// The local image to upload when `inputs` is a single existing file.
///
/// Anything else is treated as a list of photo URLs.
pub fn local_image(inputs: &[String]) -> Option<PathBuf> {
    let [single] = inputs else {
        return None;
    };
    let path = PathBuf::from(shellexpand::tilde(single).into_owned());
    path.is_file().then_some(path)
}
