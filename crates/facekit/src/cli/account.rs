//! User and account commands: `train`, `status`, `facebook`, `users`, `limits`.

use super::Session;
use clap::Args;

/// A list of user ids.
#[derive(Args, Debug)]
pub struct UidsArgs {
    /// User ids (e.g. `bob@acme.example`)
    #[arg(required = true, value_delimiter = ',')]
    pub uids: Vec<String>,
}

/// Arguments for `users`.
#[derive(Args, Debug)]
pub struct UsersArgs {
    /// Private namespaces to list
    #[arg(required = true, value_delimiter = ',')]
    pub namespaces: Vec<String>,
}

pub async fn train(args: UidsArgs, session: &Session) -> anyhow::Result<()> {
    let result = session.client.train(&args.uids).await?;
    tracing::info!(
        "Training: {} created, {} updated, {} unchanged, {} in progress, {} without tags",
        result.created.len(),
        result.updated.len(),
        result.unchanged.len(),
        result.in_progress.len(),
        result.no_training_set.len()
    );
    session.print(&result)
}

pub async fn status(args: UidsArgs, session: &Session) -> anyhow::Result<()> {
    let statuses = session.client.status(&args.uids).await?;
    for st in statuses.iter().filter(|s| s.needs_training()) {
        tracing::warn!("{} has tags but was never trained", st.uid);
    }
    session.print(&statuses)
}

pub async fn facebook(args: UidsArgs, session: &Session) -> anyhow::Result<()> {
    let resp = session.client.facebook_get(&args.uids).await?;
    tracing::info!("Fetched {} Facebook photo(s)", resp.photos.len());
    session.print(&resp)
}

pub async fn users(args: UsersArgs, session: &Session) -> anyhow::Result<()> {
    let users = session.client.users(&args.namespaces).await?;
    session.print(&users)
}

pub async fn limits(session: &Session) -> anyhow::Result<()> {
    let usage = session.client.limits().await?;
    if usage.is_exhausted() {
        tracing::warn!("API quota exhausted until {}", usage.reset_time_text);
    }
    session.print(&usage)
}
