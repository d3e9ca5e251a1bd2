//! The `facekit tags` command family.

use super::Session;
use clap::{Args, Subcommand, ValueEnum};
use facekit_core::{NewTag, TagOrder, TagQuery};

/// Arguments for the `tags` command.
#[derive(Args, Debug)]
pub struct TagsArgs {
    #[command(subcommand)]
    pub command: TagsCommand,
}

/// Subcommands for tag management.
#[derive(Subcommand, Debug)]
pub enum TagsCommand {
    /// List photos with saved tags
    Get(GetArgs),

    /// Tag a face manually
    Add(AddArgs),

    /// Save detected tags under a user id
    Save {
        /// Tag ids returned by detect or recognize
        #[arg(required = true, value_delimiter = ',')]
        tids: Vec<String>,

        /// User id the tags belong to
        #[arg(long)]
        uid: String,

        /// Display label for the user
        #[arg(long)]
        label: Option<String>,
    },

    /// Remove saved tags
    Remove {
        /// Tag ids to remove
        #[arg(required = true, value_delimiter = ',')]
        tids: Vec<String>,
    },
}

/// Sort order of `tags get`.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Order {
    Recent,
    Random,
}

impl From<Order> for TagOrder {
    fn from(order: Order) -> Self {
        match order {
            Order::Recent => TagOrder::Recent,
            Order::Random => TagOrder::Random,
        }
    }
}

#[derive(Args, Debug, Default)]
pub struct GetArgs {
    /// Photo ids
    #[arg(long, value_delimiter = ',')]
    pub pids: Vec<String>,

    /// Photo URLs
    #[arg(long, value_delimiter = ',')]
    pub urls: Vec<String>,

    /// User ids
    #[arg(long, value_delimiter = ',')]
    pub uids: Vec<String>,

    #[arg(long, value_enum)]
    pub order: Option<Order>,

    /// Server-side filter, e.g. `gender=female`
    #[arg(long)]
    pub filter: Option<String>,

    /// Only photos where all uids appear together
    #[arg(long)]
    pub together: bool,

    /// Maximum number of photos
    #[arg(long)]
    pub limit: Option<u32>,
}

impl From<GetArgs> for TagQuery {
    fn from(args: GetArgs) -> Self {
        TagQuery {
            pids: args.pids,
            urls: args.urls,
            uids: args.uids,
            order: args.order.map(TagOrder::from),
            filter: args.filter,
            together: args.together,
            limit: args.limit,
        }
    }
}

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Photo URL
    #[arg(long)]
    pub url: String,

    /// Face center x, percent of photo width
    #[arg(long)]
    pub x: f32,

    /// Face center y, percent of photo height
    #[arg(long)]
    pub y: f32,

    /// Face width, percent of photo width
    #[arg(long)]
    pub width: u32,

    /// Face height, percent of photo height
    #[arg(long)]
    pub height: u32,

    /// User id of the tagged person
    #[arg(long)]
    pub uid: String,

    #[arg(long)]
    pub label: Option<String>,

    /// Id of whoever placed the tag
    #[arg(long)]
    pub tagger_id: Option<String>,
}

impl From<AddArgs> for NewTag {
    fn from(args: AddArgs) -> Self {
        NewTag {
            url: args.url,
            x: args.x,
            y: args.y,
            width: args.width,
            height: args.height,
            uid: args.uid,
            label: args.label,
            tagger_id: args.tagger_id,
        }
    }
}

/// Execute a `tags` subcommand.
pub async fn execute(args: TagsArgs, session: &Session) -> anyhow::Result<()> {
    match args.command {
        TagsCommand::Get(get) => {
            let resp = session.client.get_tags(&get.into()).await?;
            tracing::info!("Found {} tagged photo(s)", resp.photos.len());
            session.print(&resp)
        }

        TagsCommand::Add(add) => {
            let tag = NewTag::from(add);
            session.client.add_tag(&tag).await?;
            tracing::info!("Tagged {} in {}", tag.uid, tag.url);
            session.print(&serde_json::json!({ "status": "success" }))
        }

        TagsCommand::Save { tids, uid, label } => {
            let saved = session
                .client
                .save_tags(&tids, &uid, label.as_deref())
                .await?;
            tracing::info!("Saved {} tag(s) for {}", saved.len(), uid);
            session.print(&saved)
        }

        TagsCommand::Remove { tids } => {
            let removed = session.client.remove_tags(&tids).await?;
            tracing::info!("Removed {} tag(s)", removed.len());
            session.print(&removed)
        }
    }
}
