//! Facekit CLI - command-line client for the face.com detection and recognition API.
//!
//! Every command maps onto one API call and prints the parsed result as JSON
//! on stdout. Logs go to stderr.
//!
//! # Usage
//!
//! ```bash
//! # Detect faces in a remote photo or a local file
//! facekit detect http://example.com/team.jpg
//! facekit detect ./team.jpg
//!
//! # Recognize against everyone in a namespace
//! facekit recognize ./party.jpg --uids all@acme.example
//!
//! # Save a detected tag and train the user
//! facekit tags save TEMP_F@abc --uid bob@acme.example
//! facekit train bob@acme.example
//!
//! # Check the remaining quota
//! facekit limits
//! ```

use clap::{Parser, Subcommand};

mod cli;
mod logging;

/// Facekit - command-line client for the face.com API.
#[derive(Parser, Debug)]
#[command(name = "facekit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output logs in JSON format
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(flatten)]
    session: cli::SessionArgs,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Detect faces in photo URLs or a local image
    Detect(cli::faces::DetectArgs),

    /// Recognize faces against trained users
    Recognize(cli::faces::MatchArgs),

    /// Group faces by identity
    Group(cli::faces::MatchArgs),

    /// Fetch tagged Facebook photos of users
    Facebook(cli::account::UidsArgs),

    /// Train recognition models for users
    Train(cli::account::UidsArgs),

    /// Show training status of users
    Status(cli::account::UidsArgs),

    /// List users registered in namespaces
    Users(cli::account::UsersArgs),

    /// Show the remaining API quota
    Limits,

    /// Get, add, save and remove tags
    Tags(cli::tags::TagsArgs),

    /// View and manage configuration
    Config(cli::config::ConfigArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logging isn't up yet, so config problems go to stderr directly.
    let config = match facekit_core::Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Failed to load config: {e}\n  \
                 Using default configuration. Check your config file with `facekit config path`."
            );
            facekit_core::Config::default()
        }
    };
    logging::init_from_config(&config, cli.verbose, cli.json_logs);

    tracing::debug!("Facekit v{}", facekit_core::VERSION);

    let session = || cli::Session::open(&config, &cli.session);

    // Dispatch to the appropriate command handler
    match cli.command {
        Commands::Detect(args) => cli::faces::detect(args, &session()?).await,
        Commands::Recognize(args) => cli::faces::recognize(args, &session()?).await,
        Commands::Group(args) => cli::faces::group(args, &session()?).await,
        Commands::Facebook(args) => cli::account::facebook(args, &session()?).await,
        Commands::Train(args) => cli::account::train(args, &session()?).await,
        Commands::Status(args) => cli::account::status(args, &session()?).await,
        Commands::Users(args) => cli::account::users(args, &session()?).await,
        Commands::Limits => cli::account::limits(&session()?).await,
        Commands::Tags(args) => cli::tags::execute(args, &session()?).await,
        Commands::Config(args) => cli::config::execute(args, &config).await,
    }
}
