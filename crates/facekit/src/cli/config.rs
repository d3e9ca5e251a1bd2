//! The `facekit config` command for configuration management.

use clap::{Args, Subcommand};
use facekit_core::Config;

/// Arguments for the `config` command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Subcommands for configuration management.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Display the effective configuration (literal secrets masked)
    Show,

    /// Show config file path
    Path,

    /// Write a config file with defaults
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
}

/// Execute the config command against the already loaded `config`.
pub async fn execute(args: ConfigArgs, config: &Config) -> anyhow::Result<()> {
    match args.command {
        ConfigCommand::Show => {
            println!("{}", masked(config).to_toml()?);
        }

        ConfigCommand::Path => {
            println!("{}", Config::default_path().display());
        }

        ConfigCommand::Init { force } => {
            let path = Config::default_path();

            if path.exists() && !force {
                anyhow::bail!(
                    "Config file already exists at: {}\nUse --force to overwrite.",
                    path.display()
                );
            }

            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, Config::default().to_toml()?)?;

            tracing::info!("Config file created at: {}", path.display());
            println!("Configuration initialized at: {}", path.display());
        }
    }

    Ok(())
}

/// Copy of `config` with literal credentials hidden. `${VAR}` references stay visible.
fn masked(config: &Config) -> Config {
    let mut shown = config.clone();
    for value in [&mut shown.api.api_key, &mut shown.api.api_secret] {
        if !value.is_empty() && !value.starts_with("${") {
            *value = "****".to_string();
        }
    }
    shown
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masked_keeps_env_references() {
        let shown = masked(&Config::default());
        assert_eq!(shown.api.api_key, "${FACE_API_KEY}");
        assert_eq!(shown.api.api_secret, "${FACE_API_SECRET}");
    }

    #[test]
    fn masked_hides_literal_credentials() {
        let mut config = Config::default();
        config.api.api_key = "4b4b4b".to_string();
        config.api.api_secret = "s3cr3t".to_string();

        let shown = masked(&config);
        assert_eq!(shown.api.api_key, "****");
        assert_eq!(shown.api.api_secret, "****");
        assert_eq!(config.api.api_secret, "s3cr3t");
    }
}
