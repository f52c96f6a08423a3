//! Command line surface: argument parsing and the top-level run.
//!
//! ```bash
//! tmdb-list-sync                         # same as `sync`
//! tmdb-list-sync sync --titles watch.txt --delay-ms 1000
//! tmdb-list-sync account                 # print the account id for the token
//! ```

use crate::config::{default_config_path, load_credentials};
use crate::prompt::Prompter;
use crate::titles::DEFAULT_TITLES_FILE;
use crate::tmdb::TmdbClient;
use crate::workflow::{sync_titles, DEFAULT_DELAY_MS};
use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "tmdb-list-sync", version, about)]
pub struct Cli {
    /// Config file (defaults to the platform config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// More log output (-v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add every title in a file to one of your lists
    Sync(SyncArgs),
    /// Print the account id belonging to the configured access token
    Account,
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct SyncArgs {
    /// One movie or TV title per line
    #[arg(long, default_value = DEFAULT_TITLES_FILE)]
    pub titles: PathBuf,

    /// Pause between titles, in milliseconds
    #[arg(long, default_value_t = DEFAULT_DELAY_MS)]
    pub delay_ms: u64,
}

impl Default for SyncArgs {
    fn default() -> Self {
        Self {
            titles: PathBuf::from(DEFAULT_TITLES_FILE),
            delay_ms: DEFAULT_DELAY_MS,
        }
    }
}

impl SyncArgs {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

impl Cli {
    /// No subcommand means `sync` with its defaults.
    pub fn command(&self) -> Command {
        self.command
            .clone()
            .unwrap_or_else(|| Command::Sync(SyncArgs::default()))
    }

    pub fn config_path(&self) -> Result<PathBuf> {
        match &self.config {
            Some(path) => Ok(path.clone()),
            None => Ok(default_config_path()?),
        }
    }
}

/// Runs the selected command. Any error here ends the process non-zero.
pub fn run(cli: &Cli, prompter: &mut dyn Prompter) -> Result<()> {
    let config_path = cli.config_path()?;
    let credentials = load_credentials(&config_path)
        .with_context(|| format!("loading configuration from '{}'", config_path.display()))?;

    match cli.command() {
        Command::Sync(args) => {
            println!("--- TMDB List Automator ---");
            let client = TmdbClient::new(credentials.require_all()?);
            let summary = sync_titles(&client, prompter, &args.titles, args.delay())?;
            println!("{}", summary);
            println!("--- Process Complete ---");
        }
        Command::Account => {
            println!("\nContacting TMDB API...");
            let client = TmdbClient::new(credentials.require_token()?);
            let account = client.account().context("looking up TMDB account")?;
            println!("\nSUCCESS!");
            println!("   Username: {}", account.username.as_deref().unwrap_or("-"));
            println!("   Account ID: {}", account.id);
            println!(
                "\nCopy this Account ID into the [tmdb] section of '{}'.",
                config_path.display()
            );
        }
    }

    Ok(())
}
