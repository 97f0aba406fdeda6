//! Command-line definitions and dispatch.

use crate::output::{OutputFormat, render};
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;
use wartezeiten_client::{
    Language, OpeningTimesRequest, ParksRequest, WaitingTimesRequest, WartezeitenApi,
};


/// Query theme park opening and waiting times from Wartezeiten.APP.
#[derive(Parser, Debug)]
#[command(name = "wartezeiten")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// API origin, overrides the configuration file
    #[arg(long, env = "WARTEZEITEN_BASE_URL", global = true)]
    pub base_url: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json, global = true)]
    pub format: OutputFormat,

    /// Log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands, one per API endpoint.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List available theme parks
    Parks {
        /// Language of park names (de or en)
        #[arg(short, long)]
        language: Option<Language>,
    },

    /// Show today's opening times of a park
    OpeningTimes {
        /// Park identifier, as listed by `parks`
        #[arg(short, long)]
        park: String,
    },

    /// Show current waiting times of a park
    WaitingTimes {
        /// Park identifier, as listed by `parks`
        #[arg(short, long)]
        park: String,

        /// Language of attraction names (de or en)
        #[arg(short, long)]
        language: Option<Language>,
    },
}

impl Cli {
    /// Default tracing directive for the given `-v` count.
    #[must_use]
    pub fn log_directive(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

/// Runs `command` against `api` and returns the rendered result.
///
/// # Errors
/// Returns error if the API call or rendering fails.
pub async fn execute<A>(
    api: &A,
    command: &Command,
    default_language: Language,
    format: OutputFormat,
) -> anyhow::Result<String>
where
    A: WartezeitenApi + ?Sized,
{
    debug!(?command, "executing command");

    let rendered = match command {
        Command::Parks { language } => {
            let request = ParksRequest::new(language.unwrap_or(default_language));
            let parks = api.get_parks(&request).await?;
            render(&parks, format)?
        }
        Command::OpeningTimes { park } => {
            let request = OpeningTimesRequest::new(park.as_str());
            let times = api.get_opening_times(&request).await?;
            render(&times, format)?
        }
        Command::WaitingTimes { park, language } => {
            let request =
                WaitingTimesRequest::new(park.as_str(), language.unwrap_or(default_language));
            let times = api.get_waiting_times(&request).await?;
            render(&times, format)?
        }
    };

    Ok(rendered)
}
