//! Command line interface
//!
//! `cex explore` runs one explore request against the configured providers;
//! Ctrl-C cancels it. `cex providers` lists what is registered.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use tokio_util::sync::CancellationToken;
use tracing::debug;

use cex_domain::value_objects::{ExploreMove, ExploreParams, Principal};
use cex_infrastructure::config::ConfigLoader;
use cex_infrastructure::di::{available_providers, init_app};
use cex_infrastructure::logging::init_logging;

/// Command line interface for the concept explorer
#[derive(Parser, Debug)]
#[command(name = "cex")]
#[command(about = "Concept explorer - vector similarity search over concepts")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Command to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Find the concepts nearest to a set of search terms
    Explore(ExploreArgs),
    /// List registered providers
    Providers,
}

/// Arguments of `cex explore`
#[derive(Args, Debug)]
pub struct ExploreArgs {
    /// Search terms
    #[arg(required = true)]
    pub terms: Vec<String>,

    /// Maximum number of results (0 lets the index decide)
    #[arg(short, long, default_value_t = 0)]
    pub limit: usize,

    /// Term to move the query toward (repeatable)
    #[arg(long = "move-to", value_name = "TERM")]
    pub move_to: Vec<String>,

    /// Strength of the move toward
    #[arg(long, default_value_t = 0.0, value_name = "FORCE")]
    pub move_to_force: f32,

    /// Term to move the query away from (repeatable)
    #[arg(long = "move-away-from", value_name = "TERM")]
    pub move_away_from: Vec<String>,

    /// Strength of the move away
    #[arg(long, default_value_t = 0.0, value_name = "FORCE")]
    pub move_away_force: f32,

    /// User making the request (anonymous when omitted)
    #[arg(short, long)]
    pub user: Option<String>,

    /// Group of the user (repeatable)
    #[arg(short, long = "group", value_name = "GROUP", requires = "user")]
    pub groups: Vec<String>,
}

impl ExploreArgs {
    /// Explore parameters described by the arguments
    pub fn params(&self) -> ExploreParams {
        ExploreParams::new(self.terms.iter().cloned())
            .with_limit(self.limit)
            .with_move_to(ExploreMove::new(self.move_to.iter().cloned(), self.move_to_force))
            .with_move_away_from(ExploreMove::new(
                self.move_away_from.iter().cloned(),
                self.move_away_force,
            ))
    }

    /// Principal described by the arguments
    pub fn principal(&self) -> Option<Principal> {
        self.user
            .as_ref()
            .map(|user| Principal::new(user).with_groups(self.groups.iter().cloned()))
    }
}

/// Run a parsed command line
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path);
    }
    let config = loader.load().context("loading configuration")?;
    init_logging(&config.logging).context("initializing logging")?;

    match cli.command {
        Command::Providers => {
            for listing in available_providers() {
                println!("{}:", listing.port);
                for (name, description) in listing.providers {
                    println!("  {name:<12} {description}");
                }
            }
            Ok(())
        }
        Command::Explore(args) => {
            let context = init_app(config).context("building application")?;
            let cancel = CancellationToken::new();
            let trigger = cancel.clone();
            tokio::spawn(async move {
                if tokio::signal::ctrl_c().await.is_ok() {
                    debug!("interrupt received, cancelling request");
                    trigger.cancel();
                }
            });

            let principal = args.principal();
            let results = context
                .explore_service()
                .explore_concepts(&cancel, principal.as_ref(), &args.params())
                .await?;
            println!("{}", serde_json::to_string_pretty(&results)?);
            Ok(())
        }
    }
}
