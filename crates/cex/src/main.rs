//! Concept Explorer - Entry Point
//!
//! | Command | Description |
//! |---------|-------------|
//! | `cex explore <TERMS>...` | Run one explore request and print the results as JSON |
//! | `cex providers` | List the registered providers per port |

// Force-link cex-providers to ensure linkme registrations are included
extern crate cex_providers;

use cex::cli::{Cli, run};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run(cli).await
}
