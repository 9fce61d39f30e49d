use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod commands;

use commands::{ListTarget, parse_filter, run_query, serve};

use crate::config::{DEFAULT_BIND_ADDRESS, DEFAULT_DIST_DIR, ServeConfig};

#[derive(Parser)]
#[command(name = "chainfund")]
#[command(about = "ChainFund marketplace: frontend host and catalog query tool")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serve the built frontend bundle
    ///
    /// Any path that does not match a file falls back to index.html so
    /// client-side routes such as /assets/asset-1 resolve on reload.
    Serve {
        /// Bind address for the web server
        ///
        /// Format: IP:PORT (e.g., 0.0.0.0:8080, 127.0.0.1:3000)
        #[arg(short, long, env = "BIND_ADDRESS", default_value = DEFAULT_BIND_ADDRESS)]
        bind_address: String,

        /// Directory holding the built frontend (index.html, wasm, js)
        #[arg(short, long, env = "CHAINFUND_DIST_DIR", default_value = DEFAULT_DIST_DIR)]
        dist_dir: String,
    },
    /// Run a list-view query over the mock catalog and print JSON
    ///
    /// Examples:
    ///   chainfund query assets --filter owner_type=dao --sort price_low
    ///   chainfund query campaigns --search defi --sort most_funded
    Query {
        /// Which list to query
        #[arg(value_enum)]
        target: ListTarget,

        /// Case-insensitive search over name/title and description
        #[arg(short, long, default_value = "")]
        search: String,

        /// Filter selection as KEY=VALUE, repeatable (e.g. status=active)
        #[arg(short, long = "filter", value_parser = parse_filter)]
        filters: Vec<(String, String)>,

        /// Sort key (e.g. newest, price_high, ending_soon)
        #[arg(long)]
        sort: Option<String>,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Commands::Serve {
                bind_address,
                dist_dir,
            } => {
                let config = ServeConfig::new(&bind_address, &dist_dir)?;
                serve(config).await?;
            }
            Commands::Query {
                target,
                search,
                filters,
                sort,
            } => {
                let output = run_query(target, &search, &filters, sort.as_deref())?;
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
        }
        Ok(())
    }
}
