//! mb-ctl - command-line control for imposters
//!
//! # Usage
//!
//! ```bash
//! # Install an imposter on 4545 answering GET /hello
//! mb-ctl create --port 4545 --path /hello --method GET --body 'hi' --record
//!
//! # Inspect it and count what it has seen
//! mb-ctl get 4545
//! mb-ctl count 4545
//!
//! # Talk to a different server
//! mb-ctl --admin-url http://server:2525 delete-all
//! ```

mod commands;

use clap::Parser;
use commands::Command;
use mb_client::{Client, DEFAULT_ADMIN_URL};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "mb-ctl")]
#[command(author, version, about = "Manage imposters on a Mountebank-compatible server")]
struct Args {
    /// Control-plane URL of the server
    #[arg(
        short,
        long,
        default_value = DEFAULT_ADMIN_URL,
        env = "MB_ADMIN_URL",
        global = true
    )]
    admin_url: String,

    /// Request timeout in milliseconds, at least 1 (none by default)
    #[arg(long, global = true, value_parser = clap::value_parser!(u64).range(1..))]
    timeout_ms: Option<u64>,

    /// Log control-plane requests
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let mut builder = Client::builder(&args.admin_url);
    if let Some(ms) = args.timeout_ms {
        builder = builder.timeout(Duration::from_millis(ms));
    }
    let client = builder.build()?;

    let output = commands::run(&client, args.command)?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
