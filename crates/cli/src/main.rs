//! goldsect CLI: golden-section search over a built-in example or a formula.

use anyhow::Context;
use clap::Parser;
use goldsect_cli::{Args, run};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let report = run(&args)?;

    if args.json {
        let json = serde_json::to_string_pretty(&report).context("failed to serialize result")?;
        println!("{json}");
    } else {
        print!("{report}");
    }

    Ok(())
}
