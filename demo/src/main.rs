//! scalarset demonstration entry point.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use scalarset_demo::{DemoConfig, DemoError, Section, run};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Demonstrates scalarset's Set: membership, mutation and set algebra.
#[derive(Debug, Parser)]
#[command(name = "scalarset-demo", version, about)]
struct Cli {
    /// Section of the demonstration to run.
    #[arg(long, value_enum, default_value_t = Section::All)]
    section: Section,

    /// First text for the text-analysis section (overrides SCALARSET_DEMO_TEXT_A).
    #[arg(long)]
    text_a: Option<String>,

    /// Second text for the text-analysis section (overrides SCALARSET_DEMO_TEXT_B).
    #[arg(long)]
    text_b: Option<String>,
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,scalarset_demo=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    let config = match DemoConfig::from_env() {
        Ok(config) => config,
        Err(error) => {
            tracing::warn!("Failed to load configuration from environment: {error}");
            tracing::info!("Using default configuration");
            DemoConfig::default()
        }
    }
    .with_overrides(cli.text_a, cli.text_b);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = run(cli.section, &config, &mut out).and_then(|()| out.flush().map_err(DemoError::from));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!("{error}");
            ExitCode::FAILURE
        }
    }
}
