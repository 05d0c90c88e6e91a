//! This binary replays an election described by a TOML file.

use anyhow::Context;
use ballot_modules_api::default_context::DefaultContext;
use clap::Parser;
use demo_election::{from_toml_path, run_scenario, DemoConfig, ScenarioReport};
use tracing::info;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The path to the election config.
    #[arg(long, default_value = "election_config.toml")]
    config: String,

    /// Print the report as JSON.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), anyhow::Error> {
    // Initializing logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    info!("Reading election config from {:?}", args.config);

    let config: DemoConfig =
        from_toml_path(&args.config).context("Failed to read election configuration")?;
    let report = run_scenario::<DefaultContext>(&config)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }
    Ok(())
}

fn print_report(report: &ScenarioReport) {
    let (start_time, end_time) = report.voting_window;
    println!("Credentials: {}", report.registry_name);
    println!("Voting window: [{start_time}, {end_time}]");
    println!();

    for voter in &report.voters {
        let credential = voter
            .credential_id
            .map(|id| id.to_string())
            .unwrap_or_else(|| "-".to_owned());
        match &voter.error {
            None => println!(
                "{:<12} {credential:<4} voted for candidate {}",
                voter.label, voter.candidate
            ),
            Some(error) => println!("{:<12} {credential:<4} rejected: {error}", voter.label),
        }
    }
    if let Some(error) = &report.early_results_error {
        println!();
        println!("Results while voting was open: {error}");
    }

    println!();
    println!("Results ({} votes):", report.total_votes);
    for tally in &report.standings {
        println!("  {:<16} {}", tally.name, tally.count);
    }
}
