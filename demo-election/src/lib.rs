#![deny(missing_docs)]
#![doc = include_str!("../README.md")]

mod config;
mod ledger;
mod runtime;
mod scenario;

pub use config::{from_toml_path, DemoConfig, VoterConfig};
pub use ledger::Ledger;
pub use runtime::{GenesisConfig, Runtime, RuntimeCall};
pub use scenario::{run_scenario, ScenarioReport, VoterOutcome};
