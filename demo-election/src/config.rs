use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::Context as _;
use ballot_credentials::CredentialRegistryConfig;
use ballot_election::ElectionConfig;
use ballot_modules_api::utils::generate_address;
use ballot_modules_api::Context;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::GenesisConfig;

/// A voter of the demo scenario.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VoterConfig {
    /// Label the voter address is derived from.
    pub label: String,
    /// Index of the candidate the voter picks.
    pub candidate: u32,
}

/// Demo configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DemoConfig {
    /// Clock value at genesis, in seconds.
    pub genesis_time: u64,
    /// Label the administrator address is derived from.
    pub admin: String,
    /// Name of the credential collection.
    #[serde(default = "default_registry_name")]
    pub registry_name: String,
    /// Candidate names.
    pub candidates: Vec<String>,
    /// Seconds between genesis and the opening of the ballot.
    pub start_delay: u64,
    /// Seconds the ballot stays open after it opened.
    pub voting_duration: u64,
    /// Voters, in the order their credentials are issued.
    #[serde(default)]
    pub voters: Vec<VoterConfig>,
}

fn default_registry_name() -> String {
    "VOTE".to_owned()
}

impl DemoConfig {
    /// First second at which votes are accepted.
    pub fn start_time(&self) -> anyhow::Result<u64> {
        self.genesis_time
            .checked_add(self.start_delay)
            .context("start_delay overflows the clock")
    }

    /// Last second at which votes are accepted.
    pub fn end_time(&self) -> anyhow::Result<u64> {
        self.start_time()?
            .checked_add(self.voting_duration)
            .context("voting_duration overflows the clock")
    }

    /// Genesis configuration of both modules.
    pub fn genesis_config<C: Context>(&self) -> anyhow::Result<GenesisConfig<C>> {
        Ok(GenesisConfig {
            registry: CredentialRegistryConfig {
                name: self.registry_name.clone(),
            },
            election: ElectionConfig {
                admin: generate_address::<C>(&self.admin),
                candidates: self.candidates.clone(),
                start_time: self.start_time()?,
                end_time: self.end_time()?,
            },
        })
    }
}

/// Reads a TOML file at `path` into `R`.
pub fn from_toml_path<P: AsRef<Path>, R: DeserializeOwned>(path: P) -> anyhow::Result<R> {
    let mut contents = String::new();
    {
        let mut file = File::open(path)?;
        file.read_to_string(&mut contents)?;
    }

    let result: R = toml::from_str(&contents)?;

    Ok(result)
}
