use anyhow::Context as _;
use ballot_credentials::CredentialId;
use ballot_election::CandidateTally;
use ballot_modules_api::utils::generate_address;
use ballot_modules_api::Context;
use serde::Serialize;

use crate::{DemoConfig, Ledger, RuntimeCall};

/// What happened to a single voter during the scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VoterOutcome {
    /// Label from the configuration.
    pub label: String,
    /// Address derived from the label.
    pub address: String,
    /// Credential issued to the voter, if issuance succeeded.
    pub credential_id: Option<CredentialId>,
    /// Candidate the voter picked.
    pub candidate: u32,
    /// Rejection reason, if the vote was not counted.
    pub error: Option<String>,
}

/// Outcome of [`run_scenario`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScenarioReport {
    /// Name of the credential collection.
    pub registry_name: String,
    /// First and last second of the ballot.
    pub voting_window: (u64, u64),
    /// One entry per configured voter.
    pub voters: Vec<VoterOutcome>,
    /// Error returned by the results read attempted while the ballot was open.
    pub early_results_error: Option<String>,
    /// Final counts.
    pub standings: Vec<CandidateTally>,
    /// Number of counted votes.
    pub total_votes: u64,
    /// Number of committed events.
    pub events: usize,
}

/// Replays a full election: genesis, credential issuance, voting, results.
pub fn run_scenario<C: Context>(config: &DemoConfig) -> anyhow::Result<ScenarioReport> {
    let genesis = config.genesis_config::<C>()?;
    let (start_time, end_time) = (genesis.election.start_time, genesis.election.end_time);
    let mut ledger = Ledger::<C>::new(&genesis, config.genesis_time)?;
    let admin = genesis.election.admin.clone();

    tracing::info!(
        candidates = config.candidates.len(),
        voters = config.voters.len(),
        start_time,
        end_time,
        "Election deployed"
    );

    let mut voters = Vec::with_capacity(config.voters.len());
    for voter in &config.voters {
        let address = generate_address::<C>(&voter.label);
        let issued = ledger.execute(
            &admin,
            RuntimeCall::Registry(ballot_credentials::CallMessage::Issue {
                holder: address.clone(),
            }),
        );
        let error = issued.err().map(|e| e.to_string());
        // A rejected issuance still leaves the voter with the credential issued earlier.
        let credential_id =
            ledger.query(|runtime, ws| runtime.registry.credential_of(&address, ws));
        tracing::info!(label = %voter.label, %address, ?credential_id, "Voter registered");

        let outcome = VoterOutcome {
            label: voter.label.clone(),
            address: address.to_string(),
            credential_id,
            candidate: voter.candidate,
            error,
        };
        voters.push((address, outcome));
    }

    if ledger.now() < start_time {
        ledger.advance_to(start_time)?;
    }

    for (address, outcome) in voters.iter_mut() {
        let Some(credential_id) = outcome.credential_id else {
            continue;
        };
        let result = ledger.execute(
            address,
            RuntimeCall::Election(ballot_election::CallMessage::Vote {
                credential_id,
                candidate_index: outcome.candidate,
            }),
        );
        outcome.error = match result {
            Ok(_) => {
                tracing::info!(label = %outcome.label, candidate = outcome.candidate, "Vote cast");
                None
            }
            Err(e) => Some(e.to_string()),
        };
    }

    let now = ledger.now();
    let early_results_error = ledger
        .query(|runtime, ws| runtime.election.results(now, ws))
        .err()
        .map(|e| e.to_string());
    if let Some(error) = &early_results_error {
        tracing::info!("Results are not available yet: {}", error);
    }

    ledger.advance_to(end_time.saturating_add(1))?;
    let now = ledger.now();
    let standings = ledger
        .query(|runtime, ws| runtime.election.standings(now, ws))
        .context("Failed to read the final results")?;
    let total_votes = ledger.query(|runtime, ws| runtime.election.total_votes(ws));
    tracing::info!(total_votes, "Election closed");

    Ok(ScenarioReport {
        registry_name: config.registry_name.clone(),
        voting_window: (start_time, end_time),
        voters: voters.into_iter().map(|(_, outcome)| outcome).collect(),
        early_results_error,
        standings,
        total_votes,
        events: ledger.events().len(),
    })
}
