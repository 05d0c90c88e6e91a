use std::io::Write;

use ballot_credentials::{CredentialId, RegistryError};
use ballot_election::{CandidateTally, ElectionError};
use ballot_modules_api::default_context::DefaultContext;
use ballot_modules_api::utils::generate_address;
use demo_election::{from_toml_path, run_scenario, DemoConfig, Ledger, RuntimeCall, VoterConfig};
use tempfile::NamedTempFile;

type C = DefaultContext;

const GENESIS_TIME: u64 = 1_700_000_000;

fn demo_config(voters: &[(&str, u32)]) -> DemoConfig {
    DemoConfig {
        genesis_time: GENESIS_TIME,
        admin: "admin".to_owned(),
        registry_name: "VOTE".to_owned(),
        candidates: vec!["Alice".to_owned(), "Bob".to_owned(), "Charlie".to_owned()],
        start_delay: 5,
        voting_duration: 10,
        voters: voters
            .iter()
            .map(|(label, candidate)| VoterConfig {
                label: label.to_string(),
                candidate: *candidate,
            })
            .collect(),
    }
}

fn issue(label: &str) -> RuntimeCall<C> {
    RuntimeCall::Registry(ballot_credentials::CallMessage::Issue {
        holder: generate_address::<C>(label),
    })
}

fn vote(credential_id: u64, candidate_index: u32) -> RuntimeCall<C> {
    RuntimeCall::Election(ballot_election::CallMessage::Vote {
        credential_id: CredentialId(credential_id),
        candidate_index,
    })
}

#[test]
fn scenario_from_config_file() {
    let mut config_file = NamedTempFile::new().unwrap();
    config_file
        .write_all(include_bytes!("../election_config.toml"))
        .unwrap();
    let config: DemoConfig = from_toml_path(config_file.path()).unwrap();

    let report = run_scenario::<C>(&config).unwrap();

    assert_eq!(report.registry_name, "VOTE");
    assert_eq!(
        report.voting_window,
        (GENESIS_TIME + 5, GENESIS_TIME + 15)
    );
    assert!(report.voters.iter().all(|voter| voter.error.is_none()));
    assert_eq!(
        report.early_results_error.as_deref(),
        Some("Election is still active")
    );
    assert_eq!(
        report.standings,
        vec![
            CandidateTally {
                name: "Alice".to_owned(),
                count: 2,
            },
            CandidateTally {
                name: "Bob".to_owned(),
                count: 1,
            },
            CandidateTally {
                name: "Charlie".to_owned(),
                count: 0,
            },
        ]
    );
    assert_eq!(report.total_votes, 3);
    // Three issuances and three votes.
    assert_eq!(report.events, 6);
}

#[test]
fn scenario_reports_rejected_votes() {
    let config = demo_config(&[("voter_1", 0), ("voter_2", 7), ("voter_1", 1)]);
    let report = run_scenario::<C>(&config).unwrap();

    assert_eq!(report.voters[0].credential_id, Some(CredentialId(1)));
    assert_eq!(report.voters[0].error, None);
    assert_eq!(
        report.voters[1].error.as_deref(),
        Some("Candidate 7 does not exist, there are 3 candidates")
    );
    // A repeated label is refused a second credential, then cannot reuse the first one.
    assert_eq!(report.voters[2].credential_id, Some(CredentialId(1)));
    assert_eq!(
        report.voters[2].error.as_deref(),
        Some("Already voted with credential #1")
    );
    assert_eq!(report.total_votes, 1);
}

#[test]
fn rejected_call_is_reverted() {
    let config = demo_config(&[]);
    let genesis = config.genesis_config::<C>().unwrap();
    let mut ledger = Ledger::<C>::new(&genesis, GENESIS_TIME).unwrap();
    let admin = generate_address::<C>("admin");
    let alice = generate_address::<C>("alice");

    let events = ledger.execute(&admin, issue("alice")).unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(ledger.events().len(), 1);

    let err = ledger.execute(&admin, issue("alice")).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<RegistryError>(),
        Some(RegistryError::AlreadyRegistered { .. })
    ));
    assert_eq!(ledger.events().len(), 1);
    assert_eq!(
        ledger.query(|runtime, ws| runtime.registry.total_issued(ws)),
        1
    );

    let err = ledger.execute(&alice, vote(1, 0)).unwrap_err();
    assert_eq!(
        err.downcast_ref::<ElectionError>(),
        Some(&ElectionError::ElectionNotStarted)
    );

    ledger.advance_to(GENESIS_TIME + 5).unwrap();
    ledger.execute(&alice, vote(1, 0)).unwrap();
    assert_eq!(ledger.events().len(), 2);
    assert!(ledger.query(|runtime, ws| runtime.election.has_voted(&alice, ws)));
}

#[test]
fn clock_only_moves_forward() {
    let config = demo_config(&[]);
    let genesis = config.genesis_config::<C>().unwrap();
    let mut ledger = Ledger::<C>::new(&genesis, GENESIS_TIME).unwrap();

    ledger.advance_to(GENESIS_TIME + 3).unwrap();
    assert!(ledger.advance_to(GENESIS_TIME).is_err());
    assert_eq!(ledger.now(), GENESIS_TIME + 3);
}

#[test]
fn invalid_genesis_is_refused() {
    let mut config = demo_config(&[]);
    config.voting_duration = 0;
    let genesis = config.genesis_config::<C>().unwrap();
    assert!(Ledger::<C>::new(&genesis, GENESIS_TIME).is_err());

    let mut config = demo_config(&[]);
    config.candidates.clear();
    assert!(run_scenario::<C>(&config).is_err());
}
