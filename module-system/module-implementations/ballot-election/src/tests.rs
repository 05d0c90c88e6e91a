use ballot_credentials::{CredentialId, CredentialRegistry, CredentialRegistryConfig};
use ballot_modules_api::default_context::DefaultContext;
use ballot_modules_api::utils::generate_address;
use ballot_modules_api::{Address, Context, Module, WorkingSet};

use crate::{Election, ElectionConfig, ElectionError, Phase};

type C = DefaultContext;

const START: u64 = 1_000;
const END: u64 = 1_010;

struct Setup {
    election: Election<C>,
    registry: CredentialRegistry<C>,
    working_set: WorkingSet<C>,
}

impl Setup {
    fn new() -> Self {
        let election = Election::<C>::default();
        let registry = CredentialRegistry::<C>::default();
        let mut working_set = WorkingSet::new();
        registry
            .genesis(
                &CredentialRegistryConfig {
                    name: "VOTE".to_owned(),
                },
                &mut working_set,
            )
            .unwrap();
        election
            .genesis(&config(vec!["A", "B", "C"], START, END), &mut working_set)
            .unwrap();
        Self {
            election,
            registry,
            working_set,
        }
    }

    fn register(&mut self, label: &str) -> (Address, CredentialId) {
        let voter = generate_address::<C>(label);
        let id = self.registry.issue(&voter, &mut self.working_set).unwrap();
        (voter, id)
    }

    fn vote(
        &mut self,
        voter: Address,
        credential_id: CredentialId,
        candidate_index: u32,
        now: u64,
    ) -> Result<(), ElectionError> {
        self.election
            .vote(
                credential_id,
                candidate_index,
                &C::new(voter, now),
                &mut self.working_set,
            )
            .map(|_| ())
    }

    fn counts(&mut self) -> Vec<u64> {
        self.election.vote_counts.get(&mut self.working_set).unwrap()
    }
}

fn config(candidates: Vec<&str>, start_time: u64, end_time: u64) -> ElectionConfig<C> {
    ElectionConfig {
        admin: generate_address::<C>("admin"),
        candidates: candidates.into_iter().map(str::to_owned).collect(),
        start_time,
        end_time,
    }
}

#[test]
fn genesis_initializes_zeroed_tally() {
    let mut setup = Setup::new();
    assert_eq!(setup.counts(), vec![0, 0, 0]);
    assert_eq!(setup.election.total_votes(&mut setup.working_set), 0);
    assert_eq!(
        setup.election.admin(&mut setup.working_set),
        Ok(generate_address::<C>("admin"))
    );
}

#[test]
fn genesis_rejects_bad_configs() {
    let election = Election::<C>::default();
    let mut working_set = WorkingSet::new();

    assert_eq!(
        election.init_module(&config(vec![], START, END), &mut working_set),
        Err(ElectionError::NoCandidates)
    );
    assert_eq!(
        election.init_module(&config(vec!["A"], END, START), &mut working_set),
        Err(ElectionError::InvalidVotingWindow {
            start_time: END,
            end_time: START,
        })
    );
    assert_eq!(
        election.init_module(&config(vec!["A"], START, START), &mut working_set),
        Err(ElectionError::InvalidVotingWindow {
            start_time: START,
            end_time: START,
        })
    );
    assert_eq!(
        election.voting_window(&mut working_set),
        Err(ElectionError::NotInitialized)
    );

    election
        .init_module(&config(vec!["A"], START, END), &mut working_set)
        .unwrap();
    assert_eq!(
        election.init_module(&config(vec!["B"], START, END), &mut working_set),
        Err(ElectionError::AlreadyInitialized)
    );
    assert_eq!(
        election.candidates(&mut working_set),
        Ok(vec!["A".to_owned()])
    );
}

#[test]
fn phase_follows_the_clock() {
    let mut setup = Setup::new();
    let phase = |setup: &mut Setup, now| setup.election.phase(now, &mut setup.working_set);
    assert_eq!(phase(&mut setup, START - 1), Ok(Phase::NotStarted));
    assert_eq!(phase(&mut setup, START), Ok(Phase::Active));
    assert_eq!(phase(&mut setup, END), Ok(Phase::Active));
    assert_eq!(phase(&mut setup, END + 1), Ok(Phase::Ended));
}

#[test]
fn vote_before_start_is_rejected() {
    let mut setup = Setup::new();
    let (alice, id) = setup.register("alice");
    assert_eq!(
        setup.vote(alice, id, 0, START - 1),
        Err(ElectionError::ElectionNotStarted)
    );
    assert_eq!(setup.counts(), vec![0, 0, 0]);
}

#[test]
fn votes_on_both_boundaries_are_accepted() {
    let mut setup = Setup::new();
    let (alice, alice_id) = setup.register("alice");
    let (bob, bob_id) = setup.register("bob");

    setup.vote(alice, alice_id, 0, START).unwrap();
    setup.vote(bob, bob_id, 0, END).unwrap();
    assert_eq!(setup.counts(), vec![2, 0, 0]);
}

#[test]
fn vote_after_end_is_rejected() {
    let mut setup = Setup::new();
    let (alice, id) = setup.register("alice");
    assert_eq!(
        setup.vote(alice, id, 0, END + 1),
        Err(ElectionError::ElectionEnded)
    );
}

#[test]
fn timing_is_checked_before_ownership() {
    let mut setup = Setup::new();
    let stranger = generate_address::<C>("stranger");
    assert_eq!(
        setup.vote(stranger, CredentialId(42), 0, START - 1),
        Err(ElectionError::ElectionNotStarted)
    );
    assert_eq!(
        setup.vote(stranger, CredentialId(42), 0, END + 1),
        Err(ElectionError::ElectionEnded)
    );
}

#[test]
fn only_the_holder_can_spend_a_credential() {
    let mut setup = Setup::new();
    let (_alice, alice_id) = setup.register("alice");
    let (bob, _bob_id) = setup.register("bob");
    let stranger = generate_address::<C>("stranger");

    assert_eq!(
        setup.vote(bob, alice_id, 0, START),
        Err(ElectionError::NotCredentialOwner(alice_id))
    );
    assert_eq!(
        setup.vote(stranger, CredentialId(99), 0, START),
        Err(ElectionError::NotCredentialOwner(CredentialId(99)))
    );
    assert_eq!(setup.counts(), vec![0, 0, 0]);
}

#[test]
fn ownership_is_checked_before_candidate() {
    let mut setup = Setup::new();
    let (_alice, alice_id) = setup.register("alice");
    let (bob, _) = setup.register("bob");
    assert_eq!(
        setup.vote(bob, alice_id, 99, START),
        Err(ElectionError::NotCredentialOwner(alice_id))
    );
}

#[test]
fn credential_votes_once() {
    let mut setup = Setup::new();
    let (alice, id) = setup.register("alice");

    setup.vote(alice, id, 1, START).unwrap();
    assert_eq!(
        setup.vote(alice, id, 2, START + 1),
        Err(ElectionError::AlreadyVoted(id))
    );
    assert_eq!(setup.counts(), vec![0, 1, 0]);
    assert!(setup.election.has_voted(&alice, &mut setup.working_set));
}

#[test]
fn invalid_candidate_leaves_state_untouched() {
    let mut setup = Setup::new();
    let (alice, id) = setup.register("alice");
    let events_before = setup.working_set.events().len();

    assert_eq!(
        setup.vote(alice, id, 99, START),
        Err(ElectionError::InvalidCandidate {
            index: 99,
            candidates: 3,
        })
    );
    assert_eq!(setup.counts(), vec![0, 0, 0]);
    assert!(!setup.election.has_voted(&alice, &mut setup.working_set));
    assert_eq!(setup.working_set.events().len(), events_before);

    // The credential is still usable.
    setup.vote(alice, id, 2, START).unwrap();
    assert_eq!(setup.counts(), vec![0, 0, 1]);
}

#[test]
fn overflowing_counter_is_rejected() {
    let mut setup = Setup::new();
    let (alice, id) = setup.register("alice");
    setup
        .election
        .vote_counts
        .set(&vec![u64::MAX, 0, 0], &mut setup.working_set);

    assert_eq!(
        setup.vote(alice, id, 0, START),
        Err(ElectionError::VoteCountOverflow)
    );
    assert!(!setup.election.has_voted(&alice, &mut setup.working_set));
}

#[test]
fn results_are_sealed_until_the_end() {
    let mut setup = Setup::new();
    let (alice, id) = setup.register("alice");
    setup.vote(alice, id, 0, START).unwrap();

    for now in [0, START, END] {
        assert_eq!(
            setup.election.results(now, &mut setup.working_set),
            Err(ElectionError::ElectionActive)
        );
    }
    assert_eq!(
        setup.election.results(END + 1, &mut setup.working_set),
        Ok(vec![1, 0, 0])
    );
}

#[test]
fn has_voted_without_credential_is_false() {
    let mut setup = Setup::new();
    let stranger = generate_address::<C>("stranger");
    assert!(!setup.election.has_voted(&stranger, &mut setup.working_set));
}

#[test]
fn tally_snapshot_is_stable_after_close() {
    let mut setup = Setup::new();
    let (voter_1, id_1) = setup.register("voter_1");
    let (voter_2, id_2) = setup.register("voter_2");
    let (voter_3, id_3) = setup.register("voter_3");

    setup.vote(voter_1, id_1, 0, START).unwrap();
    assert_eq!(setup.counts(), vec![1, 0, 0]);
    setup.vote(voter_2, id_2, 1, START + 5).unwrap();
    assert_eq!(setup.counts(), vec![1, 1, 0]);
    setup.vote(voter_3, id_3, 1, END).unwrap();
    assert_eq!(setup.counts(), vec![1, 2, 0]);

    assert_eq!(
        setup.election.results(END - 1, &mut setup.working_set),
        Err(ElectionError::ElectionActive)
    );
    for now in [END + 1, END + 1_000, u64::MAX] {
        assert_eq!(
            setup.election.results(now, &mut setup.working_set),
            Ok(vec![1, 2, 0])
        );
    }

    let mut snapshot = setup.election.results(END + 1, &mut setup.working_set).unwrap();
    snapshot[0] = 100;
    assert_eq!(setup.counts(), vec![1, 2, 0]);
}
