use ballot_credentials::CredentialId;
use thiserror::Error;

/// Rejections of the Election module. A rejected call leaves the election unchanged.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ElectionError {
    /// The voting window has not opened yet.
    #[error("Election has not started")]
    ElectionNotStarted,

    /// The voting window has closed.
    #[error("Election has ended")]
    ElectionEnded,

    /// Results were requested before the voting window closed.
    #[error("Election is still active")]
    ElectionActive,

    /// The caller does not hold the credential it voted with.
    #[error("Not the owner of credential {0}")]
    NotCredentialOwner(CredentialId),

    /// The credential was already used.
    #[error("Already voted with credential {0}")]
    AlreadyVoted(CredentialId),

    /// The candidate index is out of range.
    #[error("Candidate {index} does not exist, there are {candidates} candidates")]
    InvalidCandidate {
        /// Requested index.
        index: u32,
        /// Number of configured candidates.
        candidates: usize,
    },

    /// A candidate counter would overflow.
    #[error("Vote count overflow")]
    VoteCountOverflow,

    /// Genesis was given an empty candidate list.
    #[error("An election needs at least one candidate")]
    NoCandidates,

    /// Genesis was given a window that does not satisfy `start_time < end_time`.
    #[error("Invalid voting window: start {start_time} must be before end {end_time}")]
    InvalidVotingWindow {
        /// Configured start.
        start_time: u64,
        /// Configured end.
        end_time: u64,
    },

    /// Genesis ran twice.
    #[error("Election is already initialized")]
    AlreadyInitialized,

    /// The module was used before genesis.
    #[error("Election is not initialized")]
    NotInitialized,
}
