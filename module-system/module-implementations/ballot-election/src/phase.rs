use core::fmt;

use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};

use crate::ElectionError;

/// Time derived state of an election.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Before `start_time`.
    NotStarted,
    /// Between `start_time` and `end_time`, both inclusive.
    Active,
    /// After `end_time`.
    Ended,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::NotStarted => "not started",
            Phase::Active => "active",
            Phase::Ended => "ended",
        };
        write!(f, "{name}")
    }
}

/// The closed interval `[start_time, end_time]` during which votes are accepted.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, BorshDeserialize, BorshSerialize, Serialize, Deserialize,
)]
pub struct VotingWindow {
    start_time: u64,
    end_time: u64,
}

impl VotingWindow {
    /// Fails with [`ElectionError::InvalidVotingWindow`] unless `start_time < end_time`.
    pub fn new(start_time: u64, end_time: u64) -> Result<Self, ElectionError> {
        if start_time >= end_time {
            return Err(ElectionError::InvalidVotingWindow {
                start_time,
                end_time,
            });
        }
        Ok(Self {
            start_time,
            end_time,
        })
    }

    /// First second of the window.
    pub fn start_time(&self) -> u64 {
        self.start_time
    }

    /// Last second of the window.
    pub fn end_time(&self) -> u64 {
        self.end_time
    }

    /// Phase of the election at time `now`.
    pub fn phase_at(&self, now: u64) -> Phase {
        if now < self.start_time {
            Phase::NotStarted
        } else if now <= self.end_time {
            Phase::Active
        } else {
            Phase::Ended
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_are_inclusive() {
        let window = VotingWindow::new(100, 110).unwrap();
        assert_eq!(window.phase_at(0), Phase::NotStarted);
        assert_eq!(window.phase_at(99), Phase::NotStarted);
        assert_eq!(window.phase_at(100), Phase::Active);
        assert_eq!(window.phase_at(105), Phase::Active);
        assert_eq!(window.phase_at(110), Phase::Active);
        assert_eq!(window.phase_at(111), Phase::Ended);
        assert_eq!(window.phase_at(u64::MAX), Phase::Ended);
    }

    #[test]
    fn empty_or_inverted_window_is_rejected() {
        assert!(VotingWindow::new(5, 5).is_err());
        assert!(VotingWindow::new(6, 5).is_err());
        assert!(VotingWindow::new(5, 6).is_ok());
    }
}
