//! Aggregate root trait and optimistic-concurrency vocabulary.

use thiserror::Error;

/// Aggregate root marker + minimal interface.
///
/// The aggregate root is the single entry point to a consistency boundary:
/// all mutation of objects inside the boundary goes through command methods on
/// the root, which validate their preconditions before touching any state.
///
/// This trait is intentionally small so domain modules decide how they model
/// state transitions; it only pins down what a repository needs to persist an
/// aggregate and detect concurrent writers.
pub trait AggregateRoot {
    /// Strongly-typed aggregate identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the aggregate identifier.
    fn id(&self) -> &Self::Id;

    /// Monotonically increasing version of the aggregate's state.
    ///
    /// Incremented once per successfully executed command. Repositories use it
    /// to reject lost updates: two copies of the same logical aggregate loaded
    /// independently cannot both save against the same expected version.
    fn version(&self) -> u64;
}

/// Optimistic concurrency expectation checked by a repository on save.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ExpectedVersion {
    /// Skip version checking (idempotent commands, migrations, tests).
    Any,
    /// Require the persisted aggregate to be at an exact version.
    Exact(u64),
}

/// A save was attempted against a stale version.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("optimistic concurrency check failed (expected: {expected:?}, actual: {actual})")]
pub struct VersionConflict {
    pub expected: ExpectedVersion,
    pub actual: u64,
}

impl ExpectedVersion {
    pub fn matches(self, actual: u64) -> bool {
        match self {
            ExpectedVersion::Any => true,
            ExpectedVersion::Exact(v) => v == actual,
        }
    }

    pub fn check(self, actual: u64) -> Result<(), VersionConflict> {
        if self.matches(actual) {
            Ok(())
        } else {
            Err(VersionConflict {
                expected: self,
                actual,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn any_matches_every_version() {
        assert!(ExpectedVersion::Any.matches(0));
        assert!(ExpectedVersion::Any.matches(42));
    }

    #[test]
    fn exact_rejects_stale_version() {
        assert!(ExpectedVersion::Exact(3).check(3).is_ok());
        let err = ExpectedVersion::Exact(3).check(5).unwrap_err();
        assert_eq!(err.actual, 5);
        assert_eq!(err.expected, ExpectedVersion::Exact(3));
    }
}
