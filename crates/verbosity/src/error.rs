//! crates/verbosity/src/error.rs
//! Error taxonomy for verbosity configuration and resolution.

use thiserror::Error;

use crate::{MAX_VERBOSITY, Verbosity, levels::known_level_names};

/// Failures reported while configuring or querying the verbosity engine.
///
/// Every variant except [`VerbosityError::Unresolved`] is detected at
/// configuration time, before any state is installed; a rejected update
/// leaves the previous configuration fully intact. `Unresolved` is only
/// reachable through a resolver that was hand-built with gaps via
/// [`VerbosityLevelResolver::from_ranges`](crate::VerbosityLevelResolver::from_ranges).
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum VerbosityError {
    /// A verbosity count above the supported maximum was supplied.
    #[error("verbosity count {given} exceeds the supported maximum {max}", max = MAX_VERBOSITY)]
    InvalidVerbosity {
        /// The rejected count.
        given: Verbosity,
    },
    /// A level name did not resolve to any registered severity level.
    #[error("unknown log level name {name:?}; known level names are {names} (case-insensitive)", names = known_level_names())]
    UnknownLevelName {
        /// The name that failed to resolve.
        name: String,
    },
    /// A numeric level value did not resolve to any registered severity level.
    #[error("unknown log level value {value}; known levels are {names}", names = known_level_names())]
    UnknownLevelValue {
        /// The value that failed to resolve.
        value: i32,
    },
    /// A custom level registration reused an existing name for a new value.
    #[error("level name {name:?} is already registered with value {existing}")]
    DuplicateLevelName {
        /// The conflicting name.
        name: String,
        /// The value the name is already bound to.
        existing: i32,
    },
    /// A custom level registration reused an existing value for a new name.
    #[error("level value {value} is already registered under name {existing:?}")]
    DuplicateLevelValue {
        /// The conflicting value.
        value: i32,
        /// The name the value is already bound to.
        existing: String,
    },
    /// A custom level registration supplied an empty or all-digit name.
    #[error("level name {name:?} is not usable; names must be non-empty and non-numeric")]
    InvalidLevelName {
        /// The rejected name.
        name: String,
    },
    /// A resolver was built from an empty pair sequence.
    #[error("verbosity level pairs must contain at least one (count, level) entry")]
    EmptyPairs,
    /// A resolver pair sequence was not strictly ascending by count.
    #[error("verbosity level pairs must ascend strictly by count: {previous} precedes {next}")]
    UnsortedPairs {
        /// The count that appeared first.
        previous: Verbosity,
        /// The offending count that followed it.
        next: Verbosity,
    },
    /// No configured range covers the queried verbosity count.
    #[error("no verbosity range covers count {count}")]
    Unresolved {
        /// The count that failed to resolve.
        count: Verbosity,
    },
}
