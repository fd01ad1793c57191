//! crates/verbosity/src/filter.rs
//! Emission-time gate applying resolved severity floors.

use std::sync::Arc;

use crate::levels::Level;
use crate::state::VerbosityState;

/// Whether a [`VerbosityFilter`] is installed on an emission sink.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FilterStatus {
    /// Installed on a sink and actively filtering.
    Armed,
    /// Constructed but not installed; every record passes.
    Detached,
}

/// The per-record gate between an emission sink and the verbosity state.
///
/// Sinks call [`decide`](Self::decide) with each candidate record's
/// component name and severity before dispatching it. The filter only adds
/// restriction: when no registered prefix constrains the component, the
/// record is accepted and the sink's own ambient threshold applies
/// unchanged.
///
/// A filter starts [`FilterStatus::Detached`]; the sink arms it on
/// installation and detaches it on removal. Re-arming after removal is the
/// sink's responsibility, never implicit.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use verbosity::{
///     Level, LevelSpec, ResolverSpec, VerbosityFilter, VerbosityState,
/// };
///
/// let state = Arc::new(VerbosityState::new());
/// state.set_levels_from([(
///     "svc",
///     ResolverSpec::Pairs(vec![(0, LevelSpec::from(Level::INFO))]),
/// )])?;
///
/// let mut filter = VerbosityFilter::new(Arc::clone(&state));
/// filter.arm();
///
/// assert!(!filter.decide("svc", Level::DEBUG));
/// assert!(filter.decide("svc", Level::WARNING));
/// assert!(filter.decide("unrelated", Level::DEBUG));
/// # Ok::<(), verbosity::VerbosityError>(())
/// ```
#[derive(Clone, Debug)]
pub struct VerbosityFilter {
    state: Arc<VerbosityState>,
    status: FilterStatus,
}

impl VerbosityFilter {
    /// Creates a detached filter reading from `state`.
    #[must_use]
    pub const fn new(state: Arc<VerbosityState>) -> Self {
        Self {
            state,
            status: FilterStatus::Detached,
        }
    }

    /// Creates a detached filter reading from the process-wide state.
    #[must_use]
    pub fn global() -> Self {
        Self::new(VerbosityState::global())
    }

    /// Returns the current installation status.
    #[must_use]
    pub const fn status(&self) -> FilterStatus {
        self.status
    }

    /// Reports whether the filter is armed.
    #[must_use]
    pub const fn is_armed(&self) -> bool {
        matches!(self.status, FilterStatus::Armed)
    }

    /// Marks the filter as installed on a sink.
    pub fn arm(&mut self) {
        self.status = FilterStatus::Armed;
    }

    /// Marks the filter as removed from its sink.
    pub fn detach(&mut self) {
        self.status = FilterStatus::Detached;
    }

    /// Decides whether a record at `level` from `component` may be emitted.
    ///
    /// The decision resolves the most specific registered prefix for
    /// `component` against the current verbosity count and accepts the
    /// record iff its severity reaches the resolved floor. Without a
    /// constraint - no covering prefix, a detached filter, or a hand-built
    /// resolver that leaves the current count uncovered - the record is
    /// accepted and the ambient configuration decides. The call itself
    /// cannot fail; all validation happened when the state was configured.
    #[must_use]
    pub fn decide(&self, component: &str, level: Level) -> bool {
        if !self.is_armed() {
            return true;
        }
        let (verbosity, levels) = self.state.snapshot();
        match levels.resolve(component) {
            Some(resolver) => match resolver.level_for(verbosity) {
                Ok(floor) => level >= floor,
                Err(_) => true,
            },
            None => true,
        }
    }
}
