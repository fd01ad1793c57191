//! crates/verbosity/src/state.rs
//! Shared mutable verbosity configuration with snapshot reads.

use std::sync::{Arc, OnceLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::VerbosityError;
use crate::registry::{ResolverSpec, VerbosityLevelRegistry};
use crate::{MAX_VERBOSITY, Verbosity};

#[derive(Clone, Debug)]
struct Shared {
    verbosity: Verbosity,
    levels: Arc<VerbosityLevelRegistry>,
}

impl Default for Shared {
    fn default() -> Self {
        Self {
            verbosity: 0,
            levels: Arc::new(VerbosityLevelRegistry::new()),
        }
    }
}

/// Mutable verbosity configuration shared between setup code and filters.
///
/// The state holds the current verbosity count (0 meaning unset/quiet) and
/// the current [`VerbosityLevelRegistry`]. A single lock guards both fields:
/// writers validate their input first and then replace a whole field inside
/// an O(1) critical section, while readers take a brief shared lock and
/// clone out an `Arc` snapshot. A reader therefore always observes fully
/// constructed values, never a torn update.
///
/// Filters and setup paths usually share [`VerbosityState::global`], but
/// tests and embedded hosts can construct isolated instances and hand them
/// to [`VerbosityFilter::new`](crate::VerbosityFilter::new) directly.
#[derive(Debug, Default)]
pub struct VerbosityState {
    shared: RwLock<Shared>,
}

impl VerbosityState {
    /// Creates a state with verbosity 0 and an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the process-wide shared instance.
    #[must_use]
    pub fn global() -> Arc<Self> {
        static GLOBAL: OnceLock<Arc<VerbosityState>> = OnceLock::new();
        Arc::clone(GLOBAL.get_or_init(|| Arc::new(Self::new())))
    }

    /// Returns the current verbosity count.
    #[must_use]
    pub fn verbosity(&self) -> Verbosity {
        self.read().verbosity
    }

    /// Replaces the verbosity count.
    ///
    /// Counts above [`MAX_VERBOSITY`] are rejected synchronously with
    /// [`VerbosityError::InvalidVerbosity`] and leave the state unchanged.
    pub fn set_verbosity(&self, verbosity: Verbosity) -> Result<(), VerbosityError> {
        if verbosity > MAX_VERBOSITY {
            return Err(VerbosityError::InvalidVerbosity { given: verbosity });
        }
        self.write().verbosity = verbosity;
        Ok(())
    }

    /// Resets the verbosity count to 0.
    pub fn clear_verbosity(&self) {
        self.write().verbosity = 0;
    }

    /// Returns the current registry snapshot.
    #[must_use]
    pub fn levels(&self) -> Arc<VerbosityLevelRegistry> {
        Arc::clone(&self.read().levels)
    }

    /// Installs a ready registry wholesale.
    pub fn set_levels(&self, levels: VerbosityLevelRegistry) {
        self.write().levels = Arc::new(levels);
    }

    /// Builds a registry from loose entries and installs it.
    ///
    /// Conversion happens before the lock is taken; a failed conversion
    /// leaves the previously installed registry active.
    pub fn set_levels_from<I, N>(&self, entries: I) -> Result<(), VerbosityError>
    where
        I: IntoIterator<Item = (N, ResolverSpec)>,
        N: Into<String>,
    {
        let registry = VerbosityLevelRegistry::from_entries(entries)?;
        self.set_levels(registry);
        Ok(())
    }

    /// Resets the registry to empty.
    pub fn clear_levels(&self) {
        self.write().levels = Arc::new(VerbosityLevelRegistry::new());
    }

    /// Reads the count and registry as one consistent snapshot.
    pub(crate) fn snapshot(&self) -> (Verbosity, Arc<VerbosityLevelRegistry>) {
        let shared = self.read();
        (shared.verbosity, Arc::clone(&shared.levels))
    }

    fn read(&self) -> RwLockReadGuard<'_, Shared> {
        self.shared.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Shared> {
        self.shared.write().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Returns the global verbosity count.
#[must_use]
pub fn get_verbosity() -> Verbosity {
    VerbosityState::global().verbosity()
}

/// Sets the global verbosity count.
pub fn set_verbosity(verbosity: Verbosity) -> Result<(), VerbosityError> {
    VerbosityState::global().set_verbosity(verbosity)
}

/// Resets the global verbosity count to 0.
pub fn del_verbosity() {
    VerbosityState::global().clear_verbosity();
}

/// Returns the global registry snapshot.
#[must_use]
pub fn get_verbosity_levels() -> Arc<VerbosityLevelRegistry> {
    VerbosityState::global().levels()
}

/// Installs a ready registry globally.
pub fn set_verbosity_levels(levels: VerbosityLevelRegistry) {
    VerbosityState::global().set_levels(levels);
}

/// Builds a registry from loose entries and installs it globally.
pub fn set_verbosity_levels_from<I, N>(entries: I) -> Result<(), VerbosityError>
where
    I: IntoIterator<Item = (N, ResolverSpec)>,
    N: Into<String>,
{
    VerbosityState::global().set_levels_from(entries)
}

/// Resets the global registry to empty.
pub fn del_verbosity_levels() {
    VerbosityState::global().clear_levels();
}
