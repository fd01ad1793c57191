#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `verbosity` maps a repeatable command-line verbosity signal (`-v`, `-vv`,
//! `-vvv`) onto discrete logging severity levels, scoped per dotted component
//! name, and enforces that mapping at emission time through
//! [`VerbosityFilter`]. Emission sinks stay in charge of record construction
//! and their own baseline thresholds; this crate only decides, per record,
//! whether a given component may emit at a given severity under the current
//! verbosity configuration.
//!
//! # Design
//!
//! Resolution is layered from small parts: [`Classifier`] is a generic
//! first-match rule table; [`VerbosityLevelResolver`] specialises it to
//! half-open [`CountRange`] rules over verbosity counts;
//! [`VerbosityLevelRegistry`] maps component-name prefixes to resolvers with
//! most-specific-prefix lookup via [`is_in_hierarchy`]; [`VerbosityState`]
//! holds the mutable count and registry behind one lock with snapshot reads;
//! and [`VerbosityFilter`] combines a state snapshot with the registry to
//! gate each record.
//!
//! # Invariants
//!
//! - Configuration errors surface at configuration time; the per-record
//!   [`decide`](VerbosityFilter::decide) call is infallible and never
//!   installs a partially-valid registry.
//! - The filter only adds restriction: components without a covering prefix
//!   are always accepted, deferring to the sink's ambient threshold.
//! - Readers of [`VerbosityState`] observe whole values; count and registry
//!   are replaced wholesale, never mutated in place.
//!
//! # Examples
//!
//! Configure the process-wide state and gate records through a filter:
//!
//! ```
//! use std::sync::Arc;
//! use verbosity::{
//!     Level, LevelSpec, ResolverSpec, VerbosityFilter, VerbosityState,
//! };
//!
//! let state = Arc::new(VerbosityState::new());
//! state.set_verbosity(1)?;
//! state.set_levels_from([(
//!     "app.db",
//!     ResolverSpec::Pairs(vec![
//!         (0, LevelSpec::from(Level::WARNING)),
//!         (1, LevelSpec::from(Level::INFO)),
//!         (2, LevelSpec::from(Level::DEBUG)),
//!     ]),
//! )])?;
//!
//! let mut filter = VerbosityFilter::new(state);
//! filter.arm();
//!
//! assert!(filter.decide("app.db.pool", Level::INFO));
//! assert!(!filter.decide("app.db.pool", Level::DEBUG));
//! assert!(filter.decide("app.http", Level::DEBUG));
//! # Ok::<(), verbosity::VerbosityError>(())
//! ```

mod classifier;
mod error;
mod filter;
mod hierarchy;
mod levels;
mod registry;
mod resolver;
mod state;
#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use classifier::{Classifier, CountRange, Membership, RuleSet};
pub use error::VerbosityError;
pub use filter::{FilterStatus, VerbosityFilter};
pub use hierarchy::is_in_hierarchy;
pub use levels::{DEFAULT_APP_LEVEL, DEFAULT_LIB_LEVEL, Level, LevelSpec, register_level};
pub use registry::{ResolverSpec, VerbosityLevelRegistry};
pub use resolver::VerbosityLevelResolver;
pub use state::{
    VerbosityState, del_verbosity, del_verbosity_levels, get_verbosity, get_verbosity_levels,
    set_verbosity, set_verbosity_levels, set_verbosity_levels_from,
};
#[cfg(feature = "tracing")]
pub use tracing_bridge::{VerbosityLayer, init_tracing};

/// Repetition count of a verbosity flag; 0 means unset/quiet.
pub type Verbosity = u32;

/// Highest verbosity count accepted by [`VerbosityState::set_verbosity`].
///
/// Counts are compared against configured [`CountRange`] rules, so anything
/// beyond a couple of handfuls of `-v` repetitions is indistinguishable in
/// practice; the bound exists to reject garbage input early.
pub const MAX_VERBOSITY: Verbosity = 255;
