//! crates/verbosity/src/tracing_bridge.rs
//! Bridge between the tracing crate and the verbosity filter.
//!
//! This module provides a tracing-subscriber layer that runs every event
//! through [`VerbosityFilter::decide`]. Event targets are treated as
//! component names (`::` separators map onto the dotted form), so standard
//! tracing macros participate in per-component verbosity constraints without
//! further wiring.
//!
//! # Usage
//!
//! ```rust,ignore
//! use verbosity::{VerbosityState, init_tracing};
//!
//! init_tracing(VerbosityState::global());
//!
//! // Events now pass through the verbosity filter.
//! tracing::info!(target: "app::db::pool", "pool ready");
//! ```

use std::sync::Arc;

use tracing::{Metadata, Subscriber};
use tracing_subscriber::layer::{Context, Layer};

use crate::filter::VerbosityFilter;
use crate::levels::Level;
use crate::state::VerbosityState;

/// A tracing layer that applies per-component verbosity constraints.
///
/// The layer holds an armed [`VerbosityFilter`] and consults it from
/// [`enabled`](Layer::enabled). Callsite interest is always
/// [`sometimes`](tracing::subscriber::Interest::sometimes) so that runtime
/// verbosity changes take effect instead of being cached away per callsite.
pub struct VerbosityLayer {
    filter: VerbosityFilter,
}

impl VerbosityLayer {
    /// Creates a layer filtering against `state`.
    #[must_use]
    pub fn new(state: Arc<VerbosityState>) -> Self {
        let mut filter = VerbosityFilter::new(state);
        filter.arm();
        Self { filter }
    }

    /// Maps a tracing target onto the dotted component-name form.
    fn component_of(target: &str) -> String {
        target.replace("::", ".")
    }

    /// Maps a tracing level onto a severity level.
    ///
    /// TRACE has no counterpart among the built-in levels and folds into
    /// DEBUG, the most permissive named floor.
    fn severity_of(level: &tracing::Level) -> Level {
        match *level {
            tracing::Level::ERROR => Level::ERROR,
            tracing::Level::WARN => Level::WARNING,
            tracing::Level::INFO => Level::INFO,
            _ => Level::DEBUG,
        }
    }
}

impl<S> Layer<S> for VerbosityLayer
where
    S: Subscriber,
{
    fn register_callsite(
        &self,
        _metadata: &'static Metadata<'static>,
    ) -> tracing::subscriber::Interest {
        // Decisions depend on mutable state; never cache them per callsite.
        tracing::subscriber::Interest::sometimes()
    }

    fn enabled(&self, metadata: &Metadata<'_>, _ctx: Context<'_, S>) -> bool {
        let component = Self::component_of(metadata.target());
        self.filter
            .decide(&component, Self::severity_of(metadata.level()))
    }
}

/// Installs a [`VerbosityLayer`] over `state` as the global subscriber.
///
/// Hosts that compose their own subscriber stack can instead add a
/// [`VerbosityLayer`] to it directly.
pub fn init_tracing(state: Arc<VerbosityState>) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(VerbosityLayer::new(state))
        .init();
}
