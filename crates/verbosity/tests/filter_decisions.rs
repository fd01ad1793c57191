//! Integration tests for end-to-end emission decisions.
//!
//! These tests wire a configured [`VerbosityState`] to an armed
//! [`VerbosityFilter`] and drive the full decision path: prefix lookup,
//! count-to-level resolution, and the severity-floor comparison.
//!
//! Test coverage:
//! 1. The full decide pipeline over a multi-prefix configuration
//! 2. Runtime reconfiguration is visible to already-constructed filters
//! 3. The filter only restricts; it never promotes suppressed records

use std::sync::Arc;

use verbosity::{Level, LevelSpec, ResolverSpec, VerbosityFilter, VerbosityState};

fn configured_state() -> Arc<VerbosityState> {
    let state = Arc::new(VerbosityState::new());
    state
        .set_levels_from([
            (
                "app",
                ResolverSpec::Pairs(vec![
                    (0, LevelSpec::from(Level::WARNING)),
                    (1, LevelSpec::from(Level::INFO)),
                ]),
            ),
            (
                "app.db",
                ResolverSpec::Pairs(vec![
                    (0, LevelSpec::from(Level::INFO)),
                    (1, LevelSpec::from(Level::DEBUG)),
                ]),
            ),
        ])
        .expect("valid entries");
    state
}

fn armed(state: Arc<VerbosityState>) -> VerbosityFilter {
    let mut filter = VerbosityFilter::new(state);
    filter.arm();
    filter
}

// ============================================================================
// Test 1: Full Decision Pipeline
// ============================================================================

/// Verifies decisions at verbosity 0 across exact, nested, and uncovered
/// component names.
#[test]
fn decisions_at_default_verbosity() {
    let filter = armed(configured_state());

    // "app" floor is WARNING at count 0.
    assert!(filter.decide("app", Level::WARNING));
    assert!(!filter.decide("app", Level::INFO));
    assert!(!filter.decide("app.http", Level::INFO));

    // "app.db" is more specific and floors at INFO.
    assert!(filter.decide("app.db", Level::INFO));
    assert!(filter.decide("app.db.pool", Level::INFO));
    assert!(!filter.decide("app.db.pool", Level::DEBUG));

    // Nothing constrains components outside "app".
    assert!(filter.decide("vendor.lib", Level::DEBUG));
}

/// Verifies a single `-v` lowers every covered floor by one configured step.
#[test]
fn decisions_at_verbosity_one() {
    let state = configured_state();
    state.set_verbosity(1).expect("valid count");
    let filter = armed(state);

    assert!(filter.decide("app", Level::INFO));
    assert!(!filter.decide("app", Level::DEBUG));
    assert!(filter.decide("app.db.pool", Level::DEBUG));
}

// ============================================================================
// Test 2: Runtime Reconfiguration
// ============================================================================

/// Verifies count changes made after a filter is built affect its next
/// decision. Filters hold the state by reference, not by value.
#[test]
fn filters_observe_later_count_changes() {
    let state = configured_state();
    let filter = armed(Arc::clone(&state));

    assert!(!filter.decide("app.db", Level::DEBUG));
    state.set_verbosity(1).expect("valid count");
    assert!(filter.decide("app.db", Level::DEBUG));
    state.clear_verbosity();
    assert!(!filter.decide("app.db", Level::DEBUG));
}

/// Verifies registry replacement is visible to existing filters and that
/// clearing the registry removes every constraint.
#[test]
fn filters_observe_registry_replacement() {
    let state = configured_state();
    let filter = armed(Arc::clone(&state));

    assert!(!filter.decide("app", Level::INFO));

    state
        .set_levels_from([(
            "app",
            ResolverSpec::Pairs(vec![(0, LevelSpec::from(Level::DEBUG))]),
        )])
        .expect("valid entries");
    assert!(filter.decide("app", Level::INFO));

    state.clear_levels();
    assert!(filter.decide("app", Level::DEBUG));
}

// ============================================================================
// Test 3: Restriction Only
// ============================================================================

/// Verifies severities at or above the floor always pass, for every covered
/// component, at every configured count.
#[test]
fn severities_at_or_above_the_floor_always_pass() {
    let state = configured_state();
    for count in 0..3 {
        state.set_verbosity(count).expect("valid count");
        let filter = armed(Arc::clone(&state));
        for component in ["app", "app.db", "app.db.pool", "elsewhere"] {
            assert!(filter.decide(component, Level::ERROR));
            assert!(filter.decide(component, Level::CRITICAL));
        }
    }
}
