//! Integration tests for concurrent access to shared verbosity state.
//!
//! Test coverage:
//! 1. Writers racing readers never expose a torn count or half-installed
//!    registry
//! 2. Concurrent decide calls against a mutating state stay well-formed
//! 3. A failed bulk update never becomes visible to concurrent readers

use std::sync::Arc;
use std::thread;

use verbosity::{Level, LevelSpec, ResolverSpec, VerbosityFilter, VerbosityState};

// ============================================================================
// Test 1: Torn Reads
// ============================================================================

/// Spawns writers that set distinct counts alongside readers that snapshot
/// the state. Every observed count must be one a writer actually set.
#[test]
fn concurrent_writers_and_readers_never_tear_the_count() {
    const WRITERS: u32 = 4;
    const READS_PER_READER: u32 = 200;

    let state = Arc::new(VerbosityState::new());
    let mut handles = Vec::new();

    for writer in 0..WRITERS {
        let state = Arc::clone(&state);
        handles.push(thread::spawn(move || {
            for round in 0..50 {
                let count = writer * 50 + round;
                state.set_verbosity(count).expect("count within bounds");
            }
        }));
    }

    for _ in 0..3 {
        let state = Arc::clone(&state);
        handles.push(thread::spawn(move || {
            for _ in 0..READS_PER_READER {
                let observed = state.verbosity();
                assert!(observed < WRITERS * 50, "count {observed} was never written");
            }
        }));
    }

    for handle in handles {
        handle.join().expect("no panics in workers");
    }
}

// ============================================================================
// Test 2: Decisions Under Mutation
// ============================================================================

/// Drives decide calls while another thread swaps registries. Every decision
/// must be made against a complete registry: either floor applies cleanly or
/// the component is wholly unconstrained.
#[test]
fn decisions_race_registry_swaps_without_partial_observation() {
    let state = Arc::new(VerbosityState::new());
    let mut filter = VerbosityFilter::new(Arc::clone(&state));
    filter.arm();

    let swapper = {
        let state = Arc::clone(&state);
        thread::spawn(move || {
            for round in 0..100 {
                if round % 2 == 0 {
                    state
                        .set_levels_from([(
                            "svc",
                            ResolverSpec::Pairs(vec![(0, LevelSpec::from(Level::ERROR))]),
                        )])
                        .expect("valid entries");
                } else {
                    state.clear_levels();
                }
            }
        })
    };

    for _ in 0..500 {
        // ERROR clears every configured floor; it must always pass.
        assert!(filter.decide("svc.worker", Level::ERROR));
        // WARNING passes iff the constrained registry is not installed, and
        // either way the call must return without panicking.
        let _ = filter.decide("svc.worker", Level::WARNING);
    }

    swapper.join().expect("swapper completed");
}

// ============================================================================
// Test 3: Failed Updates Stay Invisible
// ============================================================================

/// Hammers the state with invalid bulk updates while readers assert the
/// last good configuration stays in force.
#[test]
fn failed_bulk_updates_never_become_visible() {
    let state = Arc::new(VerbosityState::new());
    state
        .set_levels_from([(
            "svc",
            ResolverSpec::Pairs(vec![(0, LevelSpec::from(Level::INFO))]),
        )])
        .expect("valid entries");

    let breaker = {
        let state = Arc::clone(&state);
        thread::spawn(move || {
            for _ in 0..100 {
                let result = state.set_levels_from([(
                    "svc",
                    ResolverSpec::Pairs(vec![(0, LevelSpec::from("bogus"))]),
                )]);
                assert!(result.is_err());
            }
        })
    };

    for _ in 0..500 {
        let levels = state.levels();
        let resolver = levels.resolve("svc.worker").expect("entry stays installed");
        assert_eq!(resolver.level_for(0).unwrap(), Level::INFO);
    }

    breaker.join().expect("breaker completed");
}
