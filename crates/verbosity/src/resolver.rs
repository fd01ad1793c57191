//! crates/verbosity/src/resolver.rs
//! Mapping from verbosity counts to severity levels via ordered range rules.

use crate::Verbosity;
use crate::classifier::{Classifier, CountRange};
use crate::error::VerbosityError;
use crate::levels::{Level, LevelSpec};

/// Resolves a verbosity count to a severity level through an ordered
/// `(range, level)` rule table.
///
/// The canonical constructor is [`from_pairs`](Self::from_pairs), which
/// expands an ascending `(count, level)` sequence into contiguous half-open
/// ranges ending in an unbounded top range - the "increasing verbosity lowers
/// the floor" convention. [`from_ranges`](Self::from_ranges) builds a table
/// directly and may leave gaps, in which case [`level_for`](Self::level_for)
/// reports [`VerbosityError::Unresolved`] rather than defaulting silently.
///
/// # Examples
///
/// ```
/// use verbosity::{Level, LevelSpec, VerbosityLevelResolver};
///
/// let resolver = VerbosityLevelResolver::from_pairs([
///     (0, LevelSpec::from(Level::WARNING)),
///     (1, LevelSpec::from(Level::INFO)),
///     (2, LevelSpec::from(Level::DEBUG)),
/// ])?;
///
/// assert_eq!(resolver.level_for(0)?, Level::WARNING);
/// assert_eq!(resolver.level_for(1)?, Level::INFO);
/// assert_eq!(resolver.level_for(5)?, Level::DEBUG);
/// # Ok::<(), verbosity::VerbosityError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VerbosityLevelResolver {
    table: Classifier<CountRange, Level>,
}

impl VerbosityLevelResolver {
    /// Builds a resolver from an ascending `(count, level)` pair sequence.
    ///
    /// Each pair's range runs from its own count up to (excluding) the next
    /// pair's count; the final pair is unbounded above, so the table is
    /// exhaustive from the first count upward. The sequence must be non-empty
    /// and strictly ascending, and every level description must resolve
    /// against the level table - any violation aborts construction before a
    /// resolver exists.
    pub fn from_pairs<I>(pairs: I) -> Result<Self, VerbosityError>
    where
        I: IntoIterator<Item = (Verbosity, LevelSpec)>,
    {
        let mut resolved: Vec<(Verbosity, Level)> = Vec::new();
        for (count, spec) in pairs {
            if let Some(&(previous, _)) = resolved.last() {
                if count <= previous {
                    return Err(VerbosityError::UnsortedPairs {
                        previous,
                        next: count,
                    });
                }
            }
            resolved.push((count, spec.resolve()?));
        }
        if resolved.is_empty() {
            return Err(VerbosityError::EmptyPairs);
        }

        let mut table = Classifier::new();
        for (index, &(count, level)) in resolved.iter().enumerate() {
            let range = match resolved.get(index + 1) {
                Some(&(next, _)) => CountRange::bounded(count, next),
                None => CountRange::unbounded(count),
            };
            table.push(range, level);
        }
        Ok(Self { table })
    }

    /// Builds a resolver directly from `(range, level)` rules.
    ///
    /// The rules keep their given order and need not be contiguous or
    /// exhaustive; queries falling into a gap fail with
    /// [`VerbosityError::Unresolved`].
    #[must_use]
    pub fn from_ranges<I>(ranges: I) -> Self
    where
        I: IntoIterator<Item = (CountRange, Level)>,
    {
        Self {
            table: Classifier::from_rules(ranges),
        }
    }

    /// Resolves `count` to the level of the first covering range.
    pub fn level_for(&self, count: Verbosity) -> Result<Level, VerbosityError> {
        self.table
            .classify(&count)
            .copied()
            .ok_or(VerbosityError::Unresolved { count })
    }

    /// Returns the `(range, level)` rules in priority order.
    #[must_use]
    pub fn ranges(&self) -> &[(CountRange, Level)] {
        self.table.rules()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standard() -> VerbosityLevelResolver {
        VerbosityLevelResolver::from_pairs([
            (0, LevelSpec::from(Level::WARNING)),
            (1, LevelSpec::from(Level::INFO)),
            (2, LevelSpec::from(Level::DEBUG)),
        ])
        .expect("valid pairs")
    }

    #[test]
    fn pair_expansion_builds_contiguous_ranges() {
        let resolver = standard();
        let ranges = resolver.ranges();

        assert_eq!(ranges.len(), 3);
        assert_eq!(ranges[0].0, CountRange::bounded(0, 1));
        assert_eq!(ranges[1].0, CountRange::bounded(1, 2));
        assert_eq!(ranges[2].0, CountRange::unbounded(2));
    }

    #[test]
    fn resolution_follows_the_configured_ranges() {
        let resolver = standard();
        assert_eq!(resolver.level_for(0).unwrap(), Level::WARNING);
        assert_eq!(resolver.level_for(1).unwrap(), Level::INFO);
        assert_eq!(resolver.level_for(2).unwrap(), Level::DEBUG);
        assert_eq!(resolver.level_for(5).unwrap(), Level::DEBUG);
    }

    #[test]
    fn pairs_accept_names_and_values() {
        let resolver = VerbosityLevelResolver::from_pairs([
            (0, LevelSpec::from("warning")),
            (1, LevelSpec::from(20)),
        ])
        .expect("valid pairs");

        assert_eq!(resolver.level_for(0).unwrap(), Level::WARNING);
        assert_eq!(resolver.level_for(3).unwrap(), Level::INFO);
    }

    #[test]
    fn unsorted_pairs_are_rejected() {
        let error = VerbosityLevelResolver::from_pairs([
            (2, LevelSpec::from(Level::DEBUG)),
            (0, LevelSpec::from(Level::WARNING)),
        ])
        .unwrap_err();
        assert_eq!(
            error,
            VerbosityError::UnsortedPairs {
                previous: 2,
                next: 0
            }
        );
    }

    #[test]
    fn duplicate_counts_are_rejected() {
        let error = VerbosityLevelResolver::from_pairs([
            (1, LevelSpec::from(Level::INFO)),
            (1, LevelSpec::from(Level::DEBUG)),
        ])
        .unwrap_err();
        assert!(matches!(error, VerbosityError::UnsortedPairs { .. }));
    }

    #[test]
    fn empty_pairs_are_rejected() {
        let error = VerbosityLevelResolver::from_pairs([]).unwrap_err();
        assert_eq!(error, VerbosityError::EmptyPairs);
    }

    #[test]
    fn unknown_levels_abort_construction() {
        let error = VerbosityLevelResolver::from_pairs([(0, LevelSpec::from("blather"))])
            .unwrap_err();
        assert!(matches!(error, VerbosityError::UnknownLevelName { .. }));
    }

    #[test]
    fn hand_built_gaps_surface_unresolved() {
        let resolver = VerbosityLevelResolver::from_ranges([
            (CountRange::bounded(0, 1), Level::WARNING),
            (CountRange::bounded(3, 5), Level::DEBUG),
        ]);

        assert_eq!(resolver.level_for(0).unwrap(), Level::WARNING);
        assert_eq!(
            resolver.level_for(2).unwrap_err(),
            VerbosityError::Unresolved { count: 2 }
        );
        assert_eq!(
            resolver.level_for(5).unwrap_err(),
            VerbosityError::Unresolved { count: 5 }
        );
    }

    #[test]
    fn equality_is_structural() {
        assert_eq!(standard(), standard());
        let other = VerbosityLevelResolver::from_pairs([(0, LevelSpec::from(Level::INFO))])
            .expect("valid pairs");
        assert_ne!(standard(), other);
    }
}
