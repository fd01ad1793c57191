//! crates/verbosity/src/classifier.rs
//! First-match classification over ordered rule tables.

use crate::Verbosity;

/// Outcome of asking a rule whether its key space covers a queried key.
///
/// `Inapplicable` lets heterogeneous rule tables coexist: a rule that cannot
/// judge the queried key shape is skipped without failing the whole lookup,
/// and without the caller dispatching on key types per query.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Membership {
    /// The rule's key space contains the key.
    Contains,
    /// The rule's key space can judge the key and does not contain it.
    Excludes,
    /// The rule's key space cannot judge this key; skip the rule.
    Inapplicable,
}

/// A rule's key space: a collection of keys with an explicit applicability
/// check.
pub trait RuleSet<K> {
    /// Tests whether `key` belongs to this rule's key space.
    fn membership(&self, key: &K) -> Membership;
}

/// An ordered rule table mapping key collections to values.
///
/// Rules are stored as `(rule, value)` pairs in insertion order and queried
/// with a first-match policy: the first rule whose key space contains the
/// queried key wins. Rules answering [`Membership::Inapplicable`] are passed
/// over silently.
///
/// # Examples
///
/// ```
/// use verbosity::{Classifier, CountRange};
///
/// let classifier = Classifier::from_rules([
///     (CountRange::bounded(0, 5), "a"),
///     (CountRange::unbounded(5), "b"),
/// ]);
///
/// assert_eq!(classifier.classify(&3), Some(&"a"));
/// assert_eq!(classifier.classify(&5), Some(&"b"));
/// assert!(classifier.contains(&40));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Classifier<R, V> {
    rules: Vec<(R, V)>,
}

impl<R, V> Classifier<R, V> {
    /// Creates an empty classifier.
    #[must_use]
    pub const fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Creates a classifier from `(rule, value)` pairs in priority order.
    #[must_use]
    pub fn from_rules<I>(rules: I) -> Self
    where
        I: IntoIterator<Item = (R, V)>,
    {
        Self {
            rules: rules.into_iter().collect(),
        }
    }

    /// Appends a rule with the lowest priority.
    pub fn push(&mut self, rule: R, value: V) {
        self.rules.push((rule, value));
    }

    /// Returns the value of the first rule containing `key`, if any.
    #[must_use]
    pub fn classify<K>(&self, key: &K) -> Option<&V>
    where
        R: RuleSet<K>,
    {
        self.rules
            .iter()
            .find(|(rule, _)| rule.membership(key) == Membership::Contains)
            .map(|(_, value)| value)
    }

    /// Reports whether any rule contains `key`.
    #[must_use]
    pub fn contains<K>(&self, key: &K) -> bool
    where
        R: RuleSet<K>,
    {
        self.classify(key).is_some()
    }

    /// Reports whether an exact rule key is present.
    ///
    /// This compares whole rules, not element membership; it exists for
    /// idempotent re-registration checks.
    #[must_use]
    pub fn has_rule(&self, rule: &R) -> bool
    where
        R: PartialEq,
    {
        self.rules.iter().any(|(existing, _)| existing == rule)
    }

    /// Returns the `(rule, value)` table in priority order.
    #[must_use]
    pub fn rules(&self) -> &[(R, V)] {
        &self.rules
    }

    /// Returns the number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Reports whether the table holds no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterates over the `(rule, value)` pairs in priority order.
    pub fn iter(&self) -> std::slice::Iter<'_, (R, V)> {
        self.rules.iter()
    }
}

impl<R, V> Default for Classifier<R, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, R, V> IntoIterator for &'a Classifier<R, V> {
    type Item = &'a (R, V);
    type IntoIter = std::slice::Iter<'a, (R, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

/// A half-open interval `[lo, hi)` of verbosity counts.
///
/// `hi` of `None` leaves the interval unbounded above. This is the rule type
/// used by [`VerbosityLevelResolver`](crate::VerbosityLevelResolver) tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CountRange {
    lo: Verbosity,
    hi: Option<Verbosity>,
}

impl CountRange {
    /// Creates the bounded interval `[lo, hi)`.
    #[must_use]
    pub const fn bounded(lo: Verbosity, hi: Verbosity) -> Self {
        Self { lo, hi: Some(hi) }
    }

    /// Creates the unbounded interval `[lo, ∞)`.
    #[must_use]
    pub const fn unbounded(lo: Verbosity) -> Self {
        Self { lo, hi: None }
    }

    /// Returns the inclusive lower bound.
    #[must_use]
    pub const fn lo(self) -> Verbosity {
        self.lo
    }

    /// Returns the exclusive upper bound, if bounded.
    #[must_use]
    pub const fn hi(self) -> Option<Verbosity> {
        self.hi
    }

    /// Reports whether `count` falls inside the interval.
    #[must_use]
    pub const fn contains(self, count: Verbosity) -> bool {
        if count < self.lo {
            return false;
        }
        match self.hi {
            Some(hi) => count < hi,
            None => true,
        }
    }
}

impl RuleSet<Verbosity> for CountRange {
    fn membership(&self, key: &Verbosity) -> Membership {
        if self.contains(*key) {
            Membership::Contains
        } else {
            Membership::Excludes
        }
    }
}
