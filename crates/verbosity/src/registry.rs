//! crates/verbosity/src/registry.rs
//! Component-name prefix registry with most-specific-prefix lookup.

use crate::Verbosity;
use crate::error::VerbosityError;
use crate::hierarchy::is_in_hierarchy;
use crate::levels::{Level, LevelSpec};
use crate::resolver::VerbosityLevelResolver;

/// A loose description of a resolver, as accepted by the configuration
/// surface.
///
/// This replaces shape-sniffing with a closed set of tagged variants: either
/// a resolver that is already built, or the raw ascending pair sequence that
/// [`VerbosityLevelResolver::from_pairs`] expands.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum ResolverSpec {
    /// An already-built resolver, used as-is.
    Ready(VerbosityLevelResolver),
    /// An ascending `(count, level)` pair sequence.
    Pairs(Vec<(Verbosity, LevelSpec)>),
}

impl ResolverSpec {
    /// Converts the description into a concrete resolver.
    pub fn into_resolver(self) -> Result<VerbosityLevelResolver, VerbosityError> {
        match self {
            Self::Ready(resolver) => Ok(resolver),
            Self::Pairs(pairs) => VerbosityLevelResolver::from_pairs(pairs),
        }
    }
}

impl From<VerbosityLevelResolver> for ResolverSpec {
    fn from(resolver: VerbosityLevelResolver) -> Self {
        Self::Ready(resolver)
    }
}

impl From<Vec<(Verbosity, LevelSpec)>> for ResolverSpec {
    fn from(pairs: Vec<(Verbosity, LevelSpec)>) -> Self {
        Self::Pairs(pairs)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
struct RegistryEntry {
    prefix: String,
    resolver: VerbosityLevelResolver,
}

/// Maps component-name prefixes to verbosity level resolvers.
///
/// Lookup selects the registered prefix that is in the hierarchy of the
/// queried name and has the greatest length; among equal-length candidates
/// the most recently registered prefix wins. Registration order is preserved
/// for that tie-break and for deterministic iteration.
///
/// # Examples
///
/// ```
/// use verbosity::{Level, LevelSpec, ResolverSpec, VerbosityLevelRegistry};
///
/// let registry = VerbosityLevelRegistry::from_entries([
///     ("app", ResolverSpec::Pairs(vec![(0, LevelSpec::from(Level::WARNING))])),
///     ("app.db", ResolverSpec::Pairs(vec![(0, LevelSpec::from(Level::DEBUG))])),
/// ])?;
///
/// let resolver = registry.resolve("app.db.pool").expect("prefix registered");
/// assert_eq!(resolver.level_for(0)?, Level::DEBUG);
/// assert!(registry.resolve("other").is_none());
/// # Ok::<(), verbosity::VerbosityError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VerbosityLevelRegistry {
    entries: Vec<RegistryEntry>,
}

impl VerbosityLevelRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Builds a registry from `(prefix, resolver description)` entries.
    ///
    /// Conversion is all-or-nothing: if any entry fails to convert, no
    /// registry is produced. A prefix appearing twice keeps only its latest
    /// entry, matching the replace-and-refresh semantics of
    /// [`insert`](Self::insert).
    pub fn from_entries<I, N>(entries: I) -> Result<Self, VerbosityError>
    where
        I: IntoIterator<Item = (N, ResolverSpec)>,
        N: Into<String>,
    {
        let mut registry = Self::new();
        for (prefix, spec) in entries {
            registry.insert(prefix, spec.into_resolver()?);
        }
        Ok(registry)
    }

    /// Registers `resolver` for `prefix`.
    ///
    /// Re-registering an existing prefix replaces its resolver and refreshes
    /// its recency, so it wins equal-length ties against older entries.
    pub fn insert<N>(&mut self, prefix: N, resolver: VerbosityLevelResolver)
    where
        N: Into<String>,
    {
        let prefix = prefix.into();
        self.entries.retain(|entry| entry.prefix != prefix);
        self.entries.push(RegistryEntry { prefix, resolver });
    }

    /// Returns the resolver for the most specific prefix covering `name`.
    ///
    /// `None` means no registered prefix is in the hierarchy of `name`; the
    /// caller should fall back to its ambient configuration.
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<&VerbosityLevelResolver> {
        let mut best: Option<&RegistryEntry> = None;
        for entry in &self.entries {
            if !is_in_hierarchy(name, &entry.prefix) {
                continue;
            }
            // `>` keeps later entries on equal-length ties.
            match best {
                Some(found) if found.prefix.len() > entry.prefix.len() => {}
                _ => best = Some(entry),
            }
        }
        best.map(|entry| &entry.resolver)
    }

    /// Resolves `name` and queries the winning resolver in one step.
    ///
    /// The outer `Option` distinguishes "no covering prefix" from the inner
    /// resolution result, which can still fail for gap-built resolvers.
    #[must_use]
    pub fn level_for(&self, name: &str, count: Verbosity) -> Option<Result<Level, VerbosityError>> {
        self.resolve(name).map(|resolver| resolver.level_for(count))
    }

    /// Returns the resolver registered under exactly `prefix`, if any.
    #[must_use]
    pub fn get(&self, prefix: &str) -> Option<&VerbosityLevelResolver> {
        self.entries
            .iter()
            .find(|entry| entry.prefix == prefix)
            .map(|entry| &entry.resolver)
    }

    /// Iterates over registered prefixes in registration order.
    pub fn prefixes(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.prefix.as_str())
    }

    /// Returns the number of registered prefixes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Reports whether the registry holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
