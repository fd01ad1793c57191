//! crates/verbosity/src/levels.rs
//! Canonical severity levels with bijective name/value resolution.

use std::collections::HashMap;
use std::fmt;
use std::sync::{OnceLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::VerbosityError;

/// Default severity floor for applications - the things you actually run.
pub const DEFAULT_APP_LEVEL: Level = Level::INFO;

/// Default severity floor for libraries - things used by applications or
/// other libraries.
pub const DEFAULT_LIB_LEVEL: Level = Level::WARNING;

/// An ordered logging severity.
///
/// Every level carries a canonical numeric value; the built-in constants
/// mirror the conventional 0-50 ladder (`CRITICAL` > `ERROR` > `WARNING` >
/// `INFO` > `DEBUG` > `NOTSET`). Ordering compares numeric values, so a
/// higher level means a more important message.
///
/// Levels always originate from the process-wide level table: either a
/// built-in constant, a successful [`Level::from_name`] / [`Level::from_value`]
/// lookup, or a [`register_level`] call. The table keeps the name↔value
/// mapping bijective, with names compared case-insensitively.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Level(i32);

impl Level {
    /// Unrecoverable failure.
    pub const CRITICAL: Self = Self(50);
    /// Operation failed.
    pub const ERROR: Self = Self(40);
    /// Something unexpected, execution continues.
    pub const WARNING: Self = Self(30);
    /// Routine operational message.
    pub const INFO: Self = Self(20);
    /// Developer diagnostics.
    pub const DEBUG: Self = Self(10);
    /// No level configured.
    pub const NOTSET: Self = Self(0);

    /// Returns the canonical numeric value.
    #[must_use]
    pub const fn value(self) -> i32 {
        self.0
    }

    /// Returns the canonical name, if this level is registered.
    #[must_use]
    pub fn name(self) -> Option<String> {
        read_table().by_value.get(&self.0).cloned()
    }

    /// Looks up a level by name, case-insensitively.
    pub fn from_name(name: &str) -> Result<Self, VerbosityError> {
        read_table()
            .by_name
            .get(&name.to_ascii_uppercase())
            .map(|value| Self(*value))
            .ok_or_else(|| VerbosityError::UnknownLevelName {
                name: name.to_owned(),
            })
    }

    /// Looks up a level by canonical numeric value.
    pub fn from_value(value: i32) -> Result<Self, VerbosityError> {
        if read_table().by_value.contains_key(&value) {
            Ok(Self(value))
        } else {
            Err(VerbosityError::UnknownLevelValue { value })
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(&name),
            None => write!(f, "{}", self.0),
        }
    }
}

/// A loose description of a severity level, resolved against the level table.
///
/// This is the closed set of shapes accepted by the configuration surface: a
/// canonical numeric value or a case-insensitive name string. Digit-only
/// strings resolve as numeric values, so `"10"` and `10` describe the same
/// level.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum LevelSpec {
    /// A canonical numeric severity value.
    Value(i32),
    /// A case-insensitive level name.
    Name(String),
}

impl LevelSpec {
    /// Resolves the description to a concrete [`Level`].
    ///
    /// Fails with [`VerbosityError::UnknownLevelName`] or
    /// [`VerbosityError::UnknownLevelValue`] when the description does not
    /// match any registered level.
    pub fn resolve(&self) -> Result<Level, VerbosityError> {
        match self {
            Self::Value(value) => Level::from_value(*value),
            Self::Name(name) => {
                if !name.is_empty() && name.bytes().all(|byte| byte.is_ascii_digit()) {
                    match name.parse::<i32>() {
                        Ok(value) => Level::from_value(value),
                        Err(_) => Err(VerbosityError::UnknownLevelName {
                            name: name.clone(),
                        }),
                    }
                } else {
                    Level::from_name(name)
                }
            }
        }
    }
}

impl From<Level> for LevelSpec {
    fn from(level: Level) -> Self {
        Self::Value(level.value())
    }
}

impl From<i32> for LevelSpec {
    fn from(value: i32) -> Self {
        Self::Value(value)
    }
}

impl From<&str> for LevelSpec {
    fn from(name: &str) -> Self {
        Self::Name(name.to_owned())
    }
}

impl From<String> for LevelSpec {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

/// Registers a custom severity level under `name` with numeric `value`.
///
/// Registration is idempotent: submitting an existing (name, value) pair
/// again succeeds without changing the table. Reusing a name for a different
/// value, or a value for a different name, is rejected so the name↔value
/// mapping stays bijective. Names are stored case-insensitively and must be
/// non-empty and non-numeric to stay distinguishable from value strings.
pub fn register_level(name: &str, value: i32) -> Result<Level, VerbosityError> {
    if name.is_empty() || name.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(VerbosityError::InvalidLevelName {
            name: name.to_owned(),
        });
    }

    let canonical = name.to_ascii_uppercase();
    let mut table = write_table();

    if let Some(existing) = table.by_name.get(&canonical) {
        if *existing == value {
            return Ok(Level(value));
        }
        return Err(VerbosityError::DuplicateLevelName {
            name: name.to_owned(),
            existing: *existing,
        });
    }
    if let Some(existing) = table.by_value.get(&value) {
        return Err(VerbosityError::DuplicateLevelValue {
            value,
            existing: existing.clone(),
        });
    }

    table.by_name.insert(canonical.clone(), value);
    table.by_value.insert(value, canonical);
    Ok(Level(value))
}

/// Renders the registered levels as `NAME (value)` pairs, most severe first.
///
/// Used by error messages so a rejected configuration names the accepted
/// alternatives.
pub(crate) fn known_level_names() -> String {
    let table = read_table();
    let mut entries: Vec<(&i32, &String)> = table.by_value.iter().collect();
    entries.sort_by(|a, b| b.0.cmp(a.0));
    entries
        .iter()
        .map(|(value, name)| format!("{name} ({value})"))
        .collect::<Vec<_>>()
        .join(", ")
}

struct LevelTable {
    /// Canonical (upper-case) name to numeric value.
    by_name: HashMap<String, i32>,
    /// Numeric value to canonical name.
    by_value: HashMap<i32, String>,
}

impl LevelTable {
    fn builtin() -> Self {
        let builtin: [(&str, i32); 6] = [
            ("CRITICAL", 50),
            ("ERROR", 40),
            ("WARNING", 30),
            ("INFO", 20),
            ("DEBUG", 10),
            ("NOTSET", 0),
        ];
        let mut by_name = HashMap::new();
        let mut by_value = HashMap::new();
        for (name, value) in builtin {
            by_name.insert(name.to_owned(), value);
            by_value.insert(value, name.to_owned());
        }
        Self { by_name, by_value }
    }
}

fn table() -> &'static RwLock<LevelTable> {
    static TABLE: OnceLock<RwLock<LevelTable>> = OnceLock::new();
    TABLE.get_or_init(|| RwLock::new(LevelTable::builtin()))
}

fn read_table() -> RwLockReadGuard<'static, LevelTable> {
    table().read().unwrap_or_else(PoisonError::into_inner)
}

fn write_table() -> RwLockWriteGuard<'static, LevelTable> {
    table().write().unwrap_or_else(PoisonError::into_inner)
}
