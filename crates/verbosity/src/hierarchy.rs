//! crates/verbosity/src/hierarchy.rs
//! Dotted component-name hierarchy test.

/// Reports whether `candidate` names the same component as `root` or one
/// nested under it.
///
/// Component names are dotted hierarchical identifiers such as
/// `"app.db.pool"`. A candidate is in a root's hierarchy when it equals the
/// root or starts with the root followed by a `.` separator; sibling names
/// that merely share a string prefix do not match. The relation is reflexive.
///
/// # Examples
///
/// ```
/// use verbosity::is_in_hierarchy;
///
/// assert!(is_in_hierarchy("a.b.c", "a.b"));
/// assert!(is_in_hierarchy("a.b", "a.b"));
/// assert!(!is_in_hierarchy("a.bc", "a.b"));
/// ```
#[must_use]
pub fn is_in_hierarchy(candidate: &str, root: &str) -> bool {
    if candidate == root {
        return true;
    }
    candidate
        .strip_prefix(root)
        .is_some_and(|rest| rest.starts_with('.'))
}
