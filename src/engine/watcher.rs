//! Watched-service matching.
//!
//! Decides whether an invocation target — a fully-qualified type name,
//! possibly extended with a method segment — falls under a configured
//! list of service/package prefixes.

/// Returns whether `candidate` is watched under `services`.
///
/// An empty list watches everything (the filter is effectively off).
/// Otherwise a candidate is watched iff some entry equals it exactly or
/// is a dot-separated prefix of it: the entry `"com.foo.Repo"` matches
/// the method reference `"com.foo.Repo.find_all"`, and `"com.foo"`
/// matches anything in that package. Matching is case-sensitive; entry
/// order is irrelevant.
#[must_use]
pub fn is_watched(services: &[String], candidate: &str) -> bool {
    if services.is_empty() {
        return true;
    }
    services
        .iter()
        .any(|entry| candidate == entry || is_dotted_prefix(entry, candidate))
}

/// `candidate` starts with `entry` followed by a `.` separator.
///
/// The separator check prevents `"com.foo.Repo"` from matching
/// `"com.foo.Repository"`.
fn is_dotted_prefix(entry: &str, candidate: &str) -> bool {
    candidate
        .strip_prefix(entry)
        .is_some_and(|rest| rest.starts_with('.'))
}

// ============================================================================
// Tests
// ============================================================================
