//! Assault selection.
//!
//! Picks exactly one assault to fire from the active eligible set,
//! preserving registration order for indexing. Selection is the only
//! place the `choose_assault` draw is consumed, and only when two or
//! more assaults are active.

use std::sync::Arc;

use crate::assault::Assault;
use crate::engine::random::RandomSource;

/// Selects one assault from the active sublist.
///
/// Zero active assaults is a normal outcome, not an error: the trigger
/// can fire with nothing eligible to act. A single active assault is
/// returned directly without consuming randomness; with two or more the
/// random source chooses a uniform index.
#[must_use]
pub fn select<'a>(
    active: &'a [Arc<dyn Assault>],
    random: &dyn RandomSource,
) -> Option<&'a Arc<dyn Assault>> {
    match active {
        [] => None,
        [only] => Some(only),
        _ => {
            #[allow(clippy::cast_possible_truncation)]
            let count = active.len() as u32;
            let index = random.choose_assault(count) as usize;
            // A misbehaving source could hand back an out-of-range
            // index; clamp instead of panicking in the decision path.
            Some(&active[index.min(active.len() - 1)])
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    struct Named(&'static str);

    impl Assault for Named {
        fn kind(&self) -> &str {
            self.0
        }
        fn is_active(&self) -> bool {
            true
        }
        fn attack(&self) {}
    }

    /// Returns a fixed value and counts how often it was consulted.
    struct Fixed {
        value: u32,
        calls: AtomicU32,
    }

    impl Fixed {
        fn new(value: u32) -> Self {
            Self {
                value,
                calls: AtomicU32::new(0),
            }
        }
    }

    impl RandomSource for Fixed {
        fn next_in(&self, _bound: u32) -> u32 {
            self.calls.fetch_add(1, Ordering::Relaxed);
            self.value
        }
    }

    fn named(kind: &'static str) -> Arc<dyn Assault> {
        Arc::new(Named(kind))
    }

    #[test]
    fn test_empty_set_selects_nothing() {
        let random = Fixed::new(0);
        assert!(select(&[], &random).is_none());
        assert_eq!(random.calls.load(Ordering::Relaxed), 0);
    }

    #[test]
    fn test_singleton_selected_without_randomness() {
        let active = vec![named("latency")];
        let random = Fixed::new(7);
        let chosen = select(&active, &random).expect("one active");
        assert_eq!(chosen.kind(), "latency");
        assert_eq!(random.calls.load(Ordering::Relaxed), 0);
    }

    #[test]
    fn test_choose_zero_selects_first() {
        let active = vec![named("latency"), named("exception")];
        let chosen = select(&active, &Fixed::new(0)).expect("active");
        assert_eq!(chosen.kind(), "latency");
    }

    #[test]
    fn test_choose_one_selects_second() {
        let active = vec![named("latency"), named("exception")];
        let chosen = select(&active, &Fixed::new(1)).expect("active");
        assert_eq!(chosen.kind(), "exception");
    }

    #[test]
    fn test_out_of_range_choice_clamped() {
        let active = vec![named("latency"), named("exception")];
        let chosen = select(&active, &Fixed::new(99)).expect("active");
        assert_eq!(chosen.kind(), "exception");
    }

    #[test]
    fn test_registration_order_indexing() {
        let active = vec![named("a"), named("b"), named("c")];
        for (index, expected) in [(0, "a"), (1, "b"), (2, "c")] {
            let chosen = select(&active, &Fixed::new(index)).expect("active");
            assert_eq!(chosen.kind(), expected);
        }
    }
}
