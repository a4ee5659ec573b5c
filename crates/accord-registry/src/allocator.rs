//! Handle counter draws
//!
//! Each draw increments its counter and returns the new value, so the
//! seed itself is never issued: with the default floor of 100 the first
//! handle in either family is 101. The two families are independent; an
//! inbox handle and a delegate handle may share a numeric value.

use accord_core::HandleId;
use accord_store::RegistryCounters;

/// Draw the next inbox handle.
pub fn allocate_inbox_handle(counters: &mut RegistryCounters) -> HandleId {
    counters.next_inbox_handle += 1;
    HandleId::new(counters.next_inbox_handle)
}

/// Draw the next delegate handle.
pub fn allocate_delegate_handle(counters: &mut RegistryCounters) -> HandleId {
    counters.next_delegate_handle += 1;
    HandleId::new(counters.next_delegate_handle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use accord_store::RESERVED_HANDLE_FLOOR;
    use proptest::prelude::*;

    #[test]
    fn first_draws_land_above_the_floor() {
        let mut counters = RegistryCounters::default();
        assert_eq!(
            allocate_inbox_handle(&mut counters).value(),
            RESERVED_HANDLE_FLOOR + 1
        );
        assert_eq!(
            allocate_delegate_handle(&mut counters).value(),
            RESERVED_HANDLE_FLOOR + 1
        );
    }

    #[test]
    fn families_advance_independently() {
        let mut counters = RegistryCounters::default();
        allocate_inbox_handle(&mut counters);
        allocate_inbox_handle(&mut counters);
        let delegate = allocate_delegate_handle(&mut counters);
        assert_eq!(delegate.value(), RESERVED_HANDLE_FLOOR + 1);
    }

    proptest! {
        /// Any interleaving of draws yields strictly increasing, never
        /// repeating handles within each family, all above the floor.
        #[test]
        fn draws_are_strictly_monotonic(pattern in proptest::collection::vec(any::<bool>(), 1..200)) {
            let mut counters = RegistryCounters::default();
            let mut last_inbox = None;
            let mut last_delegate = None;

            for draw_inbox in pattern {
                if draw_inbox {
                    let handle = allocate_inbox_handle(&mut counters);
                    prop_assert!(handle.value() > RESERVED_HANDLE_FLOOR);
                    if let Some(previous) = last_inbox {
                        prop_assert!(handle > previous);
                    }
                    last_inbox = Some(handle);
                } else {
                    let handle = allocate_delegate_handle(&mut counters);
                    prop_assert!(handle.value() > RESERVED_HANDLE_FLOOR);
                    if let Some(previous) = last_delegate {
                        prop_assert!(handle > previous);
                    }
                    last_delegate = Some(handle);
                }
            }
        }
    }
}
