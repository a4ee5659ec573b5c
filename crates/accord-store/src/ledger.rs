//! The transaction boundary over ledger state
//!
//! A [`LedgerStore`] wraps the full [`LedgerState`] in one lock. Every
//! public operation in the workspace runs as a single closure under that
//! lock: a write transaction is serializable against every other
//! transaction, and read transactions of disjoint callers proceed
//! concurrently. No lock is ever held across calls.

use crate::records::{RegistryCounters, RESERVED_HANDLE_FLOOR};
use crate::state::LedgerState;
use accord_core::{Clock, PhysicalTime, Result, SystemClock};
use parking_lot::RwLock;
use std::sync::Arc;

/// Construction-time configuration for a ledger store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedgerConfig {
    /// Handles at or below this value are never issued
    pub handle_floor: u64,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            handle_floor: RESERVED_HANDLE_FLOOR,
        }
    }
}

/// Shared, serializable ledger state.
///
/// Cloneable handles (`Arc` internally) let each service own a reference
/// to the same ledger.
#[derive(Clone)]
pub struct LedgerStore {
    inner: Arc<StoreInner>,
}

struct StoreInner {
    state: RwLock<LedgerState>,
    clock: Arc<dyn Clock>,
}

impl LedgerStore {
    /// Create a store with the given configuration and clock.
    pub fn new(config: LedgerConfig, clock: Arc<dyn Clock>) -> Self {
        let counters = RegistryCounters::seeded(config.handle_floor);
        Self {
            inner: Arc::new(StoreInner {
                state: RwLock::new(LedgerState::with_counters(counters)),
                clock,
            }),
        }
    }

    /// In-memory store with default configuration and the system clock.
    pub fn in_memory() -> Self {
        Self::new(LedgerConfig::default(), Arc::new(SystemClock))
    }

    /// Current wall-clock time from the store's clock.
    pub fn now(&self) -> PhysicalTime {
        self.inner.clock.physical_time()
    }

    /// Run a read-only transaction.
    pub fn read<R>(&self, f: impl FnOnce(&LedgerState) -> R) -> R {
        let state = self.inner.state.read();
        f(&state)
    }

    /// Run a write transaction.
    ///
    /// The closure holds the state exclusively for its whole duration.
    /// Operations keep the all-or-nothing contract by validating every
    /// precondition before the first mutation; a returned error therefore
    /// means no effect was applied.
    pub fn write<R>(&self, f: impl FnOnce(&mut LedgerState) -> Result<R>) -> Result<R> {
        let mut state = self.inner.state.write();
        f(&mut state)
    }
}

impl std::fmt::Debug for LedgerStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.inner.state.read();
        f.debug_struct("LedgerStore")
            .field("inboxes", &state.inboxes.len())
            .field("delegations", &state.delegations.len())
            .field("journal_len", &state.journal.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use accord_core::{AccordError, AccountId, FixedClock};

    fn test_account(seed: u8) -> AccountId {
        AccountId::new_from_entropy([seed; 32])
    }

    #[test]
    fn store_seeds_counters_from_config() {
        let store = LedgerStore::new(
            LedgerConfig { handle_floor: 500 },
            Arc::new(FixedClock::at(0)),
        );
        store.read(|state| {
            assert_eq!(state.counters.next_inbox_handle, 500);
            assert_eq!(state.counters.next_delegate_handle, 500);
        });
    }

    #[test]
    fn write_transaction_effects_are_visible_to_reads() {
        let store = LedgerStore::in_memory();
        let id = test_account(1);

        store
            .write(|state| {
                state.inboxes.insert(
                    id,
                    crate::records::InboxRecord::new(accord_core::HandleId::new(101), String::new()),
                );
                Ok(())
            })
            .expect("write succeeds");

        assert!(store.read(|state| state.is_registered(&id)));
    }

    #[test]
    fn failed_transaction_surfaces_error() {
        let store = LedgerStore::in_memory();
        let id = test_account(2);

        let result: Result<()> =
            store.write(|_state| Err(AccordError::NotRegistered { identity: id }));
        assert!(result.is_err());
    }

    #[test]
    fn now_uses_injected_clock() {
        let clock = Arc::new(FixedClock::at(777));
        let store = LedgerStore::new(LedgerConfig::default(), clock.clone());
        assert_eq!(store.now().ts_ms, 777);
        clock.advance_ms(3);
        assert_eq!(store.now().ts_ms, 780);
    }
}
