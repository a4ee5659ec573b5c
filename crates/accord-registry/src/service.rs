//! Registration operations

use crate::allocator;
use crate::facts::RegistryFact;
use accord_core::{AccordError, AccountId, HandleId, Result};
use accord_store::{InboxRecord, LedgerStore};

/// Identity registration over a shared ledger store.
#[derive(Debug, Clone)]
pub struct RegistryService {
    store: LedgerStore,
}

impl RegistryService {
    /// Create a registry service over the given store.
    pub fn new(store: LedgerStore) -> Self {
        Self { store }
    }

    /// Register an inbox for `identity`, assigning its handle.
    ///
    /// The handle draw and the record creation are one transaction.
    /// Fails with `AlreadyRegistered` when the identity already owns an
    /// inbox; the public key is stored verbatim and never validated.
    pub fn register_inbox(
        &self,
        identity: AccountId,
        public_key: impl Into<String>,
    ) -> Result<HandleId> {
        let public_key = public_key.into();
        let now = self.store.now();

        self.store.write(|state| {
            if state.is_registered(&identity) {
                return Err(AccordError::AlreadyRegistered { identity });
            }

            let handle_id = allocator::allocate_inbox_handle(&mut state.counters);
            state
                .inboxes
                .insert(identity, InboxRecord::new(handle_id, public_key.clone()));
            state.journal.append(
                now,
                identity,
                &RegistryFact::InboxRegistered {
                    identity,
                    handle_id,
                    public_key: public_key.clone(),
                },
            );

            tracing::info!(%identity, %handle_id, "inbox registered");
            Ok(handle_id)
        })
    }
}
