//! Link-intent, confirmation, and revocation operations

use crate::facts::DelegationFact;
use accord_core::{AccordError, AccountId, HandleId, Result};
use accord_store::{DelegationRecord, LedgerStore};

/// Delegation operations over a shared ledger store.
#[derive(Debug, Clone)]
pub struct DelegationService {
    store: LedgerStore,
}

impl DelegationService {
    /// Create a delegation service over the given store.
    pub fn new(store: LedgerStore) -> Self {
        Self { store }
    }

    /// Place `delegate_address` in the owner's invitation slot.
    ///
    /// Unconditional overwrite: an owner has one outstanding invitation,
    /// and a new intent silently discards a prior unconfirmed one.
    pub fn create_link_intent(
        &self,
        owner: AccountId,
        delegate_address: AccountId,
    ) -> Result<()> {
        let now = self.store.now();

        self.store.write(|state| {
            let inbox = state.inbox_mut(&owner)?;
            let replaced = inbox.pending_delegate_invitation.replace(delegate_address);

            state.journal.append(
                now,
                owner,
                &DelegationFact::LinkIntentCreated {
                    owner,
                    delegate_address,
                    replaced,
                },
            );

            tracing::debug!(%owner, %delegate_address, "delegate link intent created");
            Ok(())
        })
    }

    /// Confirm the invitation of `owner` from the delegate's own identity.
    ///
    /// Only the delegate's own transaction can authenticate the delegate
    /// address, so this is the step that creates the binding: it consumes
    /// the slot exactly once, draws a delegate handle, and records the
    /// delegation.
    pub fn confirm(&self, delegate: AccountId, owner: AccountId) -> Result<HandleId> {
        let now = self.store.now();

        self.store.write(|state| {
            let invited = state
                .inbox(&owner)?
                .pending_delegate_invitation
                .ok_or(AccordError::NoPendingInvitation { owner })?;

            if state.delegation(&delegate).is_some() {
                return Err(AccordError::DelegateAlreadyTaken { delegate });
            }
            if invited != delegate {
                return Err(AccordError::DelegateMismatch {
                    owner,
                    confirming: delegate,
                });
            }

            // All preconditions hold; consume the slot and bind.
            state.inbox_mut(&owner)?.pending_delegate_invitation = None;
            let handle_id = accord_registry::allocate_delegate_handle(&mut state.counters);
            state.delegations.insert(
                delegate,
                DelegationRecord {
                    owner,
                    handle_id,
                    created_at: now,
                },
            );
            state.journal.append(
                now,
                delegate,
                &DelegationFact::DelegateConfirmed {
                    owner,
                    delegate,
                    handle_id,
                },
            );

            tracing::info!(%owner, %delegate, %handle_id, "delegate confirmed");
            Ok(handle_id)
        })
    }

    /// Destroy the binding of `delegate_address`, owner-side only.
    ///
    /// Requires the record to exist and to name the caller as owner; the
    /// delegate does not participate.
    pub fn revoke(&self, owner: AccountId, delegate_address: AccountId) -> Result<()> {
        let now = self.store.now();

        self.store.write(|state| {
            let record = state
                .delegation(&delegate_address)
                .ok_or(AccordError::UnknownDelegate {
                    delegate: delegate_address,
                })?;
            if record.owner != owner {
                return Err(AccordError::DelegateOwnershipMismatch {
                    owner,
                    delegate: delegate_address,
                });
            }

            state.delegations.remove(&delegate_address);
            state.journal.append(
                now,
                owner,
                &DelegationFact::DelegateRevoked {
                    owner,
                    delegate: delegate_address,
                },
            );

            tracing::info!(%owner, delegate = %delegate_address, "delegate revoked");
            Ok(())
        })
    }
}
