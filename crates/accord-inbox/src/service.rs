//! Request/accept/deny/remove operations

use crate::facts::InboxFact;
use crate::naming;
use crate::view::InboxView;
use accord_core::{AccordError, AccountId, Caller, Result};
use accord_delegation::resolve_caller;
use accord_store::{ConnectionEntry, LedgerStore};

/// Connection request operations over a shared ledger store.
///
/// Every operation resolves its caller through the delegation check
/// first, so the state machine below only ever sees owner identities.
#[derive(Debug, Clone)]
pub struct InboxService {
    store: LedgerStore,
}

impl InboxService {
    /// Create an inbox service over the given store.
    pub fn new(store: LedgerStore) -> Self {
        Self { store }
    }

    /// Solicit a conversation with `owner`.
    ///
    /// Requires both the resolved requester and the target registered,
    /// and the pair in the NONE state: no pending request
    /// (`DuplicateRequest`) and no existing contact (`AlreadyConnected`).
    /// The stored entry records the resolved requester, never a delegate.
    pub fn request(&self, caller: Caller, owner: AccountId, envelope: Vec<u8>) -> Result<()> {
        let now = self.store.now();

        self.store.write(|state| {
            let requester = resolve_caller(state, caller)?;
            state.inbox(&requester)?;

            let target = state.inbox(&owner)?;
            if target.has_pending_from(&requester) {
                return Err(AccordError::DuplicateRequest { requester, owner });
            }
            if target.has_contact(&requester) {
                return Err(AccordError::AlreadyConnected {
                    identity: owner,
                    counterpart: requester,
                });
            }

            state.inbox_mut(&owner)?.pending_requests.push(ConnectionEntry {
                counterpart: requester,
                created_at: now,
                envelope: envelope.clone(),
                connection_owner: requester,
            });
            state.journal.append(
                now,
                caller.identity(),
                &InboxFact::RequestSubmitted {
                    requester,
                    owner,
                    envelope,
                },
            );

            tracing::debug!(%requester, %owner, "conversation requested");
            Ok(())
        })
    }

    /// Accept the pending request from `requester`.
    ///
    /// Removes the pending entry and inserts the mirrored contact into
    /// both phonebooks in this one transaction, copying the recorded
    /// `connection_owner` verbatim to both sides.
    pub fn accept(&self, caller: Caller, requester: AccountId) -> Result<()> {
        let now = self.store.now();

        self.store.write(|state| {
            let owner = resolve_caller(state, caller)?;

            let inbox = state.inbox(&owner)?;
            let pending = inbox
                .pending_from(&requester)
                .cloned()
                .ok_or(AccordError::RequestNotPending { owner, requester })?;
            if inbox.has_contact(&requester) {
                return Err(AccordError::AlreadyConnected {
                    identity: owner,
                    counterpart: requester,
                });
            }
            // The mirror insert is bounded too: a stale reverse entry left
            // by an earlier one-sided removal blocks reconnection until it
            // is removed as well.
            if state.inbox(&requester)?.has_contact(&owner) {
                return Err(AccordError::AlreadyConnected {
                    identity: requester,
                    counterpart: owner,
                });
            }

            let accepter_inbox = state.inbox_mut(&owner)?;
            accepter_inbox.take_pending_from(&requester);
            accepter_inbox.phonebook.push(ConnectionEntry {
                counterpart: requester,
                created_at: now,
                envelope: pending.envelope.clone(),
                connection_owner: pending.connection_owner,
            });
            if requester != owner {
                state.inbox_mut(&requester)?.phonebook.push(ConnectionEntry {
                    counterpart: owner,
                    created_at: now,
                    envelope: pending.envelope,
                    connection_owner: pending.connection_owner,
                });
            }
            state
                .journal
                .append(now, caller.identity(), &InboxFact::RequestAccepted { owner, requester });

            tracing::info!(%owner, %requester, "connection request accepted");
            Ok(())
        })
    }

    /// Deny the pending request from `requester`.
    ///
    /// Removes the pending entry only; the requester may request again.
    pub fn deny(&self, caller: Caller, requester: AccountId) -> Result<()> {
        let now = self.store.now();

        self.store.write(|state| {
            let owner = resolve_caller(state, caller)?;

            if !state.inbox(&owner)?.has_pending_from(&requester) {
                return Err(AccordError::RequestNotPending { owner, requester });
            }

            state.inbox_mut(&owner)?.take_pending_from(&requester);
            state
                .journal
                .append(now, caller.identity(), &InboxFact::RequestDenied { owner, requester });

            tracing::debug!(%owner, %requester, "connection request denied");
            Ok(())
        })
    }

    /// Remove `counterpart` from the caller's phonebook.
    ///
    /// Deletes the caller-side entry only; the counterpart's mirror entry
    /// is untouched and still authorizes traffic toward the counterpart.
    pub fn remove_contact(&self, caller: Caller, counterpart: AccountId) -> Result<()> {
        let now = self.store.now();

        self.store.write(|state| {
            let owner = resolve_caller(state, caller)?;

            if !state.inbox(&owner)?.has_contact(&counterpart) {
                return Err(AccordError::NotConnected {
                    sender: counterpart,
                    receiver: owner,
                });
            }

            state.inbox_mut(&owner)?.take_contact(&counterpart);
            state.journal.append(
                now,
                caller.identity(),
                &InboxFact::ContactRemoved { owner, counterpart },
            );

            tracing::debug!(%owner, %counterpart, "contact removed");
            Ok(())
        })
    }

    /// Canonical channel name between two connected identities.
    pub fn channel_name(&self, identity: AccountId, counterpart: AccountId) -> Result<String> {
        self.store
            .read(|state| naming::channel_name(state, &identity, &counterpart))
    }

    /// Read-only snapshot of an identity's inbox.
    pub fn view(&self, identity: AccountId) -> Result<InboxView> {
        self.store
            .read(|state| state.inbox(&identity).map(InboxView::materialize))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use accord_delegation::DelegationService;
    use accord_registry::RegistryService;
    use assert_matches::assert_matches;

    fn test_account(seed: u8) -> AccountId {
        AccountId::new_from_entropy([seed; 32])
    }

    struct Fixture {
        store: LedgerStore,
        registry: RegistryService,
        delegation: DelegationService,
        inbox: InboxService,
    }

    fn setup() -> Fixture {
        let store = LedgerStore::in_memory();
        Fixture {
            registry: RegistryService::new(store.clone()),
            delegation: DelegationService::new(store.clone()),
            inbox: InboxService::new(store.clone()),
            store,
        }
    }

    fn register_pair(fx: &Fixture) -> (AccountId, AccountId) {
        let a = test_account(1);
        let b = test_account(2);
        fx.registry.register_inbox(a, "pk-a").expect("register a");
        fx.registry.register_inbox(b, "pk-b").expect("register b");
        (a, b)
    }

    #[test]
    fn accept_mirrors_contacts_on_both_sides() {
        let fx = setup();
        let (a, b) = register_pair(&fx);

        fx.inbox
            .request(Caller::Direct(a), b, b"hi".to_vec())
            .expect("request");
        fx.inbox.accept(Caller::Direct(b), a).expect("accept");

        fx.store.read(|state| {
            let a_inbox = state.inbox(&a).expect("a");
            let b_inbox = state.inbox(&b).expect("b");
            assert!(a_inbox.has_contact(&b));
            assert!(b_inbox.has_contact(&a));
            assert!(b_inbox.pending_requests.is_empty());
            // connection_owner copied verbatim to both mirrors
            assert_eq!(
                a_inbox.contact_for(&b).map(|entry| entry.connection_owner),
                Some(a)
            );
            assert_eq!(
                b_inbox.contact_for(&a).map(|entry| entry.connection_owner),
                Some(a)
            );
        });
    }

    #[test]
    fn deny_returns_pair_to_none_state() {
        let fx = setup();
        let (a, b) = register_pair(&fx);

        fx.inbox
            .request(Caller::Direct(a), b, b"hi".to_vec())
            .expect("request");
        fx.inbox.deny(Caller::Direct(b), a).expect("deny");

        fx.store.read(|state| {
            let b_inbox = state.inbox(&b).expect("b");
            assert!(b_inbox.pending_requests.is_empty());
            assert!(b_inbox.phonebook.is_empty());
        });

        // NONE again: a fresh request is allowed.
        fx.inbox
            .request(Caller::Direct(a), b, b"again".to_vec())
            .expect("re-request");
    }

    #[test]
    fn duplicate_request_is_rejected() {
        let fx = setup();
        let (a, b) = register_pair(&fx);

        fx.inbox
            .request(Caller::Direct(a), b, b"hi".to_vec())
            .expect("request");
        assert_matches!(
            fx.inbox.request(Caller::Direct(a), b, b"hi again".to_vec()),
            Err(AccordError::DuplicateRequest { requester, owner })
                if requester == a && owner == b
        );
    }

    #[test]
    fn request_between_contacts_is_rejected() {
        let fx = setup();
        let (a, b) = register_pair(&fx);

        fx.inbox
            .request(Caller::Direct(a), b, Vec::new())
            .expect("request");
        fx.inbox.accept(Caller::Direct(b), a).expect("accept");

        assert_matches!(
            fx.inbox.request(Caller::Direct(a), b, Vec::new()),
            Err(AccordError::AlreadyConnected { .. })
        );
    }

    #[test]
    fn request_requires_both_registered() {
        let fx = setup();
        let a = test_account(1);
        let ghost = test_account(9);
        fx.registry.register_inbox(a, "pk").expect("register");

        assert_matches!(
            fx.inbox.request(Caller::Direct(ghost), a, Vec::new()),
            Err(AccordError::NotRegistered { .. })
        );
        assert_matches!(
            fx.inbox.request(Caller::Direct(a), ghost, Vec::new()),
            Err(AccordError::NotRegistered { .. })
        );
    }

    #[test]
    fn accept_without_pending_fails() {
        let fx = setup();
        let (a, b) = register_pair(&fx);

        assert_matches!(
            fx.inbox.accept(Caller::Direct(b), a),
            Err(AccordError::RequestNotPending { owner, requester })
                if owner == b && requester == a
        );
    }

    #[test]
    fn delegate_request_stores_the_owner_identity() {
        let fx = setup();
        let (a, c) = register_pair(&fx);
        let d = test_account(7);

        fx.delegation.create_link_intent(a, d).expect("intent");
        fx.delegation.confirm(d, a).expect("confirm");

        fx.inbox
            .request(Caller::Delegate(d), c, b"via delegate".to_vec())
            .expect("delegated request");

        fx.store.read(|state| {
            let c_inbox = state.inbox(&c).expect("c");
            let entry = c_inbox.pending_from(&a).expect("pending from owner");
            assert_eq!(entry.counterpart, a);
            assert_eq!(entry.connection_owner, a);
            assert!(c_inbox.pending_from(&d).is_none());
        });
    }

    #[test]
    fn removal_is_one_sided() {
        let fx = setup();
        let (a, b) = register_pair(&fx);

        fx.inbox
            .request(Caller::Direct(a), b, Vec::new())
            .expect("request");
        fx.inbox.accept(Caller::Direct(b), a).expect("accept");
        fx.inbox
            .remove_contact(Caller::Direct(a), b)
            .expect("remove");

        fx.store.read(|state| {
            assert!(!state.inbox(&a).expect("a").has_contact(&b));
            // The mirror entry survives by design.
            assert!(state.inbox(&b).expect("b").has_contact(&a));
        });

        assert_matches!(
            fx.inbox.remove_contact(Caller::Direct(a), b),
            Err(AccordError::NotConnected { .. })
        );
    }

    #[test]
    fn channel_name_matches_from_either_side() {
        let fx = setup();
        let (a, b) = register_pair(&fx);

        fx.inbox
            .request(Caller::Direct(a), b, Vec::new())
            .expect("request");
        fx.inbox.accept(Caller::Direct(b), a).expect("accept");

        let from_a = fx.inbox.channel_name(a, b).expect("a side");
        let from_b = fx.inbox.channel_name(b, a).expect("b side");
        assert_eq!(from_a, from_b);
        assert!(from_a.starts_with("dm:"));
    }

    #[test]
    fn view_reflects_pending_and_contacts() {
        let fx = setup();
        let (a, b) = register_pair(&fx);

        fx.inbox
            .request(Caller::Direct(a), b, b"hello".to_vec())
            .expect("request");

        let before = fx.inbox.view(b).expect("view");
        assert_eq!(before.pending_requests.len(), 1);
        assert!(before.contacts.is_empty());
        assert_eq!(before.public_key, "pk-b");

        fx.inbox.accept(Caller::Direct(b), a).expect("accept");

        let after = fx.inbox.view(b).expect("view");
        assert!(after.pending_requests.is_empty());
        assert_eq!(after.contacts.len(), 1);
    }
}
