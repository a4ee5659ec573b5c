//! Message relay operations

use crate::facts::RelayFact;
use crate::gate::{self, SendAuthorization};
use accord_core::{AccountId, Caller, Result};
use accord_store::LedgerStore;

/// Send authorization and relay fact emission over a shared ledger store.
#[derive(Debug, Clone)]
pub struct RelayService {
    store: LedgerStore,
}

impl RelayService {
    /// Create a relay service over the given store.
    pub fn new(store: LedgerStore) -> Self {
        Self { store }
    }

    /// Check whether the caller may send to `receiver`, without sending.
    pub fn authorize_send(
        &self,
        caller: Caller,
        receiver: AccountId,
    ) -> Result<SendAuthorization> {
        self.store
            .read(|state| gate::authorize_send(state, caller, &receiver))
    }

    /// Authorize and record a send, returning the channel name.
    ///
    /// The content is opaque and uninterpreted; delivery is the external
    /// relay's concern. The emitted fact is the only trace of the send.
    pub fn send_message(
        &self,
        caller: Caller,
        receiver: AccountId,
        content: Vec<u8>,
        reference: Option<String>,
    ) -> Result<String> {
        let now = self.store.now();

        self.store.write(|state| {
            let auth = gate::authorize_send(state, caller, &receiver)?;
            let sender_handle = state.inbox(&auth.sender)?.handle_id;

            state.journal.append(
                now,
                caller.identity(),
                &RelayFact::MessageRelayed {
                    channel: auth.channel.clone(),
                    sender: auth.sender,
                    sender_handle,
                    receiver,
                    content,
                    reference,
                },
            );

            tracing::info!(
                sender = %auth.sender,
                %receiver,
                channel = %auth.channel,
                "message relayed"
            );
            Ok(auth.channel)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facts::RELAY_FACT_TYPE_ID;
    use accord_core::AccordError;
    use accord_inbox::InboxService;
    use accord_registry::RegistryService;
    use assert_matches::assert_matches;

    fn test_account(seed: u8) -> AccountId {
        AccountId::new_from_entropy([seed; 32])
    }

    #[test]
    fn send_emits_a_relay_fact_with_channel_and_handle() {
        let store = LedgerStore::in_memory();
        let registry = RegistryService::new(store.clone());
        let inbox = InboxService::new(store.clone());
        let relay = RelayService::new(store.clone());

        let a = test_account(1);
        let b = test_account(2);
        let a_handle = registry.register_inbox(a, "pk-a").expect("register a");
        registry.register_inbox(b, "pk-b").expect("register b");
        inbox
            .request(Caller::Direct(a), b, Vec::new())
            .expect("request");
        inbox.accept(Caller::Direct(b), a).expect("accept");

        let channel = relay
            .send_message(Caller::Direct(a), b, b"sealed".to_vec(), Some("r1".into()))
            .expect("send");

        let facts: Vec<RelayFact> =
            store.read(|state| state.journal.facts_of_type(RELAY_FACT_TYPE_ID));
        assert_eq!(
            facts,
            vec![RelayFact::MessageRelayed {
                channel,
                sender: a,
                sender_handle: a_handle,
                receiver: b,
                content: b"sealed".to_vec(),
                reference: Some("r1".to_string()),
            }]
        );
    }

    #[test]
    fn unauthorized_send_leaves_no_trace() {
        let store = LedgerStore::in_memory();
        let registry = RegistryService::new(store.clone());
        let relay = RelayService::new(store.clone());

        let a = test_account(1);
        let b = test_account(2);
        registry.register_inbox(a, "pk-a").expect("register a");
        registry.register_inbox(b, "pk-b").expect("register b");

        assert_matches!(
            relay.send_message(Caller::Direct(a), b, Vec::new(), None),
            Err(AccordError::NotConnected { .. })
        );
        let relayed: Vec<RelayFact> =
            store.read(|state| state.journal.facts_of_type(RELAY_FACT_TYPE_ID));
        assert!(relayed.is_empty());
    }
}
