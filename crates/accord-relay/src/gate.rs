//! The authorization gate
//!
//! Pure check over ledger state, shared by `send_message` and the
//! read-only `authorize_send` entry point.

use accord_core::{AccordError, AccountId, Caller, Result};
use accord_delegation::resolve_caller;
use accord_inbox::naming;
use accord_store::LedgerState;

/// A successful gate decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendAuthorization {
    /// Resolved sender identity
    pub sender: AccountId,
    /// Canonical channel name for the relayed event
    pub channel: String,
}

/// Decide whether the caller may send to `receiver`.
///
/// Resolves the caller through delegation, requires both identities
/// registered, and requires the resolved sender present in the
/// *receiver's* phonebook. The mirror direction is irrelevant: the
/// receiver's consent is what admits traffic.
pub fn authorize_send(
    state: &LedgerState,
    caller: Caller,
    receiver: &AccountId,
) -> Result<SendAuthorization> {
    let sender = resolve_caller(state, caller)?;
    state.inbox(&sender)?;

    if !state.inbox(receiver)?.has_contact(&sender) {
        return Err(AccordError::NotConnected {
            sender,
            receiver: *receiver,
        });
    }

    // The receiver-side entry just checked also carries the
    // connection_owner the channel name is derived from.
    let channel = naming::channel_name(state, receiver, &sender)?;
    Ok(SendAuthorization { sender, channel })
}
