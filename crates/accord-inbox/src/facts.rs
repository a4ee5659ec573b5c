//! Inbox domain facts

use accord_core::AccountId;
use accord_store::DomainFact;
use serde::{Deserialize, Serialize};

/// Type identifier for inbox facts
pub const INBOX_FACT_TYPE_ID: &str = "inbox";

/// Events emitted by connection request operations.
///
/// Identities here are always the resolved parties; a delegate's own
/// identity appears only as the journal envelope actor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InboxFact {
    /// A conversation request entered the target's pending queue
    RequestSubmitted {
        /// Resolved identity that originated the request
        requester: AccountId,
        /// Inbox owner the request targets
        owner: AccountId,
        /// Opaque payload carried with the request
        envelope: Vec<u8>,
    },
    /// A pending request was accepted and mirrored into both phonebooks
    RequestAccepted {
        /// Accepting inbox owner
        owner: AccountId,
        /// Requester now connected
        requester: AccountId,
    },
    /// A pending request was denied and discarded
    RequestDenied {
        /// Denying inbox owner
        owner: AccountId,
        /// Requester whose entry was discarded
        requester: AccountId,
    },
    /// One side removed a contact from its phonebook
    ContactRemoved {
        /// The side that removed the entry
        owner: AccountId,
        /// Counterpart whose mirror entry is untouched
        counterpart: AccountId,
    },
}

impl DomainFact for InboxFact {
    fn type_id(&self) -> &'static str {
        INBOX_FACT_TYPE_ID
    }
}
