//! Read-only inbox snapshots
//!
//! Views are cloned aggregates for callers that want to inspect current
//! state without holding the store lock. History is not queryable here;
//! observers follow the fact journal instead.

use accord_core::{AccountId, HandleId};
use accord_store::{ConnectionEntry, InboxRecord};
use serde::{Deserialize, Serialize};

/// Snapshot of one identity's inbox at read time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InboxView {
    /// Handle assigned at registration
    pub handle_id: HandleId,
    /// Caller-supplied key material, stored verbatim
    pub public_key: String,
    /// Requests awaiting accept/deny
    pub pending_requests: Vec<ConnectionEntry>,
    /// Mutually accepted contacts
    pub contacts: Vec<ConnectionEntry>,
    /// Outstanding delegate-link invitation, if any
    pub pending_delegate_invitation: Option<AccountId>,
}

impl InboxView {
    /// Clone a record into a snapshot.
    pub fn materialize(record: &InboxRecord) -> Self {
        Self {
            handle_id: record.handle_id,
            public_key: record.public_key.clone(),
            pending_requests: record.pending_requests.clone(),
            contacts: record.phonebook.clone(),
            pending_delegate_invitation: record.pending_delegate_invitation,
        }
    }

    /// Identities with requests awaiting a decision.
    pub fn requesters(&self) -> impl Iterator<Item = AccountId> + '_ {
        self.pending_requests.iter().map(|entry| entry.counterpart)
    }

    /// Connected counterpart identities.
    pub fn contact_ids(&self) -> impl Iterator<Item = AccountId> + '_ {
        self.contacts.iter().map(|entry| entry.counterpart)
    }
}
