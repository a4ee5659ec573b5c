//! Per-identity ledger records
//!
//! One [`InboxRecord`] per registered identity (created at registration,
//! never destroyed), one [`DelegationRecord`] per confirmed delegate
//! (destroyed on revocation), and the single [`RegistryCounters`] instance
//! every registration draws from.
//!
//! Membership collections are plain vectors scanned linearly: per-identity
//! cardinalities are small, and first-match semantics stay obvious. The
//! uniqueness bounds (at most one pending request per requester, one
//! contact per counterpart) are enforced by the operations, not the
//! container.

use accord_core::{AccountId, HandleId, PhysicalTime};
use serde::{Deserialize, Serialize};

/// Handles at or below this value are reserved and never issued.
pub const RESERVED_HANDLE_FLOOR: u64 = 100;

/// A directed connection record: a pending request in the target's queue,
/// or a mutual contact in a phonebook. Same shape in both collections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionEntry {
    /// The identity on the other side of this entry
    pub counterpart: AccountId,
    /// When the entry was created
    pub created_at: PhysicalTime,
    /// Opaque payload supplied with the original request, uninterpreted
    pub envelope: Vec<u8>,
    /// The party that originated the connection. Copied verbatim to both
    /// mirrored contacts at accept time; used only for canonical channel
    /// naming, never for authorization.
    pub connection_owner: AccountId,
}

/// Per-identity inbox state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InboxRecord {
    /// Immutable numeric id assigned at registration
    pub handle_id: HandleId,
    /// Caller-supplied key material, informational only, unvalidated
    pub public_key: String,
    /// Requests awaiting accept/deny, at most one per requester
    pub pending_requests: Vec<ConnectionEntry>,
    /// Mutually accepted contacts, at most one per counterpart
    pub phonebook: Vec<ConnectionEntry>,
    /// Outstanding delegate-link invitation; a new intent overwrites it,
    /// confirmation consumes it
    pub pending_delegate_invitation: Option<AccountId>,
}

impl InboxRecord {
    /// Create a fresh inbox for a newly registered identity.
    pub fn new(handle_id: HandleId, public_key: String) -> Self {
        Self {
            handle_id,
            public_key,
            pending_requests: Vec::new(),
            phonebook: Vec::new(),
            pending_delegate_invitation: None,
        }
    }

    /// The pending request from `requester`, if one exists.
    pub fn pending_from(&self, requester: &AccountId) -> Option<&ConnectionEntry> {
        self.pending_requests
            .iter()
            .find(|entry| entry.counterpart == *requester)
    }

    /// The phonebook entry for `counterpart`, if one exists.
    pub fn contact_for(&self, counterpart: &AccountId) -> Option<&ConnectionEntry> {
        self.phonebook
            .iter()
            .find(|entry| entry.counterpart == *counterpart)
    }

    /// Whether a request from `requester` is pending.
    pub fn has_pending_from(&self, requester: &AccountId) -> bool {
        self.pending_from(requester).is_some()
    }

    /// Whether `counterpart` is in the phonebook.
    pub fn has_contact(&self, counterpart: &AccountId) -> bool {
        self.contact_for(counterpart).is_some()
    }

    /// Remove and return the pending request from `requester`.
    pub fn take_pending_from(&mut self, requester: &AccountId) -> Option<ConnectionEntry> {
        let index = self
            .pending_requests
            .iter()
            .position(|entry| entry.counterpart == *requester)?;
        Some(self.pending_requests.remove(index))
    }

    /// Remove and return the phonebook entry for `counterpart`.
    pub fn take_contact(&mut self, counterpart: &AccountId) -> Option<ConnectionEntry> {
        let index = self
            .phonebook
            .iter()
            .position(|entry| entry.counterpart == *counterpart)?;
        Some(self.phonebook.remove(index))
    }
}

/// Binding of a delegate identity to exactly one owner.
///
/// Created only by the invitation-plus-confirmation handshake; destroyed
/// unilaterally by the owner on revocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelegationRecord {
    /// The owner whose authority this delegate carries
    pub owner: AccountId,
    /// Numeric id drawn from the delegate counter at confirmation
    pub handle_id: HandleId,
    /// When the handshake completed
    pub created_at: PhysicalTime,
}

/// The global handle counters, one instance per ledger.
///
/// Both counters are seeded to the reserved floor; a draw increments
/// first, so the lowest handle ever issued is `floor + 1` and no two
/// draws in any serialization can observe the same value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryCounters {
    /// Last value considered for inbox handles
    pub next_inbox_handle: u64,
    /// Last value considered for delegate handles
    pub next_delegate_handle: u64,
}

impl RegistryCounters {
    /// Seed both counters at the given floor.
    pub fn seeded(floor: u64) -> Self {
        Self {
            next_inbox_handle: floor,
            next_delegate_handle: floor,
        }
    }
}

impl Default for RegistryCounters {
    fn default() -> Self {
        Self::seeded(RESERVED_HANDLE_FLOOR)
    }
}
