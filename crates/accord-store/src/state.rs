//! Full ledger state
//!
//! All records live here, keyed by identity. Feature crates mutate the
//! state only from inside a [`crate::LedgerStore`] write transaction.

use crate::journal::Journal;
use crate::records::{DelegationRecord, InboxRecord, RegistryCounters};
use accord_core::{AccordError, AccountId, Result};
use std::collections::BTreeMap;

/// Every record on the ledger plus the fact journal.
///
/// An ordered map keyed by identity gives the membership lookups a stable
/// iteration order and keeps room to grow past linear scans if per-identity
/// cardinality assumptions change.
#[derive(Debug, Default, Clone)]
pub struct LedgerState {
    /// One inbox per registered identity, never removed
    pub inboxes: BTreeMap<AccountId, InboxRecord>,
    /// One record per confirmed delegate, removed on revocation
    pub delegations: BTreeMap<AccountId, DelegationRecord>,
    /// The global handle counters
    pub counters: RegistryCounters,
    /// Append-only event log
    pub journal: Journal,
}

impl LedgerState {
    /// Create empty state with the given counter seeds.
    pub fn with_counters(counters: RegistryCounters) -> Self {
        Self {
            counters,
            ..Self::default()
        }
    }

    /// Whether `identity` has a registered inbox.
    pub fn is_registered(&self, identity: &AccountId) -> bool {
        self.inboxes.contains_key(identity)
    }

    /// The inbox of `identity`, or `NotRegistered`.
    pub fn inbox(&self, identity: &AccountId) -> Result<&InboxRecord> {
        self.inboxes
            .get(identity)
            .ok_or(AccordError::NotRegistered {
                identity: *identity,
            })
    }

    /// Mutable inbox of `identity`, or `NotRegistered`.
    pub fn inbox_mut(&mut self, identity: &AccountId) -> Result<&mut InboxRecord> {
        self.inboxes
            .get_mut(identity)
            .ok_or(AccordError::NotRegistered {
                identity: *identity,
            })
    }

    /// The delegation record of `delegate`, if one exists.
    pub fn delegation(&self, delegate: &AccountId) -> Option<&DelegationRecord> {
        self.delegations.get(delegate)
    }
}
