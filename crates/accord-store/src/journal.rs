//! Append-only fact journal
//!
//! Every effectful operation appends exactly one domain fact, wrapped in a
//! [`FactRecord`] envelope carrying the sequence number, the acting
//! identity, and the transaction timestamp. The journal is the only
//! history surface the ledger exposes; current state is queried directly
//! from the records.
//!
//! Feature crates define their own fact enums and implement [`DomainFact`]
//! for them; the journal stores the serialized bytes without knowing the
//! shape, so new fact types never touch this crate.

use accord_core::{AccountId, PhysicalTime};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A domain event type that can be journaled.
pub trait DomainFact: Serialize + DeserializeOwned {
    /// Stable type identifier used to tag journal records.
    fn type_id(&self) -> &'static str;

    /// Serialize for journal storage.
    #[allow(clippy::expect_used)] // DomainFact::to_bytes is infallible by trait contract.
    fn to_bytes(&self) -> Vec<u8> {
        serde_json::to_vec(self).expect("domain fact must serialize")
    }

    /// Decode from journal storage.
    fn from_bytes(bytes: &[u8]) -> Option<Self>
    where
        Self: Sized,
    {
        serde_json::from_slice(bytes).ok()
    }
}

/// Journal envelope for one appended fact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactRecord {
    /// Position in the journal, starting at 0
    pub seq: u64,
    /// Transaction timestamp at append time
    pub recorded_at: PhysicalTime,
    /// The on-ledger identity that submitted the operation
    pub actor: AccountId,
    /// The fact's type identifier
    pub fact_type: String,
    /// Serialized fact payload
    pub payload: Vec<u8>,
}

impl FactRecord {
    /// Decode the payload as the given fact type.
    ///
    /// Returns `None` when the record holds a different fact type or the
    /// payload fails to decode.
    pub fn decode<F: DomainFact>(&self) -> Option<F> {
        let fact = F::from_bytes(&self.payload)?;
        if fact.type_id() == self.fact_type {
            Some(fact)
        } else {
            None
        }
    }
}

/// The append-only fact log.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Journal {
    records: Vec<FactRecord>,
}

impl Journal {
    /// Append a fact, returning its sequence number.
    pub fn append(
        &mut self,
        recorded_at: PhysicalTime,
        actor: AccountId,
        fact: &impl DomainFact,
    ) -> u64 {
        let seq = self.records.len() as u64;
        tracing::debug!(%actor, fact_type = fact.type_id(), seq, "journal append");
        self.records.push(FactRecord {
            seq,
            recorded_at,
            actor,
            fact_type: fact.type_id().to_string(),
            payload: fact.to_bytes(),
        });
        seq
    }

    /// All records in append order.
    pub fn records(&self) -> &[FactRecord] {
        &self.records
    }

    /// Number of appended facts.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether nothing has been journaled yet.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Decode every record carrying the given type identifier.
    pub fn facts_of_type<F: DomainFact>(&self, type_id: &str) -> Vec<F> {
        self.records
            .iter()
            .filter(|record| record.fact_type == type_id)
            .filter_map(FactRecord::decode)
            .collect()
    }
}
