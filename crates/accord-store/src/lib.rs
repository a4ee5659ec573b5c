//! Accord Store - Ledger State and Transaction Boundary
//!
//! This crate owns the shared per-identity records and the single place
//! they may be mutated:
//!
//! - Records: [`InboxRecord`], [`ConnectionEntry`], [`DelegationRecord`],
//!   [`RegistryCounters`]
//! - State: [`LedgerState`], the full record map plus the fact journal
//! - Transactions: [`LedgerStore`], serializable read/write closures
//! - Events: the [`DomainFact`] trait and [`FactRecord`] envelope
//!
//! # Architecture
//!
//! Feature crates (`accord-registry`, `accord-inbox`, `accord-delegation`,
//! `accord-relay`) implement the consent protocol as functions over
//! `&mut LedgerState`, invoked inside a [`LedgerStore`] write transaction.
//! Each crate defines its own fact enum implementing [`DomainFact`];
//! the store journals them without knowing their shape, mirroring the
//! generic-fact split the rest of the workspace follows.
//!
//! # Atomicity
//!
//! A write transaction holds the state lock exclusively for its whole
//! duration, so every operation observes and produces consistent state.
//! Operations keep the all-or-nothing contract by validating every
//! precondition before the first mutation.

#![forbid(unsafe_code)]

/// Fact journal: the append-only event surface
pub mod journal;

/// The transaction boundary over ledger state
pub mod ledger;

/// Per-identity records
pub mod records;

/// Full ledger state
pub mod state;

pub use journal::{DomainFact, FactRecord, Journal};
pub use ledger::{LedgerConfig, LedgerStore};
pub use records::{
    ConnectionEntry, DelegationRecord, InboxRecord, RegistryCounters, RESERVED_HANDLE_FLOOR,
};
pub use state::LedgerState;
