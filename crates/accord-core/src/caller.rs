//! Caller dispatch for owner-vs-delegate operations
//!
//! Connection and messaging operations can be submitted either by an inbox
//! owner directly or by a confirmed delegate acting with the owner's
//! authority. Rather than branching per call site, every operation accepts
//! a [`Caller`] and resolves it through one function in `accord-delegation`
//! before touching the inbox state machine. The delegate's own identity is
//! never stored in pending-request or phonebook records.

use crate::identifiers::AccountId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The identity submitting an operation, tagged by how its authority is
/// derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Caller {
    /// An inbox owner acting on its own behalf.
    Direct(AccountId),
    /// A delegate acting with its owner's authority; resolution substitutes
    /// the owner identity recorded in the delegation record.
    Delegate(AccountId),
}

impl Caller {
    /// The on-ledger identity that submitted the transaction, before any
    /// delegation resolution.
    pub fn identity(&self) -> AccountId {
        match self {
            Caller::Direct(identity) | Caller::Delegate(identity) => *identity,
        }
    }

    /// Whether this caller claims delegated authority.
    pub fn is_delegate(&self) -> bool {
        matches!(self, Caller::Delegate(_))
    }
}

impl fmt::Display for Caller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Caller::Direct(identity) => write!(f, "direct:{identity}"),
            Caller::Delegate(identity) => write!(f, "delegate:{identity}"),
        }
    }
}
