//! Delegation domain facts

use accord_core::{AccountId, HandleId};
use accord_store::DomainFact;
use serde::{Deserialize, Serialize};

/// Type identifier for delegation facts
pub const DELEGATION_FACT_TYPE_ID: &str = "delegation";

/// Events emitted by delegation operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DelegationFact {
    /// An owner placed a delegate address in its invitation slot
    LinkIntentCreated {
        /// Inviting owner
        owner: AccountId,
        /// Address the slot now names
        delegate_address: AccountId,
        /// Address displaced from the slot, when the intent replaced an
        /// unconfirmed one
        replaced: Option<AccountId>,
    },
    /// A delegate confirmed an invitation and was bound to its owner
    DelegateConfirmed {
        /// Owner whose slot was consumed
        owner: AccountId,
        /// The newly bound delegate
        delegate: AccountId,
        /// Handle drawn from the delegate counter
        handle_id: HandleId,
    },
    /// An owner destroyed a delegate binding
    DelegateRevoked {
        /// Revoking owner
        owner: AccountId,
        /// The unbound delegate
        delegate: AccountId,
    },
}

impl DomainFact for DelegationFact {
    fn type_id(&self) -> &'static str {
        DELEGATION_FACT_TYPE_ID
    }
}
