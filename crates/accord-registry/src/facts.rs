//! Registry domain facts

use accord_core::{AccountId, HandleId};
use accord_store::DomainFact;
use serde::{Deserialize, Serialize};

/// Type identifier for registry facts
pub const REGISTRY_FACT_TYPE_ID: &str = "registry";

/// Events emitted by registration operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegistryFact {
    /// An identity registered an inbox and was assigned a handle
    InboxRegistered {
        /// The newly registered identity
        identity: AccountId,
        /// Handle drawn from the inbox counter
        handle_id: HandleId,
        /// Caller-supplied key material, stored verbatim
        public_key: String,
    },
}

impl DomainFact for RegistryFact {
    fn type_id(&self) -> &'static str {
        REGISTRY_FACT_TYPE_ID
    }
}
