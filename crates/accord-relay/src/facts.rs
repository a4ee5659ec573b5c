//! Relay domain facts

use accord_core::{AccountId, HandleId};
use accord_store::DomainFact;
use serde::{Deserialize, Serialize};

/// Type identifier for relay facts
pub const RELAY_FACT_TYPE_ID: &str = "relay";

/// Events emitted by authorized sends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RelayFact {
    /// A message passed the authorization gate and was handed to the relay
    MessageRelayed {
        /// Canonical channel name of the connection
        channel: String,
        /// Resolved sender identity
        sender: AccountId,
        /// The sender's inbox handle
        sender_handle: HandleId,
        /// Receiver whose phonebook authorized the send
        receiver: AccountId,
        /// Opaque message payload, uninterpreted
        content: Vec<u8>,
        /// Caller-supplied correlation reference
        reference: Option<String>,
    },
}

impl DomainFact for RelayFact {
    fn type_id(&self) -> &'static str {
        RELAY_FACT_TYPE_ID
    }
}
