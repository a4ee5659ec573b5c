//! Unified error system for Accord operations
//!
//! Every failure is a synchronous, transaction-aborting rejection: the
//! operation that returns one of these has had no effect on ledger state.
//! There is no retry or recovery inside the core; callers resubmit a
//! corrected operation.

use crate::identifiers::AccountId;
use serde::{Deserialize, Serialize};

/// Unified error type for all Accord operations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum AccordError {
    /// The identity has no registered inbox.
    #[error("identity {identity} is not registered")]
    NotRegistered {
        /// The unregistered identity
        identity: AccountId,
    },

    /// The identity already owns the record being created.
    #[error("identity {identity} is already registered")]
    AlreadyRegistered {
        /// The identity that is already registered
        identity: AccountId,
    },

    /// A pending request from this requester already exists.
    #[error("request from {requester} to {owner} is already pending")]
    DuplicateRequest {
        /// Resolved identity that originated the request
        requester: AccountId,
        /// Inbox owner the request targets
        owner: AccountId,
    },

    /// The counterpart is already in the identity's phonebook.
    #[error("{counterpart} is already a contact of {identity}")]
    AlreadyConnected {
        /// Phonebook owner
        identity: AccountId,
        /// Counterpart already present
        counterpart: AccountId,
    },

    /// No pending request from this requester exists.
    #[error("no pending request from {requester} in inbox of {owner}")]
    RequestNotPending {
        /// Inbox owner
        owner: AccountId,
        /// Requester with no pending entry
        requester: AccountId,
    },

    /// The sender is not in the receiver's phonebook.
    #[error("{sender} is not a contact of {receiver}")]
    NotConnected {
        /// Resolved sender identity
        sender: AccountId,
        /// Receiver whose phonebook was consulted
        receiver: AccountId,
    },

    /// The owner has no outstanding delegate-link invitation.
    #[error("owner {owner} has no pending delegate invitation")]
    NoPendingInvitation {
        /// Owner with an empty invitation slot
        owner: AccountId,
    },

    /// The confirming delegate already serves another owner.
    #[error("delegate {delegate} is already bound to an owner")]
    DelegateAlreadyTaken {
        /// Delegate identity that already holds a record
        delegate: AccountId,
    },

    /// The invitation slot names a different delegate address.
    #[error("invitation of {owner} does not name confirming identity {confirming}")]
    DelegateMismatch {
        /// Owner whose slot was consulted
        owner: AccountId,
        /// Identity that attempted the confirmation
        confirming: AccountId,
    },

    /// No delegation record exists for this delegate identity.
    #[error("identity {delegate} is not a known delegate")]
    UnknownDelegate {
        /// Identity with no delegation record
        delegate: AccountId,
    },

    /// The delegation record is owned by someone else.
    #[error("delegate {delegate} is not owned by {owner}")]
    DelegateOwnershipMismatch {
        /// Caller claiming ownership
        owner: AccountId,
        /// Delegate whose record has a different owner
        delegate: AccountId,
    },
}

impl AccordError {
    /// Create a not registered error.
    pub fn not_registered(identity: AccountId) -> Self {
        Self::NotRegistered { identity }
    }

    /// Create a request not pending error.
    pub fn request_not_pending(owner: AccountId, requester: AccountId) -> Self {
        Self::RequestNotPending { owner, requester }
    }

    /// Create a not connected error.
    pub fn not_connected(sender: AccountId, receiver: AccountId) -> Self {
        Self::NotConnected { sender, receiver }
    }

    /// Create an unknown delegate error.
    pub fn unknown_delegate(delegate: AccountId) -> Self {
        Self::UnknownDelegate { delegate }
    }
}

/// Standard Result type for Accord operations
pub type Result<T> = std::result::Result<T, AccordError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn test_account(seed: u8) -> AccountId {
        AccountId::new_from_entropy([seed; 32])
    }

    #[test]
    fn test_error_display() {
        let err = AccordError::not_registered(test_account(1));
        assert!(err.to_string().contains("not registered"));

        let err = AccordError::DuplicateRequest {
            requester: test_account(1),
            owner: test_account(2),
        };
        assert!(err.to_string().contains("already pending"));

        let err = AccordError::unknown_delegate(test_account(3));
        assert!(err.to_string().contains("not a known delegate"));
    }

    #[test]
    fn test_error_serde_roundtrip() {
        let err = AccordError::DelegateMismatch {
            owner: test_account(1),
            confirming: test_account(2),
        };
        let json = serde_json::to_string(&err).expect("serialize");
        let back: AccordError = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, err);
    }
}
