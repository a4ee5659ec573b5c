//! Accord Delegation - Delegated Authority
//!
//! A delegate is a secondary identity that acts with an owner's
//! connection and messaging authority without ever holding the owner's
//! credentials. The binding is established by a two-step handshake:
//!
//! 1. The owner places the delegate's address in its single invitation
//!    slot (`create_link_intent`); a newer intent silently replaces an
//!    unconfirmed one.
//! 2. The delegate confirms from its own identity (`confirm`), which is
//!    the only transaction that can authenticate the delegate's address.
//!    Splitting invitation and confirmation is what keeps the owner from
//!    forging the binding.
//!
//! Revocation is unilateral: the owner destroys the record without the
//! delegate's cooperation.
//!
//! Every connection/messaging operation funnels its caller through
//! [`resolve_caller`] before touching inbox state, so delegates are fully
//! interchangeable with their owner and the delegate identity never
//! appears in pending-request or phonebook records.

#![forbid(unsafe_code)]

/// Delegation domain facts
pub mod facts;

/// Caller resolution
pub mod resolve;

/// Link-intent, confirmation, and revocation operations
pub mod service;

pub use facts::{DelegationFact, DELEGATION_FACT_TYPE_ID};
pub use resolve::resolve_caller;
pub use service::DelegationService;
