//! Accord Relay - Send Authorization Gate
//!
//! The relay that actually moves message bytes is external; this crate
//! only answers the question it must ask first: may this sender reach
//! this receiver? Authorization is a phonebook-membership lookup on the
//! receiver's side, after resolving the sender through delegation.
//!
//! The check is directional on purpose: `send(S, R)` consults only
//! R's phonebook for S. Because contact removal is one-sided, R removing
//! S blocks S's sends while R's own sends toward S may still pass.
//!
//! On success the gate returns the canonical channel name, which
//! `send_message` stamps into the relayed fact along with the sender's
//! handle.

#![forbid(unsafe_code)]

/// Relay domain facts
pub mod facts;

/// The authorization gate
pub mod gate;

/// Message relay operations
pub mod service;

pub use facts::{RelayFact, RELAY_FACT_TYPE_ID};
pub use gate::{authorize_send, SendAuthorization};
pub use service::RelayService;
