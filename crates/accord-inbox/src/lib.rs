//! Accord Inbox - Connection Request State Machine
//!
//! The consent core of the workspace. For every ordered pair of
//! identities the connection state is one of:
//!
//! ```text
//! NONE ──request──> PENDING ──accept──> PHONEBOOK
//!                      │
//!                    deny
//!                      │
//!                      v
//!                    NONE
//! ```
//!
//! - `request` inserts a pending entry in the target's inbox; duplicates
//!   and already-connected pairs are rejected, so a pair never holds a
//!   pending request and a phonebook entry at once.
//! - `accept` removes the pending entry and mirrors a contact into both
//!   phonebooks in the same transaction, copying the recorded
//!   `connection_owner` verbatim to both sides.
//! - `deny` removes the pending entry only.
//! - `remove_contact` deletes the caller-side entry and leaves the mirror
//!   untouched; the counterpart still sees the connection until it removes
//!   its own entry.
//!
//! Callers are resolved through `accord-delegation` first, so a confirmed
//! delegate drives its owner's inbox transparently and never appears in
//! any stored entry.

#![forbid(unsafe_code)]

/// Inbox domain facts
pub mod facts;

/// Canonical channel naming
pub mod naming;

/// Request/accept/deny/remove operations
pub mod service;

/// Read-only inbox snapshots
pub mod view;

pub use facts::{InboxFact, INBOX_FACT_TYPE_ID};
pub use naming::channel_name;
pub use service::InboxService;
pub use view::InboxView;
