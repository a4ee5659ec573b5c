//! Canonical channel naming
//!
//! A two-party connection needs a shared channel identifier that both
//! sides can compute without a central authority. The `connection_owner`
//! recorded in a contact entry is copied verbatim to both mirrors at
//! accept time, so ordering the pair originator-first yields the same
//! string on either side.

use accord_core::{AccordError, AccountId, Result};
use accord_store::LedgerState;

/// Prefix for direct-connection channel names.
const CHANNEL_PREFIX: &str = "dm";

/// Compute the canonical channel name between `identity` and
/// `counterpart`.
///
/// Reads the `connection_owner` stored in `identity`'s contact entry for
/// `counterpart` and formats the pair originator-first. Requires both
/// identities registered and the contact present on `identity`'s side.
pub fn channel_name(
    state: &LedgerState,
    identity: &AccountId,
    counterpart: &AccountId,
) -> Result<String> {
    let inbox = state.inbox(identity)?;
    state.inbox(counterpart)?;

    let entry = inbox
        .contact_for(counterpart)
        .ok_or(AccordError::NotConnected {
            sender: *counterpart,
            receiver: *identity,
        })?;

    let originator = entry.connection_owner;
    let other = if originator == *identity {
        *counterpart
    } else {
        *identity
    };
    Ok(format!("{CHANNEL_PREFIX}:{originator}:{other}"))
}
