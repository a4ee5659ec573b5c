//! Caller resolution
//!
//! The one dispatch point between direct and delegated authority. Every
//! connection and messaging operation calls [`resolve_caller`] first and
//! then applies its state machine to the resolved identity only.

use accord_core::{AccordError, AccountId, Caller, Result};
use accord_store::LedgerState;

/// Resolve a caller to the identity whose authority it carries.
///
/// A direct caller resolves to itself. A delegate caller resolves to the
/// owner recorded in its delegation record, or fails with
/// `UnknownDelegate` when no binding exists (including after revocation).
pub fn resolve_caller(state: &LedgerState, caller: Caller) -> Result<AccountId> {
    match caller {
        Caller::Direct(identity) => Ok(identity),
        Caller::Delegate(delegate) => state
            .delegation(&delegate)
            .map(|record| record.owner)
            .ok_or(AccordError::UnknownDelegate { delegate }),
    }
}
