//! Accord Registry - Identity Registration and Handle Allocation
//!
//! Assigns every registered inbox and every confirmed delegate a globally
//! unique, strictly increasing numeric handle from two independent
//! counters, and owns the inbox registration operation itself.
//!
//! Handle draws happen inside the same write transaction as the record
//! creation they accompany, so no two registrations can observe the same
//! counter value. Both counters are a known contention point: every
//! registration serializes against every other through the store lock.

#![forbid(unsafe_code)]

/// Counter draws
pub mod allocator;

/// Registry domain facts
pub mod facts;

/// Registration operations
pub mod service;

pub use allocator::{allocate_delegate_handle, allocate_inbox_handle};
pub use facts::{RegistryFact, REGISTRY_FACT_TYPE_ID};
pub use service::RegistryService;
