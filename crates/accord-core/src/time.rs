//! Physical time and the synchronous clock abstraction
//!
//! Every Accord operation completes synchronously inside one transaction,
//! so the clock is a plain trait rather than an async effect. Records and
//! journal facts stamp `PhysicalTime` values obtained from the store's
//! clock at transaction time.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Wall-clock timestamp in milliseconds since the Unix epoch.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
pub struct PhysicalTime {
    /// Milliseconds since the Unix epoch
    pub ts_ms: u64,
}

impl PhysicalTime {
    /// Create a timestamp from milliseconds since the Unix epoch.
    pub fn from_millis(ts_ms: u64) -> Self {
        Self { ts_ms }
    }
}

impl std::fmt::Display for PhysicalTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "t+{}ms", self.ts_ms)
    }
}

/// Source of physical time for ledger operations.
///
/// Implementations must be cheap and infallible; timestamp precision is a
/// host concern and nothing in the consent protocol orders on wall-clock
/// time.
pub trait Clock: Send + Sync {
    /// Current wall-clock time.
    fn physical_time(&self) -> PhysicalTime;
}

/// Clock backed by the operating system.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn physical_time(&self) -> PhysicalTime {
        let ts_ms = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        PhysicalTime { ts_ms }
    }
}

/// Deterministic clock for tests and simulation.
///
/// Starts at a fixed instant and only moves when advanced explicitly.
#[derive(Debug, Default)]
pub struct FixedClock {
    now_ms: AtomicU64,
}

impl FixedClock {
    /// Create a clock pinned at the given millisecond timestamp.
    pub fn at(ts_ms: u64) -> Self {
        Self {
            now_ms: AtomicU64::new(ts_ms),
        }
    }

    /// Advance the clock by the given number of milliseconds.
    pub fn advance_ms(&self, ms: u64) {
        self.now_ms.fetch_add(ms, Ordering::SeqCst);
    }
}

impl Clock for FixedClock {
    fn physical_time(&self) -> PhysicalTime {
        PhysicalTime {
            ts_ms: self.now_ms.load(Ordering::SeqCst),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_advances_deterministically() {
        let clock = FixedClock::at(1_700_000_000_000);
        assert_eq!(clock.physical_time().ts_ms, 1_700_000_000_000);

        clock.advance_ms(250);
        assert_eq!(clock.physical_time().ts_ms, 1_700_000_000_250);
    }

    #[test]
    fn system_clock_is_past_epoch() {
        let now = SystemClock.physical_time();
        assert!(now.ts_ms > 0);
    }

    #[test]
    fn physical_time_orders_by_millis() {
        assert!(PhysicalTime::from_millis(1) < PhysicalTime::from_millis(2));
        assert_eq!(PhysicalTime::from_millis(5).to_string(), "t+5ms");
    }
}
