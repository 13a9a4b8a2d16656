use std::sync::atomic::{AtomicU64, Ordering};

#[cfg(feature = "serialization")]
use serde::{Deserialize, Serialize};

/// Global counter for auto-incrementing copy IDs (starts at 1, 0 is reserved).
static COPY_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Identity of one physical card copy, monotonically increasing.
/// Two purchased copies of the same printed card are two distinct values;
/// the printed card itself is identified by `Card::source_id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct CopyId(pub u64);

impl CopyId {
    /// Mint a fresh copy ID from the auto-incrementing counter.
    pub fn new() -> Self {
        Self(COPY_ID_COUNTER.fetch_add(1, Ordering::SeqCst))
    }

    /// Create a copy ID from a specific value (for when you need explicit control).
    pub fn from_raw(id: u64) -> Self {
        Self(id)
    }
}

impl Default for CopyId {
    fn default() -> Self {
        Self::new()
    }
}

/// Reset the copy ID counter to its initial state (for testing).
/// This should only be used in tests to ensure deterministic behavior.
#[cfg(test)]
pub fn reset_copy_id_counter() {
    COPY_ID_COUNTER.store(1, Ordering::SeqCst);
}
