/*!
 * Query Operations
 * Read-only views of the live set and counters
 */

use super::types::AllocationRecord;
use super::LeakRegistry;
use crate::core::types::Size;

impl LeakRegistry {
    /// True when any allocation is still live.
    pub fn has_leaks(&self) -> bool {
        !self.state.read().live.is_empty()
    }

    /// Number of live allocations.
    pub fn leak_count(&self) -> usize {
        self.state.read().live.len()
    }

    /// Bytes held by live allocations.
    ///
    /// Summed from the live set rather than read from `current_usage`, so
    /// drift between the counter and the records is observable.
    pub fn leaked_bytes(&self) -> Size {
        self.state.read().live.values().map(|record| record.size).sum()
    }

    /// All live records at the moment of the call. Order is not significant.
    pub fn snapshot_leaks(&self) -> Vec<AllocationRecord> {
        self.state.read().live.values().cloned().collect()
    }

    /// Bytes attributed to live allocations by the running counter.
    pub fn current_usage(&self) -> Size {
        self.state.read().current_usage
    }

    /// High-water mark of `current_usage` since start or the last reset.
    pub fn peak_usage(&self) -> Size {
        self.state.read().peak_usage
    }
}
