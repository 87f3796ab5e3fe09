/*!
 * Tracking Operations
 * Track, untrack, and counter maintenance
 */

use super::types::{AllocationRecord, SourceOrigin, DEFAULT_CATEGORY};
use super::LeakRegistry;
use crate::core::types::{Handle, Size};
use log::{info, trace, warn};

impl LeakRegistry {
    /// Record a live allocation under the default category.
    pub fn track(&self, handle: Handle, size: Size, origin: SourceOrigin) {
        self.track_categorized(handle, size, origin, DEFAULT_CATEGORY);
    }

    /// Record a live allocation.
    ///
    /// Re-tracking a handle that is still live replaces its record, but the
    /// displaced size is not subtracted from `current_usage`: address reuse
    /// overcounts usage until the handle is untracked. Callers that need
    /// exact usage across reuse must untrack first.
    pub fn track_categorized(
        &self,
        handle: Handle,
        size: Size,
        origin: SourceOrigin,
        category: &str,
    ) {
        if !self.is_enabled() || handle.is_null() {
            return;
        }

        let mut state = self.state.write();

        let record = AllocationRecord::new(handle, size, origin, category.to_string());
        if state.live.insert(handle, record).is_some() {
            warn!(
                "Re-tracked live handle 0x{:x}; displaced size stays in usage counters",
                handle
            );
        }

        state.current_usage += size;
        if state.current_usage > state.peak_usage {
            state.peak_usage = state.current_usage;
        }
        *state.category_usage.entry(category.to_string()).or_insert(0) += size;

        trace!("Tracked {} bytes at 0x{:x} [{}]", size, handle, category);
    }

    /// Drop the record for a released allocation.
    ///
    /// Unknown handles are ignored: a double release is indistinguishable
    /// from a release the registry never saw.
    pub fn untrack(&self, handle: Handle) {
        if !self.is_enabled() || handle.is_null() {
            return;
        }

        let mut state = self.state.write();

        if let Some(record) = state.live.remove(&handle) {
            state.current_usage = state.current_usage.saturating_sub(record.size);
            if let Some(total) = state.category_usage.get_mut(&record.category) {
                *total = total.saturating_sub(record.size);
            }
            trace!(
                "Untracked {} bytes at 0x{:x} [{}]",
                record.size,
                handle,
                record.category
            );
        }
    }

    /// Drop every record and zero the usage counters.
    ///
    /// `peak_usage` is left as-is; only `reset_stats` moves it.
    pub fn clear(&self) {
        let mut state = self.state.write();
        let dropped = state.live.len();
        state.live.clear();
        state.current_usage = 0;
        state.category_usage.clear();
        info!("Cleared {} tracked allocations", dropped);
    }

    /// Start a fresh peak window at the current usage level.
    pub fn reset_stats(&self) {
        let mut state = self.state.write();
        state.peak_usage = state.current_usage;
        info!("Peak usage reset to {} bytes", state.peak_usage);
    }
}
