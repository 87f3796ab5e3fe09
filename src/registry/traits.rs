/*!
 * Registry Traits
 * Allocation tracking abstractions
 */

use super::types::{AllocationRecord, SourceOrigin};
use crate::core::types::{Handle, Size};

/// Mutating surface used by instrumentation call sites
pub trait AllocationTracking: Send + Sync {
    /// Record a live allocation under the default category
    fn track(&self, handle: Handle, size: Size, origin: SourceOrigin);

    /// Record a live allocation under an explicit category
    fn track_categorized(&self, handle: Handle, size: Size, origin: SourceOrigin, category: &str);

    /// Drop the record for a released allocation
    fn untrack(&self, handle: Handle);

    /// Gate all tracking; disabled calls are inert
    fn set_enabled(&self, enabled: bool);

    fn is_enabled(&self) -> bool;
}

/// Read-only leak inspection surface
pub trait LeakQuery: Send + Sync {
    /// True when any allocation is still live
    fn has_leaks(&self) -> bool;

    /// Number of live allocations
    fn leak_count(&self) -> usize;

    /// Bytes held by live allocations, summed from the live set
    fn leaked_bytes(&self) -> Size;

    /// All live records at the moment of the call
    fn snapshot_leaks(&self) -> Vec<AllocationRecord>;
}
