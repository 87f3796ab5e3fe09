/*!
 * Allocation Registry
 *
 * Tracks every live allocation together with its source location and
 * category, and keeps running usage counters for leak reporting.
 *
 * ## Locking
 *
 * - The live set and both usage counters live behind a single `RwLock`, so
 *   every mutation is one atomic transaction and no reader observes the
 *   map and the counters mid-update.
 * - The enabled flag is an atomic outside the lock; disabled `track` and
 *   `untrack` calls return without touching the lock at all.
 */

mod queries;
pub(crate) mod state;
mod tracking;
pub mod traits;
pub mod types;

// Re-export public types and traits
pub use traits::{AllocationTracking, LeakQuery};
pub use types::{AllocationRecord, SourceOrigin, DEFAULT_CATEGORY};

use crate::core::types::{Handle, Size};
use crate::stats::LeakStats;
use log::info;
use parking_lot::RwLock;
use state::RegistryState;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Process-wide allocation registry.
///
/// The host constructs one instance and hands clones to every call site
/// that needs tracking; clones share state through `Arc`.
pub struct LeakRegistry {
    pub(crate) state: Arc<RwLock<RegistryState>>,
    enabled: Arc<AtomicBool>,
}

impl LeakRegistry {
    pub fn new() -> Self {
        info!("Leak registry initialized (tracking enabled)");
        Self {
            state: Arc::new(RwLock::new(RegistryState::new())),
            enabled: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Enable or disable tracking.
    ///
    /// While disabled, `track` and `untrack` neither inspect nor mutate any
    /// registry state.
    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Relaxed);
        info!(
            "Leak tracking {}",
            if enabled { "enabled" } else { "disabled" }
        );
    }

    pub fn is_enabled(&self) -> bool {
        // Gate only; orders nothing relative to registry state.
        self.enabled.load(Ordering::Relaxed)
    }

    /// Capture aggregate statistics from the current live set.
    pub fn stats(&self) -> LeakStats {
        LeakStats::capture(self)
    }

    /// Run a closure against the locked state; one consistent view.
    pub(crate) fn with_state<R>(&self, f: impl FnOnce(&RegistryState) -> R) -> R {
        f(&self.state.read())
    }
}

// Implement trait interfaces
impl AllocationTracking for LeakRegistry {
    fn track(&self, handle: Handle, size: Size, origin: SourceOrigin) {
        LeakRegistry::track(self, handle, size, origin)
    }

    fn track_categorized(&self, handle: Handle, size: Size, origin: SourceOrigin, category: &str) {
        LeakRegistry::track_categorized(self, handle, size, origin, category)
    }

    fn untrack(&self, handle: Handle) {
        LeakRegistry::untrack(self, handle)
    }

    fn set_enabled(&self, enabled: bool) {
        LeakRegistry::set_enabled(self, enabled)
    }

    fn is_enabled(&self) -> bool {
        LeakRegistry::is_enabled(self)
    }
}

impl LeakQuery for LeakRegistry {
    fn has_leaks(&self) -> bool {
        LeakRegistry::has_leaks(self)
    }

    fn leak_count(&self) -> usize {
        LeakRegistry::leak_count(self)
    }

    fn leaked_bytes(&self) -> Size {
        LeakRegistry::leaked_bytes(self)
    }

    fn snapshot_leaks(&self) -> Vec<AllocationRecord> {
        LeakRegistry::snapshot_leaks(self)
    }
}

impl Clone for LeakRegistry {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            enabled: Arc::clone(&self.enabled),
        }
    }
}

impl Default for LeakRegistry {
    fn default() -> Self {
        Self::new()
    }
}
