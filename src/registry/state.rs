/*!
 * Registry State
 * Live set and counters guarded by the registry lock
 */

use super::types::AllocationRecord;
use crate::core::types::{Handle, Size};
use ahash::RandomState;
use std::collections::HashMap;

/// Everything that must stay mutually consistent.
///
/// Held behind the registry's single `RwLock`; `current_usage` and
/// `category_usage` are running counters, while `peak_usage` is the
/// high-water mark of `current_usage` since start or the last stats reset.
pub(crate) struct RegistryState {
    pub(crate) live: HashMap<Handle, AllocationRecord, RandomState>,
    pub(crate) current_usage: Size,
    pub(crate) peak_usage: Size,
    pub(crate) category_usage: HashMap<String, Size, RandomState>,
}

impl RegistryState {
    pub(crate) fn new() -> Self {
        Self {
            live: HashMap::default(),
            current_usage: 0,
            peak_usage: 0,
            category_usage: HashMap::default(),
        }
    }
}
