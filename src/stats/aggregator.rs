/*!
 * Statistics Aggregation
 * Point-in-time usage snapshots computed fresh from the registry
 */

use crate::core::types::Size;
use crate::registry::state::RegistryState;
use crate::registry::LeakRegistry;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::SystemTime;
use thiserror::Error;

/// Statistics export errors
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("failed to serialize statistics: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Aggregate view of the live set at one instant.
///
/// Nothing here is cached: for a fixed live set the snapshot is fully
/// determined, and the breakdown maps iterate in key order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeakStats {
    pub total_leaks: usize,
    pub total_leaked_bytes: Size,
    pub peak_memory_usage: Size,
    pub current_memory_usage: Size,
    pub leaks_by_category: BTreeMap<String, Size>,
    pub leaks_by_file: BTreeMap<String, Size>,
    pub captured_at: SystemTime,
}

impl LeakStats {
    /// Build a snapshot from the registry's current state.
    ///
    /// Runs under one read lock so the counters and the live set agree.
    pub fn capture(registry: &LeakRegistry) -> Self {
        registry.with_state(Self::from_state)
    }

    pub(crate) fn from_state(state: &RegistryState) -> Self {
        let mut leaks_by_category = BTreeMap::new();
        let mut leaks_by_file = BTreeMap::new();
        let mut total_leaked_bytes: Size = 0;

        for record in state.live.values() {
            total_leaked_bytes += record.size;
            *leaks_by_category.entry(record.category.clone()).or_insert(0) += record.size;
            *leaks_by_file.entry(record.origin.file.clone()).or_insert(0) += record.size;
        }

        Self {
            total_leaks: state.live.len(),
            total_leaked_bytes,
            peak_memory_usage: state.peak_usage,
            current_memory_usage: state.current_usage,
            leaks_by_category,
            leaks_by_file,
            captured_at: SystemTime::now(),
        }
    }

    /// Render the snapshot as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ExportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
