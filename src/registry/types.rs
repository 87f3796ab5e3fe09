/*!
 * Registry Types
 * Allocation records and source provenance
 */

use crate::core::types::{Handle, Size};
use serde::Serialize;
use std::fmt;
use std::panic::Location;
use std::time::Instant;

/// Category assigned when the call site does not name one.
pub const DEFAULT_CATEGORY: &str = "general";

/// Source location of a tracking call site
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceOrigin {
    pub file: String,
    pub line: u32,
    pub function: String,
}

impl SourceOrigin {
    pub fn new(file: impl Into<String>, line: u32, function: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            line,
            function: function.into(),
        }
    }

    /// Capture file and line from the compiler-provided call-site location.
    ///
    /// The enclosing function name is not part of `Location`, so the caller
    /// still supplies it.
    #[track_caller]
    pub fn here(function: impl Into<String>) -> Self {
        let location = Location::caller();
        Self::new(location.file(), location.line(), function)
    }
}

impl fmt::Display for SourceOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// One currently-live allocation
#[derive(Debug, Clone, Serialize)]
pub struct AllocationRecord {
    pub handle: Handle,
    pub size: Size,
    pub origin: SourceOrigin,
    pub category: String,
    /// Monotonic track time; only used to report allocation age.
    #[serde(skip)]
    pub created_at: Instant,
}

impl AllocationRecord {
    pub(crate) fn new(handle: Handle, size: Size, origin: SourceOrigin, category: String) -> Self {
        Self {
            handle,
            size,
            origin,
            category,
            created_at: Instant::now(),
        }
    }

    /// Whole seconds since this allocation was tracked.
    pub fn age_secs(&self) -> u64 {
        self.created_at.elapsed().as_secs()
    }
}
