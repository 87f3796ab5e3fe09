/*!
 * Leaktrace Library
 * Allocation tracking and leak reporting exposed as a library
 */

pub mod core;
pub mod registry;
pub mod report;
pub mod stats;

// Re-exports
pub use self::core::types::{Handle, Size};
pub use registry::{
    AllocationRecord, AllocationTracking, LeakQuery, LeakRegistry, SourceOrigin, DEFAULT_CATEGORY,
};
pub use report::{format_bytes, ReportGenerator};
pub use stats::{ExportError, LeakStats};
