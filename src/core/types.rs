/*!
 * Core Types
 * Common types used across the registry
 */

use serde::{Deserialize, Serialize};
use std::fmt;

/// Size type for byte accounting
pub type Size = usize;

/// Opaque identity of a tracked memory block.
///
/// The raw value is typically the block's address. The registry only stores
/// and compares it as a map key; it is never dereferenced, so a handle may
/// outlive the memory it once named.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Handle(usize);

impl Handle {
    /// The null handle. Tracking calls against it are ignored.
    pub const NULL: Handle = Handle(0);

    pub const fn new(raw: usize) -> Self {
        Handle(raw)
    }

    pub const fn as_raw(self) -> usize {
        self.0
    }

    pub const fn is_null(self) -> bool {
        self.0 == 0
    }
}

impl From<usize> for Handle {
    fn from(raw: usize) -> Self {
        Handle(raw)
    }
}

impl fmt::LowerHex for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:x}", self.0)
    }
}
