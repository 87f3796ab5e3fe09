/*!
 * Byte Formatting
 * Binary-unit rendering for report output
 */

use crate::core::types::Size;

const KB: Size = 1024;
const MB: Size = KB * 1024;
const GB: Size = MB * 1024;

/// Format a byte count with binary-unit thresholds.
///
/// Values below 1024 print as integer bytes; each higher unit prints with
/// two decimals. The unit is chosen by the half-open interval the value
/// falls in, so 1024 itself is "1.00 KB", not "1024 B".
pub fn format_bytes(bytes: Size) -> String {
    if bytes < KB {
        format!("{} B", bytes)
    } else if bytes < MB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else if bytes < GB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    }
}
