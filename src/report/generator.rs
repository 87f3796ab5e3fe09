/*!
 * Report Generation
 * Renders the live set and statistics into text
 */

use super::format::format_bytes;
use crate::registry::types::AllocationRecord;
use crate::registry::LeakRegistry;
use crate::stats::LeakStats;

/// Renders leak reports for a registry.
///
/// Borrows the registry and holds no state of its own; every call reads a
/// fresh, consistent view.
pub struct ReportGenerator<'a> {
    registry: &'a LeakRegistry,
}

impl<'a> ReportGenerator<'a> {
    pub fn new(registry: &'a LeakRegistry) -> Self {
        Self { registry }
    }

    /// One-line leak summary.
    pub fn generate_summary(&self) -> String {
        let stats = self.registry.stats();
        if stats.total_leaks == 0 {
            return "No memory leaks detected.".to_string();
        }
        format!(
            "{} leaks, {} leaked",
            stats.total_leaks,
            format_bytes(stats.total_leaked_bytes)
        )
    }

    /// Multi-section leak report.
    ///
    /// With no leaks the report is a success line plus the peak-usage line;
    /// otherwise it carries the summary block, category and file breakdowns,
    /// and one detail block per live allocation.
    pub fn generate_report(&self) -> String {
        // Stats and the record list must describe the same instant, so both
        // come out of a single locked read.
        let (stats, leaks): (LeakStats, Vec<AllocationRecord>) = self.registry.with_state(|state| {
            (
                LeakStats::from_state(state),
                state.live.values().cloned().collect(),
            )
        });

        let mut report = String::new();
        report.push_str("=== Memory Leak Detection Report ===\n\n");

        if leaks.is_empty() {
            report.push_str("✓ No memory leaks detected!\n");
            report.push_str(&format!(
                "Peak memory usage: {}\n",
                format_bytes(stats.peak_memory_usage)
            ));
            return report;
        }

        report.push_str("⚠ Memory leaks detected!\n\n");
        report.push_str("Summary:\n");
        report.push_str(&format!("  Total leaks: {}\n", stats.total_leaks));
        report.push_str(&format!(
            "  Total leaked: {}\n",
            format_bytes(stats.total_leaked_bytes)
        ));
        report.push_str(&format!(
            "  Peak usage: {}\n",
            format_bytes(stats.peak_memory_usage)
        ));
        report.push_str(&format!(
            "  Current usage: {}\n\n",
            format_bytes(stats.current_memory_usage)
        ));

        if !stats.leaks_by_category.is_empty() {
            report.push_str("Leaks by category:\n");
            for (category, bytes) in &stats.leaks_by_category {
                report.push_str(&format!("  {}: {}\n", category, format_bytes(*bytes)));
            }
            report.push('\n');
        }

        if !stats.leaks_by_file.is_empty() {
            report.push_str("Leaks by file:\n");
            for (file, bytes) in &stats.leaks_by_file {
                report.push_str(&format!("  {}: {}\n", file, format_bytes(*bytes)));
            }
            report.push('\n');
        }

        report.push_str("Detailed leak information:\n");
        for (index, leak) in leaks.iter().enumerate() {
            report.push_str(&format!("\nLeak #{}:\n", index + 1));
            report.push_str(&format!("  Address: 0x{:x}\n", leak.handle));
            report.push_str(&format!("  Size: {}\n", format_bytes(leak.size)));
            report.push_str(&format!("  Location: {}\n", leak.origin));
            report.push_str(&format!("  Function: {}\n", leak.origin.function));
            report.push_str(&format!("  Category: {}\n", leak.category));
            report.push_str(&format!("  Age: {} seconds\n", leak.age_secs()));
        }

        report
    }
}
