/*!
 * Report Tests
 * Summary and detailed report rendering
 */

use leaktrace::{format_bytes, Handle, LeakRegistry, ReportGenerator, SourceOrigin};
use pretty_assertions::assert_eq;

#[test]
fn test_summary_without_leaks() {
    let registry = LeakRegistry::new();
    let generator = ReportGenerator::new(&registry);

    assert_eq!(generator.generate_summary(), "No memory leaks detected.");
}

#[test]
fn test_summary_with_leaks() {
    let registry = LeakRegistry::new();
    registry.track(Handle::new(1), 100, SourceOrigin::new("f.c", 10, "foo"));
    registry.track(Handle::new(2), 200, SourceOrigin::new("f.c", 11, "bar"));

    let generator = ReportGenerator::new(&registry);
    assert_eq!(generator.generate_summary(), "2 leaks, 300 B leaked");
}

#[test]
fn test_report_without_leaks_is_success_plus_peak() {
    let registry = LeakRegistry::new();
    registry.track(Handle::new(1), 4096, SourceOrigin::new("f.c", 10, "foo"));
    registry.untrack(Handle::new(1));

    let report = ReportGenerator::new(&registry).generate_report();

    assert!(report.starts_with("=== Memory Leak Detection Report ===\n\n"));
    assert!(report.contains("✓ No memory leaks detected!"));
    assert!(report.contains("Peak memory usage: 4.00 KB"));
    // The success path omits every other section.
    assert!(!report.contains("Leaks by category:"));
    assert!(!report.contains("Leaks by file:"));
    assert!(!report.contains("Detailed leak information:"));
}

#[test]
fn test_report_with_leaks_has_all_sections() {
    let registry = LeakRegistry::new();
    registry.track_categorized(
        Handle::new(0x2a),
        100,
        SourceOrigin::new("f.c", 10, "foo"),
        "net",
    );
    registry.track_categorized(
        Handle::new(0x2b),
        2048,
        SourceOrigin::new("g.c", 20, "bar"),
        "cache",
    );

    let report = ReportGenerator::new(&registry).generate_report();

    assert!(report.contains("⚠ Memory leaks detected!"));
    assert!(report.contains("Summary:\n"));
    assert!(report.contains("  Total leaks: 2\n"));
    assert!(report.contains("  Total leaked: 2.10 KB\n"));
    assert!(report.contains("  Peak usage: 2.10 KB\n"));
    assert!(report.contains("  Current usage: 2.10 KB\n"));

    assert!(report.contains("Leaks by category:\n"));
    assert!(report.contains("  net: 100 B\n"));
    assert!(report.contains("  cache: 2.00 KB\n"));

    assert!(report.contains("Leaks by file:\n"));
    assert!(report.contains("  f.c: 100 B\n"));
    assert!(report.contains("  g.c: 2.00 KB\n"));

    assert!(report.contains("Detailed leak information:\n"));
    assert!(report.contains("Leak #1:\n"));
    assert!(report.contains("Leak #2:\n"));
    assert!(report.contains("  Address: 0x2a\n"));
    assert!(report.contains("  Address: 0x2b\n"));
    assert!(report.contains("  Size: 100 B\n"));
    assert!(report.contains("  Location: f.c:10\n"));
    assert!(report.contains("  Function: foo\n"));
    assert!(report.contains("  Category: net\n"));
    assert!(report.contains("  Age: 0 seconds\n"));
}

#[test]
fn test_report_detail_count_matches_summary() {
    let registry = LeakRegistry::new();
    for index in 1..=5usize {
        registry.track(
            Handle::new(index),
            128,
            SourceOrigin::new("f.c", index as u32, "foo"),
        );
    }

    let report = ReportGenerator::new(&registry).generate_report();
    let details = report.matches("\nLeak #").count();

    assert_eq!(details, 5);
    assert!(report.contains("  Total leaks: 5\n"));
}

#[test]
fn test_format_bytes_thresholds() {
    assert_eq!(format_bytes(512), "512 B");
    assert_eq!(format_bytes(1024), "1.00 KB");
    assert_eq!(format_bytes(5 * 1024 * 1024), "5.00 MB");
}
