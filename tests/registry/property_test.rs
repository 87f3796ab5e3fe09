/*!
 * Property Tests
 * Model-checked bookkeeping over arbitrary track/untrack interleavings
 */

use leaktrace::{Handle, LeakRegistry, SourceOrigin};
use proptest::prelude::*;
use std::collections::HashMap;

#[derive(Debug, Clone)]
enum Op {
    Track { handle: usize, size: usize },
    Untrack { handle: usize },
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (1..32usize, 1..4096usize).prop_map(|(handle, size)| Op::Track { handle, size }),
        (1..32usize).prop_map(|handle| Op::Untrack { handle }),
    ]
}

proptest! {
    // The live set always matches a plain map model, whatever the
    // interleaving; leaked_bytes is summed from records, so replacement on
    // handle reuse keeps it exact even though current_usage overcounts.
    #[test]
    fn live_set_matches_model(ops in proptest::collection::vec(op_strategy(), 1..256)) {
        let registry = LeakRegistry::new();
        let mut model: HashMap<usize, usize> = HashMap::new();

        for op in ops {
            match op {
                Op::Track { handle, size } => {
                    registry.track(
                        Handle::new(handle),
                        size,
                        SourceOrigin::new("model.rs", 1, "model_step"),
                    );
                    model.insert(handle, size);
                }
                Op::Untrack { handle } => {
                    registry.untrack(Handle::new(handle));
                    model.remove(&handle);
                }
            }

            prop_assert_eq!(registry.leak_count(), model.len());
            prop_assert_eq!(registry.leaked_bytes(), model.values().sum::<usize>());
            prop_assert_eq!(registry.has_leaks(), !model.is_empty());
            prop_assert!(registry.peak_usage() >= registry.current_usage());
            // The running counter can only overcount, never undercount.
            prop_assert!(registry.current_usage() >= registry.leaked_bytes());
        }
    }

    #[test]
    fn reset_stats_pins_peak_to_current(ops in proptest::collection::vec(op_strategy(), 1..64)) {
        let registry = LeakRegistry::new();

        for op in ops {
            match op {
                Op::Track { handle, size } => registry.track(
                    Handle::new(handle),
                    size,
                    SourceOrigin::new("model.rs", 1, "model_step"),
                ),
                Op::Untrack { handle } => registry.untrack(Handle::new(handle)),
            }
        }

        let live_before = registry.leak_count();
        registry.reset_stats();

        prop_assert_eq!(registry.peak_usage(), registry.current_usage());
        prop_assert_eq!(registry.leak_count(), live_before);
    }
}
