//! Property tests for checks and combinators.

use proptest::prelude::*;
use verdict::checks::{ordered, slice, string};
use verdict::{abort, collect, join, Check, Violation};

fn bounded(lo: i64, hi: i64) -> Vec<Check<i64>> {
    vec![ordered::min(lo), ordered::max(hi), ordered::not_between(lo + 1, lo + 1)]
}

proptest! {
    #[test]
    fn prop_checks_are_referentially_transparent(s in ".*", n in 0usize..16) {
        let checks = [
            string::min_len(n),
            string::max_char_count(n),
            string::max_unique_char_count(n),
            string::alphanumeric(),
        ];
        for check in &checks {
            prop_assert_eq!(check.validate(&s), check.validate(&s));
        }
    }

    #[test]
    fn prop_between_is_order_independent(a in -100i64..100, b in -100i64..100, v in -150i64..150) {
        prop_assert_eq!(
            ordered::between(a, b).is_valid(&v),
            ordered::between(b, a).is_valid(&v)
        );
        prop_assert_eq!(
            string::len_between(a.unsigned_abs() as usize, b.unsigned_abs() as usize)
                .is_valid(&"x".repeat(v.unsigned_abs() as usize)),
            string::len_between(b.unsigned_abs() as usize, a.unsigned_abs() as usize)
                .is_valid(&"x".repeat(v.unsigned_abs() as usize))
        );
    }

    #[test]
    fn prop_between_and_not_between_partition(a in -50i64..50, b in -50i64..50, v in -80i64..80) {
        prop_assert_ne!(
            ordered::between(a, b).is_valid(&v),
            ordered::not_between(a, b).is_valid(&v)
        );
    }

    #[test]
    fn prop_collect_counts_failures(lo in -20i64..20, span in 0i64..20, v in -50i64..50) {
        let checks = bounded(lo, lo + span);
        let failing = checks.iter().filter(|c| !c.is_valid(&v)).count();
        prop_assert_eq!(collect(&v, &checks).len(), failing);
        prop_assert_eq!(join(&v, &checks).is_ok(), failing == 0);
    }

    #[test]
    fn prop_abort_returns_first_collected(lo in -20i64..20, span in 0i64..20, v in -50i64..50) {
        let checks = bounded(lo, lo + span);
        prop_assert_eq!(abort(&v, &checks).err(), collect(&v, &checks).into_iter().next());
    }

    #[test]
    fn prop_with_error_is_exact(v in -50i64..50, m in -50i64..50) {
        let custom = Violation::new("custom").with_code("custom");
        let original = ordered::min(m);
        let replaced = original.clone().with_error(custom.clone());
        match original.validate(&v) {
            Ok(()) => prop_assert_eq!(replaced.validate(&v), Ok(())),
            Err(_) => prop_assert_eq!(replaced.validate(&v), Err(custom)),
        }
    }

    #[test]
    fn prop_each_reports_every_bad_element(items in prop::collection::vec(-10i64..10, 0..20)) {
        let result = slice::each([ordered::min(0)]).validate(&items);
        let bad: Vec<String> = items
            .iter()
            .enumerate()
            .filter(|(_, n)| **n < 0)
            .map(|(i, _)| format!("[{}]", i))
            .collect();
        match result {
            Ok(()) => prop_assert!(bad.is_empty()),
            Err(violation) => {
                let paths: Vec<String> = violation
                    .causes()
                    .iter()
                    .map(|c| c.path.to_string())
                    .collect();
                prop_assert_eq!(paths, bad);
            }
        }
    }
}
