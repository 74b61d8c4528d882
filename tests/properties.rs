use calcpad::{evaluate_document, format_display, sheet::alias::AliasTable};
use proptest::prelude::*;

proptest! {
    #[test]
    fn one_result_per_input_line(document in r"[0-9a-z+*/%#=() .\n-]{0,80}") {
        let results = evaluate_document(&document);
        prop_assert_eq!(results.len(), document.split('\n').count());
    }

    #[test]
    fn integer_sums_match_i64(a in -1_000_000_i64..1_000_000, b in -1_000_000_i64..1_000_000) {
        let results = evaluate_document(&format!("{a} + {b}"));
        let expected = (a + b).to_string();
        prop_assert_eq!(results[0].raw(), Some(expected.as_str()));
    }

    #[test]
    fn format_display_is_idempotent(raw in r"-?[0-9]{1,20}(\.[0-9]{1,12})?(e[+-][0-9]{1,3})?") {
        let once = format_display(&raw);
        prop_assert_eq!(format_display(&once), once);
    }

    #[test]
    fn exponent_suffix_is_never_grouped(mantissa in "[1-9][0-9]{3,8}", exponent in 20_u32..400) {
        let formatted = format_display(&format!("{mantissa}e+{exponent}"));
        prop_assert!(!formatted.contains(','));
    }

    #[test]
    fn aliases_are_stable_and_unique(names in prop::collection::vec("[α-ω]{1,4}", 1..12)) {
        let mut aliases = AliasTable::new();
        let first: Vec<String> = names.iter().map(|name| aliases.alias(name)).collect();
        let second: Vec<String> = names.iter().map(|name| aliases.alias(name)).collect();
        prop_assert_eq!(&first, &second);

        for (i, a) in names.iter().enumerate() {
            for (j, b) in names.iter().enumerate() {
                prop_assert_eq!(a == b, first[i] == first[j], "{} vs {}", i, j);
            }
        }
    }
}
