//! Property tests for stage semantics over arbitrary finite inputs

mod property_tests {
    use proptest::prelude::*;
    use sugars_stream::{Model, Stream};

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_filter_counts_and_keeps_order(items in prop::collection::vec(-50i32..50, 0..40), pivot in -50i32..50) {
            let expected: Vec<i32> = items.iter().copied().filter(|n| *n > pivot).collect();
            let filtered = Stream::of(items.clone()).filter(move |n| *n > pivot).to_vec();
            prop_assert_eq!(&filtered, &expected);
            prop_assert_eq!(
                Stream::of(items).filter(move |n| *n > pivot).count(),
                expected.len()
            );
        }

        #[test]
        fn prop_map_is_pointwise(items in prop::collection::vec(any::<i16>(), 0..40)) {
            let mapped = Stream::of(items.clone()).map(|n| i32::from(n) * 2 + 1).to_vec();
            prop_assert_eq!(mapped.len(), items.len());
            for (i, value) in mapped.iter().enumerate() {
                prop_assert_eq!(*value, i32::from(items[i]) * 2 + 1);
            }
        }

        #[test]
        fn prop_distinct_has_no_equal_pair(items in prop::collection::vec(0u8..8, 0..40)) {
            let unique = Stream::of(items.clone()).distinct().to_vec();
            for i in 0..unique.len() {
                for j in 0..unique.len() {
                    if i != j {
                        prop_assert!(!unique[i].equals(&unique[j]));
                    }
                }
            }

            let mut first_seen = Vec::new();
            for item in items {
                if !first_seen.contains(&item) {
                    first_seen.push(item);
                }
            }
            prop_assert_eq!(&unique, &first_seen);
            prop_assert_eq!(Stream::of(unique.clone()).distinct().to_vec(), unique);
        }

        #[test]
        fn prop_limit_takes_prefix(items in prop::collection::vec(any::<u32>(), 0..40), max in 0usize..50) {
            let limited = Stream::of(items.clone()).limit(max).to_vec();
            let take = max.min(items.len());
            prop_assert_eq!(limited.len(), take);
            prop_assert_eq!(&limited[..], &items[..take]);
        }

        #[test]
        fn prop_flat_map_concatenates(items in prop::collection::vec(prop::collection::vec(any::<i8>(), 0..5), 0..10)) {
            let expected: Vec<i8> = items.iter().flatten().copied().collect();
            prop_assert_eq!(Stream::of(items).flat_map(|v| v).to_vec(), expected);
        }
    }
}
