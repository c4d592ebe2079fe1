//! Property-Based Tests for the Result Cache
//!
//! Uses proptest to verify keying and bounding properties.

use proptest::prelude::*;

use crate::cache::{cache_key, ResultCache};

// == Test Configuration ==
const TEST_MAX_ENTRIES: usize = 8;
const TEST_TTL_MS: u64 = 60_000;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Key derivation is a pure function of (endpoint, text).
    #[test]
    fn prop_cache_key_stable(text in ".{0,100}") {
        let a = cache_key("num_vowels", &text, 1000);
        let b = cache_key("num_vowels", &text, 1000);
        prop_assert_eq!(a, b);
    }

    // Texts over the threshold never get a key, independent of content.
    #[test]
    fn prop_cache_key_threshold(text in ".{0,100}", max in 0usize..100) {
        let key = cache_key("num_vowels", &text, max);
        if text.chars().count() > max {
            prop_assert!(key.is_none());
        } else {
            prop_assert!(key.is_some());
        }
    }

    // The cache never grows past its capacity, whatever the operation mix.
    #[test]
    fn prop_cache_bounded(ops in prop::collection::vec(("[a-f]{1,3}", 0u64..100), 1..64)) {
        let mut cache = ResultCache::new(TEST_MAX_ENTRIES, TEST_TTL_MS);

        for (key, value) in ops {
            cache.set(key, value);
            prop_assert!(cache.len() <= TEST_MAX_ENTRIES);
        }
    }

    // A set followed by a get (within TTL) returns the stored value.
    #[test]
    fn prop_cache_round_trip(key in "[a-zA-Z0-9:_-]{1,40}", value in any::<u64>()) {
        let mut cache = ResultCache::new(TEST_MAX_ENTRIES, TEST_TTL_MS);

        cache.set(key.clone(), value);
        prop_assert_eq!(cache.get(&key), Some(value));
    }

    // Hit/miss counters reflect the lookups that actually happened.
    #[test]
    fn prop_cache_stats_accuracy(lookups in prop::collection::vec("[a-d]{1,2}", 1..32)) {
        let mut cache = ResultCache::new(TEST_MAX_ENTRIES, TEST_TTL_MS);
        cache.set("aa".to_string(), 1);
        cache.set("bb".to_string(), 2);

        let mut expected_hits = 0u64;
        let mut expected_misses = 0u64;

        for key in &lookups {
            match cache.get(key) {
                Some(_) => expected_hits += 1,
                None => expected_misses += 1,
            }
        }

        let stats = cache.stats();
        prop_assert_eq!(stats.hits, expected_hits);
        prop_assert_eq!(stats.misses, expected_misses);
        prop_assert_eq!(stats.total_entries, cache.len());
    }
}
