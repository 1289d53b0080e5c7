//! Property-based tests for the search filter.
//!
//! Every result must satisfy the match rule, every record that satisfies it
//! must be returned, and results keep corpus order.

use bilihome::services::search::search_videos;
use bilihome::types::video::VideoRecord;
use proptest::prelude::*;

fn arb_corpus() -> impl Strategy<Value = Vec<VideoRecord>> {
    proptest::collection::vec(("[a-zA-Z数据库 ]{0,12}", 1i64..500), 0..20).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (name, id_offset))| VideoRecord {
                id: (i as i64) * 500 + id_offset,
                name,
                cover_image: "swift".to_string(),
            })
            .collect()
    })
}

fn matches(query: &str, v: &VideoRecord) -> bool {
    v.name.to_lowercase().contains(&query.to_lowercase()) || v.id.to_string().contains(query)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn results_are_exactly_the_matching_records(
        corpus in arb_corpus(),
        query in "[a-zA-Z0-9数]{1,3}",
    ) {
        let results = search_videos(&query, &corpus);
        let expected: Vec<VideoRecord> =
            corpus.iter().filter(|v| matches(&query, v)).cloned().collect();
        prop_assert_eq!(results, expected);
    }

    #[test]
    fn empty_query_returns_nothing(corpus in arb_corpus()) {
        prop_assert!(search_videos("", &corpus).is_empty());
    }
}
