//! Property-based tests for triage invariants

use std::collections::HashSet;

use proptest::prelude::*;
use support_triage::{Category, CategoryScorer, CategorySelector, FieldExtractor, TriagePipeline};

// Free text salted with lexicon phrases and field-shaped tokens so that
// every stage sees hits as well as misses
fn query_strategy() -> impl Strategy<Value = String> {
    let fragment = prop_oneof![
        "[a-zA-Z0-9 .,:!?$@'-]{0,40}",
        Just("lost my card".to_string()),
        Just("ref: TXN-00912".to_string()),
        Just("overcharged on my bill".to_string()),
        Just("open an account".to_string()),
        Just("password reset".to_string()),
        Just("mortgage of $120,000".to_string()),
        Just("statement for 2024-01-31".to_string()),
        Just("at Corner Shop".to_string()),
        Just("jane@example.com".to_string()),
        Just("Jane Doe".to_string()),
    ];
    prop::collection::vec(fragment, 0..6).prop_map(|parts| parts.join(" "))
}

fn category_strategy() -> impl Strategy<Value = Category> {
    prop::sample::select(Category::ALL.to_vec())
}

proptest! {
    #[test]
    fn prop_ranking_is_never_empty(query in query_strategy()) {
        let ranked = CategoryScorer::new().rank(&query);
        prop_assert!(!ranked.is_empty());
    }

    #[test]
    fn prop_ranking_is_never_empty_for_arbitrary_text(query in any::<String>()) {
        prop_assert!(!CategoryScorer::new().rank(&query).is_empty());
    }

    #[test]
    fn prop_ranking_is_sorted_by_score(query in query_strategy()) {
        let scorer = CategoryScorer::new();
        let table = scorer.score(&query);
        let ranked = table.ranked();

        for pair in ranked.windows(2) {
            prop_assert!(table.get(pair[0]) >= table.get(pair[1]));
            if table.get(pair[0]) == table.get(pair[1]) {
                prop_assert!(pair[0] < pair[1]);
            }
        }
        for category in Category::ALL {
            prop_assert_eq!(ranked.contains(&category), table.get(category) > 0);
        }
    }

    #[test]
    fn prop_selected_category_is_top_candidate(query in query_strategy()) {
        let ranked = CategoryScorer::new().rank(&query);
        let chosen = CategorySelector::new().select(&ranked, &query);

        prop_assert!(Category::ALL.contains(&chosen));
        prop_assert_eq!(chosen, ranked[0]);
    }

    #[test]
    fn prop_found_and_missing_partition_schedule(
        query in query_strategy(),
        category in category_strategy(),
    ) {
        let result = FieldExtractor::new().extract(&query, category);
        let schedule: HashSet<&str> = category.schedule().iter().copied().collect();
        let found: HashSet<&str> = result.found.keys().map(String::as_str).collect();
        let missing: HashSet<&str> = result.missing.iter().map(String::as_str).collect();

        prop_assert!(found.is_subset(&schedule));
        prop_assert!(found.is_disjoint(&missing));
        prop_assert_eq!(found.union(&missing).copied().collect::<HashSet<_>>(), schedule);

        // missing keeps schedule order
        let expected: Vec<&str> = category
            .schedule()
            .iter()
            .copied()
            .filter(|field| !found.contains(field))
            .collect();
        prop_assert_eq!(&result.missing, &expected);
    }

    #[test]
    fn prop_pipeline_is_idempotent(query in query_strategy()) {
        let pipeline = TriagePipeline::default();
        prop_assert_eq!(pipeline.run(&query), pipeline.run(&query));
    }

    #[test]
    fn prop_response_carries_summary(query in query_strategy()) {
        let result = TriagePipeline::default().run(&query);

        prop_assert!(!result.intent_summary.is_empty());
        prop_assert!(result.ranked_categories.contains(&result.category));
        let footer = format!("(Interpretation: {})", result.intent_summary);
        prop_assert!(result.response.ends_with(&footer));
    }
}
