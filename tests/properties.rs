//! Property tests for normalization, index ordering and ranked search.

use std::collections::HashSet;

use proptest::prelude::*;
use quiver::analysis::KeywordAnalyzer;
use quiver::index::{KeywordIndex, Occurrence, find_insertion_point};
use quiver::prelude::*;

// ============================================================================
// STRATEGIES
// ============================================================================

/// Lower-case words, some of which collide across documents.
fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-e]{1,3}").unwrap()
}

/// Words with trailing punctuation and mixed case.
fn raw_word_strategy() -> impl Strategy<Value = String> {
    (
        prop::string::string_regex("[a-zA-Z]{1,6}").unwrap(),
        prop::string::string_regex("[.,!?;:\"')]{0,3}").unwrap(),
    )
        .prop_map(|(word, tail)| format!("{word}{tail}"))
}

fn document_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(word_strategy(), 0..20).prop_map(|words| words.join(" "))
}

fn corpus_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(document_strategy(), 1..12)
}

fn build(corpus: &[String]) -> SearchEngine {
    let mut source = MemorySource::new();
    for (i, text) in corpus.iter().enumerate() {
        source = source.add_document(format!("doc{i}"), text.as_str());
    }
    let mut engine = SearchEngine::new().unwrap();
    engine.build_from_source(&source).unwrap();
    engine
}

fn is_descending(occurrences: &[Occurrence]) -> bool {
    occurrences
        .windows(2)
        .all(|pair| pair[0].frequency >= pair[1].frequency)
}

// ============================================================================
// NORMALIZATION
// ============================================================================

proptest! {
    /// A normalized keyword normalizes to itself.
    #[test]
    fn prop_normalize_is_idempotent(word in raw_word_strategy()) {
        let analyzer = KeywordAnalyzer::new().unwrap();
        let keyword = analyzer.normalize(&word);

        prop_assert!(keyword.is_some());
        let keyword = keyword.unwrap();
        prop_assert_eq!(analyzer.normalize(&keyword), Some(keyword.clone()));
        prop_assert!(keyword.chars().all(|c| c.is_ascii_lowercase()));
    }

    /// A non-letter before the last letter always rejects the word.
    #[test]
    fn prop_inner_non_letter_rejects(
        head in "[a-z]{1,4}",
        inner in "[0-9'\\-_]",
        tail in "[a-z]{1,4}",
    ) {
        let analyzer = KeywordAnalyzer::new().unwrap();
        prop_assert_eq!(analyzer.normalize(&format!("{head}{inner}{tail}")), None);
    }
}

// ============================================================================
// INDEX ORDERING
// ============================================================================

proptest! {
    /// Every occurrence list stays sorted by descending frequency.
    #[test]
    fn prop_occurrence_lists_sorted(corpus in corpus_strategy()) {
        let engine = build(&corpus);
        for (keyword, occurrences) in engine.index().iter() {
            prop_assert!(is_descending(occurrences), "{} unsorted: {:?}", keyword, occurrences);
        }
    }

    /// Each merge grows a list by exactly one and keeps it sorted.
    #[test]
    fn prop_merge_keeps_order(frequencies in prop::collection::vec(1u32..10, 1..40)) {
        let mut index = KeywordIndex::new();
        for (i, frequency) in frequencies.iter().enumerate() {
            index.merge_occurrence("word", Occurrence::new(format!("doc{i}"), *frequency));

            let occurrences = index.occurrences("word").unwrap();
            prop_assert_eq!(occurrences.len(), i + 1);
            prop_assert!(is_descending(occurrences));
        }
    }

    /// The insertion point always lies inside the sorted prefix.
    #[test]
    fn prop_insertion_point_in_bounds(
        mut frequencies in prop::collection::vec(1u32..10, 1..30),
        target in 1u32..10,
    ) {
        frequencies.sort_unstable_by(|a, b| b.cmp(a));
        let sorted: Vec<Occurrence> = frequencies
            .iter()
            .map(|&frequency| Occurrence::new("d", frequency))
            .collect();

        let point = find_insertion_point(&sorted, target);
        prop_assert!(point.index <= sorted.len());
        prop_assert!(!point.probes.is_empty());
    }

    /// Keyword counts per document match a direct count of the words.
    #[test]
    fn prop_frequencies_match_counts(corpus in corpus_strategy()) {
        let engine = build(&corpus);
        for (i, text) in corpus.iter().enumerate() {
            let document = format!("doc{i}");
            let words: HashSet<&str> = text.split_whitespace().collect();
            for word in words {
                let expected = text.split_whitespace().filter(|w| *w == word).count() as u32;
                let occurrence = engine
                    .index()
                    .occurrences(word)
                    .and_then(|list| list.iter().find(|o| o.document == document));
                prop_assert_eq!(occurrence.map(|o| o.frequency), Some(expected));
            }
        }
    }
}

// ============================================================================
// RANKED SEARCH
// ============================================================================

proptest! {
    /// Results are distinct, at most five, and ranked by frequency.
    #[test]
    fn prop_search_results_well_formed(
        corpus in corpus_strategy(),
        keyword1 in word_strategy(),
        keyword2 in word_strategy(),
    ) {
        let engine = build(&corpus);
        let hits = engine.search_hits(&keyword1, &keyword2);
        let indexed = engine.index().contains_keyword(&keyword1)
            || engine.index().contains_keyword(&keyword2);

        prop_assert_eq!(hits.is_some(), indexed);
        if let Some(hits) = hits {
            prop_assert!(!hits.is_empty() && hits.len() <= 5);

            let distinct: HashSet<&str> = hits.iter().map(|hit| hit.document.as_str()).collect();
            prop_assert_eq!(distinct.len(), hits.len());
            prop_assert!(hits.windows(2).all(|pair| pair[0].frequency >= pair[1].frequency));

            let documents = engine.search(&keyword1, &keyword2).unwrap();
            let hit_documents: Vec<String> = hits.into_iter().map(|hit| hit.document).collect();
            prop_assert_eq!(documents, hit_documents);
        }
    }

    /// Searching is insensitive to keyword case.
    #[test]
    fn prop_search_ignores_case(
        corpus in corpus_strategy(),
        keyword1 in word_strategy(),
        keyword2 in word_strategy(),
    ) {
        let engine = build(&corpus);
        prop_assert_eq!(
            engine.search(&keyword1.to_uppercase(), &keyword2),
            engine.search(&keyword1, &keyword2.to_uppercase())
        );
    }
}
