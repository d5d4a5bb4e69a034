use chordforge::api;
use chordforge::chord::Chord;
use chordforge::config::{Config, PivotConfig};
use chordforge::consts::DEFAULT_CORPUS_PATH;
use chordforge::error::ChordError;
use chordforge::mapping::{ChordMap, Mapping};
use chordforge::pivot::{aggregate, analyze_words, find_pivots, MergePolicy};
use rstest::rstest;

// t -> h rolls (h holds both keys of t), h -> e releases everything.
fn rolling_map() -> ChordMap {
    let m = |key: &str, pos: &[u8]| Mapping::new(key, Chord::new(pos).unwrap());
    ChordMap::from_mappings(vec![
        m("t", &[3, 4]),
        m("h", &[3, 4, 5]),
        m("e", &[6]),
        m("n", &[6, 7]),
        m("r", &[6, 7, 8]),
    ])
    .unwrap()
}

#[rstest]
#[case::the("the", MergePolicy::MultiKey, &["th"])]
#[case::then("then", MergePolicy::MultiKey, &["th", "en"])]
#[case::there("there", MergePolicy::MultiKey, &["th", "er"])]
#[case::single_keys_multi("thee", MergePolicy::MultiKey, &["th"])]
#[case::single_keys_any("thee", MergePolicy::AnyKey, &["th", "ee"])]
#[case::release_then_roll("ter", MergePolicy::MultiKey, &["er"])]
#[case::no_pivot("e", MergePolicy::AnyKey, &[])]
#[case::empty("", MergePolicy::AnyKey, &[])]
fn test_find_pivots(#[case] word: &str, #[case] policy: MergePolicy, #[case] expected: &[&str]) {
    let pivots = find_pivots(word, &rolling_map(), policy).unwrap();
    assert_eq!(pivots, expected);
}

#[test]
fn test_long_run_is_one_pivot() {
    // e -> n -> r grows one key at a time while holding the previous ones.
    let pivots = find_pivots("enr", &rolling_map(), MergePolicy::MultiKey).unwrap();
    assert_eq!(pivots, ["enr"]);
}

#[test]
fn test_unmapped_character() {
    let err = find_pivots("thz", &rolling_map(), MergePolicy::MultiKey).unwrap_err();
    match err {
        ChordError::UnmappedCharacter { character, word } => {
            assert_eq!(character, "z");
            assert_eq!(word, "thz");
        }
        other => panic!("expected UnmappedCharacter, got {:?}", other),
    }
}

#[test]
fn test_parallel_analysis_keeps_corpus_order() {
    let words: Vec<String> = (0..200)
        .map(|i| ["the", "then", "there", "ten"][i % 4].to_string())
        .collect();
    let analyzed = analyze_words(&words, &rolling_map(), MergePolicy::MultiKey).unwrap();
    let texts: Vec<&str> = analyzed.iter().map(|w| w.text.as_str()).collect();
    let expected: Vec<&str> = words.iter().map(String::as_str).collect();
    assert_eq!(texts, expected);
}

#[test]
fn test_parallel_analysis_reports_first_failure() {
    let words = ["the", "qq", "then", "zz"];
    let err = analyze_words(&words, &rolling_map(), MergePolicy::MultiKey).unwrap_err();
    assert!(matches!(err, ChordError::UnmappedCharacter { ref word, .. } if word == "qq"));
}

#[test]
fn test_aggregate_ranks_by_occurrence() {
    let words = ["the", "then", "there"];
    let analyzed = analyze_words(&words, &rolling_map(), MergePolicy::MultiKey).unwrap();
    let report = aggregate(&analyzed);

    assert_eq!(report.word_count, 3);
    let order: Vec<&str> = report.ranked.iter().map(|s| s.pivot.as_str()).collect();
    assert_eq!(order, ["th", "en", "er"]);
    assert_eq!(report.get("th").unwrap().words, ["the", "then", "there"]);
    assert_eq!(report.total_occurrences(), 5);
}

#[test]
fn test_bundled_map_has_no_pivot_in_the() {
    let map = api::build_chord_map(&Config::default()).unwrap();
    for policy in [MergePolicy::MultiKey, MergePolicy::AnyKey] {
        assert!(find_pivots("the", &map, policy).unwrap().is_empty());
    }
}

#[test]
fn test_bundled_corpus_is_fully_mapped() {
    let map = api::build_chord_map(&Config::default()).unwrap();
    let report = api::analyze_corpus(DEFAULT_CORPUS_PATH, &map, &PivotConfig::default()).unwrap();
    assert!(report.word_count > 0);
    for pair in report.ranked.windows(2) {
        assert!(pair[0].occurrences() >= pair[1].occurrences());
    }
}
