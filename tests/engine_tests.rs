use chordforge::chord::{Chord, FingerMap};
use chordforge::config::EngineConfig;
use chordforge::engine::{assign, enumerate_universe, exclude_fixed, rank_by_comfort, AssignmentEngine};
use chordforge::error::ChordError;
use chordforge::mapping::Mapping;
use chordforge::scorer::ComfortScorer;
use chordforge::tables::{default_fixed_table, default_free_list, FixedTable, FreeList};
use std::collections::HashSet;

fn engine() -> AssignmentEngine {
    AssignmentEngine::new(&EngineConfig::default(), FingerMap::standard()).unwrap()
}

#[test]
fn test_universe_has_175_distinct_chords() {
    let u = enumerate_universe(10, 3).unwrap();
    assert_eq!(u.len(), 175);
    let distinct: HashSet<Chord> = u.iter().copied().collect();
    assert_eq!(distinct.len(), 175);
    assert!(u.iter().all(|c| (1..=3).contains(&c.len())));
}

#[test]
fn test_ranking_is_descending_and_stable() {
    let scorer = ComfortScorer::new(FingerMap::standard());
    let universe = enumerate_universe(10, 3).unwrap();
    let ranked = rank_by_comfort(&universe, &scorer);

    assert_eq!(ranked.len(), universe.len());
    assert_eq!(ranked[0], Chord::new(&[3]).unwrap());
    for pair in ranked.windows(2) {
        let (a, b) = (scorer.score(&pair[0]), scorer.score(&pair[1]));
        assert!(a >= b);
        if a == b {
            let pos = |c: &Chord| universe.iter().position(|u| u == c).unwrap();
            assert!(pos(&pair[0]) < pos(&pair[1]), "tie reordered");
        }
    }
}

#[test]
fn test_exclude_fixed_keeps_order() {
    let scorer = ComfortScorer::new(FingerMap::standard());
    let ranked = rank_by_comfort(&enumerate_universe(10, 3).unwrap(), &scorer);
    let fixed = FixedTable::from_patterns(&[("e", "...O. ....."), ("t", "..... ..O..")]).unwrap();
    let free = exclude_fixed(&ranked, &fixed);

    assert_eq!(free.len(), 173);
    assert_eq!(free[0], Chord::new(&[6]).unwrap());
    let expected: Vec<Chord> = ranked
        .iter()
        .filter(|c| !fixed.chords().any(|f| f == **c))
        .copied()
        .collect();
    assert_eq!(free, expected);
}

#[test]
fn test_assign_pairs_in_order() {
    let chords = [Chord::new(&[3]).unwrap(), Chord::new(&[6]).unwrap()];
    let out = assign(&FreeList::new(["x", "y"]), &chords);
    assert_eq!(
        out,
        vec![Mapping::new("x", chords[0]), Mapping::new("y", chords[1])]
    );
}

#[test]
fn test_build_with_empty_fixed_table() {
    let free = FreeList::new(["e", "t", "a"]);
    let map = engine().build(&FixedTable::default(), &free).unwrap();
    assert_eq!(map.len(), 3);
    assert_eq!(map.chord_for("e"), Some(Chord::new(&[3]).unwrap()));
    assert_eq!(map.chord_for("t"), Some(Chord::new(&[6]).unwrap()));
    assert_eq!(map.chord_for("a"), Some(Chord::new(&[2]).unwrap()));
}

#[test]
fn test_build_fixed_entries_come_first() {
    let fixed = FixedTable::from_patterns(&[(" ", "....O .....")]).unwrap();
    let map = engine().build(&fixed, &FreeList::new(["e"])).unwrap();
    let keys: Vec<&str> = map.iter().map(|m| m.key.as_str()).collect();
    assert_eq!(keys, [" ", "e"]);
}

#[test]
fn test_build_rejects_key_in_both_tables() {
    let fixed = FixedTable::from_patterns(&[("e", "...O. .....")]).unwrap();
    let err = engine().build(&fixed, &FreeList::new(["t", "e"])).unwrap_err();
    assert!(matches!(err, ChordError::DuplicateKey(ref k) if k == "e"));
}

#[test]
fn test_build_rejects_repeated_free_key() {
    let err = engine()
        .build(&FixedTable::default(), &FreeList::new(["a", "b", "a"]))
        .unwrap_err();
    assert!(matches!(err, ChordError::DuplicateKey(_)));
}

#[test]
fn test_build_rejects_chord_outside_universe() {
    let fixed = FixedTable::from_patterns(&[("HOME", "..OOO O....")]).unwrap();
    let err = engine().build(&fixed, &FreeList::default()).unwrap_err();
    assert!(matches!(err, ChordError::UnknownFixedChord { ref key, .. } if key == "HOME"));
}

#[test]
fn test_build_rejects_empty_fixed_chord() {
    let fixed = FixedTable::from_patterns(&[("e", "..... .....")]).unwrap();
    let err = engine().build(&fixed, &FreeList::default()).unwrap_err();
    assert!(matches!(
        err,
        ChordError::UnknownFixedChord { ref key, ref chord } if key == "e" && chord == "..... ....."
    ));
}

#[test]
fn test_build_rejects_fixed_chord_beyond_key_count() {
    let config = EngineConfig {
        key_count: 5,
        max_chord_size: 3,
    };
    let engine = AssignmentEngine::new(&config, FingerMap::standard()).unwrap();

    let left_only = FixedTable::from_patterns(&[("a", "..O.. .....")]).unwrap();
    assert!(engine.build(&left_only, &FreeList::new(["e"])).is_ok());

    let right = FixedTable::from_patterns(&[("a", "..O.. ....."), ("t", "..... ..O..")]).unwrap();
    let err = engine.build(&right, &FreeList::default()).unwrap_err();
    assert!(matches!(err, ChordError::UnknownFixedChord { ref key, .. } if key == "t"));
}

#[test]
fn test_build_rejects_shared_fixed_chord() {
    let fixed =
        FixedTable::from_patterns(&[("a", "..O.. ....."), ("b", "..O.. .....")]).unwrap();
    let err = engine().build(&fixed, &FreeList::default()).unwrap_err();
    match err {
        ChordError::DuplicateChord { first, second, .. } => {
            assert_eq!(first, "a");
            assert_eq!(second, "b");
        }
        other => panic!("expected DuplicateChord, got {:?}", other),
    }
}

#[test]
fn test_build_truncates_when_chords_run_out() {
    let config = EngineConfig {
        key_count: 3,
        max_chord_size: 1,
    };
    let engine = AssignmentEngine::new(&config, FingerMap::standard()).unwrap();
    let map = engine
        .build(&FixedTable::default(), &FreeList::new(["a", "b", "c", "d", "e"]))
        .unwrap();
    assert_eq!(map.len(), 3);
    assert!(map.get("d").is_none());
    assert!(map.get("e").is_none());
}

#[test]
fn test_bundled_tables() {
    let engine = engine();
    let fixed = default_fixed_table().unwrap();
    let free = default_free_list().without_fixed(&fixed);

    assert_eq!(engine.free_chords(&fixed).unwrap().len(), 90);

    let map = engine.build(&fixed, &free).unwrap();
    assert_eq!(map.len(), 85);
    assert_eq!(map.chord_for(" "), Some(Chord::parse("....O .....").unwrap()));
}

#[test]
fn test_bundled_free_list_conflicts_without_reduction() {
    let err = engine()
        .build(&default_fixed_table().unwrap(), &default_free_list())
        .unwrap_err();
    assert!(matches!(err, ChordError::DuplicateKey(_)));
}

#[test]
fn test_invalid_engine_config() {
    let config = EngineConfig {
        key_count: 10,
        max_chord_size: 11,
    };
    assert!(AssignmentEngine::new(&config, FingerMap::standard()).is_err());
}
