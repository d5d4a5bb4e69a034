use chordforge::api;
use chordforge::chord::Chord;
use chordforge::config::Config;
use chordforge::error::ChordError;
use chordforge::firmware::{render_chord_table, render_macro_switch};
use chordforge::keycodes::{Keystroke, ScancodeTable};
use chordforge::macros::{resolve, resolve_all};
use chordforge::mapping::{ChordMap, Mapping};
use chordforge::tables::MacroDef;
use regex::Regex;

fn small_map() -> ChordMap {
    ChordMap::from_mappings(vec![
        Mapping::new("l", Chord::parse(".O... .O...").unwrap()),
        Mapping::new("s", Chord::parse("...O. ..O..").unwrap()),
        Mapping::new("RETURN", Chord::parse("...O. .O...").unwrap()),
    ])
    .unwrap()
}

#[test]
fn test_chord_table_layout() {
    let table = render_chord_table(&small_map(), &ScancodeTable::uk_default()).unwrap();
    let lines: Vec<&str> = table.lines().collect();

    assert_eq!(lines[0], "static const int chordMapSize = 3;");
    assert_eq!(lines[1], "Keystroke chordMap[chordMapSize] = {");
    // Ascending identifier: s (0001000100) < RETURN (0001001000) < l (0100001000).
    assert_eq!(lines[2], "  { 0b0000000001000100, NONE  , 0x16 }, /* s */");
    assert_eq!(lines[3], "  { 0b0000000001001000, NONE  , 0x28 }, /* RETURN */");
    assert_eq!(lines[4], "  { 0b0000000100001000, NONE  , 0x0F }, /* l */");
    assert_eq!(lines[5], "};");
}

#[test]
fn test_chord_table_missing_scancode() {
    let mut scancodes = ScancodeTable::default();
    scancodes.insert("l", Keystroke::plain(0x0F));
    let err = render_chord_table(&small_map(), &scancodes).unwrap_err();
    assert!(matches!(err, ChordError::MissingScancode(_)));
}

#[test]
fn test_bundled_chord_table() {
    let map = api::build_chord_map(&Config::default()).unwrap();
    let table = render_chord_table(&map, &ScancodeTable::uk_default()).unwrap();

    let row = Regex::new(r"^  \{ 0b000000[01]{10}, (NONE |SHIFT|ALT_GR) *, 0x[0-9A-F]{2} \}, /\* .+ \*/$")
        .unwrap();
    let rows: Vec<&str> = table.lines().filter(|l| l.starts_with("  {")).collect();
    assert_eq!(rows.len(), map.len());
    for r in &rows {
        assert!(row.is_match(r), "malformed row: {}", r);
    }
    assert!(table.contains("/* SPACE */"));
    assert!(rows[0].ends_with("/* ' */"));
}

#[test]
fn test_macro_switch() {
    let def = MacroDef::typing("..OOO O....", "ls", &["RETURN"]).unwrap();
    let mac = resolve(&def, &small_map()).unwrap();
    assert_eq!(mac.text(), "lsRETURN");

    let out = render_macro_switch(&[mac]);
    let expected = "\
void handleMacros(int chord) {
  switch (chord) {
    // lsRETURN
    case 0b0000000011110000:
      pressChord(0b0000000100001000);
      releaseChord(0b0000000100001000);
      pressChord(0b0000000001000100);
      releaseChord(0b0000000001000100);
      pressChord(0b0000000001001000);
      releaseChord(0b0000000001001000);
      break;
  }
}
";
    assert_eq!(out, expected);
}

#[test]
fn test_macro_with_unmapped_key() {
    let def = MacroDef::typing("..OOO O....", "lz", &[]).unwrap();
    let err = resolve(&def, &small_map()).unwrap_err();
    assert!(matches!(err, ChordError::UnmappedCharacter { ref character, .. } if character == "z"));
}

#[test]
fn test_macro_trigger_collides_with_mapping() {
    let def = MacroDef::typing(".O... .O...", "s", &[]).unwrap();
    assert!(matches!(
        resolve(&def, &small_map()),
        Err(ChordError::DuplicateChord { .. })
    ));
}

#[test]
fn test_macro_triggers_must_be_distinct() {
    let defs = vec![
        MacroDef::typing("..OOO O....", "l", &[]).unwrap(),
        MacroDef::typing("..OOO O....", "s", &[]).unwrap(),
    ];
    assert!(matches!(
        resolve_all(&defs, &small_map()),
        Err(ChordError::DuplicateChord { .. })
    ));
}

#[test]
fn test_bundled_macros_resolve() {
    let config = Config::default();
    let map = api::build_chord_map(&config).unwrap();
    let macros = api::load_macros(&config.tables, &map).unwrap();
    assert_eq!(macros.len(), 4);
    assert_eq!(macros[1].text(), "git statusRETURN");

    let out = render_macro_switch(&macros);
    assert_eq!(out.matches("case ").count(), 4);
    assert_eq!(out.matches("break;").count(), 4);
}
