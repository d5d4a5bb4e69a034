//! C source emitted for the keyboard firmware.

use crate::chord::Chord;
use crate::error::CfResult;
use crate::keycodes::ScancodeTable;
use crate::macros::Macro;
use crate::mapping::{display_key, ChordMap};

// Chords are packed into the low bits of a 16-bit int.
fn literal(chord: &Chord) -> String {
    format!("0b000000{}", chord.encode())
}

/// The `chordMap` array, ordered by chord identifier.
///
/// Fails with `MissingScancode` if any mapped key has no keystroke.
pub fn render_chord_table(map: &ChordMap, scancodes: &ScancodeTable) -> CfResult<String> {
    let mut out = format!("static const int chordMapSize = {};\n", map.len());
    out.push_str("Keystroke chordMap[chordMapSize] = {\n");

    for m in map.sorted_by_identifier() {
        let ks = scancodes.lookup(&m.key)?;
        out.push_str(&format!(
            "  {{ {}, {:<6}, 0x{:02X} }}, /* {} */\n",
            literal(&m.chord),
            ks.modifier.to_string(),
            ks.usage,
            display_key(&m.key)
        ));
    }

    out.push_str("};\n");
    Ok(out)
}

/// A `handleMacros` switch that presses and releases each step in turn.
pub fn render_macro_switch(macros: &[Macro]) -> String {
    let mut out = String::from("void handleMacros(int chord) {\n");
    out.push_str("  switch (chord) {\n");

    for mac in macros {
        out.push_str(&format!("    // {}\n", mac.text()));
        out.push_str(&format!("    case {}:\n", literal(&mac.trigger)));
        for step in &mac.steps {
            let code = literal(&step.chord);
            out.push_str(&format!("      pressChord({});\n", code));
            out.push_str(&format!("      releaseChord({});\n", code));
        }
        out.push_str("      break;\n");
    }

    out.push_str("  }\n}\n");
    out
}
