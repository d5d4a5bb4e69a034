use crate::chord::Chord;
use crate::error::{CfResult, ChordError};
use crate::mapping::{ChordMap, Mapping};
use crate::tables::MacroDef;

/// A macro whose keys have been resolved to their chords.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Macro {
    pub trigger: Chord,
    pub steps: Vec<Mapping>,
}

impl Macro {
    /// The typed text, control tokens included verbatim.
    pub fn text(&self) -> String {
        self.steps.iter().map(|m| m.key.as_str()).collect()
    }
}

pub fn resolve(def: &MacroDef, map: &ChordMap) -> CfResult<Macro> {
    if let Some(owner) = map.key_for(&def.trigger) {
        return Err(ChordError::DuplicateChord {
            chord: def.trigger.to_string(),
            first: owner.to_string(),
            second: format!("macro '{}'", def.keys.concat()),
        });
    }

    let steps = def
        .keys
        .iter()
        .map(|key| {
            map.get(key)
                .cloned()
                .ok_or_else(|| ChordError::UnmappedCharacter {
                    character: key.clone(),
                    word: def.keys.concat(),
                })
        })
        .collect::<CfResult<Vec<_>>>()?;

    Ok(Macro {
        trigger: def.trigger,
        steps,
    })
}

/// Resolves every definition; triggers must be distinct.
pub fn resolve_all(defs: &[MacroDef], map: &ChordMap) -> CfResult<Vec<Macro>> {
    let mut out: Vec<Macro> = Vec::with_capacity(defs.len());
    for def in defs {
        let resolved = resolve(def, map)?;
        if let Some(prev) = out.iter().find(|m| m.trigger == resolved.trigger) {
            return Err(ChordError::DuplicateChord {
                chord: resolved.trigger.to_string(),
                first: format!("macro '{}'", prev.text()),
                second: format!("macro '{}'", resolved.text()),
            });
        }
        out.push(resolved);
    }
    Ok(out)
}
