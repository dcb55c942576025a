// Phonetic regularity matcher
// Scores how strongly each component predicts a character's readings

use crate::decompose::Decomposer;
use crate::tables::RefTables;
use crate::types::{PhoneticRegularity, PhoneticValue, Pinyin};
use rustc_hash::FxHashMap;
use std::sync::Arc;

/// Regularity bands are categories, not an ordinal scale:
/// 1 exact match, 2 syllable match, 3 initial match, 4 final match, 0 none.
/// Syllable equality is checked before initial and final equality, so a
/// same-syllable pair can never land in bands 3 or 4.
fn regularity_band(candidate: &Pinyin, target: &Pinyin) -> u8 {
    if candidate.syllable == target.syllable {
        return if candidate.tone == target.tone { 1 } else { 2 };
    }
    if !candidate.initial().is_empty() && candidate.initial() == target.initial() {
        return 3;
    }
    if candidate.final_part() == target.final_part() {
        return 4;
    }
    0
}

/// Aligns a character's component sequence against the pinyin of each
/// component, once per reading of the character itself.
#[derive(Clone)]
pub struct PhoneticMatcher {
    tables: Arc<RefTables>,
    decomposer: Decomposer,
}

impl PhoneticMatcher {
    pub fn new(tables: Arc<RefTables>) -> Self {
        let decomposer = Decomposer::new(Arc::clone(&tables));
        Self { tables, decomposer }
    }

    /// Determine the phonetic regularity of `character`, keyed by each of
    /// its readings. A character without readings yields an empty map.
    ///
    /// The scored sequence is the tier-1 split followed by the expanded
    /// radical split; each component contributes one position per reading
    /// it has, and components without phonetic value (stroke tokens,
    /// unrenderable glyphs, unlisted characters) contribute one `_stroke`
    /// position scoring 0.
    pub fn determine(&self, character: char) -> FxHashMap<String, PhoneticRegularity> {
        let mut results = FxHashMap::default();
        let Some(targets) = self.tables.pinyin.get(&character) else {
            return results;
        };

        let decomposition = self.decomposer.decompose(character);
        let sequence: Vec<_> = decomposition
            .components1
            .iter()
            .chain(decomposition.components2.iter())
            .copied()
            .collect();

        for target in targets {
            let mut result = PhoneticRegularity {
                character,
                component: Vec::new(),
                phonetic_pinyin: Vec::new(),
                regularity: Vec::new(),
            };

            for component in &sequence {
                let readings = component
                    .glyph()
                    .and_then(|g| self.tables.pinyin.get(&g));
                match readings {
                    Some(readings) => {
                        for reading in readings {
                            result.component.push(*component);
                            result.regularity.push(regularity_band(reading, target));
                            result
                                .phonetic_pinyin
                                .push(PhoneticValue::Reading(reading.clone()));
                        }
                    }
                    None => {
                        result.component.push(*component);
                        result.phonetic_pinyin.push(PhoneticValue::Stroke);
                        result.regularity.push(0);
                    }
                }
            }

            results.insert(target.to_string(), result);
        }

        results
    }
}
