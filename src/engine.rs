// Engine facade
// Combines tables, decomposer, component index, and phonetic matcher

use crate::decompose::Decomposer;
use crate::index::ComponentIndex;
use crate::phonetics::PhoneticMatcher;
use crate::tables::RefTables;
use crate::types::{Decomposition, FrequencyEntry, PhoneticRegularity, Pinyin, TableError};
use rustc_hash::FxHashMap;
use std::sync::Arc;

/// The main decomposition engine.
///
/// Construction loads every reference table and builds the reverse
/// component index; a constructed value is fully usable, and no query
/// exists before one. All query methods are `&self` and safe to call
/// concurrently.
pub struct HanziDecomposer {
    tables: Arc<RefTables>,
    decomposer: Decomposer,
    index: ComponentIndex,
    matcher: PhoneticMatcher,
}

impl HanziDecomposer {
    /// Load the embedded tables and build the engine
    pub fn new() -> Result<Self, TableError> {
        Ok(Self::with_tables(Arc::new(RefTables::load()?)))
    }

    /// Build an engine over caller-supplied tables (test isolation,
    /// alternate corpora)
    pub fn with_tables(tables: Arc<RefTables>) -> Self {
        let decomposer = Decomposer::new(Arc::clone(&tables));
        let index = ComponentIndex::build(&tables);
        let matcher = PhoneticMatcher::new(Arc::clone(&tables));
        Self {
            tables,
            decomposer,
            index,
            matcher,
        }
    }

    /// Three-tier decomposition of one character
    pub fn decompose(&self, character: char) -> Decomposition {
        self.decomposer.decompose(character)
    }

    /// Decomposition of every distinct character in `text`
    pub fn decompose_many(&self, text: &str) -> FxHashMap<char, Decomposition> {
        self.decomposer.decompose_many(text)
    }

    /// True iff `component` appears in the tier-1 split of some character
    pub fn component_exists(&self, component: char) -> bool {
        self.index.contains(component)
    }

    /// Characters whose tier-1 split contains `component`, in corpus order
    pub fn characters_with_component(&self, component: char) -> &[char] {
        self.index.characters_with(component)
    }

    /// Phonetic regularity of each component against each reading of
    /// `character`
    pub fn determine_phonetic_regularity(
        &self,
        character: char,
    ) -> FxHashMap<String, PhoneticRegularity> {
        self.matcher.determine(character)
    }

    /// Readings of a character, primary first
    pub fn pinyin(&self, character: char) -> Option<&[Pinyin]> {
        self.tables.pinyin.get(&character).map(Vec::as_slice)
    }

    /// Conventional meaning of a radical
    pub fn radical_meaning(&self, radical: char) -> Option<&str> {
        self.tables.radical_meanings.get(&radical).map(String::as_str)
    }

    /// Frequency record for a character. Traditional input resolves through
    /// the variant map; `None` means the character is not in the list.
    pub fn character_frequency(&self, character: char) -> Option<&FrequencyEntry> {
        let key = self
            .tables
            .traditional
            .get(&character)
            .copied()
            .unwrap_or(character);
        self.tables.frequency.get(&key)
    }

    /// Frequency record by list position
    pub fn character_at_frequency_position(&self, position: u32) -> Option<&FrequencyEntry> {
        let character = self.tables.frequency_by_position.get(&position)?;
        self.tables.frequency.get(character)
    }

    /// The loaded reference tables
    pub fn tables(&self) -> &RefTables {
        &self.tables
    }

    /// Statistics: (corpus size, distinct indexed components)
    pub fn stats(&self) -> (usize, usize) {
        (self.tables.once.len(), self.index.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_creation() {
        let engine = HanziDecomposer::new().unwrap();
        let (corpus, components) = engine.stats();
        assert!(corpus > 0);
        assert!(components > 0);
    }

    #[test]
    fn test_existence_agreement() {
        // component_exists(C) iff characters_with_component(C) is non-empty
        let engine = HanziDecomposer::new().unwrap();
        for probe in ['鼎', '爱', '口', '$', 'a', '氵'] {
            assert_eq!(
                engine.component_exists(probe),
                !engine.characters_with_component(probe).is_empty(),
                "disagreement for {:?}",
                probe
            );
        }
    }

    #[test]
    fn test_with_tables_isolated_engine() {
        let engine = HanziDecomposer::with_tables(Arc::new(RefTables::default()));
        assert_eq!(engine.stats(), (0, 0));
        let dec = engine.decompose('火');
        assert_eq!(dec.components1, dec.components2);
    }

    #[test]
    fn test_traditional_frequency_resolves_to_simplified() {
        let engine = HanziDecomposer::new().unwrap();
        let trad = engine.character_frequency('熱').unwrap();
        let simp = engine.character_frequency('热').unwrap();
        assert_eq!(trad, simp);
        assert_eq!(trad.character, '热');
    }
}
