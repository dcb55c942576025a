// Decomposition engine
// Tiered component lookup with recursive depth-first expansion

use crate::tables::RefTables;
use crate::types::{Component, Decomposition};
use rustc_hash::FxHashMap;
use std::sync::Arc;

/// Recursion ceiling for table expansion. Well-formed corpus data stays far
/// below this; it only matters for malformed cyclic entries, which are then
/// emitted unexpanded instead of recursing forever.
const MAX_DEPTH: usize = 16;

/// The decomposition engine. Pure function of (character, tables); safe to
/// share across threads once constructed.
#[derive(Clone)]
pub struct Decomposer {
    tables: Arc<RefTables>,
}

impl Decomposer {
    pub fn new(tables: Arc<RefTables>) -> Self {
        Self { tables }
    }

    /// Decompose a single character into its three tiers.
    ///
    /// A character absent from a table falls back to the identity sequence
    /// `[character]` on that tier; this applies uniformly to untabulated
    /// Hanzi and to non-Hanzi input.
    ///
    /// # Example
    /// ```
    /// # use hanzi_decomp::HanziDecomposer;
    /// let engine = HanziDecomposer::new().unwrap();
    /// let dec = engine.decompose('a');
    /// assert_eq!(dec.components1, dec.components3);
    /// ```
    pub fn decompose(&self, character: char) -> Decomposition {
        Decomposition {
            character,
            components1: self.tier1(character),
            components2: self.expand_tier(&self.tables.radical, character),
            components3: self.expand_tier(&self.tables.graphical, character),
        }
    }

    /// Decompose every distinct character of `text`. Results are identical
    /// to per-character `decompose` calls; duplicates collapse to one key.
    pub fn decompose_many(&self, text: &str) -> FxHashMap<char, Decomposition> {
        let mut results = FxHashMap::default();
        for ch in text.chars() {
            results
                .entry(ch)
                .or_insert_with(|| self.decompose(ch));
        }
        results
    }

    /// Tier 1 is a single lookup, never expanded
    fn tier1(&self, character: char) -> Vec<Component> {
        match self.tables.once.get(&character) {
            Some(components) => components.clone(),
            None => vec![Component::from_glyph(character)],
        }
    }

    /// Tiers 2 and 3: look up the entry and flatten it depth-first,
    /// left-to-right, replacing each component that has its own entry with
    /// that entry's expansion
    fn expand_tier(&self, table: &FxHashMap<char, Vec<Component>>, character: char) -> Vec<Component> {
        match table.get(&character) {
            Some(entry) => {
                let mut out = Vec::with_capacity(entry.len());
                for component in entry {
                    self.expand_into(table, *component, 0, &mut out);
                }
                out
            }
            None => vec![Component::from_glyph(character)],
        }
    }

    fn expand_into(
        &self,
        table: &FxHashMap<char, Vec<Component>>,
        component: Component,
        depth: usize,
        out: &mut Vec<Component>,
    ) {
        if depth < MAX_DEPTH {
            if let Component::Char(ch) = component {
                if let Some(entry) = table.get(&ch) {
                    for sub in entry {
                        self.expand_into(table, *sub, depth + 1, out);
                    }
                    return;
                }
            }
        }
        // Atomic radical, stroke token, unrenderable glyph, or depth limit
        out.push(component);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::RefTables;

    fn decomposer() -> Decomposer {
        Decomposer::new(Arc::new(RefTables::load().unwrap()))
    }

    fn glyphs(components: &[Component]) -> Vec<String> {
        components.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_unknown_input_is_identity_on_all_tiers() {
        let dec = decomposer().decompose('a');
        assert_eq!(dec.character, 'a');
        assert_eq!(dec.components1, vec![Component::Char('a')]);
        assert_eq!(dec.components2, vec![Component::Char('a')]);
        assert_eq!(dec.components3, vec![Component::Char('a')]);
    }

    #[test]
    fn test_atomic_corpus_entry() {
        let dec = decomposer().decompose('焱');
        assert_eq!(glyphs(&dec.components1), vec!["火"]);
        assert_eq!(glyphs(&dec.components2), vec!["火"]);
        assert_eq!(glyphs(&dec.components3), vec!["火"]);
    }

    #[test]
    fn test_tier2_expands_nested_entries() {
        // 友 carries its own radical entry and must be flattened in place
        let dec = decomposer().decompose('爱');
        assert_eq!(glyphs(&dec.components2), vec!["爫", "冖", "𠂇", "又"]);
    }

    #[test]
    fn test_tier3_stops_at_entry_less_primitives() {
        let dec = decomposer().decompose('爱');
        assert_eq!(glyphs(&dec.components3), vec!["爫", "冂", "十", "㇇", "㇏"]);
    }

    #[test]
    fn test_unrenderable_first_slot_preserved() {
        let dec = decomposer().decompose('爱');
        assert_eq!(
            glyphs(&dec.components1),
            vec!["No glyph available", "友"]
        );
    }

    #[test]
    fn test_variants_are_independent_keys() {
        let engine = decomposer();
        let simp = engine.decompose('爱');
        let trad = engine.decompose('愛');
        assert_eq!(glyphs(&trad.components1), vec!["No glyph available", "夂"]);
        assert_eq!(glyphs(&trad.components2), vec!["爫", "冖", "心", "夂"]);
        assert_ne!(simp.components2, trad.components2);
    }

    #[test]
    fn test_decompose_many_collapses_duplicates() {
        let engine = decomposer();
        let results = engine.decompose_many("好好学");
        assert_eq!(results.len(), 2);
        assert_eq!(results[&'好'], engine.decompose('好'));
    }

    #[test]
    fn test_cyclic_table_data_terminates() {
        // Malformed tables that point back at themselves must not recurse
        // forever; the depth guard emits the component unexpanded.
        let mut tables = RefTables::default();
        tables
            .radical
            .insert('甲', vec![Component::Char('申')]);
        tables
            .radical
            .insert('申', vec![Component::Char('甲')]);
        let engine = Decomposer::new(Arc::new(tables));
        let dec = engine.decompose('甲');
        assert!(!dec.components2.is_empty());
        assert!(dec.components2.len() <= MAX_DEPTH + 1);
    }
}
