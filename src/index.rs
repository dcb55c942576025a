// Reverse component index
// Maps each component to the characters whose tier-1 split contains it

use crate::tables::RefTables;
use rustc_hash::FxHashMap;

/// Reverse mapping component -> owning characters, built exactly once from
/// the once-table domain. Buckets keep corpus build order, so reverse
/// queries are deterministic across runs.
///
/// Indexing deliberately stops at tier 1: the index reflects primary
/// structural components, not fully expanded strokes.
pub struct ComponentIndex {
    buckets: FxHashMap<char, Vec<char>>,
}

impl ComponentIndex {
    /// Build the index by iterating every once-table entry in corpus order
    pub fn build(tables: &RefTables) -> Self {
        let mut buckets: FxHashMap<char, Vec<char>> = FxHashMap::default();

        for &character in &tables.once_order {
            for component in &tables.once[&character] {
                let Some(glyph) = component.glyph() else {
                    // Unrenderable placeholders are not queryable components
                    continue;
                };
                let bucket = buckets.entry(glyph).or_default();
                if !bucket.contains(&character) {
                    bucket.push(character);
                }
            }
        }

        Self { buckets }
    }

    /// True iff `component` occurs in at least one tier-1 decomposition
    pub fn contains(&self, component: char) -> bool {
        self.buckets.contains_key(&component)
    }

    /// Characters containing `component`, in build order; empty when the
    /// component is unknown (absence is not an error)
    pub fn characters_with(&self, component: char) -> &[char] {
        self.buckets
            .get(&component)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of distinct indexed components
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::RefTables;

    fn index() -> (RefTables, ComponentIndex) {
        let tables = RefTables::load().unwrap();
        let index = ComponentIndex::build(&tables);
        (tables, index)
    }

    #[test]
    fn test_build_order_is_corpus_order() {
        let (_, index) = index();
        assert_eq!(
            index.characters_with('鼎'),
            &['鼎', '鼐', '鼏', '鐤', '鼑']
        );
    }

    #[test]
    fn test_unknown_component_yields_empty_slice() {
        let (_, index) = index();
        assert!(index.characters_with('$').is_empty());
        assert!(!index.contains('$'));
    }

    #[test]
    fn test_unrenderable_components_not_indexed() {
        let (tables, index) = index();
        // 爱 and 青 carry placeholder slots; placeholders must not create
        // buckets, and every bucket owner comes from the corpus
        for owners in index.buckets.values() {
            assert!(!owners.is_empty());
            assert!(owners.iter().all(|c| tables.once.contains_key(c)));
        }
    }

    #[test]
    fn test_index_consistency_law() {
        // X in characters_with(C) iff C in components1(X), over the corpus
        let (tables, index) = index();
        for &character in &tables.once_order {
            for component in &tables.once[&character] {
                if let Some(glyph) = component.glyph() {
                    assert!(
                        index.characters_with(glyph).contains(&character),
                        "{} missing under {}",
                        character,
                        glyph
                    );
                }
            }
        }
        for (&component, owners) in &index.buckets {
            for owner in owners {
                let found = tables.once[owner]
                    .iter()
                    .any(|c| c.glyph() == Some(component));
                assert!(found, "{} wrongly indexed under {}", owner, component);
            }
        }
    }
}
