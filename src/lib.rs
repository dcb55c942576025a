//! # hanzi-decomp: Hanzi Decomposition Engine
//!
//! Decomposes Chinese characters into structural and phonetic constituents
//! using fixed reference tables embedded at compile time.
//!
//! ## Three Decomposition Tiers
//!
//! 1. **Once** - single most significant split (one table lookup)
//! 2. **Radical** - conventional radicals, recursively expanded
//! 3. **Graphical** - base strokes and primitives, finest granularity
//!
//! On top of the tiers sit a reverse component index ("which characters
//! contain component X") and a phonetic regularity matcher that scores each
//! component's reading against the character's own pronunciation.
//!
//! ## Example Usage
//!
//! ```
//! use hanzi_decomp::HanziDecomposer;
//!
//! let engine = HanziDecomposer::new()?;
//!
//! // Tiered decomposition
//! let dec = engine.decompose('爱');
//! assert_eq!(dec.components2.len(), 4);
//!
//! // Reverse component lookup
//! let owners = engine.characters_with_component('鼎');
//!
//! // Phonetic regularity per reading
//! let regularity = engine.determine_phonetic_regularity('低');
//! # Ok::<(), hanzi_decomp::TableError>(())
//! ```
//!
//! ## Architecture
//!
//! - **Reference Tables** - immutable, parsed once from embedded data
//! - **Decomposition Engine** - tiered lookup with recursive expansion
//! - **Component Index** - reverse mapping built once at startup
//! - **Phonetic Matcher** - ordinal regularity scoring (bands 0-4)
//! - **HanziDecomposer** - facade combining all components

pub mod data;
pub mod decompose;
pub mod engine;
pub mod index;
pub mod phonetics;
pub mod tables;
pub mod types;

// Re-export main types for convenience
pub use data::{DataInfo, DataLoader};
pub use decompose::Decomposer;
pub use engine::HanziDecomposer;
pub use index::ComponentIndex;
pub use phonetics::PhoneticMatcher;
pub use tables::RefTables;
pub use types::{
    Component, Decomposition, FrequencyEntry, PhoneticRegularity, PhoneticValue, Pinyin,
    TableError,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
