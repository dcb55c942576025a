// Embedded reference data
// Tables are compiled into the binary and parsed once at engine construction

/// One-level decomposition corpus (tier 1), in corpus order
pub const ONCE_DATA: &str = include_str!("../data/once.txt");

/// Radical decomposition table (tier 2)
pub const RADICALS_DATA: &str = include_str!("../data/radicals.txt");

/// Graphical decomposition table (tier 3)
pub const GRAPHICAL_DATA: &str = include_str!("../data/graphical.txt");

/// Pinyin readings, doubling as the phonetic-component rule set
pub const PINYIN_DATA: &str = include_str!("../data/pinyin.txt");

/// Character frequency list
pub const FREQUENCY_DATA: &str = include_str!("../data/frequency.txt");

/// Traditional to simplified variant map
pub const TRADITIONAL_DATA: &str = include_str!("../data/traditional.txt");

/// Radical meaning glosses
pub const RADICAL_MEANINGS_DATA: &str = include_str!("../data/radical_meanings.txt");

/// Data loader utility
pub struct DataLoader;

impl DataLoader {
    pub fn once_data() -> &'static str {
        ONCE_DATA
    }

    pub fn radicals_data() -> &'static str {
        RADICALS_DATA
    }

    pub fn graphical_data() -> &'static str {
        GRAPHICAL_DATA
    }

    pub fn pinyin_data() -> &'static str {
        PINYIN_DATA
    }

    pub fn frequency_data() -> &'static str {
        FREQUENCY_DATA
    }

    pub fn traditional_data() -> &'static str {
        TRADITIONAL_DATA
    }

    pub fn radical_meanings_data() -> &'static str {
        RADICAL_MEANINGS_DATA
    }

    /// Get all data info
    pub fn info() -> DataInfo {
        DataInfo {
            once_size: ONCE_DATA.len(),
            radicals_size: RADICALS_DATA.len(),
            graphical_size: GRAPHICAL_DATA.len(),
            pinyin_size: PINYIN_DATA.len(),
            frequency_size: FREQUENCY_DATA.len(),
            total_size: ONCE_DATA.len()
                + RADICALS_DATA.len()
                + GRAPHICAL_DATA.len()
                + PINYIN_DATA.len()
                + FREQUENCY_DATA.len()
                + TRADITIONAL_DATA.len()
                + RADICAL_MEANINGS_DATA.len(),
        }
    }
}

/// Information about embedded data
#[derive(Debug, Clone)]
pub struct DataInfo {
    pub once_size: usize,
    pub radicals_size: usize,
    pub graphical_size: usize,
    pub pinyin_size: usize,
    pub frequency_size: usize,
    /// Total size of all embedded tables in bytes
    pub total_size: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_loaded() {
        assert!(!ONCE_DATA.is_empty(), "once table should be embedded");
        assert!(!RADICALS_DATA.is_empty(), "radical table should be embedded");
        assert!(
            !GRAPHICAL_DATA.is_empty(),
            "graphical table should be embedded"
        );
        assert!(!PINYIN_DATA.is_empty(), "pinyin table should be embedded");
    }

    #[test]
    fn test_data_sizes() {
        let info = DataLoader::info();
        assert!(info.once_size > 0);
        assert!(info.pinyin_size > 0);
        assert!(info.total_size >= info.once_size + info.radicals_size + info.graphical_size);
    }
}
