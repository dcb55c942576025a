// Reference table loader
// Parses the embedded text tables into one immutable RefTables value

use crate::data::DataLoader;
use crate::types::{Component, FrequencyEntry, Pinyin, TableError};
use rustc_hash::FxHashMap;

/// The four core reference tables plus the flat lookup tables, loaded once
/// and immutable afterwards. Engine components share this via `Arc`.
#[derive(Debug, Default)]
pub struct RefTables {
    /// Tier-1 splits: character -> most significant component sequence
    pub once: FxHashMap<char, Vec<Component>>,

    /// Corpus order of the once table; fixes the component-index build order
    pub once_order: Vec<char>,

    /// Tier-2 splits: character -> one-level radical sequence
    pub radical: FxHashMap<char, Vec<Component>>,

    /// Tier-3 splits: character -> one-level graphical sequence
    pub graphical: FxHashMap<char, Vec<Component>>,

    /// Readings per character, primary first
    pub pinyin: FxHashMap<char, Vec<Pinyin>>,

    /// Frequency list keyed by character
    pub frequency: FxHashMap<char, FrequencyEntry>,

    /// Frequency list keyed by list position
    pub frequency_by_position: FxHashMap<u32, char>,

    /// Traditional -> simplified variant map
    pub traditional: FxHashMap<char, char>,

    /// Radical -> gloss
    pub radical_meanings: FxHashMap<char, String>,
}

impl RefTables {
    /// Parse all embedded tables. This is the only fallible step of engine
    /// construction; every later query is total.
    pub fn load() -> Result<Self, TableError> {
        let (once, once_order) = parse_decomposition(DataLoader::once_data(), "once.txt")?;
        let (radical, _) = parse_decomposition(DataLoader::radicals_data(), "radicals.txt")?;
        let (graphical, _) = parse_decomposition(DataLoader::graphical_data(), "graphical.txt")?;
        let pinyin = parse_pinyin(DataLoader::pinyin_data(), "pinyin.txt")?;
        let (frequency, frequency_by_position) =
            parse_frequency(DataLoader::frequency_data(), "frequency.txt")?;
        let traditional = parse_char_map(DataLoader::traditional_data(), "traditional.txt")?;
        let radical_meanings =
            parse_string_map(DataLoader::radical_meanings_data(), "radical_meanings.txt")?;

        Ok(Self {
            once,
            once_order,
            radical,
            graphical,
            pinyin,
            frequency,
            frequency_by_position,
            traditional,
            radical_meanings,
        })
    }
}

/// Lines worth parsing: skips blanks and `#` comments
fn data_lines(src: &str) -> impl Iterator<Item = (usize, &str)> {
    src.lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty() && !l.starts_with('#'))
}

/// Split a `X:rest` line into its key character and the rest
fn split_entry<'a>(
    line: &'a str,
    file: &'static str,
    line_no: usize,
) -> Result<(char, &'a str), TableError> {
    let (key, rest) = line
        .split_once(':')
        .ok_or(TableError::InvalidLine { file, line: line_no })?;
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Ok((ch, rest)),
        _ => Err(TableError::InvalidLine { file, line: line_no }),
    }
}

/// Parse one component token: a single glyph, or an all-digit placeholder id
/// for a glyph the source set cannot render
fn parse_component(token: &str, file: &'static str, line_no: usize) -> Result<Component, TableError> {
    if !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()) {
        return Ok(Component::Unrenderable);
    }
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Ok(Component::from_glyph(ch)),
        _ => Err(TableError::InvalidComponent {
            file,
            line: line_no,
            token: token.to_string(),
        }),
    }
}

/// Parse a decomposition table, keeping file order for index construction
fn parse_decomposition(
    src: &str,
    file: &'static str,
) -> Result<(FxHashMap<char, Vec<Component>>, Vec<char>), TableError> {
    let mut table = FxHashMap::default();
    let mut order = Vec::new();

    for (line_no, line) in data_lines(src) {
        let (ch, rest) = split_entry(line, file, line_no)?;
        let components = rest
            .split(',')
            .map(|t| parse_component(t.trim(), file, line_no))
            .collect::<Result<Vec<_>, _>>()?;
        if components.is_empty() {
            return Err(TableError::InvalidLine { file, line: line_no });
        }
        if table.insert(ch, components).is_none() {
            order.push(ch);
        }
    }

    Ok((table, order))
}

fn parse_pinyin(
    src: &str,
    file: &'static str,
) -> Result<FxHashMap<char, Vec<Pinyin>>, TableError> {
    let mut table = FxHashMap::default();

    for (line_no, line) in data_lines(src) {
        let (ch, rest) = split_entry(line, file, line_no)?;
        let readings = rest
            .split(',')
            .map(Pinyin::parse)
            .collect::<Result<Vec<_>, _>>()?;
        if readings.is_empty() {
            return Err(TableError::InvalidLine { file, line: line_no });
        }
        table.insert(ch, readings);
    }

    Ok(table)
}

fn parse_frequency(
    src: &str,
    file: &'static str,
) -> Result<(FxHashMap<char, FrequencyEntry>, FxHashMap<u32, char>), TableError> {
    let mut by_char = FxHashMap::default();
    let mut by_position = FxHashMap::default();

    for (line_no, line) in data_lines(src) {
        let fields: Vec<&str> = line.split('\t').collect();
        // Meaning may be empty and is then absent entirely
        if fields.len() < 5 {
            return Err(TableError::InvalidFrequency { file, line: line_no });
        }
        let number: u32 = fields[0]
            .parse()
            .map_err(|_| TableError::InvalidFrequency { file, line: line_no })?;
        let mut key_chars = fields[1].chars();
        let (Some(character), None) = (key_chars.next(), key_chars.next()) else {
            return Err(TableError::InvalidFrequency { file, line: line_no });
        };
        let count: u64 = fields[2]
            .parse()
            .map_err(|_| TableError::InvalidFrequency { file, line: line_no })?;

        let entry = FrequencyEntry {
            number,
            character,
            count,
            percentage: fields[3].to_string(),
            pinyin: fields[4].to_string(),
            meaning: fields.get(5).unwrap_or(&"").to_string(),
        };
        by_position.insert(number, character);
        by_char.insert(character, entry);
    }

    Ok((by_char, by_position))
}

fn parse_char_map(src: &str, file: &'static str) -> Result<FxHashMap<char, char>, TableError> {
    let mut table = FxHashMap::default();

    for (line_no, line) in data_lines(src) {
        let (from, rest) = split_entry(line, file, line_no)?;
        let mut chars = rest.chars();
        let (Some(to), None) = (chars.next(), chars.next()) else {
            return Err(TableError::InvalidLine { file, line: line_no });
        };
        table.insert(from, to);
    }

    Ok(table)
}

fn parse_string_map(src: &str, file: &'static str) -> Result<FxHashMap<char, String>, TableError> {
    let mut table = FxHashMap::default();

    for (line_no, line) in data_lines(src) {
        let (ch, rest) = split_entry(line, file, line_no)?;
        if rest.is_empty() {
            return Err(TableError::InvalidLine { file, line: line_no });
        }
        table.insert(ch, rest.to_string());
    }

    Ok(table)
}
