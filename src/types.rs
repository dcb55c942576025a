// Core type definitions
// Components, decompositions, pinyin values, and table errors

use thiserror::Error;

/// Classic single-stroke ideographs that count as stroke tokens alongside
/// the CJK Strokes block (U+31C0..=U+31E3).
const IDEOGRAPHIC_STROKES: &[char] = &['一', '丨', '丿', '丶', '乙', '亅', '乚', '乛', '乀', '乁'];

/// Check whether a scalar value belongs to the closed stroke-glyph set
#[inline]
pub fn is_stroke(ch: char) -> bool {
    ('\u{31C0}'..='\u{31E3}').contains(&ch) || IDEOGRAPHIC_STROKES.contains(&ch)
}

/// A single element of a decomposition sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    /// A character-valued component (radical or sub-character)
    Char(char),

    /// A member of the closed stroke-glyph set
    Stroke(char),

    /// A component the source glyph set cannot render; serializes to the
    /// literal "No glyph available" at the boundary
    Unrenderable,
}

impl Component {
    /// Classify a glyph as stroke or character component
    #[inline]
    pub fn from_glyph(ch: char) -> Self {
        if is_stroke(ch) {
            Component::Stroke(ch)
        } else {
            Component::Char(ch)
        }
    }

    /// The underlying glyph, if this component has one
    #[inline]
    pub fn glyph(&self) -> Option<char> {
        match self {
            Component::Char(c) | Component::Stroke(c) => Some(*c),
            Component::Unrenderable => None,
        }
    }
}

impl std::fmt::Display for Component {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Component::Char(c) | Component::Stroke(c) => write!(f, "{}", c),
            Component::Unrenderable => write!(f, "No glyph available"),
        }
    }
}

/// One pinyin reading: syllable plus tone digit (1-5, 5 is neutral)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pinyin {
    pub syllable: String,
    pub tone: u8,
}

/// Pinyin initials, digraphs first so longest-prefix matching works
const INITIALS: &[&str] = &[
    "zh", "ch", "sh", "b", "p", "m", "f", "d", "t", "n", "l", "g", "k", "h", "j", "q", "x", "r",
    "z", "c", "s", "y", "w",
];

impl Pinyin {
    /// Parse a reading in `"re4"` form
    pub fn parse(raw: &str) -> Result<Self, TableError> {
        let raw = raw.trim();
        let Some(last) = raw.chars().last() else {
            return Err(TableError::InvalidPinyin {
                value: raw.to_string(),
            });
        };
        match last.to_digit(10) {
            Some(t @ 1..=5) if raw.len() > 1 => Ok(Self {
                syllable: raw[..raw.len() - 1].to_string(),
                tone: t as u8,
            }),
            _ => Err(TableError::InvalidPinyin {
                value: raw.to_string(),
            }),
        }
    }

    /// The initial consonant (zh/ch/sh respected); empty for vowel onsets
    pub fn initial(&self) -> &str {
        for init in INITIALS {
            if self.syllable.starts_with(init) {
                return init;
            }
        }
        ""
    }

    /// The final: everything after the initial
    pub fn final_part(&self) -> &str {
        &self.syllable[self.initial().len()..]
    }
}

impl std::fmt::Display for Pinyin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.syllable, self.tone)
    }
}

/// Three-tier decomposition of a single character
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decomposition {
    /// The character that was decomposed
    pub character: char,

    /// Tier 1: most significant split (single table lookup)
    pub components1: Vec<Component>,

    /// Tier 2: radical split, fully recursively expanded
    pub components2: Vec<Component>,

    /// Tier 3: graphical split, expanded down to strokes and primitives
    pub components3: Vec<Component>,
}

/// The phonetic value assigned to one position of a regularity result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhoneticValue {
    /// A reading of the component taken from the pinyin table
    Reading(Pinyin),

    /// No phonetic value (stroke token, unrenderable glyph, or unlisted
    /// component); serializes to the literal "_stroke"
    Stroke,
}

impl std::fmt::Display for PhoneticValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PhoneticValue::Reading(p) => write!(f, "{}", p),
            PhoneticValue::Stroke => write!(f, "_stroke"),
        }
    }
}

/// Phonetic regularity of a character's components against one of its
/// readings; the three vectors are positionally parallel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneticRegularity {
    /// The analyzed character
    pub character: char,

    /// Component sequence, one position per (component, reading) pair
    pub component: Vec<Component>,

    /// Each position's own reading, or the stroke sentinel
    pub phonetic_pinyin: Vec<PhoneticValue>,

    /// Regularity band per position:
    /// 1 exact, 2 syllable, 3 initial, 4 final, 0 none
    pub regularity: Vec<u8>,
}

/// One record of the character frequency list
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyEntry {
    /// Position in the frequency list
    pub number: u32,

    /// The character (simplified form where one exists)
    pub character: char,

    /// Absolute occurrence count in the source corpus
    pub count: u64,

    /// Cumulative corpus coverage up to this position, as published
    pub percentage: String,

    /// Slash-separated readings, e.g. "hao3/hao4"
    pub pinyin: String,

    /// Slash-separated glosses; may be empty
    pub meaning: String,
}

/// Errors raised while parsing the embedded reference tables
#[derive(Debug, Clone, Error)]
pub enum TableError {
    #[error("{file}:{line}: malformed table line")]
    InvalidLine { file: &'static str, line: usize },

    #[error("invalid pinyin reading '{value}'")]
    InvalidPinyin { value: String },

    #[error("{file}:{line}: invalid component token '{token}'")]
    InvalidComponent {
        file: &'static str,
        line: usize,
        token: String,
    },

    #[error("{file}:{line}: invalid frequency record")]
    InvalidFrequency { file: &'static str, line: usize },
}
