//! Data model for notes, modes and the guitar's fixed layout.
//!
//! Everything here is immutable static data: the 12 pitch classes with their
//! enharmonic spellings, the mode catalog, the standard tuning and the number
//! of frets shown on the diagram.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{FretError, Result};

/// Number of pitch classes in the chromatic cycle.
pub const PITCH_CLASSES: u8 = 12;

/// Number of frets on the diagram, counting the open string as fret 0.
pub const NUM_FRETS: u8 = 15;

/// Standard six-string tuning, highest-pitched string first.
pub const STANDARD_TUNING: [Note; 6] = [Note::E, Note::B, Note::G, Note::D, Note::A, Note::E];

// ═══════════════════════════════════════════════════════════════════════
// Note names
// ═══════════════════════════════════════════════════════════════════════

/// Display name of a pitch class: a single natural name, or a sharp/flat pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NoteName {
    /// Sharp spelling for accidentals, the plain letter otherwise
    pub primary: &'static str,
    /// Flat spelling, present only for the five accidentals
    pub alternate: Option<&'static str>,
}

impl NoteName {
    const fn natural(name: &'static str) -> Self {
        Self { primary: name, alternate: None }
    }

    const fn pair(sharp: &'static str, flat: &'static str) -> Self {
        Self { primary: sharp, alternate: Some(flat) }
    }

    /// Whether this pitch class has two spellings.
    pub fn is_enharmonic(&self) -> bool {
        self.alternate.is_some()
    }

    /// All spellings of this pitch class, primary first.
    pub fn spellings(&self) -> impl Iterator<Item = &'static str> {
        std::iter::once(self.primary).chain(self.alternate)
    }

    /// True if `spelling` is one of this name's spellings, verbatim.
    pub fn matches(&self, spelling: &str) -> bool {
        self.spellings().any(|s| s == spelling)
    }
}

impl fmt::Display for NoteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.alternate {
            Some(alt) => write!(f, "{}/{}", self.primary, alt),
            None => f.write_str(self.primary),
        }
    }
}

/// Canonical names indexed by pitch class (C = 0).
const NOTE_NAMES: [NoteName; PITCH_CLASSES as usize] = [
    NoteName::natural("C"),
    NoteName::pair("C#", "Db"),
    NoteName::natural("D"),
    NoteName::pair("D#", "Eb"),
    NoteName::natural("E"),
    NoteName::natural("F"),
    NoteName::pair("F#", "Gb"),
    NoteName::natural("G"),
    NoteName::pair("G#", "Ab"),
    NoteName::natural("A"),
    NoteName::pair("A#", "Bb"),
    NoteName::natural("B"),
];

// ═══════════════════════════════════════════════════════════════════════
// Note (pitch class)
// ═══════════════════════════════════════════════════════════════════════

/// A pitch class in 0..12. Octave information is deliberately absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Note(u8);

impl Note {
    pub const C: Note = Note(0);
    pub const C_SHARP: Note = Note(1);
    pub const D: Note = Note(2);
    pub const D_SHARP: Note = Note(3);
    pub const E: Note = Note(4);
    pub const F: Note = Note(5);
    pub const F_SHARP: Note = Note(6);
    pub const G: Note = Note(7);
    pub const G_SHARP: Note = Note(8);
    pub const A: Note = Note(9);
    pub const A_SHARP: Note = Note(10);
    pub const B: Note = Note(11);

    /// The chromatic cycle starting at C.
    pub const ALL: [Note; PITCH_CLASSES as usize] = [
        Note::C, Note::C_SHARP, Note::D, Note::D_SHARP, Note::E, Note::F,
        Note::F_SHARP, Note::G, Note::G_SHARP, Note::A, Note::A_SHARP, Note::B,
    ];

    /// Build a note from any integer, reducing it modulo 12.
    pub fn from_pitch_class(pc: u32) -> Self {
        Note((pc % PITCH_CLASSES as u32) as u8)
    }

    /// Position in the chromatic cycle (C = 0, B = 11).
    pub fn pitch_class(self) -> u8 {
        self.0
    }

    /// Canonical display name.
    pub fn name(self) -> NoteName {
        NOTE_NAMES[self.0 as usize]
    }

    /// Move up by `semitones`, wrapping around the octave.
    pub fn transpose(self, semitones: u32) -> Self {
        Note::from_pitch_class(self.0 as u32 + semitones % PITCH_CLASSES as u32)
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.name(), f)
    }
}

/// Accepts a bare name ("E"), either spelling of an accidental ("C#", "Db"),
/// or one of the five canonical pairs ("C#/Db"). Letter case is normalized,
/// so "db" and "DB" resolve like "Db". Any other slash form is rejected.
impl FromStr for Note {
    type Err = FretError;

    fn from_str(s: &str) -> Result<Self> {
        let pc = match s.split_once('/') {
            Some((sharp, flat)) => {
                let (sharp, flat) = (normalize_spelling(sharp), normalize_spelling(flat));
                NOTE_NAMES
                    .iter()
                    .position(|name| name.primary == sharp && name.alternate == Some(flat.as_str()))
            }
            None => {
                let spelling = normalize_spelling(s);
                NOTE_NAMES.iter().position(|name| name.matches(&spelling))
            }
        };
        pc.map(|pc| Note(pc as u8))
            .ok_or_else(|| FretError::UnknownNote(s.to_string()))
    }
}

/// Uppercase the letter, lowercase the accidental ("bB" -> "Bb").
fn normalize_spelling(raw: &str) -> String {
    let mut chars = raw.trim().chars();
    match chars.next() {
        Some(letter) => {
            let mut out = String::with_capacity(raw.len());
            out.push(letter.to_ascii_uppercase());
            out.push_str(&chars.as_str().to_ascii_lowercase());
            out
        }
        None => String::new(),
    }
}

impl Serialize for Note {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Note {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Modes
// ═══════════════════════════════════════════════════════════════════════

/// The fixed catalog of scale patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    #[serde(rename = "Major (Ionian)")]
    Major,
    Dorian,
    Phrygian,
    Lydian,
    Mixolydian,
    #[serde(rename = "Minor (Aeolian)")]
    Minor,
    Locrian,
    #[serde(rename = "Pentatonic Major")]
    PentatonicMajor,
    #[serde(rename = "Pentatonic Minor")]
    PentatonicMinor,
    Blues,
}

impl Mode {
    /// Catalog order. Listings and selectors present modes in this order.
    pub const ALL: [Mode; 10] = [
        Mode::Major,
        Mode::Dorian,
        Mode::Phrygian,
        Mode::Lydian,
        Mode::Mixolydian,
        Mode::Minor,
        Mode::Locrian,
        Mode::PentatonicMajor,
        Mode::PentatonicMinor,
        Mode::Blues,
    ];

    /// Catalog display name.
    pub fn name(self) -> &'static str {
        match self {
            Mode::Major => "Major (Ionian)",
            Mode::Dorian => "Dorian",
            Mode::Phrygian => "Phrygian",
            Mode::Lydian => "Lydian",
            Mode::Mixolydian => "Mixolydian",
            Mode::Minor => "Minor (Aeolian)",
            Mode::Locrian => "Locrian",
            Mode::PentatonicMajor => "Pentatonic Major",
            Mode::PentatonicMinor => "Pentatonic Minor",
            Mode::Blues => "Blues",
        }
    }

    /// Semitone offsets from the root, strictly increasing, starting at 0.
    /// The order here is the display order of the scale's notes.
    pub fn intervals(self) -> &'static [u8] {
        match self {
            Mode::Major => &[0, 2, 4, 5, 7, 9, 11],
            Mode::Dorian => &[0, 2, 3, 5, 7, 9, 10],
            Mode::Phrygian => &[0, 1, 3, 5, 7, 8, 10],
            Mode::Lydian => &[0, 2, 4, 6, 7, 9, 11],
            Mode::Mixolydian => &[0, 2, 4, 5, 7, 9, 10],
            Mode::Minor => &[0, 2, 3, 5, 7, 8, 10],
            Mode::Locrian => &[0, 1, 3, 5, 6, 8, 10],
            Mode::PentatonicMajor => &[0, 2, 4, 7, 9],
            Mode::PentatonicMinor => &[0, 3, 5, 7, 10],
            Mode::Blues => &[0, 3, 5, 6, 7, 10],
        }
    }

    /// One-sentence character sketch shown under the diagram.
    pub fn description(self) -> &'static str {
        match self {
            Mode::Major => "The standard major scale with a bright, happy sound.",
            Mode::Dorian => "Minor scale with a raised 6th, has a jazzy, slightly minor sound.",
            Mode::Phrygian => {
                "Dark minor scale with a lowered 2nd, has a Spanish or Middle Eastern feel."
            }
            Mode::Lydian => "Major scale with a raised 4th, has a dreamy, floating quality.",
            Mode::Mixolydian => "Major scale with a lowered 7th, common in rock, blues and jazz.",
            Mode::Minor => "The standard natural minor scale with a melancholic sound.",
            Mode::Locrian => "The darkest mode with a lowered 2nd and 5th, used in jazz and metal.",
            Mode::PentatonicMajor => {
                "Five-note scale derived from the major scale, very common in folk and pop."
            }
            Mode::PentatonicMinor => {
                "Five-note scale derived from the minor scale, popular in rock, blues, and many forms of music."
            }
            Mode::Blues => {
                "Minor pentatonic with an added b5 'blue note', the foundation of blues music."
            }
        }
    }

    /// Short spellings accepted by `from_str`, already slugged.
    fn aliases(self) -> &'static [&'static str] {
        match self {
            Mode::Major => &["major", "ionian"],
            Mode::Dorian => &["dorian"],
            Mode::Phrygian => &["phrygian"],
            Mode::Lydian => &["lydian"],
            Mode::Mixolydian => &["mixolydian", "mixo"],
            Mode::Minor => &["minor", "aeolian", "naturalminor"],
            Mode::Locrian => &["locrian"],
            Mode::PentatonicMajor => &["pentatonicmajor", "majorpentatonic", "pentamajor"],
            Mode::PentatonicMinor => &["pentatonicminor", "minorpentatonic", "pentaminor"],
            Mode::Blues => &["blues"],
        }
    }

    /// Exact catalog-name lookup.
    pub fn from_name(name: &str) -> Result<Self> {
        Mode::ALL
            .into_iter()
            .find(|m| m.name() == name)
            .ok_or_else(|| FretError::UnknownMode(name.to_string()))
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Lenient lookup for command-line input: catalog names in any case, or a
/// short alias such as "minor", "mixo" or "minor-pentatonic".
impl FromStr for Mode {
    type Err = FretError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = slug(s);
        if wanted.is_empty() {
            return Err(FretError::UnknownMode(s.to_string()));
        }
        Mode::ALL
            .into_iter()
            .find(|m| slug(m.name()) == wanted || m.aliases().contains(&wanted.as_str()))
            .ok_or_else(|| FretError::UnknownMode(s.to_string()))
    }
}

fn slug(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
