//! Scale engine: pure functions from (root, mode) and (string, fret) to
//! musical facts.
//!
//! All arithmetic happens on pitch classes, so enharmonic spellings never
//! need to be compared as strings: "C#" and "Db" parse to the same `Note`.

use std::fmt;

use serde::Serialize;

use crate::error::Result;
use crate::model::{Mode, Note};

/// Resolve a note spelling, failing on anything outside the canonical table.
pub fn lookup_note(name: &str) -> Result<Note> {
    name.parse()
}

/// Note sounded by `string_note` stopped at `fret` (fret 0 is the open string).
pub fn note_at_position(string_note: Note, fret: u32) -> Note {
    string_note.transpose(fret)
}

/// Notes of the scale in interval order. Length equals the mode's interval count.
pub fn scale_notes(root: Note, mode: Mode) -> Vec<Note> {
    mode.intervals()
        .iter()
        .map(|&interval| root.transpose(interval as u32))
        .collect()
}

/// Enharmonic-tolerant membership: either spelling of a pitch class matches.
pub fn is_in_scale(note: Note, scale_notes: &[Note]) -> bool {
    scale_notes.contains(&note)
}

/// True when `note` is the root under any of its spellings.
pub fn is_root(note: Note, root: Note) -> bool {
    note == root
}

/// A root plus a mode. Never stored; rebuilt whenever the selection changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Scale {
    pub root: Note,
    pub mode: Mode,
}

impl Scale {
    pub fn new(root: Note, mode: Mode) -> Self {
        Self { root, mode }
    }

    /// Resolve both names, failing fast on either. The mode accepts catalog
    /// names in any case plus the short aliases of `Mode::from_str`.
    pub fn from_names(root: &str, mode: &str) -> Result<Self> {
        Ok(Self::new(lookup_note(root)?, mode.parse()?))
    }

    pub fn notes(&self) -> Vec<Note> {
        scale_notes(self.root, self.mode)
    }

    pub fn contains(&self, note: Note) -> bool {
        self.degree(note).is_some()
    }

    pub fn is_root(&self, note: Note) -> bool {
        is_root(note, self.root)
    }

    /// 1-based scale degree of `note`, or None if it is outside the scale.
    pub fn degree(&self, note: Note) -> Option<u8> {
        let offset = (note.pitch_class() + 12 - self.root.pitch_class()) % 12;
        self.mode
            .intervals()
            .iter()
            .position(|&iv| iv == offset)
            .map(|d| d as u8 + 1)
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.root, self.mode)
    }
}
