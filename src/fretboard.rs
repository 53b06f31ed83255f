//! Fretboard view: every (string, fret) position of the diagram with the
//! note it sounds and how it relates to the selected scale.
//!
//! This is everything a front end needs to draw the board. The SVG and text
//! renderers consume it, and FFI callers receive it as JSON.

use serde::Serialize;
use tracing::debug;

use crate::engine::{self, Scale};
use crate::error::Result;
use crate::model::{Mode, Note, NUM_FRETS, STANDARD_TUNING};

/// Complete diagram data for one root + mode selection.
#[derive(Debug, Clone, Serialize)]
pub struct Fretboard {
    pub root: Note,
    pub mode: Mode,
    /// Scale notes in interval order ("Notes in this scale")
    pub scale_notes: Vec<Note>,
    /// Character sketch of the mode
    pub description: &'static str,
    /// Frets per string, including the open string
    pub num_frets: u8,
    /// Strings from highest-pitched to lowest
    pub strings: Vec<GuitarString>,
}

/// One string of the diagram.
#[derive(Debug, Clone, Serialize)]
pub struct GuitarString {
    /// 0 = highest-pitched string
    pub index: usize,
    /// Open-string note, used as the row label
    pub open: Note,
    pub positions: Vec<FretPosition>,
}

/// A single cell of the diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FretPosition {
    pub string: usize,
    pub fret: u8,
    pub note: Note,
    pub in_scale: bool,
    pub is_root: bool,
    /// 1-based scale degree when `in_scale`
    pub degree: Option<u8>,
}

/// Visual treatment of a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Marker {
    Root,
    Scale,
    Plain,
}

impl FretPosition {
    pub fn marker(&self) -> Marker {
        match (self.in_scale, self.is_root) {
            (true, true) => Marker::Root,
            (true, false) => Marker::Scale,
            _ => Marker::Plain,
        }
    }
}

impl Fretboard {
    /// Compute the full 6 × 15 board for a scale.
    pub fn new(root: Note, mode: Mode) -> Self {
        let scale = Scale::new(root, mode);
        let scale_notes = scale.notes();

        let strings = STANDARD_TUNING
            .iter()
            .enumerate()
            .map(|(index, &open)| GuitarString {
                index,
                open,
                positions: (0..NUM_FRETS)
                    .map(|fret| {
                        let note = engine::note_at_position(open, fret as u32);
                        FretPosition {
                            string: index,
                            fret,
                            note,
                            in_scale: engine::is_in_scale(note, &scale_notes),
                            is_root: engine::is_root(note, root),
                            degree: scale.degree(note),
                        }
                    })
                    .collect(),
            })
            .collect();

        debug!(%root, %mode, "built fretboard");

        Self {
            root,
            mode,
            scale_notes,
            description: mode.description(),
            num_frets: NUM_FRETS,
            strings,
        }
    }

    /// Resolve a root spelling and mode name, then build the board.
    pub fn from_names(root: &str, mode: &str) -> Result<Self> {
        let scale = Scale::from_names(root, mode)?;
        Ok(Self::new(scale.root, scale.mode))
    }

    pub fn scale(&self) -> Scale {
        Scale::new(self.root, self.mode)
    }

    /// "Current Scale" caption, e.g. "A Pentatonic Minor".
    pub fn title(&self) -> String {
        self.scale().to_string()
    }

    /// Comma-separated scale notes in display order.
    pub fn scale_notes_label(&self) -> String {
        self.scale_notes
            .iter()
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn position(&self, string: usize, fret: u8) -> Option<&FretPosition> {
        self.strings.get(string)?.positions.get(fret as usize)
    }

    /// All positions, string by string.
    pub fn positions(&self) -> impl Iterator<Item = &FretPosition> {
        self.strings.iter().flat_map(|s| s.positions.iter())
    }
}

/// Serialize a Fretboard to pretty-printed JSON.
pub fn fretboard_to_json(board: &Fretboard) -> Result<String> {
    Ok(serde_json::to_string_pretty(board)?)
}
