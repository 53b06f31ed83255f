//! Plain-text fretboard for terminals.
//!
//! Root positions are bracketed `[A]`, other scale notes parenthesised `(C)`,
//! and positions outside the scale are printed bare.

use std::fmt::Write;

use crate::fretboard::{Fretboard, Marker};

/// Wide enough for the longest cell, "[C#/Db]".
const CELL_WIDTH: usize = 7;
const LABEL_WIDTH: usize = 7;

/// Render a Fretboard as a monospace grid followed by the caption lines.
pub fn render_fretboard_to_text(board: &Fretboard) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", board.title());
    out.push('\n');

    // Fret numbers
    let mut header = format!("{:<LABEL_WIDTH$}|", "String");
    for fret in 0..board.num_frets {
        let _ = write!(header, "{:^CELL_WIDTH$}", fret);
    }
    out.push_str(header.trim_end());
    out.push('\n');
    out.push_str(&"-".repeat(LABEL_WIDTH));
    out.push('+');
    out.push_str(&"-".repeat(CELL_WIDTH * board.num_frets as usize));
    out.push('\n');

    for string in &board.strings {
        let mut row = format!("{:<LABEL_WIDTH$}|", string.open.to_string());
        for position in &string.positions {
            let cell = match position.marker() {
                Marker::Root => format!("[{}]", position.note),
                Marker::Scale => format!("({})", position.note),
                Marker::Plain => position.note.to_string(),
            };
            let _ = write!(row, "{:^CELL_WIDTH$}", cell);
        }
        out.push_str(row.trim_end());
        out.push('\n');
    }

    out.push('\n');
    out.push_str("[X] Root Note   (X) Scale Note\n");
    let _ = writeln!(out, "Current Scale: {}", board.title());
    let _ = writeln!(out, "Notes in this scale: {}", board.scale_notes_label());
    let _ = writeln!(out, "About {}: {}", board.mode, board.description);
    out
}
