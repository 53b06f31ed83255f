//! Scale engine tests — note lookup, scale construction and membership.

use fretlib::{
    is_in_scale, is_root, lookup_note, note_at_position, scale_notes, FretError, Mode, Note,
    NUM_FRETS,
};
use pretty_assertions::assert_eq;

fn names(notes: &[Note]) -> Vec<String> {
    notes.iter().map(|n| n.to_string()).collect()
}

// ─── Fretboard positions ────────────────────────────────────────────

#[test]
fn note_at_position_matches_chromatic_table() {
    for open in Note::ALL {
        for fret in 0..NUM_FRETS as u32 {
            let expected = Note::ALL[(open.pitch_class() as usize + fret as usize) % 12];
            assert_eq!(note_at_position(open, fret), expected, "{open} fret {fret}");
        }
    }
}

#[test]
fn open_string_is_unchanged() {
    for open in Note::ALL {
        assert_eq!(note_at_position(open, 0), open);
    }
}

#[test]
fn last_fret_wraps_the_octave() {
    let e = lookup_note("E").unwrap();
    let note = note_at_position(e, 14);
    assert_eq!(note.pitch_class(), 6);
    assert_eq!(note.to_string(), "F#/Gb");
}

#[test]
fn lookup_accepts_pairs_and_single_spellings() {
    assert_eq!(lookup_note("C#/Db").unwrap(), Note::C_SHARP);
    assert_eq!(lookup_note("C#").unwrap(), Note::C_SHARP);
    assert_eq!(lookup_note("Db").unwrap(), Note::C_SHARP);
    assert_eq!(note_at_position(lookup_note("A#/Bb").unwrap(), 2), Note::C);
}

#[test]
fn lookup_rejects_unknown_names() {
    assert!(matches!(lookup_note("X#"), Err(FretError::UnknownNote(s)) if s == "X#"));
    assert!(matches!(lookup_note(""), Err(FretError::UnknownNote(_))));
}

// ─── Scales ─────────────────────────────────────────────────────────

#[test]
fn c_major() {
    let notes = scale_notes(Note::C, Mode::from_name("Major (Ionian)").unwrap());
    assert_eq!(names(&notes), vec!["C", "D", "E", "F", "G", "A", "B"]);
}

#[test]
fn a_pentatonic_minor() {
    let notes = scale_notes(lookup_note("A").unwrap(), Mode::from_name("Pentatonic Minor").unwrap());
    assert_eq!(names(&notes), vec!["A", "C", "D", "E", "G"]);
}

#[test]
fn a_blues_includes_the_blue_note() {
    let notes = scale_notes(Note::A, Mode::Blues);
    assert_eq!(names(&notes), vec!["A", "C", "D", "D#/Eb", "E", "G"]);
}

#[test]
fn scale_length_equals_interval_count() {
    for root in Note::ALL {
        for mode in Mode::ALL {
            assert_eq!(scale_notes(root, mode).len(), mode.intervals().len());
        }
    }
}

#[test]
fn scale_notes_are_stable_across_calls() {
    let first = scale_notes(Note::F_SHARP, Mode::Locrian);
    let second = scale_notes(Note::F_SHARP, Mode::Locrian);
    assert_eq!(first, second);
    assert_eq!(first[0], Note::F_SHARP);
}

#[test]
fn root_spelling_does_not_change_the_scale() {
    let sharp = scale_notes(lookup_note("C#").unwrap(), Mode::Dorian);
    let flat = scale_notes(lookup_note("Db").unwrap(), Mode::Dorian);
    let pair = scale_notes(lookup_note("C#/Db").unwrap(), Mode::Dorian);
    assert_eq!(sharp, flat);
    assert_eq!(sharp, pair);
}

#[test]
fn unknown_mode_is_rejected() {
    assert!(matches!(
        Mode::from_name("Super Locrian"),
        Err(FretError::UnknownMode(s)) if s == "Super Locrian"
    ));
}

// ─── Membership ─────────────────────────────────────────────────────

#[test]
fn enharmonic_membership() {
    let scale: Vec<Note> = ["C#/Db", "D", "E", "F", "G", "A", "A#/Bb"]
        .iter()
        .map(|s| lookup_note(s).unwrap())
        .collect();

    for query in ["C#/Db", "C#", "Db"] {
        assert!(is_in_scale(lookup_note(query).unwrap(), &scale), "{query}");
    }
    assert!(is_in_scale(lookup_note("Bb").unwrap(), &scale));
    assert!(!is_in_scale(Note::B, &scale));
    assert!(!is_in_scale(lookup_note("Eb").unwrap(), &scale));
}

#[test]
fn accidentals_are_found_in_sharp_keys() {
    let e_major = scale_notes(Note::E, Mode::Major);
    for accidental in ["F#", "G#", "C#", "D#"] {
        assert!(is_in_scale(lookup_note(accidental).unwrap(), &e_major), "{accidental}");
    }
}

#[test]
fn root_detection() {
    let pair = lookup_note("C#/Db").unwrap();
    assert!(is_root(pair, pair));
    assert!(is_root(pair, lookup_note("Db").unwrap()));
    assert!(is_root(lookup_note("C#").unwrap(), pair));
    assert!(!is_root(Note::D, pair));
}
