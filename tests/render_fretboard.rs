//! Fretboard view and rendering tests — build boards, render to SVG, text
//! and JSON.

use fretlib::{
    fretboard_to_json, render_fretboard_to_svg, render_fretboard_to_text, render_scale_to_svg,
    scale_to_json, Fretboard, Marker, Mode, Note, NUM_FRETS, STANDARD_TUNING,
};
use pretty_assertions::assert_eq;
use std::path::PathBuf;

fn output_dir() -> PathBuf {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("test_output");
    std::fs::create_dir_all(&dir).ok();
    dir
}

// ─── Fretboard view ─────────────────────────────────────────────────

#[test]
fn board_covers_every_string_and_fret() {
    let board = Fretboard::new(Note::G, Mode::Mixolydian);

    assert_eq!(board.strings.len(), 6);
    assert_eq!(board.positions().count(), 6 * NUM_FRETS as usize);

    for (string, &open) in board.strings.iter().zip(STANDARD_TUNING.iter()) {
        assert_eq!(string.open, open);
        assert_eq!(string.positions.len(), NUM_FRETS as usize);
        assert_eq!(string.positions[0].note, open, "fret 0 is the open string");
    }
}

#[test]
fn tuning_labels_run_high_to_low() {
    let board = Fretboard::new(Note::C, Mode::Major);
    let labels: Vec<String> = board.strings.iter().map(|s| s.open.to_string()).collect();
    assert_eq!(labels, vec!["E", "B", "G", "D", "A", "E"]);
}

#[test]
fn roots_are_always_in_scale() {
    for root in Note::ALL {
        for mode in Mode::ALL {
            let board = Fretboard::new(root, mode);
            for p in board.positions() {
                if p.is_root {
                    assert!(p.in_scale);
                    assert_eq!(p.note, root);
                    assert_eq!(p.degree, Some(1));
                }
                assert_eq!(p.in_scale, p.degree.is_some());
            }
        }
    }
}

#[test]
fn a_minor_pentatonic_box_one() {
    let board = Fretboard::from_names("A", "Pentatonic Minor").unwrap();

    // Low E string, frets 5 and 8: A (root) and C
    let low_e = 5;
    assert_eq!(board.position(low_e, 5).unwrap().marker(), Marker::Root);
    assert_eq!(board.position(low_e, 8).unwrap().note, Note::C);
    assert_eq!(board.position(low_e, 8).unwrap().marker(), Marker::Scale);
    assert_eq!(board.position(low_e, 6).unwrap().marker(), Marker::Plain);

    assert_eq!(board.title(), "A Pentatonic Minor");
    assert_eq!(board.scale_notes_label(), "A, C, D, E, G");
}

#[test]
fn sharp_root_is_highlighted() {
    let board = Fretboard::from_names("C#", "Minor (Aeolian)").unwrap();
    let roots: Vec<_> = board.positions().filter(|p| p.marker() == Marker::Root).collect();
    assert!(!roots.is_empty());
    assert!(roots.iter().all(|p| p.note.to_string() == "C#/Db"));
}

#[test]
fn unknown_names_fail_fast() {
    assert!(Fretboard::from_names("Q", "Dorian").is_err());
    assert!(Fretboard::from_names("C", "Hypodorian").is_err());
    assert!(render_scale_to_svg("C", "Hypodorian", None).is_err());
}

// ─── SVG ────────────────────────────────────────────────────────────

#[test]
fn render_c_major_svg() {
    let board = Fretboard::new(Note::C, Mode::Major);
    let svg = render_fretboard_to_svg(&board, None);

    assert!(svg.starts_with("<svg"), "Output should be SVG");
    assert!(svg.contains("</svg>"), "SVG should be closed");
    assert!(svg.contains("viewBox="), "SVG should have viewBox");
    assert!(svg.contains("#ff5733"), "SVG should mark roots");
    assert!(svg.contains("#4287f5"), "SVG should mark scale notes");
    assert!(svg.contains("Current Scale: C Major (Ionian)"));
    assert!(svg.contains("Notes in this scale: C, D, E, F, G, A, B"));
    assert!(svg.contains("About Major (Ionian): The standard major scale"));
    assert!(svg.contains("Root Note"));
    assert!(svg.contains("Scale Note"));

    let out = output_dir().join("c-major.svg");
    std::fs::write(&out, &svg).expect("Failed to write SVG");
    println!("✓ Rendered c-major.svg ({} bytes)", svg.len());
    println!("  Output: {}", out.display());
}

#[test]
fn render_blues_svg_escapes_nothing_unexpected() {
    let svg = render_scale_to_svg("E", "Blues", Some(1200.0)).expect("Failed to render E blues");

    assert!(svg.contains(r#"width="1200""#));
    assert!(svg.contains("A#/Bb"), "Blue note should be labelled with both spellings");
    assert!(svg.contains("'blue note'"));

    let out = output_dir().join("e-blues.svg");
    std::fs::write(&out, &svg).expect("Failed to write SVG");
}

#[test]
fn narrow_svg_grows_to_fit() {
    let svg = render_scale_to_svg("G", "Lydian", Some(100.0)).unwrap();
    assert!(!svg.contains(r#"width="100""#));
}

// ─── Text ───────────────────────────────────────────────────────────

#[test]
fn render_text_grid() {
    let board = Fretboard::new(Note::A, Mode::PentatonicMinor);
    let text = render_fretboard_to_text(&board);
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "A Pentatonic Minor");
    assert!(lines[2].starts_with("String |"));
    assert!(lines[2].ends_with("14"));

    // High E row: open E is a scale note, fret 5 is the root
    let high_e = lines[4];
    assert!(high_e.starts_with("E      |"));
    assert!(high_e.contains("(E)"));
    assert!(high_e.contains("[A]"));

    assert!(text.contains("Notes in this scale: A, C, D, E, G"));

    std::fs::write(output_dir().join("a-pentatonic-minor.txt"), &text).ok();
}

// ─── JSON ───────────────────────────────────────────────────────────

#[test]
fn json_uses_display_names() {
    let json = scale_to_json("Db", "Dorian").unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["root"], "C#/Db");
    assert_eq!(value["mode"], "Dorian");
    assert_eq!(value["num_frets"], 15);
    assert_eq!(value["strings"].as_array().unwrap().len(), 6);
    assert_eq!(value["strings"][0]["positions"][9]["note"], "C#/Db");
    assert_eq!(value["strings"][0]["positions"][9]["is_root"], true);
    assert_eq!(value["scale_notes"][0], "C#/Db");
}

#[test]
fn json_notes_and_modes_parse_back() {
    let board = Fretboard::new(Note::G_SHARP, Mode::PentatonicMajor);
    let json = fretboard_to_json(&board).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    let root: Note = serde_json::from_value(value["root"].clone()).unwrap();
    let mode: Mode = serde_json::from_value(value["mode"].clone()).unwrap();
    assert_eq!(root, Note::G_SHARP);
    assert_eq!(mode, Mode::PentatonicMajor);
}
