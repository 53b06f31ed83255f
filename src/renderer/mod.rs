//! Fretboard renderer — converts a Fretboard view into SVG or plain text.
//!
//! The SVG output is self-contained: board, note markers, legend and the
//! caption lines naming the scale, its notes and the mode's character.

mod constants;
mod svg_builder;
mod text;

use tracing::debug;

use crate::fretboard::{Fretboard, FretPosition, Marker};
use constants::*;
use svg_builder::SvgBuilder;

pub use text::render_fretboard_to_text;

// ═══════════════════════════════════════════════════════════════════════
// Layout
// ═══════════════════════════════════════════════════════════════════════

/// Horizontal and vertical placement shared by every drawing step.
struct BoardLayout {
    page_width: f64,
    page_height: f64,
    fret_width: f64,
    num_frets: usize,
    num_strings: usize,
}

impl BoardLayout {
    fn compute(board: &Fretboard, page_width: Option<f64>) -> Self {
        let requested = match page_width {
            Some(w) if w.is_finite() && w > 0.0 => w,
            _ => DEFAULT_PAGE_WIDTH,
        };
        let num_frets = board.num_frets as usize;
        let num_strings = board.strings.len();

        let usable = requested - PAGE_MARGIN_LEFT - PAGE_MARGIN_RIGHT;
        let natural = usable / num_frets.max(1) as f64;
        let (fret_width, page_width) = if natural >= MIN_FRET_WIDTH {
            (natural, requested)
        } else {
            let widened = PAGE_MARGIN_LEFT + PAGE_MARGIN_RIGHT + MIN_FRET_WIDTH * num_frets as f64;
            (MIN_FRET_WIDTH, widened)
        };

        let board_bottom = BOARD_TOP + num_strings.saturating_sub(1) as f64 * STRING_SPACING;
        let page_height =
            board_bottom + LEGEND_OFFSET + 3.0 * CAPTION_LINE_HEIGHT + PAGE_MARGIN_BOTTOM + 12.0;

        Self { page_width, page_height, fret_width, num_frets, num_strings }
    }

    /// Centre of the cell for `fret`. Fret 0 sits left of the nut.
    fn fret_center_x(&self, fret: usize) -> f64 {
        PAGE_MARGIN_LEFT + (fret as f64 + 0.5) * self.fret_width
    }

    /// Right-hand edge of the cell for `fret`; for fret 0 this is the nut.
    fn fret_wire_x(&self, fret: usize) -> f64 {
        PAGE_MARGIN_LEFT + (fret as f64 + 1.0) * self.fret_width
    }

    fn string_y(&self, string: usize) -> f64 {
        BOARD_TOP + string as f64 * STRING_SPACING
    }

    fn board_bottom(&self) -> f64 {
        self.string_y(self.num_strings.saturating_sub(1))
    }

    fn board_right(&self) -> f64 {
        PAGE_MARGIN_LEFT + self.num_frets as f64 * self.fret_width
    }

    fn marker_radius(&self) -> f64 {
        MARKER_RADIUS.min(self.fret_width * 0.45)
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Public API
// ═══════════════════════════════════════════════════════════════════════

/// Render a Fretboard into a complete SVG string.
///
/// `page_width` sets the SVG width in user units. Pass `None` (or 0.0 from FFI)
/// to use the default (960). Frets never shrink below a readable minimum, so a
/// very narrow request yields a wider SVG than asked for.
pub fn render_fretboard_to_svg(board: &Fretboard, page_width: Option<f64>) -> String {
    let layout = BoardLayout::compute(board, page_width);
    let mut svg = SvgBuilder::new(layout.page_width, layout.page_height);

    svg.rect(0.0, 0.0, layout.page_width, layout.page_height, "white");

    render_header(&mut svg, board, &layout);
    render_fret_numbers(&mut svg, &layout);
    render_inlays(&mut svg, &layout);
    render_strings_and_frets(&mut svg, board, &layout);

    for position in board.positions() {
        render_position(&mut svg, position, &layout);
    }

    render_legend(&mut svg, &layout);
    render_captions(&mut svg, board, &layout);

    let out = svg.build();
    debug!(scale = %board.title(), bytes = out.len(), "rendered fretboard SVG");
    out
}

// ═══════════════════════════════════════════════════════════════════════
// Board
// ═══════════════════════════════════════════════════════════════════════

fn render_header(svg: &mut SvgBuilder, board: &Fretboard, layout: &BoardLayout) {
    svg.text(
        layout.page_width / 2.0,
        PAGE_MARGIN_TOP + 20.0,
        &board.title(),
        22.0,
        "bold",
        HEADER_COLOR,
        "middle",
    );
}

fn render_fret_numbers(svg: &mut SvgBuilder, layout: &BoardLayout) {
    let y = BOARD_TOP - STRING_SPACING / 2.0 - 4.0;
    svg.text(PAGE_MARGIN_LEFT - 12.0, y, "String", 11.0, "bold", LABEL_COLOR, "end");
    for fret in 0..layout.num_frets {
        svg.text(
            layout.fret_center_x(fret),
            y,
            &fret.to_string(),
            12.0,
            "bold",
            LABEL_COLOR,
            "middle",
        );
    }
}

fn render_inlays(svg: &mut SvgBuilder, layout: &BoardLayout) {
    if layout.num_strings < 2 {
        return;
    }
    let mid_y = (layout.string_y(0) + layout.board_bottom()) / 2.0;
    for fret in INLAY_FRETS {
        if (fret as usize) < layout.num_frets {
            svg.circle(layout.fret_center_x(fret as usize), mid_y, INLAY_RADIUS, INLAY_COLOR);
        }
    }
    if (DOUBLE_INLAY_FRET as usize) < layout.num_frets {
        let x = layout.fret_center_x(DOUBLE_INLAY_FRET as usize);
        let spread = STRING_SPACING;
        svg.circle(x, mid_y - spread, INLAY_RADIUS, INLAY_COLOR);
        svg.circle(x, mid_y + spread, INLAY_RADIUS, INLAY_COLOR);
    }
}

fn render_strings_and_frets(svg: &mut SvgBuilder, board: &Fretboard, layout: &BoardLayout) {
    let top = layout.string_y(0);
    let bottom = layout.board_bottom();
    let nut_x = layout.fret_wire_x(0);
    let right = layout.board_right();

    // Fret wires
    for fret in 1..layout.num_frets {
        let x = layout.fret_wire_x(fret);
        svg.line(x, top, x, bottom, FRET_COLOR, FRET_WIRE_WIDTH);
    }

    // Nut
    svg.line(nut_x, top, nut_x, bottom, NUT_COLOR, NUT_WIDTH);

    // Strings with their open-note labels
    for string in &board.strings {
        let y = layout.string_y(string.index);
        let width = STRING_BASE_WIDTH + string.index as f64 * STRING_WIDTH_STEP;
        svg.line(nut_x, y, right, y, STRING_COLOR, width);
        svg.text(
            PAGE_MARGIN_LEFT - 12.0,
            y + 5.0,
            &string.open.to_string(),
            14.0,
            "bold",
            LABEL_COLOR,
            "end",
        );
    }
}

fn render_position(svg: &mut SvgBuilder, position: &FretPosition, layout: &BoardLayout) {
    let x = layout.fret_center_x(position.fret as usize);
    let y = layout.string_y(position.string);
    let label = position.note.to_string();
    let font_size = if position.note.name().is_enharmonic() {
        MARKER_PAIR_FONT_SIZE
    } else {
        MARKER_FONT_SIZE
    };

    match position.marker() {
        Marker::Root | Marker::Scale => {
            let fill = if position.marker() == Marker::Root { ROOT_COLOR } else { SCALE_COLOR };
            svg.circle(x, y, layout.marker_radius(), fill);
            svg.centered_text(x, y, &label, font_size, "bold", MARKER_TEXT_COLOR);
        }
        Marker::Plain => {
            // Knock out the string behind the label so it stays readable
            let w = layout.marker_radius() * 1.6;
            svg.rect(x - w / 2.0, y - font_size / 2.0 - 1.0, w, font_size + 2.0, "white");
            svg.centered_text(x, y, &label, font_size, "normal", PLAIN_NOTE_COLOR);
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Footer
// ═══════════════════════════════════════════════════════════════════════

fn render_legend(svg: &mut SvgBuilder, layout: &BoardLayout) {
    let y = layout.board_bottom() + LEGEND_OFFSET;
    let entries = [(ROOT_COLOR, "Root Note"), (SCALE_COLOR, "Scale Note")];
    for (i, (color, label)) in entries.into_iter().enumerate() {
        let x = PAGE_MARGIN_LEFT + i as f64 * LEGEND_WIDTH;
        svg.circle(x + 10.0, y, 10.0, color);
        svg.text(x + 26.0, y + 5.0, label, 13.0, "normal", LABEL_COLOR, "start");
    }
}

fn render_captions(svg: &mut SvgBuilder, board: &Fretboard, layout: &BoardLayout) {
    let first_y = layout.board_bottom() + LEGEND_OFFSET + CAPTION_LINE_HEIGHT + 6.0;
    let lines = [
        format!("Current Scale: {}", board.title()),
        format!("Notes in this scale: {}", board.scale_notes_label()),
        format!("About {}: {}", board.mode, board.description),
    ];
    for (i, line) in lines.iter().enumerate() {
        svg.text(
            PAGE_MARGIN_LEFT,
            first_y + i as f64 * CAPTION_LINE_HEIGHT,
            line,
            CAPTION_FONT_SIZE,
            "normal",
            HEADER_COLOR,
            "start",
        );
    }
}
