//! Shared constants for the fretboard renderer (all in SVG user units).

// ── Page & margins ──────────────────────────────────────────────────
pub(super) const DEFAULT_PAGE_WIDTH: f64 = 960.0;
pub(super) const PAGE_MARGIN_LEFT: f64 = 70.0; // leaves room for string labels
pub(super) const PAGE_MARGIN_RIGHT: f64 = 30.0;
pub(super) const PAGE_MARGIN_TOP: f64 = 30.0;
pub(super) const PAGE_MARGIN_BOTTOM: f64 = 24.0;

// ── Header ──────────────────────────────────────────────────────────
pub(super) const HEADER_HEIGHT: f64 = 44.0; // title line
pub(super) const FRET_NUMBER_ROW: f64 = 30.0;
pub(super) const BOARD_TOP: f64 = PAGE_MARGIN_TOP + HEADER_HEIGHT + FRET_NUMBER_ROW;

// ── Board dimensions ────────────────────────────────────────────────
pub(super) const STRING_SPACING: f64 = 36.0;
pub(super) const MIN_FRET_WIDTH: f64 = 34.0;
pub(super) const NUT_WIDTH: f64 = 5.0;
pub(super) const FRET_WIRE_WIDTH: f64 = 1.5;
pub(super) const STRING_BASE_WIDTH: f64 = 0.8; // thinnest string; lower strings get thicker
pub(super) const STRING_WIDTH_STEP: f64 = 0.3;
pub(super) const INLAY_RADIUS: f64 = 5.0;
pub(super) const INLAY_FRETS: [u8; 4] = [3, 5, 7, 9];
pub(super) const DOUBLE_INLAY_FRET: u8 = 12;

// ── Markers ─────────────────────────────────────────────────────────
pub(super) const MARKER_RADIUS: f64 = 15.0;
pub(super) const MARKER_FONT_SIZE: f64 = 11.0;
pub(super) const MARKER_PAIR_FONT_SIZE: f64 = 8.0; // "C#/Db" needs a smaller face

// ── Footer ──────────────────────────────────────────────────────────
pub(super) const LEGEND_OFFSET: f64 = 48.0; // from the lowest string to the legend row
pub(super) const LEGEND_WIDTH: f64 = 110.0;
pub(super) const CAPTION_LINE_HEIGHT: f64 = 24.0;
pub(super) const CAPTION_FONT_SIZE: f64 = 14.0;

// ── Colors ──────────────────────────────────────────────────────────
pub(super) const ROOT_COLOR: &str = "#ff5733";
pub(super) const SCALE_COLOR: &str = "#4287f5";
pub(super) const MARKER_TEXT_COLOR: &str = "white";
pub(super) const PLAIN_NOTE_COLOR: &str = "#8a8a8a";
pub(super) const STRING_COLOR: &str = "#555555";
pub(super) const FRET_COLOR: &str = "#9a9a9a";
pub(super) const NUT_COLOR: &str = "#333333";
pub(super) const INLAY_COLOR: &str = "#e2e2e2";
pub(super) const HEADER_COLOR: &str = "#1a1a1a";
pub(super) const LABEL_COLOR: &str = "#1a1a1a";
