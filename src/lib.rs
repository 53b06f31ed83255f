//! fretlib — scale engine and guitar fretboard diagram renderer.
//!
//! Picks out the notes of a scale (root note + mode) on a standard-tuned
//! six-string guitar across 15 frets, and renders the result as SVG, plain
//! text or JSON.
//!
//! # Example
//! ```
//! use fretlib::{Fretboard, Mode, Note, scale_notes};
//!
//! let notes = scale_notes(Note::A, Mode::PentatonicMinor);
//! assert_eq!(notes, vec![Note::A, Note::C, Note::D, Note::E, Note::G]);
//!
//! let board = Fretboard::from_names("Db", "Dorian").unwrap();
//! println!("Current scale: {}", board.title());
//! ```

pub mod engine;
pub mod error;
pub mod fretboard;
pub mod model;
pub mod renderer;

#[cfg(target_os = "android")]
pub mod android;

use tracing::warn;

pub use engine::{is_in_scale, is_root, lookup_note, note_at_position, scale_notes, Scale};
pub use error::{FretError, Result};
pub use fretboard::{fretboard_to_json, FretPosition, Fretboard, GuitarString, Marker};
pub use model::*;
pub use renderer::{render_fretboard_to_svg, render_fretboard_to_text};

/// Resolve a root spelling and mode name and render the diagram to SVG.
///
/// `page_width` sets the SVG width in user units. Pass `None` to use the
/// default (960).
pub fn render_scale_to_svg(root: &str, mode: &str, page_width: Option<f64>) -> Result<String> {
    let board = Fretboard::from_names(root, mode)?;
    Ok(render_fretboard_to_svg(&board, page_width))
}

/// Resolve a root spelling and mode name and render the diagram as text.
pub fn render_scale_to_text(root: &str, mode: &str) -> Result<String> {
    let board = Fretboard::from_names(root, mode)?;
    Ok(render_fretboard_to_text(&board))
}

/// Resolve a root spelling and mode name and export the fretboard as JSON.
/// Useful for passing data across FFI boundaries.
pub fn scale_to_json(root: &str, mode: &str) -> Result<String> {
    let board = Fretboard::from_names(root, mode)?;
    fretboard_to_json(&board)
}

// ═══════════════════════════════════════════════════════════════════════
// C FFI — for iOS (static library) and other C callers
// ═══════════════════════════════════════════════════════════════════════

use std::ffi::{CStr, CString};
use std::os::raw::c_char;

/// Borrow a C string as UTF-8, or None if it is null or not UTF-8.
///
/// # Safety
/// `ptr` must be null or a valid null-terminated C string.
unsafe fn c_str_arg<'a>(ptr: *const c_char, what: &str) -> Option<&'a str> {
    if ptr.is_null() {
        warn!("{what} is null");
        return None;
    }
    match unsafe { CStr::from_ptr(ptr) }.to_str() {
        Ok(s) => Some(s),
        Err(e) => {
            warn!("{what} is not valid UTF-8: {e}");
            None
        }
    }
}

fn into_c_string(result: Result<String>) -> *mut c_char {
    match result {
        Ok(s) => CString::new(s).unwrap_or_default().into_raw(),
        Err(e) => {
            warn!("fretlib call failed: {e}");
            std::ptr::null_mut()
        }
    }
}

/// Render the fretboard for `root` + `mode` and return SVG as a C string.
/// The caller must free the returned string with `fretlib_free_string`.
///
/// `page_width` sets the SVG width in user units. Pass 0.0 to use the default.
/// Returns null if either name is unknown.
///
/// # Safety
/// `root` and `mode` must be valid null-terminated UTF-8 C strings.
#[no_mangle]
pub unsafe extern "C" fn fretlib_render_scale(
    root: *const c_char,
    mode: *const c_char,
    page_width: f64,
) -> *mut c_char {
    let (Some(root), Some(mode)) =
        (unsafe { c_str_arg(root, "root") }, unsafe { c_str_arg(mode, "mode") })
    else {
        return std::ptr::null_mut();
    };

    let pw = if page_width.is_finite() && page_width > 0.0 { Some(page_width) } else { None };
    into_c_string(render_scale_to_svg(root, mode, pw))
}

/// Build the fretboard for `root` + `mode` and return it as a JSON C string.
/// The caller must free the returned string with `fretlib_free_string`.
///
/// # Safety
/// `root` and `mode` must be valid null-terminated UTF-8 C strings.
#[no_mangle]
pub unsafe extern "C" fn fretlib_scale_json(
    root: *const c_char,
    mode: *const c_char,
) -> *mut c_char {
    let (Some(root), Some(mode)) =
        (unsafe { c_str_arg(root, "root") }, unsafe { c_str_arg(mode, "mode") })
    else {
        return std::ptr::null_mut();
    };

    into_c_string(scale_to_json(root, mode))
}

/// Free a string previously returned by fretlib functions.
///
/// # Safety
/// `ptr` must be a string previously returned by a fretlib function, or null.
#[no_mangle]
pub unsafe extern "C" fn fretlib_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        unsafe {
            let _ = CString::from_raw(ptr);
        }
    }
}
