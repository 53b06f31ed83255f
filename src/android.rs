//! JNI bindings for Android.
//!
//! These functions are called from Kotlin via the JNI bridge.

use jni::objects::{JClass, JString};
use jni::sys::{jfloat, jstring};
use jni::JNIEnv;
use tracing::warn;

use crate::{render_scale_to_svg, scale_to_json, Result};

fn read_string(env: &mut JNIEnv, value: &JString) -> Option<String> {
    if value.is_null() {
        return None;
    }
    env.get_string(value).ok().map(|s| s.into())
}

fn into_jstring(env: &mut JNIEnv, result: Result<String>) -> jstring {
    match result {
        Ok(s) => match env.new_string(&s) {
            Ok(js) => js.into_raw(),
            Err(_) => std::ptr::null_mut(),
        },
        Err(e) => {
            warn!("fretlib JNI call failed: {e}");
            std::ptr::null_mut()
        }
    }
}

/// Render the fretboard for a root note and mode to SVG.
///
/// Called from Kotlin as:
///   external fun renderScale(root: String, mode: String, pageWidth: Float): String?
#[no_mangle]
pub extern "system" fn Java_com_fretlib_app_FretLib_renderScale(
    mut env: JNIEnv,
    _class: JClass,
    root: JString,
    mode: JString,
    page_width: jfloat,
) -> jstring {
    let (Some(root), Some(mode)) = (read_string(&mut env, &root), read_string(&mut env, &mode))
    else {
        return std::ptr::null_mut();
    };

    let pw = if page_width.is_finite() && page_width > 0.0 { Some(page_width as f64) } else { None };

    let result = render_scale_to_svg(&root, &mode, pw);
    into_jstring(&mut env, result)
}

/// Build the fretboard for a root note and mode as JSON.
///
/// Called from Kotlin as:
///   external fun scaleJson(root: String, mode: String): String?
#[no_mangle]
pub extern "system" fn Java_com_fretlib_app_FretLib_scaleJson(
    mut env: JNIEnv,
    _class: JClass,
    root: JString,
    mode: JString,
) -> jstring {
    let (Some(root), Some(mode)) = (read_string(&mut env, &root), read_string(&mut env, &mode))
    else {
        return std::ptr::null_mut();
    };

    let result = scale_to_json(&root, &mode);
    into_jstring(&mut env, result)
}
