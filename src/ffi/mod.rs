//! C ABI for hosts that are not written in Rust.
//!
//! Strings returned by [`money_render`] are owned by the caller and must be
//! released with [`money_string_free`].

use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::ptr;
use std::sync::OnceLock;

use crate::currency::{render, Money};

/// Semantic version of the Rust core (mirrors `Cargo.toml`).
pub const CORE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the core (Rust) semantic version as a C string.
#[no_mangle]
pub extern "C" fn ffi_core_version() -> *const c_char {
    static CORE: OnceLock<CString> = OnceLock::new();
    CORE.get_or_init(|| CString::new(CORE_VERSION).unwrap_or_default())
        .as_ptr()
}

/// Renders an amount with the built-in rules.
///
/// Returns null when `code` is null or not valid UTF-8.
///
/// # Safety
/// `code` must be null or point to a NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn money_render(code: *const c_char, units: i64, nanos: i32) -> *mut c_char {
    if code.is_null() {
        return ptr::null_mut();
    }
    let code = match CStr::from_ptr(code).to_str() {
        Ok(code) => code,
        Err(err) => {
            tracing::warn!("currency code is not UTF-8: {err}");
            return ptr::null_mut();
        }
    };
    let rendered = render(&Money::new(code, units, nanos));
    match CString::new(rendered) {
        Ok(text) => text.into_raw(),
        Err(_) => ptr::null_mut(),
    }
}

/// Releases a string returned by [`money_render`].
///
/// # Safety
/// `text` must be null or a pointer obtained from [`money_render`] that has
/// not been freed yet.
#[no_mangle]
pub unsafe extern "C" fn money_string_free(text: *mut c_char) {
    if !text.is_null() {
        drop(CString::from_raw(text));
    }
}
