// FFI functions are unsafe: callers must ensure pointer validity.
// Safety contracts are documented per-function in the public API comments.
#![allow(clippy::missing_safety_doc)]

// metaphone-ffi: C-compatible FFI layer for MetaphoneHandle.
//
// Memory management rules:
// - Opaque `MetaphoneHandle` pointer: created by `metaphone_new`, freed by
//   `metaphone_free`.
// - Returned strings: caller must free with `metaphone_free_str`.
// - Input words are byte buffers with an explicit length, not C strings, so
//   that invalid UTF-8 reaches the handle's decode policy.

use std::ffi::{CString, c_char, c_int};
use std::ptr;
use std::slice;

use metaphone_core::{DecodePolicy, MetaphoneError};
use metaphone_double::MetaphoneHandle;

/// Success.
pub const METAPHONE_OK: c_int = 0;
/// Null handle, null output pointer, or an out-of-range option value.
pub const METAPHONE_ERR_ARGS: c_int = -1;
/// Input rejected by the strict decode policy.
pub const METAPHONE_ERR_DECODE: c_int = -2;

// ── Handle lifecycle ─────────────────────────────────────────────

/// Create a handle with default options: lossy decoding, no length cap.
///
/// Free with `metaphone_free`.
#[unsafe(no_mangle)]
pub extern "C" fn metaphone_new() -> *mut MetaphoneHandle {
    Box::into_raw(Box::new(MetaphoneHandle::new()))
}

/// Free a handle created by `metaphone_new`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn metaphone_free(handle: *mut MetaphoneHandle) {
    if !handle.is_null() {
        drop(unsafe { Box::from_raw(handle) });
    }
}

// ── Encoding ────────────────────────────────────────────────────

/// Encode `len` bytes at `data`.
///
/// On success writes two heap-allocated C strings to `out_primary` and
/// `out_secondary` (the secondary may be empty) and returns 0. The caller
/// frees both with `metaphone_free_str`. `data` may be NULL when `len` is 0.
///
/// Returns -1 for invalid arguments and -2 when the handle uses strict
/// decoding and the input is not valid UTF-8. Output pointers are left
/// untouched on failure.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn metaphone_encode(
    handle: *const MetaphoneHandle,
    data: *const u8,
    len: usize,
    out_primary: *mut *mut c_char,
    out_secondary: *mut *mut c_char,
) -> c_int {
    let Some(handle) = (unsafe { handle.as_ref() }) else {
        return METAPHONE_ERR_ARGS;
    };
    if out_primary.is_null() || out_secondary.is_null() {
        return METAPHONE_ERR_ARGS;
    }
    let bytes: &[u8] = if len == 0 {
        &[]
    } else if data.is_null() {
        return METAPHONE_ERR_ARGS;
    } else {
        unsafe { slice::from_raw_parts(data, len) }
    };

    match handle.encode_bytes(bytes) {
        Ok(codes) => {
            unsafe {
                *out_primary = str_to_c(codes.primary());
                *out_secondary = str_to_c(codes.secondary());
            }
            METAPHONE_OK
        }
        Err(MetaphoneError::InvalidUtf8 { .. }) => METAPHONE_ERR_DECODE,
        Err(e) => {
            log::warn!("metaphone_encode: {e}");
            METAPHONE_ERR_ARGS
        }
    }
}

// ── Option setters ──────────────────────────────────────────────

/// Cap both codes at `value` characters. 0 removes the cap.
/// Returns 0 on success, -1 for a NULL handle or a negative value.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn metaphone_set_max_code_length(
    handle: *mut MetaphoneHandle,
    value: c_int,
) -> c_int {
    let Some(handle) = (unsafe { handle.as_mut() }) else {
        return METAPHONE_ERR_ARGS;
    };
    let max = match usize::try_from(value) {
        Ok(0) => None,
        Ok(n) => Some(n),
        Err(_) => return METAPHONE_ERR_ARGS,
    };
    match handle.set_max_code_length(max) {
        Ok(()) => METAPHONE_OK,
        Err(_) => METAPHONE_ERR_ARGS,
    }
}

/// Non-zero `value` rejects invalid UTF-8; zero drops invalid bytes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn metaphone_set_strict(handle: *mut MetaphoneHandle, value: c_int) {
    if let Some(handle) = unsafe { handle.as_mut() } {
        let policy = if value != 0 {
            DecodePolicy::Strict
        } else {
            DecodePolicy::Lossy
        };
        handle.set_decode_policy(policy);
    }
}

// ── Utility functions ───────────────────────────────────────────

/// Free a heap-allocated C string returned by metaphone functions.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn metaphone_free_str(s: *mut c_char) {
    free_c_str(s);
}

// ── Internal helpers ────────────────────────────────────────────

// Codes never contain NUL, so the fallback is unreachable in practice.
fn str_to_c(s: &str) -> *mut c_char {
    CString::new(s).unwrap_or_default().into_raw()
}

fn free_c_str(s: *mut c_char) {
    if !s.is_null() {
        drop(unsafe { CString::from_raw(s) });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CStr;

    /// Encode through the C ABI and take ownership of the results.
    fn encode(handle: *const MetaphoneHandle, bytes: &[u8]) -> Result<(String, String), c_int> {
        let mut primary: *mut c_char = ptr::null_mut();
        let mut secondary: *mut c_char = ptr::null_mut();
        let status = unsafe {
            metaphone_encode(handle, bytes.as_ptr(), bytes.len(), &mut primary, &mut secondary)
        };
        if status != METAPHONE_OK {
            assert!(primary.is_null() && secondary.is_null());
            return Err(status);
        }
        let pair = unsafe {
            (
                CStr::from_ptr(primary).to_str().unwrap().to_string(),
                CStr::from_ptr(secondary).to_str().unwrap().to_string(),
            )
        };
        unsafe {
            metaphone_free_str(primary);
            metaphone_free_str(secondary);
        }
        Ok(pair)
    }

    #[test]
    fn encode_roundtrip_through_c_strings() {
        let handle = metaphone_new();
        assert_eq!(encode(handle, b"richard"), Ok(("RXRT".into(), "RKRT".into())));
        assert_eq!(encode(handle, b"bob"), Ok(("PP".into(), String::new())));
        assert_eq!(encode(handle, b""), Ok((String::new(), String::new())));
        unsafe { metaphone_free(handle) };
    }

    #[test]
    fn invalid_arguments() {
        let handle = metaphone_new();
        assert_eq!(encode(ptr::null(), b"bob"), Err(METAPHONE_ERR_ARGS));

        let mut out: *mut c_char = ptr::null_mut();
        let status =
            unsafe { metaphone_encode(handle, ptr::null(), 3, &mut out, ptr::null_mut()) };
        assert_eq!(status, METAPHONE_ERR_ARGS);

        let mut secondary: *mut c_char = ptr::null_mut();
        let status = unsafe { metaphone_encode(handle, ptr::null(), 3, &mut out, &mut secondary) };
        assert_eq!(status, METAPHONE_ERR_ARGS);

        assert_eq!(unsafe { metaphone_set_max_code_length(handle, -1) }, METAPHONE_ERR_ARGS);
        assert_eq!(
            unsafe { metaphone_set_max_code_length(ptr::null_mut(), 4) },
            METAPHONE_ERR_ARGS
        );
        unsafe { metaphone_free(handle) };
    }

    #[test]
    fn strict_mode_reports_decode_failure() {
        let handle = metaphone_new();
        assert_eq!(encode(handle, b"ma\xffry").map(|p| p.0), Ok("MR".into()));

        unsafe { metaphone_set_strict(handle, 1) };
        assert_eq!(encode(handle, b"ma\xffry"), Err(METAPHONE_ERR_DECODE));

        unsafe { metaphone_set_strict(handle, 0) };
        assert_eq!(encode(handle, b"ma\xffry").map(|p| p.0), Ok("MR".into()));
        unsafe { metaphone_free(handle) };
    }

    #[test]
    fn max_code_length() {
        let handle = metaphone_new();
        assert_eq!(unsafe { metaphone_set_max_code_length(handle, 2) }, METAPHONE_OK);
        assert_eq!(encode(handle, b"richard"), Ok(("RX".into(), "RK".into())));
        assert_eq!(unsafe { metaphone_set_max_code_length(handle, 0) }, METAPHONE_OK);
        assert_eq!(encode(handle, b"richard"), Ok(("RXRT".into(), "RKRT".into())));
        unsafe { metaphone_free(handle) };
    }

    #[test]
    fn free_null_is_noop() {
        unsafe {
            metaphone_free(ptr::null_mut());
            metaphone_free_str(ptr::null_mut());
        }
    }
}
