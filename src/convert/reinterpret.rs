//! Bit-level reinterpretation between same-width representations.
//!
//! None of these copy or convert values; they reuse the same bits under a
//! different type, or hand out a borrowed view of the same storage.

use crate::error::RowBufError;

/// Reinterprets the bits of a `u64` as an `i64`.
pub const fn u64_to_i64(value: u64) -> i64 {
    value as i64
}

/// Reinterprets the bits of an `i64` as a `u64`.
pub const fn i64_to_u64(value: i64) -> u64 {
    value as u64
}

/// Reinterprets the bits of a `u64` as an `f64`.
pub const fn u64_to_f64(value: u64) -> f64 {
    f64::from_bits(value)
}

/// Reinterprets the bits of an `f64` as a `u64`.
pub const fn f64_to_u64(value: f64) -> u64 {
    value.to_bits()
}

/// Borrows the UTF-8 bytes of `s` without copying.
pub const fn str_as_bytes(s: &str) -> &[u8] {
    s.as_bytes()
}

/// Borrows `bytes` as a string without copying.
///
/// # Errors
///
/// Returns [`RowBufError::InvalidUtf8`] if `bytes` is not valid UTF-8.
pub fn bytes_as_str(bytes: &[u8]) -> Result<&str, RowBufError> {
    Ok(std::str::from_utf8(bytes)?)
}

/// Little-endian bytes of a `u16`, owned by the caller.
pub const fn u16_to_le_bytes(value: u16) -> [u8; 2] {
    value.to_le_bytes()
}
