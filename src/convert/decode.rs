//! Bytes-to-scalar decoding, the inverse of [`Encoder::encode`](super::Encoder::encode).

use super::reinterpret::bytes_as_str;
use super::value::{ColumnValue, ScalarKind, Timestamp};
use crate::error::RowBufError;

/// Decodes `bytes` as a value of `kind`.
///
/// Strings and raw bytes are borrowed from `bytes`.
///
/// # Errors
///
/// Returns [`RowBufError::WidthMismatch`] if a fixed-width kind gets the
/// wrong number of bytes, and [`RowBufError::InvalidUtf8`] if a string is
/// not valid UTF-8.
///
/// # Example
///
/// ```
/// use rowbuf::{decode, ColumnValue, ScalarKind};
///
/// let value = decode(ScalarKind::Int16, &[0x02, 0x01])?;
/// assert_eq!(value, ColumnValue::Int16(0x0102));
/// # Ok::<(), rowbuf::RowBufError>(())
/// ```
pub fn decode(kind: ScalarKind, bytes: &[u8]) -> Result<ColumnValue<'_>, RowBufError> {
    let value = match kind {
        ScalarKind::Int8 => ColumnValue::Int8(i8::from_le_bytes(fixed(kind, bytes)?)),
        ScalarKind::Int16 => ColumnValue::Int16(i16::from_le_bytes(fixed(kind, bytes)?)),
        ScalarKind::Int32 => ColumnValue::Int32(i32::from_le_bytes(fixed(kind, bytes)?)),
        ScalarKind::Int64 => ColumnValue::Int64(i64::from_le_bytes(fixed(kind, bytes)?)),
        ScalarKind::UInt32 => ColumnValue::UInt32(u32::from_le_bytes(fixed(kind, bytes)?)),
        ScalarKind::UInt64 => ColumnValue::UInt64(u64::from_le_bytes(fixed(kind, bytes)?)),
        ScalarKind::Float32 => ColumnValue::Float32(f32::from_le_bytes(fixed(kind, bytes)?)),
        ScalarKind::Float64 => ColumnValue::Float64(f64::from_le_bytes(fixed(kind, bytes)?)),
        ScalarKind::Timestamp => ColumnValue::Timestamp(Timestamp::from_nanos(
            i64::from_le_bytes(fixed(kind, bytes)?),
        )),
        ScalarKind::Str => ColumnValue::Str(bytes_as_str(bytes)?),
        ScalarKind::Bytes => ColumnValue::Bytes(bytes),
    };
    Ok(value)
}

fn fixed<const N: usize>(kind: ScalarKind, bytes: &[u8]) -> Result<[u8; N], RowBufError> {
    <[u8; N]>::try_from(bytes).map_err(|_| RowBufError::WidthMismatch {
        kind,
        expected: N,
        actual: bytes.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_fixed() {
        assert_eq!(
            decode(ScalarKind::UInt32, &[1, 0, 0, 0]).unwrap(),
            ColumnValue::UInt32(1)
        );
        assert_eq!(
            decode(ScalarKind::Timestamp, &[0xff; 8]).unwrap(),
            ColumnValue::Timestamp(Timestamp::from_nanos(-1))
        );
    }

    #[test]
    fn test_width_mismatch() {
        let err = decode(ScalarKind::Int64, &[0; 7]).unwrap_err();
        assert!(matches!(
            err,
            RowBufError::WidthMismatch {
                kind: ScalarKind::Int64,
                expected: 8,
                actual: 7
            }
        ));
        assert!(decode(ScalarKind::Int8, &[]).is_err());
    }

    #[test]
    fn test_decode_str_borrows() {
        let raw = b"customer".to_vec();
        match decode(ScalarKind::Str, &raw).unwrap() {
            ColumnValue::Str(s) => {
                assert_eq!(s, "customer");
                assert_eq!(s.as_ptr(), raw.as_ptr());
            }
            other => panic!("unexpected value {other:?}"),
        }
    }

    #[test]
    fn test_decode_invalid_utf8() {
        let raw = vec![0xffu8, 0xfe];
        assert!(matches!(
            decode(ScalarKind::Str, &raw),
            Err(RowBufError::InvalidUtf8(_))
        ));
        // The same bytes are fine as raw bytes.
        assert_eq!(
            decode(ScalarKind::Bytes, &raw).unwrap(),
            ColumnValue::Bytes(&raw)
        );
    }
}
