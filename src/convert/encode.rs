//! Scalar-to-bytes encoding.

use std::ops::Deref;

use bytes::{BufMut, Bytes};

use super::reinterpret::str_as_bytes;
use super::value::ColumnValue;
use crate::buffer::{PoolManager, Role, ScratchBuffer};
use crate::error::RowBufError;

/// The bytes of a present value.
///
/// Fixed-width values are owned copies; strings and raw bytes borrow the
/// storage of the value they came from. Equality compares content only.
#[derive(Debug, Clone)]
pub enum FieldBytes<'a> {
    /// Snapshot taken from a conversion scratch buffer.
    Owned(Bytes),
    /// View into the source value's storage.
    Borrowed(&'a [u8]),
}

impl FieldBytes<'_> {
    /// Returns the bytes.
    pub fn as_slice(&self) -> &[u8] {
        match self {
            FieldBytes::Owned(bytes) => &bytes[..],
            FieldBytes::Borrowed(bytes) => bytes,
        }
    }

    /// Returns true if these bytes alias the source value.
    pub fn is_borrowed(&self) -> bool {
        matches!(self, FieldBytes::Borrowed(_))
    }

    /// Converts into owned [`Bytes`], copying a borrowed view.
    pub fn into_bytes(self) -> Bytes {
        match self {
            FieldBytes::Owned(bytes) => bytes,
            FieldBytes::Borrowed(bytes) => Bytes::copy_from_slice(bytes),
        }
    }
}

impl Deref for FieldBytes<'_> {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl AsRef<[u8]> for FieldBytes<'_> {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl PartialEq for FieldBytes<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for FieldBytes<'_> {}

/// Result of encoding one column value.
///
/// An absent value and an empty present value both have zero bytes of
/// content; they differ by variant, which survives copies.
#[derive(Debug, Clone)]
pub enum Encoded<'a> {
    /// The column held no value.
    Absent,
    /// The column held a value, possibly empty.
    Present(FieldBytes<'a>),
}

impl<'a> Encoded<'a> {
    /// Returns true if the column held no value.
    pub fn is_absent(&self) -> bool {
        matches!(self, Encoded::Absent)
    }

    /// Returns true if the column held a value.
    pub fn is_present(&self) -> bool {
        !self.is_absent()
    }

    /// Returns the encoded bytes; empty when absent.
    pub fn as_slice(&self) -> &[u8] {
        match self {
            Encoded::Absent => &[],
            Encoded::Present(bytes) => bytes.as_slice(),
        }
    }

    /// Returns the number of encoded bytes.
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// Returns true if there are no encoded bytes, present or not.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the bytes of a present value.
    pub fn present(self) -> Option<FieldBytes<'a>> {
        match self {
            Encoded::Absent => None,
            Encoded::Present(bytes) => Some(bytes),
        }
    }

    /// Converts into owned bytes, `None` when absent.
    pub fn into_bytes(self) -> Option<Bytes> {
        self.present().map(FieldBytes::into_bytes)
    }
}

impl PartialEq for Encoded<'_> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Encoded::Absent, Encoded::Absent) => true,
            (Encoded::Present(a), Encoded::Present(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Encoded<'_> {}

/// Encodes column values into little-endian bytes.
///
/// Fixed-width values are written into a [`Role::Convert`] scratch buffer
/// from the injected pools, copied out, and the scratch is released before
/// the call returns.
///
/// # Example
///
/// ```
/// use rowbuf::{Encoder, PoolManager};
///
/// let pools = PoolManager::default();
/// let encoder = Encoder::new(&pools);
///
/// let field = encoder.encode(0x0102_0304i32)?;
/// assert_eq!(field.as_slice(), &[0x04, 0x03, 0x02, 0x01]);
///
/// assert!(encoder.encode(None::<i32>)?.is_absent());
/// assert!(encoder.encode("")?.is_present());
/// # Ok::<(), rowbuf::RowBufError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Encoder<'p> {
    pools: &'p PoolManager,
}

impl<'p> Encoder<'p> {
    /// Creates an encoder borrowing scratch space from `pools`.
    pub fn new(pools: &'p PoolManager) -> Self {
        Self { pools }
    }

    /// Encodes one value.
    ///
    /// # Errors
    ///
    /// Returns [`RowBufError::UnsupportedType`] for values without an
    /// encoding. The pools are not touched in that case.
    pub fn encode<'a>(&self, value: impl Into<ColumnValue<'a>>) -> Result<Encoded<'a>, RowBufError> {
        let value = value.into();
        match value {
            ColumnValue::Null => Ok(Encoded::Absent),
            ColumnValue::Str(s) => Ok(Encoded::Present(FieldBytes::Borrowed(str_as_bytes(s)))),
            ColumnValue::Bytes(bytes) => Ok(Encoded::Present(FieldBytes::Borrowed(bytes))),
            fixed => {
                if fixed.kind().is_none() {
                    return Err(unsupported(&fixed));
                }
                let mut scratch = self.pools.acquire(Role::Convert);
                let written = put_fixed(&fixed, scratch.writer());
                let snapshot = scratch.to_bytes();
                self.pools.release(scratch);
                written.map(|()| Encoded::Present(FieldBytes::Owned(snapshot)))
            }
        }
    }

    /// Appends the encoding of `value` to `out`.
    ///
    /// Returns `Ok(false)` for null, which appends nothing.
    ///
    /// # Errors
    ///
    /// Returns [`RowBufError::UnsupportedType`] for values without an
    /// encoding; `out` is left unchanged.
    pub fn encode_into<'a>(
        &self,
        value: impl Into<ColumnValue<'a>>,
        out: &mut ScratchBuffer,
    ) -> Result<bool, RowBufError> {
        match value.into() {
            ColumnValue::Null => Ok(false),
            ColumnValue::Str(s) => {
                out.extend_from_slice(str_as_bytes(s));
                Ok(true)
            }
            ColumnValue::Bytes(bytes) => {
                out.extend_from_slice(bytes);
                Ok(true)
            }
            fixed => put_fixed(&fixed, out.writer()).map(|()| true),
        }
    }
}

fn unsupported(value: &ColumnValue<'_>) -> RowBufError {
    RowBufError::UnsupportedType {
        type_name: value.type_name(),
    }
}

/// Writes a fixed-width value; anything else is rejected before writing.
fn put_fixed<B: BufMut>(value: &ColumnValue<'_>, out: &mut B) -> Result<(), RowBufError> {
    match *value {
        ColumnValue::Int8(v) => out.put_i8(v),
        ColumnValue::Int16(v) => out.put_i16_le(v),
        ColumnValue::Int32(v) => out.put_i32_le(v),
        ColumnValue::Int64(v) => out.put_i64_le(v),
        ColumnValue::UInt32(v) => out.put_u32_le(v),
        ColumnValue::UInt64(v) => out.put_u64_le(v),
        ColumnValue::Float32(v) => out.put_f32_le(v),
        ColumnValue::Float64(v) => out.put_f64_le(v),
        ColumnValue::Timestamp(ts) => out.put_i64_le(ts.as_nanos()),
        _ => return Err(unsupported(value)),
    }
    Ok(())
}
