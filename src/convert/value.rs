//! Column values and their kinds.

use std::fmt;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// A point in time as signed nanoseconds since the UNIX epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Timestamp(i64);

impl Timestamp {
    /// The UNIX epoch.
    pub const UNIX_EPOCH: Timestamp = Timestamp(0);

    /// Creates a timestamp from nanoseconds since the epoch.
    pub const fn from_nanos(nanos: i64) -> Self {
        Self(nanos)
    }

    /// Returns nanoseconds since the epoch (negative before it).
    pub const fn as_nanos(self) -> i64 {
        self.0
    }

    /// Converts a `SystemTime`, saturating outside the `i64` nanosecond range.
    pub fn from_system_time(time: SystemTime) -> Self {
        match time.duration_since(UNIX_EPOCH) {
            Ok(after) => Self(i64::try_from(after.as_nanos()).unwrap_or(i64::MAX)),
            Err(before) => Self(
                i64::try_from(before.duration().as_nanos())
                    .map(|nanos| -nanos)
                    .unwrap_or(i64::MIN),
            ),
        }
    }

    /// Converts back to a `SystemTime`.
    pub fn to_system_time(self) -> SystemTime {
        let offset = Duration::from_nanos(self.0.unsigned_abs());
        if self.0 >= 0 {
            UNIX_EPOCH + offset
        } else {
            UNIX_EPOCH - offset
        }
    }

    /// The current time.
    pub fn now() -> Self {
        Self::from_system_time(SystemTime::now())
    }
}

impl From<SystemTime> for Timestamp {
    fn from(time: SystemTime) -> Self {
        Self::from_system_time(time)
    }
}

/// Payload-free tag of every encodable column value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    /// 1-byte signed integer.
    Int8,
    /// 2-byte signed integer.
    Int16,
    /// 4-byte signed integer.
    Int32,
    /// 8-byte signed integer.
    Int64,
    /// 4-byte unsigned integer.
    UInt32,
    /// 8-byte unsigned integer.
    UInt64,
    /// 4-byte IEEE-754 float.
    Float32,
    /// 8-byte IEEE-754 float.
    Float64,
    /// 8-byte nanosecond timestamp.
    Timestamp,
    /// UTF-8 string, variable width.
    Str,
    /// Raw bytes, variable width.
    Bytes,
}

impl ScalarKind {
    /// Encoded width in bytes, `None` for variable-width kinds.
    pub const fn width(self) -> Option<usize> {
        match self {
            ScalarKind::Int8 => Some(1),
            ScalarKind::Int16 => Some(2),
            ScalarKind::Int32 | ScalarKind::UInt32 | ScalarKind::Float32 => Some(4),
            ScalarKind::Int64
            | ScalarKind::UInt64
            | ScalarKind::Float64
            | ScalarKind::Timestamp => Some(8),
            ScalarKind::Str | ScalarKind::Bytes => None,
        }
    }

    /// Stable lowercase name.
    pub const fn as_str(self) -> &'static str {
        match self {
            ScalarKind::Int8 => "int8",
            ScalarKind::Int16 => "int16",
            ScalarKind::Int32 => "int32",
            ScalarKind::Int64 => "int64",
            ScalarKind::UInt32 => "uint32",
            ScalarKind::UInt64 => "uint64",
            ScalarKind::Float32 => "float32",
            ScalarKind::Float64 => "float64",
            ScalarKind::Timestamp => "timestamp",
            ScalarKind::Str => "string",
            ScalarKind::Bytes => "bytes",
        }
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A column value as produced by a log decoder.
///
/// Strings and byte sequences are borrowed from the decoder's storage.
/// Not every variant has a byte encoding: `UInt8`, `UInt16`, `Complex` and
/// `Composite` are rejected by the encoder.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnValue<'a> {
    /// No value.
    Null,
    /// Signed 8-bit integer.
    Int8(i8),
    /// Signed 16-bit integer.
    Int16(i16),
    /// Signed 32-bit integer.
    Int32(i32),
    /// Signed 64-bit integer.
    Int64(i64),
    /// Unsigned 8-bit integer.
    UInt8(u8),
    /// Unsigned 16-bit integer.
    UInt16(u16),
    /// Unsigned 32-bit integer.
    UInt32(u32),
    /// Unsigned 64-bit integer.
    UInt64(u64),
    /// Single-precision float.
    Float32(f32),
    /// Double-precision float.
    Float64(f64),
    /// Nanosecond timestamp.
    Timestamp(Timestamp),
    /// UTF-8 string.
    Str(&'a str),
    /// Raw bytes.
    Bytes(&'a [u8]),
    /// Complex number.
    Complex {
        /// Real part.
        re: f64,
        /// Imaginary part.
        im: f64,
    },
    /// Structured value made of other values.
    Composite(Vec<ColumnValue<'a>>),
}

impl ColumnValue<'_> {
    /// Returns the encodable kind of this value, `None` for null and for
    /// values without an encoding.
    pub fn kind(&self) -> Option<ScalarKind> {
        match self {
            ColumnValue::Int8(_) => Some(ScalarKind::Int8),
            ColumnValue::Int16(_) => Some(ScalarKind::Int16),
            ColumnValue::Int32(_) => Some(ScalarKind::Int32),
            ColumnValue::Int64(_) => Some(ScalarKind::Int64),
            ColumnValue::UInt32(_) => Some(ScalarKind::UInt32),
            ColumnValue::UInt64(_) => Some(ScalarKind::UInt64),
            ColumnValue::Float32(_) => Some(ScalarKind::Float32),
            ColumnValue::Float64(_) => Some(ScalarKind::Float64),
            ColumnValue::Timestamp(_) => Some(ScalarKind::Timestamp),
            ColumnValue::Str(_) => Some(ScalarKind::Str),
            ColumnValue::Bytes(_) => Some(ScalarKind::Bytes),
            ColumnValue::Null
            | ColumnValue::UInt8(_)
            | ColumnValue::UInt16(_)
            | ColumnValue::Complex { .. }
            | ColumnValue::Composite(_) => None,
        }
    }

    /// Runtime type description, as reported in errors.
    pub fn type_name(&self) -> &'static str {
        match self {
            ColumnValue::Null => "null",
            ColumnValue::UInt8(_) => "uint8",
            ColumnValue::UInt16(_) => "uint16",
            ColumnValue::Complex { .. } => "complex128",
            ColumnValue::Composite(_) => "composite",
            other => match other.kind() {
                Some(kind) => kind.as_str(),
                None => "unknown",
            },
        }
    }

    /// Returns true for [`ColumnValue::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, ColumnValue::Null)
    }
}

macro_rules! impl_from_scalar {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for ColumnValue<'_> {
                fn from(value: $ty) -> Self {
                    ColumnValue::$variant(value)
                }
            }
        )*
    };
}

impl_from_scalar! {
    i8 => Int8,
    i16 => Int16,
    i32 => Int32,
    i64 => Int64,
    u8 => UInt8,
    u16 => UInt16,
    u32 => UInt32,
    u64 => UInt64,
    f32 => Float32,
    f64 => Float64,
    Timestamp => Timestamp,
}

impl<'a> From<&'a str> for ColumnValue<'a> {
    fn from(value: &'a str) -> Self {
        ColumnValue::Str(value)
    }
}

impl<'a> From<&'a String> for ColumnValue<'a> {
    fn from(value: &'a String) -> Self {
        ColumnValue::Str(value)
    }
}

impl<'a> From<&'a [u8]> for ColumnValue<'a> {
    fn from(value: &'a [u8]) -> Self {
        ColumnValue::Bytes(value)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for ColumnValue<'a> {
    fn from(value: &'a [u8; N]) -> Self {
        ColumnValue::Bytes(value)
    }
}

impl<'a, T> From<Option<T>> for ColumnValue<'a>
where
    T: Into<ColumnValue<'a>>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(ColumnValue::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_and_width() {
        assert_eq!(ColumnValue::from(7i16).kind(), Some(ScalarKind::Int16));
        assert_eq!(ScalarKind::Int16.width(), Some(2));
        assert_eq!(ScalarKind::Timestamp.width(), Some(8));
        assert_eq!(ScalarKind::Str.width(), None);
        assert_eq!(ColumnValue::Null.kind(), None);
        assert_eq!(ColumnValue::from(7u8).kind(), None);
    }

    #[test]
    fn test_type_name() {
        assert_eq!(ColumnValue::from(1.5f32).type_name(), "float32");
        assert_eq!(ColumnValue::from("x").type_name(), "string");
        assert_eq!(ColumnValue::Complex { re: 1.0, im: 0.0 }.type_name(), "complex128");
        assert_eq!(ColumnValue::Composite(vec![]).type_name(), "composite");
    }

    #[test]
    fn test_from_option() {
        assert!(ColumnValue::from(None::<i32>).is_null());
        assert_eq!(ColumnValue::from(Some(3i64)), ColumnValue::Int64(3));
    }

    #[test]
    fn test_timestamp_system_time() {
        let ts = Timestamp::from_nanos(1_500_000_000_123_456_789);
        assert_eq!(Timestamp::from_system_time(ts.to_system_time()), ts);

        let before = Timestamp::from_nanos(-42);
        assert_eq!(Timestamp::from(before.to_system_time()), before);

        assert_eq!(Timestamp::from(UNIX_EPOCH), Timestamp::UNIX_EPOCH);
        assert!(Timestamp::now() > Timestamp::UNIX_EPOCH);
    }
}
