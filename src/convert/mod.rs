//! Conversion between column values and little-endian bytes.
//!
//! - [`Encoder`] - Encodes values, borrowing scratch space from the pools
//! - [`decode`] - Reverses the encoding
//! - [`reinterpret`] - Zero-copy bit reinterpretation helpers
//!
//! | Kind | Width |
//! |---|---|
//! | int8/int16/int32/int64 | 1/2/4/8 bytes, two's complement |
//! | uint32/uint64 | 4/8 bytes |
//! | float32/float64 | 4/8 bytes, IEEE-754 |
//! | timestamp | 8 bytes, signed nanoseconds since the epoch |
//! | string/bytes | verbatim, no length prefix |
//! | null | absent, no bytes |

mod decode;
mod encode;
pub mod reinterpret;
mod value;

pub use decode::decode;
pub use encode::{Encoded, Encoder, FieldBytes};
pub use value::{ColumnValue, ScalarKind, Timestamp};
