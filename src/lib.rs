//! rowbuf
//!
//! Role-partitioned scratch buffers and scalar encoding for assembling
//! change-data-capture records.
//!
//! Building a record means filling several kinds of byte buffers: a row
//! batch, its metadata and header, each row body, and the outer and inner
//! payloads of nested columns. `rowbuf` keeps one lock-free pool per kind
//! (a [`Role`]) so buffers are reused without ever crossing roles, and drops
//! abnormally large buffers on release instead of keeping them forever.
//!
//! The crate intentionally:
//! - does NOT define a replication wire protocol
//! - does NOT decode binlog or redo-log events
//! - does NOT persist records
//! - does NOT keep any process-wide state
//!
//! # Example
//!
//! ```
//! use rowbuf::{Encoder, PoolManager, Role};
//!
//! let pools = PoolManager::default();
//! let encoder = Encoder::new(&pools);
//!
//! let mut row = pools.acquire(Role::Row);
//! encoder.encode_into(42i64, &mut row)?;
//! encoder.encode_into("alice", &mut row)?;
//! assert_eq!(row.len(), 8 + 5);
//!
//! // ... flush `row` downstream ...
//! pools.release(row);
//! # Ok::<(), rowbuf::RowBufError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod buffer;
mod config;
mod convert;
mod error;

//
// Public surface
//

pub use buffer::{PoolManager, PoolStats, PooledBuffer, Role, RolePool, ScratchBuffer};
pub use config::{
    DEFAULT_CONVERT_CAPACITY, DEFAULT_HEADER_CAPACITY, DEFAULT_METADATA_CAPACITY,
    DEFAULT_NESTED_CAPACITY, DEFAULT_ROW_BATCH_CAPACITY, DEFAULT_ROW_CAPACITY,
    OVERSIZE_THRESHOLD, PoolConfig, RoleConfig, SizeGate,
};
pub use convert::{ColumnValue, Encoded, Encoder, FieldBytes, ScalarKind, Timestamp, decode};
pub use convert::reinterpret;
pub use error::RowBufError;
