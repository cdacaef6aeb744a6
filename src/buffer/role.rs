//! The structural roles a scratch buffer can serve.

use std::fmt;

/// Structural purpose of a scratch buffer.
///
/// Each role owns an independent pool, so a buffer grown to row-batch size is
/// never handed out where a header is expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Role {
    /// A complete batch of rows: operation, header, metadata and row data.
    RowBatch,
    /// Table and column metadata.
    Metadata,
    /// Row header.
    Header,
    /// Outer wrapper of a nested (array) column.
    Outer,
    /// A single row body.
    Row,
    /// Inner payload of a nested column.
    Nested,
    /// Transient scratch used while encoding scalars.
    Convert,
}

impl Role {
    /// Number of roles.
    pub const COUNT: usize = 7;

    /// Every role, in declaration order.
    pub const ALL: [Role; Role::COUNT] = [
        Role::RowBatch,
        Role::Metadata,
        Role::Header,
        Role::Outer,
        Role::Row,
        Role::Nested,
        Role::Convert,
    ];

    /// Position of this role in [`Role::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Stable lowercase name, used in logs.
    pub const fn as_str(self) -> &'static str {
        match self {
            Role::RowBatch => "row_batch",
            Role::Metadata => "metadata",
            Role::Header => "header",
            Role::Outer => "outer",
            Role::Row => "row",
            Role::Nested => "nested",
            Role::Convert => "convert",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
