//! Configuration for the role pools.
//!
//! This module provides types to configure how each role pool allocates and
//! recycles buffers:
//!
//! - [`PoolConfig`] - One [`RoleConfig`] per [`Role`]
//! - [`RoleConfig`] - Initial capacity and size gate of a single role
//! - [`SizeGate`] - Release-time length limit
//!
//! # Example
//!
//! ```
//! use rowbuf::{PoolConfig, Role, SizeGate};
//!
//! // Let nested payloads grow without bound, start rows at 8 KiB.
//! let config = PoolConfig::default()
//!     .with_gate(Role::Nested, SizeGate::Unbounded)
//!     .with_initial_capacity(Role::Row, 8 * 1024);
//!
//! config.validate()?;
//! # Ok::<(), rowbuf::RowBufError>(())
//! ```

use crate::buffer::Role;
use crate::error::RowBufError;

/// Default oversize threshold (4 MiB).
///
/// A released buffer holding more bytes than this is dropped instead of
/// pooled.
pub const OVERSIZE_THRESHOLD: usize = 4 * 1024 * 1024;

/// Default initial capacity of a row-batch buffer (64 KiB).
pub const DEFAULT_ROW_BATCH_CAPACITY: usize = 64 * 1024;

/// Default initial capacity of a single-row buffer (4 KiB).
pub const DEFAULT_ROW_CAPACITY: usize = 4 * 1024;

/// Default initial capacity of outer and inner nested buffers (1 KiB).
pub const DEFAULT_NESTED_CAPACITY: usize = 1024;

/// Default initial capacity of a metadata buffer.
pub const DEFAULT_METADATA_CAPACITY: usize = 512;

/// Default initial capacity of a header buffer.
pub const DEFAULT_HEADER_CAPACITY: usize = 256;

/// Default initial capacity of a conversion scratch buffer.
///
/// Large enough for the widest fixed-width scalar.
pub const DEFAULT_CONVERT_CAPACITY: usize = 16;

/// Release-time length limit of a role pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SizeGate {
    /// Buffers longer than the given number of bytes are discarded.
    Bounded(usize),
    /// Every released buffer is recycled, whatever its length.
    Unbounded,
}

impl SizeGate {
    /// Returns true if a buffer holding `len` bytes may be pooled.
    pub const fn admits(&self, len: usize) -> bool {
        match self {
            SizeGate::Bounded(threshold) => len <= *threshold,
            SizeGate::Unbounded => true,
        }
    }

    /// Returns the threshold, if bounded.
    pub const fn threshold(&self) -> Option<usize> {
        match self {
            SizeGate::Bounded(threshold) => Some(*threshold),
            SizeGate::Unbounded => None,
        }
    }
}

impl Default for SizeGate {
    fn default() -> Self {
        SizeGate::Bounded(OVERSIZE_THRESHOLD)
    }
}

/// Allocation and recycling policy of one role pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoleConfig {
    /// Capacity of a freshly allocated buffer (pool miss).
    pub initial_capacity: usize,
    /// Length limit applied on release.
    pub gate: SizeGate,
}

impl RoleConfig {
    /// Creates a role configuration.
    pub const fn new(initial_capacity: usize, gate: SizeGate) -> Self {
        Self {
            initial_capacity,
            gate,
        }
    }

    /// Default configuration for `role`.
    pub const fn default_for(role: Role) -> Self {
        let initial_capacity = match role {
            Role::RowBatch => DEFAULT_ROW_BATCH_CAPACITY,
            Role::Metadata => DEFAULT_METADATA_CAPACITY,
            Role::Header => DEFAULT_HEADER_CAPACITY,
            Role::Outer | Role::Nested => DEFAULT_NESTED_CAPACITY,
            Role::Row => DEFAULT_ROW_CAPACITY,
            Role::Convert => DEFAULT_CONVERT_CAPACITY,
        };
        Self::new(initial_capacity, SizeGate::Bounded(OVERSIZE_THRESHOLD))
    }

    /// Sets the size gate.
    pub const fn with_gate(mut self, gate: SizeGate) -> Self {
        self.gate = gate;
        self
    }

    /// Sets the initial capacity.
    pub const fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Validates this role configuration.
    ///
    /// The gate measures written length, so any initial capacity is
    /// accepted; only a zero threshold is rejected.
    pub fn validate(&self) -> Result<(), RowBufError> {
        match self.gate {
            SizeGate::Bounded(0) => Err(RowBufError::InvalidConfig {
                message: "size gate threshold must be non-zero",
            }),
            _ => Ok(()),
        }
    }
}

/// Configuration of every role pool held by a [`PoolManager`](crate::PoolManager).
///
/// Every role is gated at [`OVERSIZE_THRESHOLD`] by default. A role opts out
/// only through an explicit [`SizeGate::Unbounded`].
///
/// # Example
///
/// ```
/// use rowbuf::{PoolConfig, Role, SizeGate, OVERSIZE_THRESHOLD};
///
/// let config = PoolConfig::default();
/// assert_eq!(config.role(Role::RowBatch).gate, SizeGate::Bounded(OVERSIZE_THRESHOLD));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PoolConfig {
    roles: [RoleConfig; Role::COUNT],
}

impl PoolConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the configuration of `role`.
    ///
    /// Note: This does not validate the configuration. Use
    /// [`PoolConfig::validate`] to check it.
    pub fn with_role(mut self, role: Role, config: RoleConfig) -> Self {
        self.roles[role.index()] = config;
        self
    }

    /// Sets the size gate of `role`.
    pub fn with_gate(mut self, role: Role, gate: SizeGate) -> Self {
        self.roles[role.index()].gate = gate;
        self
    }

    /// Sets the initial capacity of `role`.
    pub fn with_initial_capacity(mut self, role: Role, capacity: usize) -> Self {
        self.roles[role.index()].initial_capacity = capacity;
        self
    }

    /// Returns the configuration of `role`.
    pub fn role(&self, role: Role) -> &RoleConfig {
        &self.roles[role.index()]
    }

    /// Validates every role configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RowBufError::InvalidConfig`] if a bounded gate is zero.
    pub fn validate(&self) -> Result<(), RowBufError> {
        self.roles.iter().try_for_each(RoleConfig::validate)
    }
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            roles: Role::ALL.map(RoleConfig::default_for),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PoolConfig::default();
        for role in Role::ALL {
            assert_eq!(
                config.role(role).gate,
                SizeGate::Bounded(OVERSIZE_THRESHOLD)
            );
        }
        assert_eq!(
            config.role(Role::RowBatch).initial_capacity,
            DEFAULT_ROW_BATCH_CAPACITY
        );
        assert_eq!(
            config.role(Role::Convert).initial_capacity,
            DEFAULT_CONVERT_CAPACITY
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = PoolConfig::default()
            .with_gate(Role::Nested, SizeGate::Unbounded)
            .with_initial_capacity(Role::Header, 64)
            .with_role(Role::Row, RoleConfig::new(128, SizeGate::Bounded(1024)));

        assert_eq!(config.role(Role::Nested).gate, SizeGate::Unbounded);
        assert_eq!(config.role(Role::Header).initial_capacity, 64);
        assert_eq!(config.role(Role::Row).gate.threshold(), Some(1024));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_gate_boundary() {
        let gate = SizeGate::Bounded(10);
        assert!(gate.admits(10));
        assert!(!gate.admits(11));
        assert!(SizeGate::Unbounded.admits(usize::MAX));
    }

    #[test]
    fn test_invalid_config_zero_gate() {
        let config = PoolConfig::default().with_gate(Role::Header, SizeGate::Bounded(0));
        assert!(matches!(
            config.validate(),
            Err(RowBufError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_capacity_over_gate_is_accepted() {
        let config = PoolConfig::default().with_role(
            Role::RowBatch,
            RoleConfig::new(8 * 1024 * 1024, SizeGate::Bounded(OVERSIZE_THRESHOLD)),
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_unbounded_accepts_any_capacity() {
        let config = PoolConfig::default().with_role(
            Role::RowBatch,
            RoleConfig::new(OVERSIZE_THRESHOLD * 2, SizeGate::Unbounded),
        );
        assert!(config.validate().is_ok());
    }
}
