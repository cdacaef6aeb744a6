//! The pool manager: one independent pool per role.

use std::mem;
use std::ops::{Deref, DerefMut};

use tracing::debug;

use super::{PoolStats, Role, RolePool, ScratchBuffer};
use crate::config::PoolConfig;
use crate::error::RowBufError;

/// Owns one [`RolePool`] per [`Role`].
///
/// There is no process-wide pool: construct a manager and pass it (by
/// reference or inside an `Arc`) to whatever assembles records.
///
/// # Example
///
/// ```
/// use rowbuf::{PoolManager, Role};
///
/// let pools = PoolManager::default();
///
/// let mut header = pools.acquire(Role::Header);
/// header.extend_from_slice(b"\x01\x02");
/// // ... hand the bytes downstream ...
/// pools.release(header);
///
/// assert_eq!(pools.idle(Role::Header), 1);
/// ```
#[derive(Debug)]
pub struct PoolManager {
    pools: [RolePool; Role::COUNT],
}

impl PoolManager {
    /// Creates a manager from `config` without validating it.
    pub fn new(config: PoolConfig) -> Self {
        let pools = Role::ALL.map(|role| RolePool::new(role, *config.role(role)));
        debug!(gates = ?gate_summary(&config), "created scratch pool manager");
        Self { pools }
    }

    /// Validates `config` and creates a manager from it.
    ///
    /// # Errors
    ///
    /// Returns [`RowBufError::InvalidConfig`] if any role is misconfigured.
    pub fn try_new(config: PoolConfig) -> Result<Self, RowBufError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Returns the pool serving `role`.
    pub fn pool(&self, role: Role) -> &RolePool {
        &self.pools[role.index()]
    }

    /// Takes an empty buffer for `role`.
    pub fn acquire(&self, role: Role) -> ScratchBuffer {
        self.pool(role).acquire()
    }

    /// Returns a buffer to the pool named by its own role tag.
    ///
    /// `None` is a no-op.
    pub fn release(&self, buffer: impl Into<Option<ScratchBuffer>>) {
        if let Some(buffer) = buffer.into() {
            self.pool(buffer.role()).release(buffer);
        }
    }

    /// Takes a buffer for `role` that is released when the guard drops.
    pub fn lease(&self, role: Role) -> PooledBuffer<'_> {
        PooledBuffer {
            pools: self,
            buffer: self.acquire(role),
        }
    }

    /// Returns the counters of the pool serving `role`.
    pub fn stats(&self, role: Role) -> PoolStats {
        self.pool(role).stats()
    }

    /// Returns the number of idle buffers held for `role`.
    pub fn idle(&self, role: Role) -> usize {
        self.pool(role).idle()
    }

    /// Drops every idle buffer of every role and returns how many were
    /// dropped.
    pub fn clear(&self) -> usize {
        let dropped: usize = self.pools.iter().map(RolePool::clear).sum();
        debug!(dropped, "cleared idle scratch buffers");
        dropped
    }
}

impl Default for PoolManager {
    fn default() -> Self {
        Self::new(PoolConfig::default())
    }
}

/// Size-gate threshold of every role, `None` when unbounded.
fn gate_summary(config: &PoolConfig) -> [(Role, Option<usize>); Role::COUNT] {
    Role::ALL.map(|role| (role, config.role(role).gate.threshold()))
}

/// A leased buffer that returns to its pool on drop.
#[derive(Debug)]
pub struct PooledBuffer<'a> {
    pools: &'a PoolManager,
    buffer: ScratchBuffer,
}

impl PooledBuffer<'_> {
    /// Takes the buffer out of the guard; it will not be released on drop.
    pub fn detach(mut self) -> ScratchBuffer {
        let role = self.buffer.role();
        let buffer = mem::replace(&mut self.buffer, ScratchBuffer::with_capacity(role, 0));
        // The placeholder owns no allocation, so skipping Drop leaks nothing.
        mem::forget(self);
        buffer
    }
}

impl Deref for PooledBuffer<'_> {
    type Target = ScratchBuffer;

    fn deref(&self) -> &ScratchBuffer {
        &self.buffer
    }
}

impl DerefMut for PooledBuffer<'_> {
    fn deref_mut(&mut self) -> &mut ScratchBuffer {
        &mut self.buffer
    }
}

impl Drop for PooledBuffer<'_> {
    fn drop(&mut self) {
        let role = self.buffer.role();
        let buffer = mem::replace(&mut self.buffer, ScratchBuffer::with_capacity(role, 0));
        self.pools.release(buffer);
    }
}
