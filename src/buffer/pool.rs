//! Lock-free pool of scratch buffers for a single role.

use std::sync::atomic::{AtomicUsize, Ordering};

use bytes::BytesMut;
use crossbeam::queue::SegQueue;
use tracing::{debug, trace, warn};

use super::{Role, ScratchBuffer};
use crate::config::RoleConfig;

/// Unordered, unbounded pool of idle buffers sharing one role.
///
/// `acquire` and `release` may be called from any number of threads at once.
/// The pool does not track checked-out buffers; ownership of an acquired
/// buffer is exclusive until it is released.
#[derive(Debug)]
pub struct RolePool {
    role: Role,
    config: RoleConfig,
    /// Idle buffers, already stripped of their role tag.
    idle: SegQueue<BytesMut>,
    hits: AtomicUsize,
    misses: AtomicUsize,
    returns: AtomicUsize,
    discards: AtomicUsize,
}

impl RolePool {
    /// Creates an empty pool for `role`.
    pub fn new(role: Role, config: RoleConfig) -> Self {
        Self {
            role,
            config,
            idle: SegQueue::new(),
            hits: AtomicUsize::new(0),
            misses: AtomicUsize::new(0),
            returns: AtomicUsize::new(0),
            discards: AtomicUsize::new(0),
        }
    }

    /// Returns the role served by this pool.
    pub fn role(&self) -> Role {
        self.role
    }

    /// Returns the pool's configuration.
    pub fn config(&self) -> &RoleConfig {
        &self.config
    }

    /// Takes an idle buffer, or allocates one on a miss.
    ///
    /// The returned buffer is always empty; a recycled buffer keeps its
    /// capacity.
    pub fn acquire(&self) -> ScratchBuffer {
        match self.idle.pop() {
            Some(mut data) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                data.clear();
                ScratchBuffer::from_parts(self.role, data)
            }
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                trace!(role = %self.role, capacity = self.config.initial_capacity, "scratch pool miss");
                ScratchBuffer::with_capacity(self.role, self.config.initial_capacity)
            }
        }
    }

    /// Returns a buffer to the pool.
    ///
    /// `None` is a no-op. A buffer longer than the role's size gate, or one
    /// tagged with another role, is dropped instead of pooled.
    pub fn release(&self, buffer: impl Into<Option<ScratchBuffer>>) {
        let Some(buffer) = buffer.into() else {
            return;
        };

        if buffer.role() != self.role {
            self.discards.fetch_add(1, Ordering::Relaxed);
            warn!(
                pool = %self.role,
                buffer = %buffer.role(),
                "dropping scratch buffer released to a foreign pool"
            );
            return;
        }

        if !self.config.gate.admits(buffer.len()) {
            self.discards.fetch_add(1, Ordering::Relaxed);
            debug!(
                role = %self.role,
                len = buffer.len(),
                threshold = ?self.config.gate.threshold(),
                "discarding oversized scratch buffer"
            );
            return;
        }

        let (_, data) = buffer.into_parts();
        self.idle.push(data);
        self.returns.fetch_add(1, Ordering::Relaxed);
    }

    /// Returns the number of idle buffers.
    pub fn idle(&self) -> usize {
        self.idle.len()
    }

    /// Drops every idle buffer and returns how many were dropped.
    pub fn clear(&self) -> usize {
        let mut dropped = 0;
        while self.idle.pop().is_some() {
            dropped += 1;
        }
        dropped
    }

    /// Returns a snapshot of the pool counters.
    pub fn stats(&self) -> PoolStats {
        PoolStats {
            idle: self.idle.len(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            returns: self.returns.load(Ordering::Relaxed),
            discards: self.discards.load(Ordering::Relaxed),
        }
    }
}

/// Pool statistics for monitoring.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PoolStats {
    /// Buffers currently idle in the pool.
    pub idle: usize,
    /// Acquisitions served from the pool.
    pub hits: usize,
    /// Acquisitions that allocated a fresh buffer.
    pub misses: usize,
    /// Buffers accepted back into the pool.
    pub returns: usize,
    /// Released buffers dropped by the size gate or a role mismatch.
    pub discards: usize,
}

impl PoolStats {
    /// Fraction of acquisitions served from the pool (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}
