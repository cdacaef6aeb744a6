//! Role-partitioned scratch-buffer pools.
//!
//! Every [`Role`] owns an independent lock-free [`RolePool`]; the
//! [`PoolManager`] holds one of each and routes released buffers back by
//! their role tag. Buffers longer than a role's size gate are dropped on
//! release so one pathological record cannot inflate a pool for good.

mod manager;
mod pool;
mod role;
mod scratch;

pub use manager::{PoolManager, PooledBuffer};
pub use pool::{PoolStats, RolePool};
pub use role::Role;
pub use scratch::ScratchBuffer;
