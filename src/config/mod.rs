//! Declarative pool blueprints.
//!
//! A [`PoolConfig`] describes the immutable parameters of a pool and is
//! validated on construction; [`Pool::from_config`](crate::pool::Pool::from_config)
//! turns it into a live pool.

mod pool_config;

pub use pool_config::PoolConfig;
