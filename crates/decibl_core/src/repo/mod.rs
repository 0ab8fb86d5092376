//! Data access contracts and their in-process implementations.
//!
//! # Responsibility
//! - Own the mutable working sets that stand in for a remote database.
//! - Own the durable key-value store used for settings.
//!
//! # Invariants
//! - Working-set ids stay unique; allocation and insertion share one lock.
//! - Repository reads always hand out owned clones.

pub mod kv_repo;
pub mod working_set;
