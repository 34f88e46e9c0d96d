//! In-memory repositories used as the fallback backing.
//!
//! State lives in `tokio::sync::RwLock`-guarded collections: reads share the
//! lock, mutations take it exclusively so concurrent appends and removals
//! cannot corrupt the collection. Everything is lost on restart.

mod cars;
mod users;

use std::sync::Arc;

pub use cars::MemoryCarRepository;
pub use users::MemoryUserRepository;

use crate::domain::StorageBacking;

/// Fresh, empty in-memory backing for both repositories.
pub fn memory_backing() -> StorageBacking {
    StorageBacking::new(
        Arc::new(MemoryUserRepository::default()),
        Arc::new(MemoryCarRepository::default()),
    )
}
