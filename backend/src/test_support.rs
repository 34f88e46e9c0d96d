//! Test utilities for the backend crate.
//!
//! Shared helpers for unit tests (in `src/`) and integration tests (in
//! `tests/`). Only compiled with the `test-support` feature.

pub mod clock;
pub mod storage;

pub use clock::MutableClock;
pub use storage::{SwitchableProbe, memory_http_state, switchable_storage};
