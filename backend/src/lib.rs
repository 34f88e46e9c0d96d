//! AutoRent backend library: domain model, HTTP adapter and storage
//! adapters. The binary in `main.rs` wires them into a server.

pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;
#[cfg(feature = "test-support")]
pub mod test_support;

pub use middleware::Trace;
