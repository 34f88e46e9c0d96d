//! Connectivity probe for the durable backend.
//!
//! The probe is consulted on every store call so a backend that comes up or
//! goes away mid-run is noticed on the next request.

use serde::Serialize;

/// Connection state of the durable backend.
///
/// Serialises as its numeric ready-state code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackendState {
    Disconnected,
    Connected,
    Connecting,
}

impl BackendState {
    /// Numeric ready-state code reported by the health endpoint.
    pub fn code(self) -> u8 {
        match self {
            Self::Disconnected => 0,
            Self::Connected => 1,
            Self::Connecting => 2,
        }
    }

    /// True only when operations may be routed to the durable backend.
    pub fn is_available(self) -> bool {
        self == Self::Connected
    }
}

impl Serialize for BackendState {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.code())
    }
}

/// Reports the live state of the durable backend.
#[cfg_attr(test, mockall::automock)]
pub trait DurableStoreProbe: Send + Sync {
    fn state(&self) -> BackendState;
}

/// Probe used when no durable backend is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoDurableStore;

impl DurableStoreProbe for NoDurableStore {
    fn state(&self) -> BackendState {
        BackendState::Disconnected
    }
}
