//! Adapters implementing domain ports.
//!
//! This module contains infrastructure implementations of the traits defined
//! in the ports module. Following hexagonal architecture, adapters depend on
//! domain ports, not the other way around.

pub mod http_source;
pub mod in_memory_source;

pub use http_source::{DEFAULT_BASE_URL, EppoApiSource};
pub use in_memory_source::InMemorySource;
