//! Ports (trait boundaries) for external dependencies.
//!
//! Following hexagonal architecture, these traits are owned by the domain and
//! implemented by adapters in the infrastructure layer.

pub mod source;

pub use source::ExperimentSource;
