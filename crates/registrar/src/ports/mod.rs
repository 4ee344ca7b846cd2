//! Ports (Interfaces)
//!
//! Abstract interfaces that define how the domain layer
//! interacts with the legal API.
//!
//! Implementations of these traits live in adapter crates
//! (e.g. registrar-http).

mod transport;

pub use transport::*;
