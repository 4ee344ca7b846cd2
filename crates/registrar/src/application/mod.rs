//! Application Services
//!
//! Use cases built on the domain and its ports.

mod legal_api;

pub use legal_api::*;
