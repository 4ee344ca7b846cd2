//! Domain Services
//!
//! Stateless operations over domain entities.

mod normalize;

pub use normalize::*;
