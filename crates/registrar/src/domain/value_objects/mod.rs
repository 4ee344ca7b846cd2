//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod contact_point;
mod filing_id;
mod filing_kind;

pub use contact_point::*;
pub use filing_id::*;
pub use filing_kind::*;
