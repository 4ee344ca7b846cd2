//! Domain Entities
//!
//! - Filing: draft and submitted filing documents
//! - NameRequest: name reservation records
//! - Session: identifiers scoped to one user session

mod filing;
mod name_request;
mod session;

pub use filing::*;
pub use name_request::*;
pub use session::*;
