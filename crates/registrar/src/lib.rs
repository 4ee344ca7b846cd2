//! Registrar Domain Library
//!
//! Typed client for the legal API of the business registration application:
//! draft filings, name requests and the filing document model.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Filing documents, name requests, session context
//!   - `value_objects/`: FilingId, FilingKind, ContactPoint
//!   - `services/`: Normalization of filings for form binding
//!   - `errors/`: Filing and transport error types
//!
//! - **Ports** (`ports/`): The transport interface to the legal API
//!
//! - **Application** (`application/`): `FilingApiFacade`, the use cases
//!
//! - **Resources** (`resources/`): Static wizard step templates
//!
//! # Usage
//!
//! ```rust,ignore
//! use registrar::{FilingApiFacade, SessionContext};
//!
//! let api = FilingApiFacade::new(Arc::new(transport));
//! let mut session = SessionContext::new().with_temp_id("T123456789");
//! if let Some(draft) = api.fetch_draft_application(&session).await? {
//!     session.apply(&draft.session_update);
//! }
//! ```

pub mod application;
pub mod domain;
pub mod ports;
pub mod resources;

// Re-export commonly used types
pub use application::FilingApiFacade;
pub use domain::{
    normalize_incorporation, normalize_registration, ContactPoint, DissolutionFiling,
    DraftFiling, FilingDocument, FilingError, FilingHeader, FilingId, FilingKind,
    IncorporationApplication, IncorporationFiling, NameRequestRecord, OtherFiling, Registration,
    RegistrationFiling, SessionContext, SessionUpdate, TransportError,
};
pub use ports::LegalApiTransport;
pub use resources::{RouteName, StepTemplate, ViewComponentName, REGISTRATION_STEPS};
