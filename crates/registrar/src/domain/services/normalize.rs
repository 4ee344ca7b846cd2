//! Normalization of filing documents for form binding
//!
//! Ensures a consistent object structure whether or not a filing has a Name
//! Request and whether it is an initial draft or was saved before. Absent
//! sub-sections are filled with empty values; present ones are never
//! touched, so running a normalizer twice is the same as running it once.

use serde_json::Value;

use crate::domain::entities::{FilingDocument, IncorporationFiling, RegistrationFiling};
use crate::domain::value_objects::ContactPoint;

/// Fill empty defaults into an incorporation application payload.
pub fn normalize_incorporation(filing: &mut IncorporationFiling) {
    let Some(ia) = filing.payload_mut() else {
        return;
    };

    fill(&mut ia.offices, empty_list);
    fill(&mut ia.contact_point, blank_contact_point);
    fill(&mut ia.parties, empty_list);
    fill(&mut ia.share_classes, empty_list);
}

/// Fill empty defaults into a registration payload.
pub fn normalize_registration(filing: &mut RegistrationFiling) {
    let Some(reg) = filing.payload_mut() else {
        return;
    };

    fill(&mut reg.offices, empty_list);
    fill(&mut reg.contact_point, blank_contact_point);
    fill(&mut reg.parties, empty_list);
}

fn fill(section: &mut Option<Value>, default: fn() -> Value) {
    if is_absent(section.as_ref()) {
        *section = Some(default());
    }
}

/// Missing, or a value the form layer treats as "no section" (null, false,
/// zero, empty string).
fn is_absent(section: Option<&Value>) -> bool {
    match section {
        None | Some(Value::Null) => true,
        Some(Value::Bool(b)) => !b,
        Some(Value::Number(n)) => n.as_f64() == Some(0.0),
        Some(Value::String(s)) => s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => false,
    }
}

fn empty_list() -> Value {
    Value::Array(Vec::new())
}

fn blank_contact_point() -> Value {
    ContactPoint::blank().into()
}

impl FilingDocument {
    /// Apply the normalizer for this document's kind.
    ///
    /// Dissolutions and unrecognized kinds have none and are left as-is.
    pub fn normalize(&mut self) {
        match self {
            FilingDocument::IncorporationApplication(f) => normalize_incorporation(f),
            FilingDocument::Registration(f) => normalize_registration(f),
            FilingDocument::Dissolution(_) | FilingDocument::Other(_) => {}
        }
    }

    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }
}
