//! Filing - Draft and submitted filing documents
//!
//! A filing is a JSON document with a `header` and one kind-specific
//! payload section named after the kind. Sections this crate does not model
//! (`business`, `nameRequest`, ...) are kept verbatim so a document read
//! from the backend can be written back without loss.

use serde::{de::Error as _, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::domain::value_objects::{FilingId, FilingKind};

/// Filing header
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilingHeader {
    /// Kind tag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "FilingId::deserialize_lenient"
    )]
    pub filing_id: Option<FilingId>,
    /// Dates, status, certification and the rest, untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FilingHeader {
    /// Header name, treating a blank name as absent.
    pub fn kind_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|n| !n.is_empty())
    }
}

/// `incorporationApplication` payload section
///
/// Sub-sections stay raw JSON: normalization only looks at whether they are
/// there, and whatever shape the backend sends is written back unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncorporationApplication {
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub offices: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub contact_point: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub parties: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub share_classes: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// `registration` payload section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub offices: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub contact_point: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub parties: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// Payload fields are `None` when the key is missing and `Some(None)` when the
// backend sent an explicit `null`, so both survive a round trip.

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncorporationFiling {
    #[serde(default)]
    pub header: FilingHeader,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub incorporation_application: Option<Option<IncorporationApplication>>,
    #[serde(flatten)]
    pub sections: Map<String, Value>,
}

impl IncorporationFiling {
    pub fn payload(&self) -> Option<&IncorporationApplication> {
        self.incorporation_application.as_ref().and_then(Option::as_ref)
    }

    pub fn payload_mut(&mut self) -> Option<&mut IncorporationApplication> {
        self.incorporation_application.as_mut().and_then(Option::as_mut)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationFiling {
    #[serde(default)]
    pub header: FilingHeader,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub registration: Option<Option<Registration>>,
    #[serde(flatten)]
    pub sections: Map<String, Value>,
}

impl RegistrationFiling {
    pub fn payload(&self) -> Option<&Registration> {
        self.registration.as_ref().and_then(Option::as_ref)
    }

    pub fn payload_mut(&mut self) -> Option<&mut Registration> {
        self.registration.as_mut().and_then(Option::as_mut)
    }
}

/// Voluntary dissolution; its payload has no normalization and stays opaque.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DissolutionFiling {
    #[serde(default)]
    pub header: FilingHeader,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub dissolution: Option<Value>,
    #[serde(flatten)]
    pub sections: Map<String, Value>,
}

/// Deserialize a field whose key is on the wire, keeping an explicit `null`
/// as `Some(Value::Null)` / `Some(None)` rather than folding it into absence.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// Filing of a kind not modelled here, or without a header name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OtherFiling {
    #[serde(default)]
    pub header: FilingHeader,
    #[serde(flatten)]
    pub sections: Map<String, Value>,
}

/// Filing document, tagged by `header.name`
#[derive(Debug, Clone, PartialEq)]
pub enum FilingDocument {
    IncorporationApplication(IncorporationFiling),
    Registration(RegistrationFiling),
    Dissolution(DissolutionFiling),
    Other(OtherFiling),
}

impl FilingDocument {
    /// Decode a filing from the JSON object the backend returns.
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        if !value.is_object() {
            return Err(serde_json::Error::custom("filing is not an object"));
        }

        let kind = value
            .get("header")
            .and_then(|h| h.get("name"))
            .and_then(|n| n.as_str())
            .map(FilingKind::from);

        Ok(match kind {
            Some(FilingKind::IncorporationApplication) => {
                Self::IncorporationApplication(serde_json::from_value(value)?)
            }
            Some(FilingKind::Registration) => Self::Registration(serde_json::from_value(value)?),
            Some(FilingKind::Dissolution) => Self::Dissolution(serde_json::from_value(value)?),
            Some(FilingKind::Other(_)) | None => Self::Other(serde_json::from_value(value)?),
        })
    }

    pub fn to_value(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(self)
    }

    pub fn header(&self) -> &FilingHeader {
        match self {
            Self::IncorporationApplication(f) => &f.header,
            Self::Registration(f) => &f.header,
            Self::Dissolution(f) => &f.header,
            Self::Other(f) => &f.header,
        }
    }

    /// Kind of this document; `Other("")` when the header has no name.
    pub fn kind(&self) -> FilingKind {
        match self {
            Self::IncorporationApplication(_) => FilingKind::IncorporationApplication,
            Self::Registration(_) => FilingKind::Registration,
            Self::Dissolution(_) => FilingKind::Dissolution,
            Self::Other(f) => FilingKind::Other(f.header.name.clone().unwrap_or_default()),
        }
    }

    pub fn filing_id(&self) -> Option<FilingId> {
        self.header().filing_id
    }

    /// Top-level sections not modelled by the variant (`business`, ...).
    pub fn sections(&self) -> &Map<String, Value> {
        match self {
            Self::IncorporationApplication(f) => &f.sections,
            Self::Registration(f) => &f.sections,
            Self::Dissolution(f) => &f.sections,
            Self::Other(f) => &f.sections,
        }
    }
}

impl Serialize for FilingDocument {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::IncorporationApplication(f) => f.serialize(serializer),
            Self::Registration(f) => f.serialize(serializer),
            Self::Dissolution(f) => f.serialize(serializer),
            Self::Other(f) => f.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for FilingDocument {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(value).map_err(D::Error::custom)
    }
}

impl From<IncorporationFiling> for FilingDocument {
    fn from(filing: IncorporationFiling) -> Self {
        Self::IncorporationApplication(filing)
    }
}

impl From<RegistrationFiling> for FilingDocument {
    fn from(filing: RegistrationFiling) -> Self {
        Self::Registration(filing)
    }
}

impl From<DissolutionFiling> for FilingDocument {
    fn from(filing: DissolutionFiling) -> Self {
        Self::Dissolution(filing)
    }
}

/// A fetched draft together with the identifiers learned from it
#[derive(Debug, Clone, PartialEq)]
pub struct DraftFiling {
    pub filing: FilingDocument,
    pub session_update: super::SessionUpdate,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_dispatch_by_header_name() {
        let doc = FilingDocument::from_value(json!({
            "header": { "name": "registration", "filingId": 5 },
            "registration": { "parties": [] }
        }))
        .unwrap();

        assert_eq!(doc.kind(), FilingKind::Registration);
        assert_eq!(doc.filing_id(), FilingId::new(5));
        assert!(matches!(doc, FilingDocument::Registration(_)));
    }

    #[test]
    fn test_unknown_kind_is_other() {
        let doc = FilingDocument::from_value(json!({
            "header": { "name": "alteration", "filingId": 1 },
            "alteration": { "x": 1 }
        }))
        .unwrap();

        assert_eq!(doc.kind(), FilingKind::Other("alteration".to_string()));
        assert_eq!(doc.sections().get("alteration"), Some(&json!({ "x": 1 })));
    }

    #[test]
    fn test_round_trip_keeps_unmodelled_fields() {
        let original = json!({
            "header": {
                "name": "incorporationApplication",
                "filingId": 77,
                "date": "2021-01-01",
                "certifiedBy": "Jane"
            },
            "business": { "legalType": "BEN" },
            "incorporationApplication": {
                "nameRequest": { "nrNumber": "NR 1234567" },
                "contactPoint": { "email": "x@y.z", "phone": "250-555-1234" },
                "parties": [{ "officer": { "firstName": "A" } }]
            }
        });

        let doc: FilingDocument = serde_json::from_value(original.clone()).unwrap();
        assert_eq!(doc.to_value().unwrap(), original);
    }

    #[test]
    fn test_string_filing_id_is_read_as_number() {
        let doc = FilingDocument::from_value(json!({
            "header": { "name": "dissolution", "filingId": "12" },
            "dissolution": {}
        }))
        .unwrap();

        assert_eq!(doc.filing_id(), FilingId::new(12));
    }

    #[test]
    fn test_null_payload_survives_round_trip() {
        let original = json!({
            "header": { "name": "registration", "filingId": 1 },
            "registration": null
        });

        let doc = FilingDocument::from_value(original.clone()).unwrap();
        assert_eq!(doc.to_value().unwrap(), original);

        let original = json!({
            "header": { "name": "dissolution", "filingId": 2 },
            "dissolution": null
        });
        let doc = FilingDocument::from_value(original.clone()).unwrap();
        assert_eq!(doc.to_value().unwrap(), original);
    }

    #[test]
    fn test_null_sub_sections_survive_round_trip() {
        let original = json!({
            "header": { "name": "incorporationApplication", "filingId": 1 },
            "incorporationApplication": { "offices": null, "contactPoint": null }
        });

        let doc = FilingDocument::from_value(original.clone()).unwrap();
        assert_eq!(doc.to_value().unwrap(), original);
    }

    #[test]
    fn test_sub_sections_of_any_shape_are_accepted() {
        let original = json!({
            "header": { "name": "registration", "filingId": 1 },
            "registration": {
                "parties": { "p1": {} },
                "contactPoint": "none",
                "offices": [{ "officeType": "businessOffice" }]
            }
        });

        let doc = FilingDocument::from_value(original.clone()).unwrap();
        assert!(matches!(doc, FilingDocument::Registration(_)));
        assert_eq!(doc.to_value().unwrap(), original);
    }

    #[test]
    fn test_rejects_non_object() {
        assert!(FilingDocument::from_value(json!("filing")).is_err());
        assert!(FilingDocument::from_value(json!([1, 2])).is_err());
    }
}
