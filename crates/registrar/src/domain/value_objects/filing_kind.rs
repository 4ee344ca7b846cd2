//! FilingKind - Schema variant tag of a filing document

use serde::{Deserialize, Serialize};

/// Filing kind, as carried in `header.name`.
///
/// The tag doubles as the key of the kind-specific payload section of the
/// filing, e.g. a `registration` filing keeps its data under `registration`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FilingKind {
    IncorporationApplication,
    Registration,
    Dissolution,
    /// Any kind this crate does not model; carried through untouched.
    Other(String),
}

impl FilingKind {
    pub const INCORPORATION_APPLICATION: &'static str = "incorporationApplication";
    pub const REGISTRATION: &'static str = "registration";
    pub const DISSOLUTION: &'static str = "dissolution";

    pub fn as_str(&self) -> &str {
        match self {
            FilingKind::IncorporationApplication => Self::INCORPORATION_APPLICATION,
            FilingKind::Registration => Self::REGISTRATION,
            FilingKind::Dissolution => Self::DISSOLUTION,
            FilingKind::Other(name) => name,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, FilingKind::Other(_))
    }
}

impl From<&str> for FilingKind {
    fn from(s: &str) -> Self {
        match s {
            Self::INCORPORATION_APPLICATION => FilingKind::IncorporationApplication,
            Self::REGISTRATION => FilingKind::Registration,
            Self::DISSOLUTION => FilingKind::Dissolution,
            other => FilingKind::Other(other.to_string()),
        }
    }
}

impl From<String> for FilingKind {
    fn from(s: String) -> Self {
        FilingKind::from(s.as_str())
    }
}

impl From<FilingKind> for String {
    fn from(kind: FilingKind) -> Self {
        kind.as_str().to_string()
    }
}

impl std::fmt::Display for FilingKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
