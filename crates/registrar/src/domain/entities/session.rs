//! Session - Identifiers known to the current session
//!
//! Operations read the identifiers they need from a [`SessionContext`] and
//! report what they learned as a [`SessionUpdate`]. Persisting the update is
//! up to the caller.

use serde::{Deserialize, Serialize};

use crate::domain::errors::FilingError;
use crate::domain::value_objects::{FilingId, FilingKind};

/// Session-scoped identifiers
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionContext {
    /// Permanent business identifier (e.g. `BC1234567`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_id: Option<String>,
    /// Temporary registration number, used before the business exists
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temp_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filing_id: Option<FilingId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filing_type: Option<FilingKind>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_business_id(mut self, business_id: impl Into<String>) -> Self {
        self.business_id = Some(business_id.into());
        self
    }

    pub fn with_temp_id(mut self, temp_id: impl Into<String>) -> Self {
        self.temp_id = Some(temp_id.into());
        self
    }

    pub fn with_filing_id(mut self, filing_id: FilingId) -> Self {
        self.filing_id = Some(filing_id);
        self
    }

    /// Record identifiers learned by an operation. Absent fields leave the
    /// current values in place.
    pub fn apply(&mut self, update: &SessionUpdate) {
        if let Some(filing_id) = update.filing_id {
            self.filing_id = Some(filing_id);
        }
        if let Some(kind) = &update.filing_type {
            self.filing_type = Some(kind.clone());
        }
    }

    pub fn require_temp_id(&self) -> Result<&str, FilingError> {
        non_blank(self.temp_id.as_deref())
            .ok_or_else(|| FilingError::invalid_argument("missing temp registration number"))
    }

    pub fn require_business_id(&self) -> Result<&str, FilingError> {
        non_blank(self.business_id.as_deref())
            .ok_or_else(|| FilingError::invalid_argument("missing business identifier"))
    }

    pub fn require_filing_id(&self) -> Result<FilingId, FilingError> {
        self.filing_id
            .ok_or_else(|| FilingError::invalid_argument("invalid filing id"))
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Identifiers an operation learned from the backend
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionUpdate {
    pub filing_id: Option<FilingId>,
    pub filing_type: Option<FilingKind>,
}

impl SessionUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_filing_id(mut self, filing_id: FilingId) -> Self {
        self.filing_id = Some(filing_id);
        self
    }

    pub fn with_filing_type(mut self, kind: FilingKind) -> Self {
        self.filing_type = Some(kind);
        self
    }
}
