//! Legal API Facade (Use Case)
//!
//! Fetches and updates draft filings and name requests, turning HTTP-level
//! outcomes into domain results and normalizing filings for form binding.

use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::{debug, warn};
use urlencoding::encode;

use crate::domain::entities::{DraftFiling, FilingDocument, NameRequestRecord};
use crate::domain::entities::{SessionContext, SessionUpdate};
use crate::domain::errors::FilingError;
use crate::domain::value_objects::FilingKind;
use crate::ports::LegalApiTransport;

/// Facade over the filings, tasks and name request endpoints
pub struct FilingApiFacade<T: LegalApiTransport> {
    transport: Arc<T>,
}

impl<T: LegalApiTransport> FilingApiFacade<T> {
    pub fn new(transport: Arc<T>) -> Self {
        Self { transport }
    }

    /// Fetch the draft application for the session's temp registration number.
    ///
    /// Assumes the backend returns a single filing. The returned update
    /// carries the filing id and kind from its header.
    ///
    /// # Returns
    /// The normalized draft, or `None` if the backend has no such draft.
    pub async fn fetch_draft_application(
        &self,
        session: &SessionContext,
    ) -> Result<Option<DraftFiling>, FilingError> {
        let temp_id = session.require_temp_id()?;
        let path = format!("businesses/{}/filings", encode(temp_id));

        let body = match self.transport.get(&path).await {
            Ok(body) => body,
            Err(e) if e.is_not_found() => {
                debug!(temp_id = %temp_id, "Draft application not found");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        let mut filing = take_filing(body)?;
        let filing_id = filing
            .filing_id()
            .ok_or_else(|| FilingError::invalid_response("missing filing id"))?;
        if filing.header().kind_name().is_none() {
            return Err(FilingError::invalid_response("missing filing name"));
        }

        let kind = filing.kind();
        if !kind.is_known() {
            warn!(filing_type = %kind, "Unrecognized filing type, returning it unnormalized");
        }
        filing.normalize();

        debug!(filing_id = %filing_id, filing_type = %kind, "Fetched draft application");

        Ok(Some(DraftFiling {
            filing,
            session_update: SessionUpdate::new()
                .with_filing_id(filing_id)
                .with_filing_type(kind),
        }))
    }

    /// Fetch the draft voluntary dissolution from the business's task list.
    ///
    /// Unlike [`Self::fetch_draft_application`], a missing draft is an error:
    /// no matching task yields `InvalidResponse` and a 404 propagates as a
    /// transport error. The document is returned without normalization.
    pub async fn fetch_draft_dissolution(
        &self,
        session: &SessionContext,
    ) -> Result<DraftFiling, FilingError> {
        let business_id = session.require_business_id()?;
        let path = format!("businesses/{}/tasks", encode(business_id));

        let body = self.transport.get(&path).await?;

        let filing = body
            .as_ref()
            .and_then(|b| b.get("tasks"))
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
            .filter_map(|t| t.get("task")?.get("filing"))
            .find(|f| {
                f.as_object()
                    .is_some_and(|o| o.contains_key(FilingKind::DISSOLUTION))
            })
            .cloned()
            .ok_or_else(|| FilingError::invalid_response("no dissolution task"))?;

        let filing = FilingDocument::from_value(filing)
            .map_err(|e| FilingError::invalid_response(format!("malformed filing: {}", e)))?;

        if filing.kind() != FilingKind::Dissolution {
            return Err(FilingError::invalid_response(format!(
                "expected {} filing, got {}",
                FilingKind::Dissolution,
                filing.kind()
            )));
        }
        let filing_id = filing
            .filing_id()
            .ok_or_else(|| FilingError::invalid_response("missing filing id"))?;

        debug!(filing_id = %filing_id, business_id = %business_id, "Fetched draft dissolution");

        Ok(DraftFiling {
            filing,
            session_update: SessionUpdate::new().with_filing_id(filing_id),
        })
    }

    /// Replace an existing filing.
    ///
    /// # Arguments
    /// * `id` - Business identifier or temp registration number
    /// * `filing` - Filing body; `None` when the caller has nothing loaded
    /// * `is_draft` - Save as draft (`?draft=true`) instead of completing
    ///
    /// # Returns
    /// The filing as stored by the backend. Server-side validation failures
    /// come back as transport errors for the caller to interpret.
    pub async fn update_filing(
        &self,
        session: &SessionContext,
        id: &str,
        filing: Option<&FilingDocument>,
        is_draft: bool,
    ) -> Result<FilingDocument, FilingError> {
        let filing = filing.ok_or_else(|| FilingError::invalid_argument("invalid filing"))?;
        let filing_id = session.require_filing_id()?;

        let mut path = format!("businesses/{}/filings/{}", encode(id), filing_id);
        if is_draft {
            path.push_str("?draft=true");
        }

        let filing = filing
            .to_value()
            .map_err(|e| FilingError::invalid_argument(format!("unserializable filing: {}", e)))?;
        let mut request = Map::new();
        request.insert("filing".to_string(), filing);

        debug!(path = %path, is_draft, "Updating filing");
        let body = self.transport.put(&path, &Value::Object(request)).await?;

        let filing = take_filing(body)?;
        if filing.filing_id().is_none() {
            return Err(FilingError::invalid_response("missing filing id"));
        }

        Ok(filing)
    }

    /// Fetch name request data.
    ///
    /// # Arguments
    /// * `nr_number` - Name request number (e.g. `NR 1234567`)
    ///
    /// # Returns
    /// The record, or `None` if the name request does not exist.
    pub async fn fetch_name_request(
        &self,
        nr_number: &str,
    ) -> Result<Option<NameRequestRecord>, FilingError> {
        if nr_number.trim().is_empty() {
            return Err(FilingError::invalid_argument("invalid parameter 'nrNumber'"));
        }

        let path = format!("nameRequests/{}", encode(nr_number));
        match self.transport.get(&path).await {
            Ok(Some(data)) if !data.is_null() => Ok(Some(NameRequestRecord::new(data))),
            Ok(_) => Err(FilingError::invalid_response("empty name request")),
            Err(e) if e.is_not_found() => {
                debug!(nr_number = %nr_number, "Name request not found");
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }
}

/// Pull the `filing` object out of a `{ filing: ... }` response body.
fn take_filing(body: Option<Value>) -> Result<FilingDocument, FilingError> {
    let filing = body
        .and_then(|mut b| b.get_mut("filing").map(Value::take))
        .filter(|f| !f.is_null())
        .ok_or_else(|| FilingError::invalid_response("missing filing"))?;

    FilingDocument::from_value(filing)
        .map_err(|e| FilingError::invalid_response(format!("malformed filing: {}", e)))
}
