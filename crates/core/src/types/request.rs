//! Issuance request validation.

use serde::Deserialize;

use super::pass_id::PassId;
use super::record::PassRecord;

/// Errors that can occur when validating an [`IssueRequest`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum IssueRequestError {
    /// `name` or `phone` is absent or empty.
    ///
    /// The message matches the wire-level error body clients receive.
    #[error("Missing required form fields")]
    MissingFields,
}

/// An unvalidated pass issuance request, as submitted by a client.
///
/// Both required fields are optional at this level so that absent and empty
/// values take the same validation path instead of failing deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct IssueRequest {
    /// Holder's name.
    pub name: Option<String>,
    /// Holder's phone number.
    pub phone: Option<String>,
    /// URL of the holder's picture.
    pub picture: Option<String>,
}

/// A validated issuance request.
///
/// Guarantees that `name` and `phone` are non-empty and that the pass
/// identifier has been derived from the phone number.
#[derive(Debug, Clone)]
pub struct ValidatedIssue {
    /// Pass identifier, equal to `phone` verbatim.
    pub identifier: PassId,
    /// Holder's name, non-empty.
    pub name: String,
    /// Holder's phone number, non-empty.
    pub phone: String,
    /// URL of the holder's picture, if submitted.
    pub picture_url: Option<String>,
}

impl IssueRequest {
    /// Validate the request and derive the pass identifier.
    ///
    /// The identifier is the phone number used verbatim; no normalization,
    /// hashing, or uniqueness check is performed.
    ///
    /// # Errors
    ///
    /// Returns [`IssueRequestError::MissingFields`] if `name` or `phone` is
    /// absent or empty.
    pub fn validate(self) -> Result<ValidatedIssue, IssueRequestError> {
        let name = self.name.filter(|s| !s.is_empty());
        let phone = self.phone.filter(|s| !s.is_empty());

        let (Some(name), Some(phone)) = (name, phone) else {
            return Err(IssueRequestError::MissingFields);
        };

        let identifier =
            PassId::parse(&phone).map_err(|_| IssueRequestError::MissingFields)?;

        Ok(ValidatedIssue {
            identifier,
            name,
            phone,
            picture_url: self.picture,
        })
    }
}

impl ValidatedIssue {
    /// Build the record that will be persisted for this issuance.
    ///
    /// `barcode_data` duplicates the identifier in the stored document.
    #[must_use]
    pub fn into_record(self) -> PassRecord {
        PassRecord {
            identifier: self.identifier.clone(),
            name: self.name,
            phone: self.phone,
            picture_url: self.picture_url,
            barcode_data: self.identifier,
        }
    }
}
