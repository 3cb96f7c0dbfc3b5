//! Pass issuance and verification.
//!
//! [`PassIssuer`] owns the whole issuance pipeline: validate the request,
//! derive the identifier, render the barcode, fetch the optional picture,
//! compose the document, and persist the record. Persistence happens only
//! after document assembly succeeds, so a failed issuance never leaves a
//! partial record visible.

use std::sync::Arc;

use thiserror::Error;

use gatepass_core::{IssueRequest, IssueRequestError, PassId, PassRecord};

use crate::db::{PassStore, StoreError};
use crate::services::barcode::{BarcodeError, BarcodeRenderer};
use crate::services::pdf::{DocumentRenderer, PassLayout, PictureSlot, RenderError};
use crate::services::picture::PictureFetcher;

/// Errors that can occur during issuance.
///
/// `InvalidRequest` is the client's fault; every other variant is an
/// internal or dependency failure. Picture-fetch failure is deliberately
/// not represented here - it degrades the document instead.
#[derive(Debug, Error)]
pub enum IssueError {
    /// The request failed validation.
    #[error(transparent)]
    InvalidRequest(#[from] IssueRequestError),

    /// The identifier could not be rendered as a barcode.
    #[error(transparent)]
    Barcode(#[from] BarcodeError),

    /// The document could not be composed or serialized.
    #[error(transparent)]
    Render(#[from] RenderError),

    /// The record could not be persisted.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// A successfully issued pass: the document to deliver and the record that
/// was persisted.
#[derive(Debug, Clone)]
pub struct IssuedPass {
    /// Serialized pass document.
    pub document: Vec<u8>,
    /// The record now stored under its identifier.
    pub record: PassRecord,
}

/// Outcome of verifying a scanned code.
///
/// `Invalid` is a normal outcome, not a failure; store errors surface
/// separately so callers can tell the two apart.
#[derive(Debug, Clone)]
pub enum Verification {
    /// The code matches an issued pass.
    Valid(PassRecord),
    /// No pass was issued under this code.
    Invalid,
}

/// Issues passes and verifies scanned codes against the store.
pub struct PassIssuer {
    store: Arc<dyn PassStore>,
    barcode: BarcodeRenderer,
    renderer: Arc<dyn DocumentRenderer>,
    pictures: PictureFetcher,
}

impl PassIssuer {
    /// Create an issuer over the given store and document renderer.
    #[must_use]
    pub fn new(
        store: Arc<dyn PassStore>,
        renderer: Arc<dyn DocumentRenderer>,
        pictures: PictureFetcher,
    ) -> Self {
        Self {
            store,
            barcode: BarcodeRenderer::new(),
            renderer,
            pictures,
        }
    }

    /// Issue a pass: validate, render, persist, and return the document.
    ///
    /// The stored record fully replaces any record previously issued under
    /// the same phone number.
    ///
    /// # Errors
    ///
    /// Returns [`IssueError::InvalidRequest`] for missing fields (before any
    /// side effect) and the corresponding internal variant if barcode
    /// rendering, document composition, or the store write fails.
    pub async fn issue(&self, request: IssueRequest) -> Result<IssuedPass, IssueError> {
        let validated = request.validate()?;
        let record = validated.into_record();

        let barcode_png = self.barcode.render(record.barcode_data.as_str())?;

        let picture = match &record.picture_url {
            Some(url) => match self.pictures.fetch(url).await {
                Some(bytes) => PictureSlot::Image(bytes),
                None => PictureSlot::Unavailable,
            },
            None => PictureSlot::Absent,
        };

        let layout = PassLayout::new(&record, barcode_png, picture);
        let document = self.renderer.render(&layout)?;

        self.store.put(&record).await?;
        tracing::info!(identifier = %record.identifier, "pass issued");

        Ok(IssuedPass { document, record })
    }

    /// Look up a scanned code in the store.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the lookup itself fails; an unknown code is
    /// the `Ok(Verification::Invalid)` outcome.
    pub async fn verify(&self, code: &PassId) -> Result<Verification, StoreError> {
        match self.store.get(code).await? {
            Some(record) => Ok(Verification::Valid(record)),
            None => Ok(Verification::Invalid),
        }
    }
}
