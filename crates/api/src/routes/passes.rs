//! Pass issuance and verification route handlers.

use axum::Json;
use axum::extract::State;
use axum::http::{HeaderValue, header};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use serde_json::json;

use gatepass_core::{IssueRequest, PassId};

use crate::error::AppError;
use crate::services::issuer::Verification;
use crate::state::AppState;

/// Filename offered for the downloaded pass document.
const PDF_ATTACHMENT: &str = "attachment; filename=\"festival_pass.pdf\"";

/// Verification request body.
#[derive(Debug, Deserialize)]
pub struct VerifyRequest {
    /// The scanned or typed code.
    pub code: Option<String>,
}

/// Issue a pass and return the document as a downloadable PDF.
///
/// The pass record is persisted under the phone-derived identifier before
/// the response is sent; the document itself is not stored.
pub async fn generate_pass(
    State(state): State<AppState>,
    Json(request): Json<IssueRequest>,
) -> Result<Response, AppError> {
    let issued = state.issuer().issue(request).await?;

    let headers = [
        (
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/pdf"),
        ),
        (
            header::CONTENT_DISPOSITION,
            HeaderValue::from_static(PDF_ATTACHMENT),
        ),
    ];

    Ok((headers, issued.document).into_response())
}

/// Look up a scanned code and report whether it matches an issued pass.
///
/// An unknown code is a normal outcome and responds 404 with a structured
/// "invalid" body; only store failures surface as internal errors.
pub async fn verify_pass(
    State(state): State<AppState>,
    Json(request): Json<VerifyRequest>,
) -> Result<Response, AppError> {
    let code = request.code.as_deref().unwrap_or_default();
    let code = PassId::parse(code)
        .map_err(|_| AppError::BadRequest("Missing code field".to_string()))?;

    match state.issuer().verify(&code).await? {
        Verification::Valid(record) => {
            tracing::debug!(identifier = %code, "pass verified");
            Ok(Json(json!({ "status": "valid", "details": record })).into_response())
        }
        Verification::Invalid => Err(AppError::PassNotFound),
    }
}
