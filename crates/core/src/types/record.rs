//! The persisted pass record.

use serde::{Deserialize, Serialize};

use super::pass_id::PassId;

/// A festival pass record, the sole persisted entity.
///
/// One record is created in full by each issuance and read (never mutated)
/// by verification. The store keys records by [`identifier`](Self::identifier),
/// so re-issuing under the same phone number overwrites the prior record -
/// last write wins, no conflict detection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassRecord {
    /// Store key and barcode payload, derived verbatim from the phone number.
    pub identifier: PassId,
    /// Holder's name as submitted.
    pub name: String,
    /// Holder's phone number as submitted; source of `identifier`.
    pub phone: String,
    /// URL of the holder's picture, if one was submitted. The record keeps
    /// the URL regardless of whether the picture could be fetched.
    pub picture_url: Option<String>,
    /// Always equal to `identifier`. Redundant, kept for explicit schema
    /// clarity in the stored document.
    pub barcode_data: PassId,
}
