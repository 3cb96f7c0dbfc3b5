//! Core types for Gatepass.
//!
//! This module provides type-safe wrappers for the pass domain.

pub mod pass_id;
pub mod record;
pub mod request;

pub use pass_id::{PassId, PassIdError};
pub use record::PassRecord;
pub use request::{IssueRequest, IssueRequestError, ValidatedIssue};
