//! Business logic services for the pass API.
//!
//! # Services
//!
//! - `barcode` - Code 128 barcode rendering for pass identifiers
//! - `picture` - Best-effort fetch of the holder's picture
//! - `pdf` - Pass document layout and PDF rendering
//! - `issuer` - Pass issuance and verification over the store

pub mod barcode;
pub mod issuer;
pub mod pdf;
pub mod picture;
