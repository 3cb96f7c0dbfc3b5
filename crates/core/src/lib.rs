//! Gatepass Core - Shared types library.
//!
//! This crate provides common types used across all Gatepass components:
//! - `api` - HTTP service for pass issuance and verification
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - The `PassId` identifier, the persisted `PassRecord`, and
//!   issuance request validation

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
