//! Integration tests for Gatepass.
//!
//! # Running Tests
//!
//! ```bash
//! # Start PostgreSQL and the API server
//! cargo run -p gatepass-api
//!
//! # Run integration tests against it
//! cargo test -p gatepass-integration-tests -- --ignored
//! ```
//!
//! # Test Categories
//!
//! - `passes` - Pass issuance and verification over live HTTP
//!
//! Tests are `#[ignore]`d by default because they need a running server,
//! `PostgreSQL`, and font assets; the in-process router tests in
//! `gatepass-api` cover the HTTP contract without that setup.
