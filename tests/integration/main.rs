//! Integration tests for contact discovery
//!
//! These tests use wiremock to create mock websites and run discovery
//! end-to-end against them.

mod batch_tests;
mod common;
mod discovery_tests;
#[cfg(feature = "browser")]
mod render_tests;
