//! Common test infrastructure
//!
//! This module provides all the infrastructure needed for end-to-end tests.
//! Tests should only import from this module, not from internal submodules.
//!
//! # Example
//!
//! ```no_run
//! mod common;
//! use common::{TestClient, TestServer, SOFTWARE_DEV_PATH_ID};
//! use reqwest::StatusCode;
//!
//! #[tokio::test]
//! async fn test_get_career_path() {
//!     let server = TestServer::spawn().await;
//!     let client = TestClient::new(server.base_url.clone());
//!
//!     let response = client.get_career_path(SOFTWARE_DEV_PATH_ID).await;
//!     assert_eq!(response.status(), StatusCode::OK);
//! }
//! ```

mod constants;
mod server;

// Public API - this is what tests import
#[allow(unused_imports)]
pub use client::TestClient;
#[allow(unused_imports)]
pub use constants::*;
#[allow(unused_imports)]
pub use server::TestServer;
