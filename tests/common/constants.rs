//! Shared constants for end-to-end tests
//!
//! This module contains all constants used across the test suite.
//! When test data changes (user ids, catalog expectations, etc.),
//! update only this file.

// ============================================================================
// Test Users
// ============================================================================

/// Primary test user id (users are opaque strings, there is no auth)
pub const TEST_USER: &str = "u1";

/// Secondary test user id, used for isolation checks
pub const OTHER_USER: &str = "u2";

// ============================================================================
// Builtin Catalog Expectations
// ============================================================================

/// Number of career paths in the builtin catalog
pub const CAREER_PATHS_COUNT: usize = 6;

/// Number of milestones every builtin career path carries
pub const MILESTONES_PER_PATH: usize = 5;

/// Career path id for "Software Development"
pub const SOFTWARE_DEV_PATH_ID: &str = "software-dev";

/// First milestone of the software development path
pub const SOFTWARE_DEV_MILESTONE_1: &str = "sd-1";

/// Second milestone of the software development path
pub const SOFTWARE_DEV_MILESTONE_2: &str = "sd-2";

/// Career path id for "Cybersecurity"
pub const CYBERSECURITY_PATH_ID: &str = "cybersecurity";

/// First milestone of the cybersecurity path
pub const CYBERSECURITY_MILESTONE_1: &str = "cs-1";

// ============================================================================
// Timing
// ============================================================================

/// How long to wait for a spawned test server to accept requests
pub const SERVER_READY_TIMEOUT_MS: u64 = 5000;

/// Poll interval while waiting for server readiness
pub const SERVER_READY_POLL_INTERVAL_MS: u64 = 20;

/// Per-request timeout for the test client
pub const REQUEST_TIMEOUT_SECS: u64 = 5;
