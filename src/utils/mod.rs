//! Shared utilities for the IsItCancelled API.
//!
//! - [`response`]: Raw JSON response helpers

pub mod response;
