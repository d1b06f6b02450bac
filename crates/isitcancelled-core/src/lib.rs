//! # IsItCancelled Core
//!
//! Core types shared by the IsItCancelled API crates.
//!
//! - [`errors`]: Application error type with HTTP response conversion
//!
//! # Example
//!
//! ```ignore
//! use isitcancelled_core::AppError;
//!
//! let error = AppError::bad_request(anyhow::anyhow!("class_id is required"));
//! ```

pub mod errors;

pub use errors::{AppError, ErrorResponse};
