//! # IsItCancelled API
//!
//! A read-only REST API built with Rust, Axum and Redis that answers one
//! question for client applications: is class X cancelled this week?
//!
//! ## Overview
//!
//! An external ingestion job keeps a Redis cache filled with timetable data.
//! This service only reads it:
//!
//! - **Metadata**: one aggregate document under the key `meta`, holding the
//!   semesters, time slots, weeks and classes. Each of the four parts is
//!   served by its own route.
//! - **Timetables**: one record per class and week under
//!   `semesters:{semesterId}:weeks:{weekId}:classes:{classId}`, served
//!   verbatim.
//!
//! ## Architecture
//!
//! ```text
//! src/
//! ├── modules/          # Feature modules
//! │   ├── metadata/    # Semesters, time slots, weeks, classes
//! │   └── timetables/  # Weekly per-class records
//! └── utils/           # Shared response helpers
//! crates/
//! ├── isitcancelled-core/    # AppError
//! ├── isitcancelled-config/  # CORS and listener settings
//! └── isitcancelled-cache/   # Cache store trait, Redis and in-memory stores
//! ```
//!
//! Each feature module has the same layout: `controller.rs` (HTTP handlers),
//! `service.rs` (cache reads), `model.rs` (types) and `router.rs`.
//!
//! ## Routes
//!
//! | Route | Response |
//! |-------|----------|
//! | `GET /semesters` | semesters |
//! | `GET /semesters/{id}/timeSlots` | time slots |
//! | `GET /semesters/{id}/weeks` | weeks |
//! | `GET /semesters/{id}/classes` | classes |
//! | `GET /semesters/{id}/weeks/{week}?class_id=..` | weekly class record |
//!
//! Any failed cache read answers `404 {"error":"Not Found"}`; a missing
//! `class_id` answers `400 {"error":"class_id is required"}`.
//!
//! ## Quick Start
//!
//! ```bash
//! REDIS_HOST=localhost REDIS_PORT=6379 cargo run
//! ```
//!
//! The server listens on port 3003. API documentation is served at
//! `/swagger-ui` and `/scalar`.

pub mod docs;
pub mod logging;
pub mod modules;
pub mod router;
pub mod state;
pub mod utils;

// Re-export workspace crates for convenience
pub use isitcancelled_cache;
pub use isitcancelled_config;
pub use isitcancelled_core;
