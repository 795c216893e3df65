//! Data access for dashboard snapshots.
//!
//! # Responsibility
//! - Fetch whole tables through a `Connector`, one connection per call.
//! - Validate typed projections at the data access boundary.
//!
//! # Invariants
//! - Failures propagate unchanged; there is no retry or fallback.

pub mod dashboard_repo;
