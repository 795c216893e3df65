//! Navigation controller.
//!
//! # Responsibility
//! - Turn one navigation selection into one fetch-then-render cycle.
//! - Keep the hosting UI driver decoupled from storage and rendering.

pub mod dashboard_service;
