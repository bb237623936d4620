//! Feedback API
//!
//! HTTP client plus endpoint bindings, organized by domain.

mod client;
mod error;
mod auth;
mod feedback;
mod catalog;
mod analytics;

pub use client::{ApiClient, AuthPolicy};
pub use error::ApiError;
