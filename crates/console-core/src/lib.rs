//! # Console Core
//!
//! Domain entities, view state, services, and repository traits for the
//! showroom console.

pub mod domain;
pub mod error;
pub mod forms;
pub mod normalize;
pub mod repositories;
pub mod services;
pub mod views;

// Re-export domain entities
pub use domain::*;
pub use error::DomainError;
