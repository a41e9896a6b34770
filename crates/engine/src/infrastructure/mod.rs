//! Infrastructure implementations.
//!
//! Contains port trait implementations for external dependencies.

pub mod app_settings;
pub mod auth;
pub mod clock;
pub mod persistence;
pub mod ports;
