//! Use cases - orchestration between the stores and the ports.

pub mod auth;
pub mod warband;

pub use auth::AuthApplicationService;
pub use warband::WarbandApplicationService;
