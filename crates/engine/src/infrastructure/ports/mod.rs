//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is concrete types.
//! Ports exist for:
//! - Warband document storage (could swap JSON files -> a cloud document store)
//! - Authentication (could swap the local user -> an OAuth provider)
//! - Clock (for testing)

mod auth;
mod error;
mod repos;
mod testing;

// =============================================================================
// Repository Ports
// =============================================================================
pub use repos::{Subscription, WarbandListener, WarbandRepository};

// =============================================================================
// Auth Ports
// =============================================================================
pub use auth::{AuthListener, AuthPort, AuthUser};

// =============================================================================
// Test-Only Mocks (only available during test builds)
// =============================================================================
#[cfg(test)]
pub use auth::MockAuthPort;
#[cfg(test)]
pub use repos::MockWarbandRepository;
#[cfg(test)]
pub use testing::MockClockPort;

// =============================================================================
// Testing Ports
// =============================================================================
pub use testing::ClockPort;

// =============================================================================
// Error Types
// =============================================================================
pub use error::{AuthError, RepoError};
