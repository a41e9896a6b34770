//! Warband Engine library.
//!
//! Everything around the pure rules in `warband-domain`: persistence,
//! authentication, the warband and undo stores.
//!
//! ## Structure
//!
//! - `use_cases/` - Orchestration between stores and ports
//! - `stores/` - In-memory warband state, editor session and undo
//! - `infrastructure/` - External dependency implementations (ports + adapters)
//! - `app` - Application composition

pub mod app;
pub mod infrastructure;
pub mod stores;
pub mod use_cases;

pub use app::App;
