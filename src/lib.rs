//! JSON proxy in front of the TMDb movie API.
//!
//! Handlers live under [`modules`]; all outbound traffic goes through the
//! [`infrastructure::tmdb::Upstream`] trait.

pub mod app;
pub mod common;
pub mod config;
pub mod docs;
pub mod infrastructure;
pub mod modules;
pub mod routes;
pub mod state;

pub use app::create_app;
pub use state::AppState;
