//! Web layer for the voyage schedule.
//!
//! Provides HTTP endpoints for listing keywords and searching voyages.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
pub use templates::*;
