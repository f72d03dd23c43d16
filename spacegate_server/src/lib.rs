//! HTTP layer of the space-data gateway: router, handlers, request DTOs,
//! and error mapping around `spacegate_lib`.

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use config::Config;
pub use router::create_router;
pub use state::AppState;
