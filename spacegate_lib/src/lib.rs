//! Domain layer for the space-data gateway: parameter validation, the
//! near-earth-object range splitter, and per-endpoint response shapers.
//!
//! Wraps the `nasa_api` client crate; everything here is request-scoped
//! and stateless.

pub mod apod;
pub mod epic;
pub mod error;
pub mod mars;
pub mod neo;
pub mod validation;

pub use nasa_api;
pub use nasa_api::Client;

pub use apod::{fetch_apod, ApodView};
pub use epic::{fetch_epic, EpicImage};
pub use error::GatewayError;
pub use mars::{fetch_mars_photos, RoverPhoto};
pub use neo::{fetch_neo, split_windows, NeoRecord};
