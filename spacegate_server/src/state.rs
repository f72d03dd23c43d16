//! Application state for the HTTP server.

use std::sync::Arc;

use spacegate_lib::Client;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Upstream API client, shared across requests.
    pub client: Arc<Client>,
}

impl AppState {
    /// Create a new application state around the given upstream client.
    pub fn new(client: Client) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}
