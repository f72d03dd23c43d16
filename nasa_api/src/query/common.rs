//! Shared query infrastructure: the [`Query`] trait.

use url::Url;

/// Trait implemented by all query builders. Provides URL serialization of
/// the endpoint-specific parameters; the client appends the `api_key`
/// credential itself.
pub trait Query {
    /// Appends this query's parameters to the given URL, returning the modified URL.
    fn add_to_url(&self, url: &Url) -> Url;
}
