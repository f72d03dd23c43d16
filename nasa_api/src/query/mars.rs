use url::Url;

use super::common::Query;

/// Query for the Mars rover photos endpoint. The rover itself is a path
/// segment, not a query parameter.
pub struct MarsPhotosQuery {
    /// Martian solar day since the rover's landing.
    pub sol: i64,
    /// Optional camera abbreviation (e.g. FHAZ, NAVCAM). Sent as-is.
    pub camera: Option<String>,
}

impl MarsPhotosQuery {
    pub fn new(sol: i64) -> Self {
        Self { sol, camera: None }
    }

    pub fn with_camera(mut self, camera: &str) -> Self {
        self.camera = Some(camera.to_string());
        self
    }
}

impl Query for MarsPhotosQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair("sol", &self.sol.to_string());
        if let Some(camera) = &self.camera {
            url.query_pairs_mut().append_pair("camera", camera.as_str());
        }
        url
    }
}

#[cfg(test)]
mod tests {
    use url::Url;

    use crate::query::{MarsPhotosQuery, Query};

    #[test]
    fn test_mars_photos_query() {
        let url = Url::parse("https://example.com/mars-photos/api/v1/rovers/curiosity/photos")
            .unwrap();

        assert_eq!(
            MarsPhotosQuery::new(1000).add_to_url(&url).query(),
            Some("sol=1000")
        );

        assert_eq!(
            MarsPhotosQuery::new(1000)
                .with_camera("FHAZ")
                .add_to_url(&url)
                .query(),
            Some("sol=1000&camera=FHAZ")
        );
    }
}
