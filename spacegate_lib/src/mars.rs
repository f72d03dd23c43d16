//! Mars rover photo shaping.

use chrono::NaiveDate;
use serde::Serialize;

use nasa_api::types::MarsPhoto;
use nasa_api::{Client, MarsPhotosQuery};

use crate::error::GatewayError;

/// One rover photo, projected down to the fields the gateway serves.
#[derive(Debug, Clone, Serialize)]
pub struct RoverPhoto {
    pub id: i64,
    pub image_url: String,
    pub earth_date: NaiveDate,
    pub camera_name: String,
}

impl RoverPhoto {
    pub fn project(photo: MarsPhoto) -> Self {
        Self {
            id: photo.id,
            image_url: photo.img_src,
            earth_date: photo.earth_date,
            camera_name: photo.camera.full_name,
        }
    }
}

/// Fetches photos taken by `rover` on the given sol, optionally filtered
/// by camera, truncated to `limit`. Rover and camera are passed through
/// as-is; the upstream API decides whether it knows them.
pub async fn fetch_mars_photos(
    client: &Client,
    rover: &str,
    sol: i64,
    camera: Option<&str>,
    limit: i64,
) -> Result<Vec<RoverPhoto>, GatewayError> {
    let mut query = MarsPhotosQuery::new(sol);
    if let Some(camera) = camera {
        query = query.with_camera(camera);
    }
    let resp = client.get_mars_photos(rover, &query).await?;
    let mut photos: Vec<RoverPhoto> = resp.photos.into_iter().map(RoverPhoto::project).collect();
    photos.truncate(limit.max(0) as usize);
    Ok(photos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nasa_api::types::{RoverCamera, RoverInfo};

    #[test]
    fn project_selects_and_renames() {
        let photo = MarsPhoto {
            id: 102693,
            sol: 1000,
            camera: RoverCamera {
                name: "FHAZ".to_string(),
                full_name: "Front Hazard Avoidance Camera".to_string(),
            },
            img_src: "http://mars.jpl.nasa.gov/img/FLB_486265257EDR.JPG".to_string(),
            earth_date: NaiveDate::from_ymd_opt(2015, 5, 30).unwrap(),
            rover: RoverInfo {
                name: "Curiosity".to_string(),
                status: "active".to_string(),
            },
        };
        let shaped = RoverPhoto::project(photo);
        assert_eq!(shaped.id, 102693);
        assert_eq!(shaped.image_url, "http://mars.jpl.nasa.gov/img/FLB_486265257EDR.JPG");
        assert_eq!(shaped.camera_name, "Front Hazard Avoidance Camera");

        let value = serde_json::to_value(&shaped).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 4);
        assert!(obj.contains_key("image_url"));
        assert!(!obj.contains_key("img_src"));
    }
}
