use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct MarsPhotosResponse {
    pub photos: Vec<MarsPhoto>,
}

#[derive(Serialize, Deserialize)]
pub struct MarsPhoto {
    pub id: i64,

    pub sol: i64,

    pub camera: RoverCamera,

    pub img_src: String,

    pub earth_date: NaiveDate,

    pub rover: RoverInfo,
}

#[derive(Serialize, Deserialize)]
pub struct RoverCamera {
    pub name: String,

    pub full_name: String,
}

#[derive(Serialize, Deserialize)]
pub struct RoverInfo {
    pub name: String,

    pub status: String,
}
