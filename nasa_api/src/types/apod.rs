use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One astronomy-picture-of-the-day record.
///
/// `url` is absent for the occasional entry whose media is not directly
/// linkable; `hdurl` only exists for images.
#[derive(Serialize, Deserialize)]
pub struct Apod {
    pub title: String,

    pub date: NaiveDate,

    pub explanation: String,

    pub url: Option<String>,

    pub hdurl: Option<String>,

    pub media_type: String,

    pub copyright: Option<String>,

    pub service_version: Option<String>,
}
