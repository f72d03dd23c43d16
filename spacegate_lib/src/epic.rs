//! EPIC Earth imagery shaping.

use chrono::NaiveDate;
use serde::Serialize;

use nasa_api::types::EpicImageRecord;
use nasa_api::Client;

use crate::error::GatewayError;

/// Archive host serving the actual image files; the API itself only
/// returns filename tokens.
pub const EPIC_ARCHIVE_BASE: &str = "https://epic.gsfc.nasa.gov/archive/natural";

/// One EPIC image, with the archive URL synthesized from the request date
/// and the upstream filename token.
#[derive(Debug, Clone, Serialize)]
pub struct EpicImage {
    pub image_url: String,
    pub caption: String,
    pub date: String,
}

impl EpicImage {
    pub fn project(record: EpicImageRecord, date: NaiveDate) -> Self {
        Self {
            image_url: epic_image_url(date, &record.image),
            caption: record.caption,
            date: record.date,
        }
    }
}

/// Builds the archive URL for one image: the date becomes a `YYYY/MM/DD`
/// path segment and the filename token gets the `png` extension.
pub fn epic_image_url(date: NaiveDate, image: &str) -> String {
    format!(
        "{}/{}/png/{}.png",
        EPIC_ARCHIVE_BASE,
        date.format("%Y/%m/%d"),
        image
    )
}

/// Fetches the natural-color image listing for one date. An empty result
/// is not an error; the HTTP layer reports it as a distinct payload.
pub async fn fetch_epic(client: &Client, date: NaiveDate) -> Result<Vec<EpicImage>, GatewayError> {
    let records = client.get_epic_natural(date).await?;
    Ok(records
        .into_iter()
        .map(|record| EpicImage::project(record, date))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn archive_url_zero_pads_date_segments() {
        assert_eq!(
            epic_image_url(date(2015, 6, 13), "epic_1b_20150613003633"),
            "https://epic.gsfc.nasa.gov/archive/natural/2015/06/13/png/epic_1b_20150613003633.png"
        );
    }

    #[test]
    fn project_passes_caption_and_timestamp_through() {
        let record = EpicImageRecord {
            image: "epic_1b_20151031003633".to_string(),
            caption: "This image was taken by NASA's EPIC camera".to_string(),
            date: "2015-10-31 00:36:33".to_string(),
        };
        let shaped = EpicImage::project(record, date(2015, 10, 31));
        assert_eq!(
            shaped.image_url,
            "https://epic.gsfc.nasa.gov/archive/natural/2015/10/31/png/epic_1b_20151031003633.png"
        );
        assert_eq!(shaped.date, "2015-10-31 00:36:33");
    }
}
