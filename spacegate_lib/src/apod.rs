//! Astronomy-picture-of-the-day shaping.

use chrono::NaiveDate;
use serde::Serialize;

use nasa_api::types::Apod;
use nasa_api::{ApodQuery, Client};

use crate::error::GatewayError;

/// The picture-of-the-day record as the gateway serves it.
#[derive(Debug, Clone, Serialize)]
pub struct ApodView {
    pub title: String,
    pub date: NaiveDate,
    pub explanation: String,
    pub url: Option<String>,
    pub media_type: String,
}

impl ApodView {
    pub fn project(apod: Apod) -> Self {
        Self {
            title: apod.title,
            date: apod.date,
            explanation: apod.explanation,
            url: apod.url,
            media_type: apod.media_type,
        }
    }
}

/// Fetches the picture of the day, optionally for a specific date. The
/// date is forwarded unmodified; with `None` the upstream API picks today.
pub async fn fetch_apod(client: &Client, date: Option<NaiveDate>) -> Result<ApodView, GatewayError> {
    let mut query = ApodQuery::default();
    if let Some(date) = date {
        query = query.with_date(date);
    }
    let apod = client.get_apod(&query).await?;
    Ok(ApodView::project(apod))
}
