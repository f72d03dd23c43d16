//! Near-earth-object fetching: the date-range splitter and record shaper.
//!
//! The upstream feed serves at most 7 days per request, so a user-supplied
//! range is tiled into consecutive windows and fetched one window at a
//! time. Results keep upstream order within a window; windows are appended
//! in ascending order.

use chrono::{Duration, NaiveDate};
use serde::Serialize;

use nasa_api::types::NearEarthObject;
use nasa_api::{Client, NeoFeedQuery};

use crate::error::GatewayError;

/// One near-earth object, projected down to the fields the gateway serves.
/// Only the first close-approach entry of the upstream record is used; the
/// three approach-derived fields are `null` when the record has none.
#[derive(Debug, Clone, Serialize)]
pub struct NeoRecord {
    pub name: String,
    pub diameter_min_m: f64,
    pub diameter_max_m: f64,
    pub is_hazardous: bool,
    pub closest_approach_date: Option<NaiveDate>,
    pub relative_velocity_km_s: Option<String>,
    pub miss_distance_km: Option<String>,
}

impl NeoRecord {
    /// Projects an upstream record down to the served field subset.
    pub fn project(neo: NearEarthObject) -> Self {
        let approach = neo.close_approach_data.into_iter().next();
        let (closest_approach_date, relative_velocity_km_s, miss_distance_km) = match approach {
            Some(a) => (
                Some(a.close_approach_date),
                Some(a.relative_velocity.kilometers_per_second),
                Some(a.miss_distance.kilometers),
            ),
            None => (None, None, None),
        };
        Self {
            name: neo.name,
            diameter_min_m: neo.estimated_diameter.meters.estimated_diameter_min,
            diameter_max_m: neo.estimated_diameter.meters.estimated_diameter_max,
            is_hazardous: neo.is_potentially_hazardous_asteroid,
            closest_approach_date,
            relative_velocity_km_s,
            miss_distance_km,
        }
    }
}

/// Tiles `[start_date, end_date]` into consecutive inclusive windows of at
/// most 7 calendar days each. Windows cover the range contiguously with no
/// gaps or overlaps; `start_date > end_date` yields no windows.
pub fn split_windows(start_date: NaiveDate, end_date: NaiveDate) -> Vec<(NaiveDate, NaiveDate)> {
    let mut windows = Vec::new();
    let mut current = start_date;
    while current <= end_date {
        let window_end = (current + Duration::days(6)).min(end_date);
        windows.push((current, window_end));
        current = window_end + Duration::days(1);
    }
    windows
}

/// Fetches near-earth objects for `[start_date, end_date]`, issuing one
/// sequential upstream request per window and concatenating the results.
///
/// Per-window feeds are flattened in ascending date order, keeping upstream
/// record order within a date. The first upstream error aborts the whole
/// fetch with no partial results. The accumulated list is truncated to
/// `limit` once, after all windows are consumed.
///
/// Range ordering and width must be validated before calling; the splitter
/// itself accepts any range.
pub async fn fetch_neo(
    client: &Client,
    start_date: NaiveDate,
    end_date: NaiveDate,
    limit: i64,
) -> Result<Vec<NeoRecord>, GatewayError> {
    let mut records = Vec::new();
    for (window_start, window_end) in split_windows(start_date, end_date) {
        tracing::debug!("fetching NEO window {} to {}", window_start, window_end);
        let feed = client
            .get_neo_feed(&NeoFeedQuery::new(window_start, window_end))
            .await?;
        for (_, objects) in feed.near_earth_objects {
            records.extend(objects.into_iter().map(NeoRecord::project));
        }
    }
    records.truncate(limit.max(0) as usize);
    Ok(records)
}
