use chrono::NaiveDate;
use url::Url;

use super::common::Query;

/// Query for the near-earth-object feed. Both bounds are inclusive; the
/// upstream API rejects ranges wider than 7 days.
pub struct NeoFeedQuery {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl NeoFeedQuery {
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            start_date,
            end_date,
        }
    }
}

impl Query for NeoFeedQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair("start_date", &self.start_date.format("%Y-%m-%d").to_string())
            .append_pair("end_date", &self.end_date.format("%Y-%m-%d").to_string());
        url
    }
}
