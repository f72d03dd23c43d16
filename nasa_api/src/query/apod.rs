use chrono::NaiveDate;
use url::Url;

use super::common::Query;

/// Query for the astronomy-picture-of-the-day endpoint. With no date set,
/// the upstream API returns today's picture.
#[derive(Default)]
pub struct ApodQuery {
    pub date: Option<NaiveDate>,
}

impl Query for ApodQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        if let Some(date) = self.date {
            url.query_pairs_mut()
                .append_pair("date", &date.format("%Y-%m-%d").to_string());
        }
        url
    }
}

impl ApodQuery {
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use url::Url;

    use crate::query::{ApodQuery, Query};

    #[test]
    fn test_apod_query() {
        let url = Url::parse("https://example.com/planetary/apod").unwrap();

        assert_eq!(ApodQuery::default().add_to_url(&url).query(), None);

        let dated = ApodQuery::default()
            .with_date(NaiveDate::from_ymd_opt(2025, 9, 1).unwrap())
            .add_to_url(&url);
        assert_eq!(dated.query(), Some("date=2025-09-01"));
    }
}
