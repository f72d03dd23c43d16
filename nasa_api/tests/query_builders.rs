use chrono::NaiveDate;
use nasa_api::{ApodQuery, MarsPhotosQuery, NeoFeedQuery, Query};
use url::Url;

fn base_url() -> Url {
    Url::parse("https://example.com").unwrap()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn apod_query_defaults() {
    let url = ApodQuery::default().add_to_url(&base_url());
    assert_eq!(url.query(), None);
}

#[test]
fn apod_query_with_date() {
    let url = ApodQuery::default()
        .with_date(date(2025, 9, 1))
        .add_to_url(&base_url());
    assert_eq!(url.query(), Some("date=2025-09-01"));
}

#[test]
fn apod_query_zero_pads_date() {
    let url = ApodQuery::default()
        .with_date(date(2025, 1, 5))
        .add_to_url(&base_url());
    assert_eq!(url.query(), Some("date=2025-01-05"));
}

#[test]
fn neo_feed_query_bounds() {
    let url = NeoFeedQuery::new(date(2025, 9, 1), date(2025, 9, 7)).add_to_url(&base_url());
    let query = url.query().unwrap();
    assert!(query.contains("start_date=2025-09-01"));
    assert!(query.contains("end_date=2025-09-07"));
}

#[test]
fn neo_feed_query_single_day() {
    let url = NeoFeedQuery::new(date(2025, 9, 1), date(2025, 9, 1)).add_to_url(&base_url());
    let query = url.query().unwrap();
    assert!(query.contains("start_date=2025-09-01"));
    assert!(query.contains("end_date=2025-09-01"));
}

#[test]
fn mars_photos_query_sol_only() {
    let url = MarsPhotosQuery::new(1000).add_to_url(&base_url());
    assert_eq!(url.query(), Some("sol=1000"));
}

#[test]
fn mars_photos_query_with_camera() {
    let url = MarsPhotosQuery::new(2000)
        .with_camera("NAVCAM")
        .add_to_url(&base_url());
    let query = url.query().unwrap();
    assert!(query.contains("sol=2000"));
    assert!(query.contains("camera=NAVCAM"));
}

#[test]
fn mars_photos_query_encodes_camera() {
    let url = MarsPhotosQuery::new(0)
        .with_camera("a camera")
        .add_to_url(&base_url());
    let query = url.query().unwrap();
    assert!(query.contains("camera=a+camera") || query.contains("camera=a%20camera"));
}

#[test]
fn query_preserves_existing_path() {
    let base = Url::parse("https://example.com/neo/rest/v1/feed").unwrap();
    let url = NeoFeedQuery::new(date(2025, 9, 1), date(2025, 9, 2)).add_to_url(&base);
    assert_eq!(url.path(), "/neo/rest/v1/feed");
}
