mod apod;
mod common;
mod mars;
mod neo;

pub use self::apod::ApodQuery;
pub use self::common::Query;
pub use self::mars::MarsPhotosQuery;
pub use self::neo::NeoFeedQuery;
