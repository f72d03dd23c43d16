mod apod;
pub use self::apod::Apod;

mod neo;
pub use self::neo::{
    CloseApproach, DiameterRange, EstimatedDiameter, MissDistance, NearEarthObject, NeoFeed,
    RelativeVelocity,
};

mod mars;
pub use self::mars::{MarsPhoto, MarsPhotosResponse, RoverCamera, RoverInfo};

mod epic;
pub use self::epic::EpicImageRecord;
