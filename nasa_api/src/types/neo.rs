use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Near-earth-object feed for a date range of at most 7 days.
///
/// The upstream API groups objects by approach date; the map is kept as a
/// `BTreeMap` so iteration is always in ascending date order, independent
/// of the key order in the JSON body.
#[derive(Serialize, Deserialize)]
pub struct NeoFeed {
    pub element_count: i64,

    pub near_earth_objects: BTreeMap<NaiveDate, Vec<NearEarthObject>>,
}

#[derive(Serialize, Deserialize)]
pub struct NearEarthObject {
    pub name: String,

    pub estimated_diameter: EstimatedDiameter,

    pub is_potentially_hazardous_asteroid: bool,

    pub close_approach_data: Vec<CloseApproach>,
}

#[derive(Serialize, Deserialize)]
pub struct EstimatedDiameter {
    pub meters: DiameterRange,
}

#[derive(Serialize, Deserialize)]
pub struct DiameterRange {
    pub estimated_diameter_min: f64,

    pub estimated_diameter_max: f64,
}

/// One close-approach event. The upstream API serializes velocity and
/// distance as decimal strings.
#[derive(Serialize, Deserialize)]
pub struct CloseApproach {
    pub close_approach_date: NaiveDate,

    pub relative_velocity: RelativeVelocity,

    pub miss_distance: MissDistance,
}

#[derive(Serialize, Deserialize)]
pub struct RelativeVelocity {
    pub kilometers_per_second: String,
}

#[derive(Serialize, Deserialize)]
pub struct MissDistance {
    pub kilometers: String,
}
