//! Observation data tools (the eBird `data/obs` and `data/nearest` endpoints).

pub mod geo;
pub mod historic;
pub mod region;

pub use geo::{
    NearbyNotableObservationsTool, NearbyObservationsTool, NearbySpeciesObservationsTool,
    NearestSpeciesObservationsTool,
};
pub use historic::HistoricObservationsTool;
pub use region::{
    RecentNotableObservationsTool, RecentObservationsTool, RecentSpeciesObservationsTool,
};
