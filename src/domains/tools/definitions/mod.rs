//! Tool definitions module.
//!
//! One definition per eBird endpoint, grouped the way the API groups
//! them: observation data, product data, and reference data. Shared
//! helpers live in `common`.

pub mod common;
pub mod obs;
pub mod product;
pub mod ref_data;

pub use obs::{
    HistoricObservationsTool, NearbyNotableObservationsTool, NearbyObservationsTool,
    NearbySpeciesObservationsTool, NearestSpeciesObservationsTool, RecentNotableObservationsTool,
    RecentObservationsTool, RecentSpeciesObservationsTool,
};
pub use product::{
    ChecklistFeedTool, ChecklistTool, RegionalStatisticsTool, SpeciesListTool,
    SpeciesStatisticsTool, Top100Tool,
};
pub use ref_data::{
    HotspotInfoTool, NearbyHotspotsTool, RegionHotspotsTool, RegionInfoTool, RegionListTool,
    TaxaLocaleCodesTool, TaxonomyFormsTool, TaxonomyGroupsTool, TaxonomyTool, TaxonomyVersionsTool,
};
