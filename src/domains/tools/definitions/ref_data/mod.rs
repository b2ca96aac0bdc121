//! Reference data tools (the eBird `ref` endpoints).

pub mod hotspot;
pub mod region;
pub mod taxonomy;

pub use hotspot::{HotspotInfoTool, NearbyHotspotsTool, RegionHotspotsTool};
pub use region::{RegionInfoTool, RegionListTool};
pub use taxonomy::{
    TaxaLocaleCodesTool, TaxonomyFormsTool, TaxonomyGroupsTool, TaxonomyTool, TaxonomyVersionsTool,
};
