//! Product data tools (the eBird `product` endpoints).

pub mod checklist;
pub mod stats;

pub use checklist::{ChecklistFeedTool, ChecklistTool};
pub use stats::{RegionalStatisticsTool, SpeciesListTool, SpeciesStatisticsTool, Top100Tool};
