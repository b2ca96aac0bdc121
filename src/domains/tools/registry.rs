//! Tool Registry - central enumeration of all tools.
//!
//! The registry is the single source of truth for which tools exist:
//! the router builds one route per entry, and the tests assert the two
//! stay in sync.

use rmcp::model::Tool;

use super::definitions::{
    ChecklistFeedTool, ChecklistTool, HistoricObservationsTool, HotspotInfoTool,
    NearbyHotspotsTool, NearbyNotableObservationsTool, NearbyObservationsTool,
    NearbySpeciesObservationsTool, NearestSpeciesObservationsTool, RecentNotableObservationsTool,
    RecentObservationsTool, RecentSpeciesObservationsTool, RegionHotspotsTool, RegionInfoTool,
    RegionListTool, RegionalStatisticsTool, SpeciesListTool, SpeciesStatisticsTool,
    TaxaLocaleCodesTool, TaxonomyFormsTool, TaxonomyGroupsTool, TaxonomyTool,
    TaxonomyVersionsTool, Top100Tool,
};

/// Tool registry - enumerates all available tools.
pub struct ToolRegistry;

impl ToolRegistry {
    /// Get all tool names.
    pub fn tool_names() -> Vec<&'static str> {
        vec![
            RecentObservationsTool::NAME,
            RecentNotableObservationsTool::NAME,
            RecentSpeciesObservationsTool::NAME,
            NearbyObservationsTool::NAME,
            NearbyNotableObservationsTool::NAME,
            NearbySpeciesObservationsTool::NAME,
            NearestSpeciesObservationsTool::NAME,
            HistoricObservationsTool::NAME,
            ChecklistTool::NAME,
            ChecklistFeedTool::NAME,
            SpeciesListTool::NAME,
            RegionalStatisticsTool::NAME,
            SpeciesStatisticsTool::NAME,
            Top100Tool::NAME,
            TaxonomyTool::NAME,
            TaxonomyFormsTool::NAME,
            TaxaLocaleCodesTool::NAME,
            TaxonomyVersionsTool::NAME,
            TaxonomyGroupsTool::NAME,
            RegionListTool::NAME,
            RegionInfoTool::NAME,
            RegionHotspotsTool::NAME,
            NearbyHotspotsTool::NAME,
            HotspotInfoTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            RecentObservationsTool::to_tool(),
            RecentNotableObservationsTool::to_tool(),
            RecentSpeciesObservationsTool::to_tool(),
            NearbyObservationsTool::to_tool(),
            NearbyNotableObservationsTool::to_tool(),
            NearbySpeciesObservationsTool::to_tool(),
            NearestSpeciesObservationsTool::to_tool(),
            HistoricObservationsTool::to_tool(),
            ChecklistTool::to_tool(),
            ChecklistFeedTool::to_tool(),
            SpeciesListTool::to_tool(),
            RegionalStatisticsTool::to_tool(),
            SpeciesStatisticsTool::to_tool(),
            Top100Tool::to_tool(),
            TaxonomyTool::to_tool(),
            TaxonomyFormsTool::to_tool(),
            TaxaLocaleCodesTool::to_tool(),
            TaxonomyVersionsTool::to_tool(),
            TaxonomyGroupsTool::to_tool(),
            RegionListTool::to_tool(),
            RegionInfoTool::to_tool(),
            RegionHotspotsTool::to_tool(),
            NearbyHotspotsTool::to_tool(),
            HotspotInfoTool::to_tool(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_registry_tool_names() {
        let names = ToolRegistry::tool_names();
        assert_eq!(names.len(), 24);
        assert!(names.contains(&"get_recent_observations"));
        assert!(names.contains(&"get_nearest_observations_of_species"));
        assert!(names.contains(&"get_checklist"));
        assert!(names.contains(&"get_checklist_feed"));
        assert!(names.contains(&"get_top_100"));
        assert!(names.contains(&"get_taxonomy"));
        assert!(names.contains(&"get_region_list"));
        assert!(names.contains(&"get_hotspot_info"));
    }

    #[test]
    fn test_registry_names_are_unique() {
        let names = ToolRegistry::tool_names();
        let unique: HashSet<_> = names.iter().collect();
        assert_eq!(unique.len(), names.len());
    }

    #[test]
    fn test_registry_metadata_matches_names() {
        let names = ToolRegistry::tool_names();
        let tools = ToolRegistry::get_all_tools();
        assert_eq!(tools.len(), names.len());

        for (tool, name) in tools.iter().zip(names) {
            assert_eq!(tool.name.as_ref(), name);
            assert!(tool.description.is_some());
        }
    }
}
