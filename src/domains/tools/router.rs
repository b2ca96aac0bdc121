//! Tool Router - builds the rmcp ToolRouter from the definitions.
//!
//! Each tool knows how to create its own route; this module only wires
//! them together with the shared eBird client.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use crate::ebird::EbirdClient;

use super::definitions::{
    ChecklistFeedTool, ChecklistTool, HistoricObservationsTool, HotspotInfoTool,
    NearbyHotspotsTool, NearbyNotableObservationsTool, NearbyObservationsTool,
    NearbySpeciesObservationsTool, NearestSpeciesObservationsTool, RecentNotableObservationsTool,
    RecentObservationsTool, RecentSpeciesObservationsTool, RegionHotspotsTool, RegionInfoTool,
    RegionListTool, RegionalStatisticsTool, SpeciesListTool, SpeciesStatisticsTool,
    TaxaLocaleCodesTool, TaxonomyFormsTool, TaxonomyGroupsTool, TaxonomyTool,
    TaxonomyVersionsTool, Top100Tool,
};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(client: Arc<EbirdClient>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(RecentObservationsTool::create_route(client.clone()))
        .with_route(RecentNotableObservationsTool::create_route(client.clone()))
        .with_route(RecentSpeciesObservationsTool::create_route(client.clone()))
        .with_route(NearbyObservationsTool::create_route(client.clone()))
        .with_route(NearbyNotableObservationsTool::create_route(client.clone()))
        .with_route(NearbySpeciesObservationsTool::create_route(client.clone()))
        .with_route(NearestSpeciesObservationsTool::create_route(client.clone()))
        .with_route(HistoricObservationsTool::create_route(client.clone()))
        .with_route(ChecklistTool::create_route(client.clone()))
        .with_route(ChecklistFeedTool::create_route(client.clone()))
        .with_route(SpeciesListTool::create_route(client.clone()))
        .with_route(RegionalStatisticsTool::create_route(client.clone()))
        .with_route(SpeciesStatisticsTool::create_route(client.clone()))
        .with_route(Top100Tool::create_route(client.clone()))
        .with_route(TaxonomyTool::create_route(client.clone()))
        .with_route(TaxonomyFormsTool::create_route(client.clone()))
        .with_route(TaxaLocaleCodesTool::create_route(client.clone()))
        .with_route(TaxonomyVersionsTool::create_route(client.clone()))
        .with_route(TaxonomyGroupsTool::create_route(client.clone()))
        .with_route(RegionListTool::create_route(client.clone()))
        .with_route(RegionInfoTool::create_route(client.clone()))
        .with_route(RegionHotspotsTool::create_route(client.clone()))
        .with_route(NearbyHotspotsTool::create_route(client.clone()))
        .with_route(HotspotInfoTool::create_route(client))
}

#[cfg(test)]
mod tests {
    use super::super::registry::ToolRegistry;
    use super::*;
    use crate::core::config::EbirdConfig;

    struct TestServer {}

    fn test_client() -> Arc<EbirdClient> {
        Arc::new(EbirdClient::new(&EbirdConfig::default()).unwrap())
    }

    #[test]
    fn test_build_router() {
        let router: ToolRouter<TestServer> = build_tool_router(test_client());
        let tools = router.list_all();
        assert_eq!(tools.len(), 24);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"get_recent_observations"));
        assert!(names.contains(&"get_nearby_observations"));
        assert!(names.contains(&"get_historic_observations"));
        assert!(names.contains(&"get_checklist"));
        assert!(names.contains(&"get_species_list"));
        assert!(names.contains(&"get_taxonomy"));
        assert!(names.contains(&"get_region_list"));
        assert!(names.contains(&"get_nearby_hotspots"));
    }

    #[test]
    fn test_registry_matches_router() {
        // Ensure registry and router expose the same tools
        let registry_names = ToolRegistry::tool_names();

        let router: ToolRouter<TestServer> = build_tool_router(test_client());
        let router_tools = router.list_all();
        let router_names: Vec<_> = router_tools.iter().map(|t| t.name.as_ref()).collect();

        assert_eq!(registry_names.len(), router_names.len());
        for name in registry_names {
            assert!(router_names.contains(&name));
        }
    }
}
