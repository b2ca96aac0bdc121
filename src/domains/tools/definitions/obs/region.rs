//! Region-scoped observation tools.
//!
//! Recent, notable and species-specific observation queries scoped to an
//! eBird region code.

use std::sync::Arc;

use rmcp::{
    handler::server::tool::ToolRoute,
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;

use super::super::common::{
    api_result, api_route, default_back, default_detail, default_max_results, tool_model,
};
use crate::ebird::{EbirdClient, QueryParams};

/// Parameters for recent observations in a region.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct RecentObservationsParams {
    #[schemars(description = "Region code, e.g. US-NY, or a location code")]
    pub region_code: String,

    #[schemars(description = "Days back to look for observations (default: 14)")]
    #[serde(default = "default_back")]
    pub back: u32,

    #[schemars(description = "Maximum number of results (default: 100)")]
    #[serde(default = "default_max_results")]
    pub max_results: u32,

    #[schemars(description = "Include unreviewed (provisional) observations (default: false)")]
    #[serde(default)]
    pub include_provisional: bool,

    #[schemars(description = "Only include observations from hotspots (default: false)")]
    #[serde(default)]
    pub hotspot: bool,
}

impl RecentObservationsParams {
    pub fn endpoint(&self) -> String {
        format!("data/obs/{}/recent", self.region_code)
    }

    pub fn query(&self) -> QueryParams {
        QueryParams::new()
            .set("back", self.back)
            .set("maxResults", self.max_results)
            .set("includeProvisional", self.include_provisional)
            .set("hotspot", self.hotspot)
    }
}

/// Recent observations for a region.
#[derive(Debug, Clone)]
pub struct RecentObservationsTool;

impl RecentObservationsTool {
    pub const NAME: &'static str = "get_recent_observations";
    pub const DESCRIPTION: &'static str =
        "Get recent bird observations for a region. Returns the raw eBird observation records.";

    pub fn execute(client: &EbirdClient, params: &RecentObservationsParams) -> CallToolResult {
        api_result(Self::NAME, client.get(&params.endpoint(), &params.query()))
    }

    pub fn to_tool() -> Tool {
        tool_model::<RecentObservationsParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<EbirdClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        api_route(Self::to_tool(), client, Self::execute)
    }
}

/// Parameters for recent notable observations in a region.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct RecentNotableObservationsParams {
    #[schemars(description = "Region code, e.g. US-NY")]
    pub region_code: String,

    #[schemars(description = "Days back to look for observations (default: 14)")]
    #[serde(default = "default_back")]
    pub back: u32,

    #[schemars(description = "Maximum number of results (default: 100)")]
    #[serde(default = "default_max_results")]
    pub max_results: u32,

    #[schemars(description = "Include unreviewed (provisional) observations (default: false)")]
    #[serde(default)]
    pub include_provisional: bool,

    #[schemars(description = "Only include observations from hotspots (default: false)")]
    #[serde(default)]
    pub hotspot: bool,

    #[schemars(description = "Detail level, 'simple' or 'full' (default: simple)")]
    #[serde(default = "default_detail")]
    pub detail: String,
}

impl RecentNotableObservationsParams {
    pub fn endpoint(&self) -> String {
        format!("data/obs/{}/recent/notable", self.region_code)
    }

    pub fn query(&self) -> QueryParams {
        QueryParams::new()
            .set("back", self.back)
            .set("maxResults", self.max_results)
            .set("includeProvisional", self.include_provisional)
            .set("hotspot", self.hotspot)
            .set("detail", &self.detail)
    }
}

/// Recent notable (rare or unusual) observations for a region.
#[derive(Debug, Clone)]
pub struct RecentNotableObservationsTool;

impl RecentNotableObservationsTool {
    pub const NAME: &'static str = "get_recent_notable_observations";
    pub const DESCRIPTION: &'static str =
        "Get recent notable bird observations (rarities and unusual sightings) for a region.";

    pub fn execute(
        client: &EbirdClient,
        params: &RecentNotableObservationsParams,
    ) -> CallToolResult {
        api_result(Self::NAME, client.get(&params.endpoint(), &params.query()))
    }

    pub fn to_tool() -> Tool {
        tool_model::<RecentNotableObservationsParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<EbirdClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        api_route(Self::to_tool(), client, Self::execute)
    }
}

/// Parameters for recent observations of one species in a region.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct RecentSpeciesObservationsParams {
    #[schemars(description = "Region code, e.g. US-NY")]
    pub region_code: String,

    #[schemars(description = "eBird species code, e.g. norcar")]
    pub species_code: String,

    #[schemars(description = "Days back to look for observations (default: 14)")]
    #[serde(default = "default_back")]
    pub back: u32,

    #[schemars(description = "Maximum number of results (default: 100)")]
    #[serde(default = "default_max_results")]
    pub max_results: u32,

    #[schemars(description = "Include unreviewed (provisional) observations (default: false)")]
    #[serde(default)]
    pub include_provisional: bool,

    #[schemars(description = "Only include observations from hotspots (default: false)")]
    #[serde(default)]
    pub hotspot: bool,
}

impl RecentSpeciesObservationsParams {
    pub fn endpoint(&self) -> String {
        format!("data/obs/{}/recent/{}", self.region_code, self.species_code)
    }

    pub fn query(&self) -> QueryParams {
        QueryParams::new()
            .set("back", self.back)
            .set("maxResults", self.max_results)
            .set("includeProvisional", self.include_provisional)
            .set("hotspot", self.hotspot)
    }
}

/// Recent observations of a specific species in a region.
#[derive(Debug, Clone)]
pub struct RecentSpeciesObservationsTool;

impl RecentSpeciesObservationsTool {
    pub const NAME: &'static str = "get_recent_species_observations";
    pub const DESCRIPTION: &'static str =
        "Get recent observations of a specific species in a region.";

    pub fn execute(
        client: &EbirdClient,
        params: &RecentSpeciesObservationsParams,
    ) -> CallToolResult {
        api_result(Self::NAME, client.get(&params.endpoint(), &params.query()))
    }

    pub fn to_tool() -> Tool {
        tool_model::<RecentSpeciesObservationsParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<EbirdClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        api_route(Self::to_tool(), client, Self::execute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recent_observations_defaults() {
        let json = r#"{"region_code": "US-NY"}"#;
        let params: RecentObservationsParams = serde_json::from_str(json).unwrap();

        assert_eq!(params.endpoint(), "data/obs/US-NY/recent");

        let query = params.query();
        assert_eq!(query.len(), 4);
        assert_eq!(query.get("back"), Some("14"));
        assert_eq!(query.get("maxResults"), Some("100"));
        assert_eq!(query.get("includeProvisional"), Some("false"));
        assert_eq!(query.get("hotspot"), Some("false"));
    }

    #[test]
    fn test_recent_observations_explicit_zero_back() {
        let json = r#"{"region_code": "US-NY", "back": 0}"#;
        let params: RecentObservationsParams = serde_json::from_str(json).unwrap();
        assert_eq!(params.query().get("back"), Some("0"));
    }

    #[test]
    fn test_notable_observations_include_detail() {
        let json = r#"{"region_code": "CA-ON", "detail": "full"}"#;
        let params: RecentNotableObservationsParams = serde_json::from_str(json).unwrap();

        assert_eq!(params.endpoint(), "data/obs/CA-ON/recent/notable");
        assert_eq!(params.query().get("detail"), Some("full"));
    }

    #[test]
    fn test_notable_observations_default_detail() {
        let json = r#"{"region_code": "CA-ON"}"#;
        let params: RecentNotableObservationsParams = serde_json::from_str(json).unwrap();
        assert_eq!(params.query().get("detail"), Some("simple"));
    }

    #[test]
    fn test_species_observations_path_order() {
        let json = r#"{"region_code": "US-NY", "species_code": "norcar"}"#;
        let params: RecentSpeciesObservationsParams = serde_json::from_str(json).unwrap();

        assert_eq!(params.endpoint(), "data/obs/US-NY/recent/norcar");
        assert_eq!(params.query().len(), 4);
    }

    #[test]
    fn test_missing_region_code_is_rejected() {
        let result = serde_json::from_str::<RecentObservationsParams>("{}");
        assert!(result.is_err());
    }
}
