//! Geographic-radius observation tools.
//!
//! Observation queries centered on a latitude/longitude pair rather than
//! a region code.

use std::sync::Arc;

use rmcp::{
    handler::server::tool::ToolRoute,
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;

use super::super::common::{
    api_result, api_route, default_back, default_detail, default_dist, default_max_results,
    default_sort, tool_model,
};
use crate::ebird::{EbirdClient, QueryParams};

/// Parameters for recent observations near a point.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct NearbyObservationsParams {
    #[schemars(description = "Latitude of the center point")]
    pub lat: f64,

    #[schemars(description = "Longitude of the center point")]
    pub lng: f64,

    #[schemars(description = "Days back to look for observations (default: 14)")]
    #[serde(default = "default_back")]
    pub back: u32,

    #[schemars(description = "Maximum number of results (default: 100)")]
    #[serde(default = "default_max_results")]
    pub max_results: u32,

    #[schemars(description = "Search radius in kilometers (default: 25)")]
    #[serde(default = "default_dist")]
    pub dist: u32,

    #[schemars(description = "Include unreviewed (provisional) observations (default: false)")]
    #[serde(default)]
    pub include_provisional: bool,

    #[schemars(description = "Only include observations from hotspots (default: false)")]
    #[serde(default)]
    pub hotspot: bool,

    #[schemars(description = "Sort order, 'date' or 'species' (default: date)")]
    #[serde(default = "default_sort")]
    pub sort: String,
}

impl NearbyObservationsParams {
    pub fn endpoint(&self) -> String {
        "data/obs/geo/recent".to_string()
    }

    pub fn query(&self) -> QueryParams {
        QueryParams::new()
            .set("lat", self.lat)
            .set("lng", self.lng)
            .set("back", self.back)
            .set("maxResults", self.max_results)
            .set("dist", self.dist)
            .set("includeProvisional", self.include_provisional)
            .set("hotspot", self.hotspot)
            .set("sort", &self.sort)
    }
}

/// Recent observations near a geographic point.
#[derive(Debug, Clone)]
pub struct NearbyObservationsTool;

impl NearbyObservationsTool {
    pub const NAME: &'static str = "get_nearby_observations";
    pub const DESCRIPTION: &'static str =
        "Get recent bird observations within a radius of a latitude/longitude point.";

    pub fn execute(client: &EbirdClient, params: &NearbyObservationsParams) -> CallToolResult {
        api_result(Self::NAME, client.get(&params.endpoint(), &params.query()))
    }

    pub fn to_tool() -> Tool {
        tool_model::<NearbyObservationsParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<EbirdClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        api_route(Self::to_tool(), client, Self::execute)
    }
}

/// Parameters for recent notable observations near a point.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct NearbyNotableObservationsParams {
    #[schemars(description = "Latitude of the center point")]
    pub lat: f64,

    #[schemars(description = "Longitude of the center point")]
    pub lng: f64,

    #[schemars(description = "Days back to look for observations (default: 14)")]
    #[serde(default = "default_back")]
    pub back: u32,

    #[schemars(description = "Maximum number of results (default: 100)")]
    #[serde(default = "default_max_results")]
    pub max_results: u32,

    #[schemars(description = "Search radius in kilometers (default: 25)")]
    #[serde(default = "default_dist")]
    pub dist: u32,

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

impl NearbyNotableObservationsParams {
    pub fn endpoint(&self) -> String {
        "data/obs/geo/recent/notable".to_string()
    }

    pub fn query(&self) -> QueryParams {
        QueryParams::new()
            .set("lat", self.lat)
            .set("lng", self.lng)
            .set("back", self.back)
            .set("maxResults", self.max_results)
            .set("dist", self.dist)
            .set("includeProvisional", self.include_provisional)
            .set("hotspot", self.hotspot)
            .set("detail", &self.detail)
    }
}

/// Recent notable observations near a geographic point.
#[derive(Debug, Clone)]
pub struct NearbyNotableObservationsTool;

impl NearbyNotableObservationsTool {
    pub const NAME: &'static str = "get_nearby_notable_observations";
    pub const DESCRIPTION: &'static str =
        "Get recent notable bird observations within a radius of a latitude/longitude point.";

    pub fn execute(
        client: &EbirdClient,
        params: &NearbyNotableObservationsParams,
    ) -> CallToolResult {
        api_result(Self::NAME, client.get(&params.endpoint(), &params.query()))
    }

    pub fn to_tool() -> Tool {
        tool_model::<NearbyNotableObservationsParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<EbirdClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        api_route(Self::to_tool(), client, Self::execute)
    }
}

/// Parameters for recent observations of one species near a point.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct NearbySpeciesObservationsParams {
    #[schemars(description = "eBird species code, e.g. norcar")]
    pub species_code: String,

    #[schemars(description = "Latitude of the center point")]
    pub lat: f64,

    #[schemars(description = "Longitude of the center point")]
    pub lng: f64,

    #[schemars(description = "Days back to look for observations (default: 14)")]
    #[serde(default = "default_back")]
    pub back: u32,

    #[schemars(description = "Maximum number of results (default: 100)")]
    #[serde(default = "default_max_results")]
    pub max_results: u32,

    #[schemars(description = "Search radius in kilometers (default: 25)")]
    #[serde(default = "default_dist")]
    pub dist: u32,

    #[schemars(description = "Include unreviewed (provisional) observations (default: false)")]
    #[serde(default)]
    pub include_provisional: bool,

    #[schemars(description = "Only include observations from hotspots (default: false)")]
    #[serde(default)]
    pub hotspot: bool,
}

impl NearbySpeciesObservationsParams {
    pub fn endpoint(&self) -> String {
        format!("data/obs/geo/recent/{}", self.species_code)
    }

    pub fn query(&self) -> QueryParams {
        QueryParams::new()
            .set("lat", self.lat)
            .set("lng", self.lng)
            .set("back", self.back)
            .set("maxResults", self.max_results)
            .set("dist", self.dist)
            .set("includeProvisional", self.include_provisional)
            .set("hotspot", self.hotspot)
    }
}

/// Recent observations of a specific species near a geographic point.
#[derive(Debug, Clone)]
pub struct NearbySpeciesObservationsTool;

impl NearbySpeciesObservationsTool {
    pub const NAME: &'static str = "get_nearby_species_observations";
    pub const DESCRIPTION: &'static str =
        "Get recent observations of a specific species within a radius of a point.";

    pub fn execute(
        client: &EbirdClient,
        params: &NearbySpeciesObservationsParams,
    ) -> CallToolResult {
        api_result(Self::NAME, client.get(&params.endpoint(), &params.query()))
    }

    pub fn to_tool() -> Tool {
        tool_model::<NearbySpeciesObservationsParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<EbirdClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        api_route(Self::to_tool(), client, Self::execute)
    }
}

/// Parameters for locating the nearest observations of a species.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct NearestSpeciesObservationsParams {
    #[schemars(description = "eBird species code, e.g. norcar")]
    pub species_code: String,

    #[schemars(description = "Latitude of the center point")]
    pub lat: f64,

    #[schemars(description = "Longitude of the center point")]
    pub lng: f64,

    #[schemars(description = "Days back to look for observations (default: 14)")]
    #[serde(default = "default_back")]
    pub back: u32,

    #[schemars(description = "Maximum number of results (default: 100)")]
    #[serde(default = "default_max_results")]
    pub max_results: u32,

    #[schemars(description = "Search radius in kilometers (default: 25)")]
    #[serde(default = "default_dist")]
    pub dist: u32,

    #[schemars(description = "Include unreviewed (provisional) observations (default: false)")]
    #[serde(default)]
    pub include_provisional: bool,

    #[schemars(description = "Only include observations from hotspots (default: false)")]
    #[serde(default)]
    pub hotspot: bool,
}

impl NearestSpeciesObservationsParams {
    pub fn endpoint(&self) -> String {
        format!("data/nearest/geo/recent/{}", self.species_code)
    }

    pub fn query(&self) -> QueryParams {
        QueryParams::new()
            .set("lat", self.lat)
            .set("lng", self.lng)
            .set("back", self.back)
            .set("maxResults", self.max_results)
            .set("dist", self.dist)
            .set("includeProvisional", self.include_provisional)
            .set("hotspot", self.hotspot)
    }
}

/// Nearest locations where a species was recently observed.
#[derive(Debug, Clone)]
pub struct NearestSpeciesObservationsTool;

impl NearestSpeciesObservationsTool {
    pub const NAME: &'static str = "get_nearest_observations_of_species";
    pub const DESCRIPTION: &'static str =
        "Find the nearest recent observations of a species to a latitude/longitude point.";

    pub fn execute(
        client: &EbirdClient,
        params: &NearestSpeciesObservationsParams,
    ) -> CallToolResult {
        api_result(Self::NAME, client.get(&params.endpoint(), &params.query()))
    }

    pub fn to_tool() -> Tool {
        tool_model::<NearestSpeciesObservationsParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<EbirdClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        api_route(Self::to_tool(), client, Self::execute)
    }
}
