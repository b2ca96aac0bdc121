//! Hotspot reference tools.
//!
//! Hotspots are named, publicly shared birding locations identified by a
//! location code.

use std::sync::Arc;

use rmcp::{
    handler::server::tool::ToolRoute,
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;

use super::super::common::{api_result, api_route, default_dist, default_fmt, tool_model};
use crate::ebird::{EbirdClient, QueryParams};

/// Parameters for hotspots in a region.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct RegionHotspotsParams {
    #[schemars(description = "Region code, e.g. US-NY")]
    pub region_code: String,

    #[schemars(description = "Only hotspots visited in the last N days. Omitted when not given")]
    #[serde(default)]
    pub back: Option<u32>,

    #[schemars(description = "Response format (default: json)")]
    #[serde(default = "default_fmt")]
    pub fmt: String,
}

impl RegionHotspotsParams {
    pub fn endpoint(&self) -> String {
        format!("ref/hotspot/{}", self.region_code)
    }

    pub fn query(&self) -> QueryParams {
        QueryParams::new()
            .set("fmt", &self.fmt)
            .set_opt("back", self.back)
    }
}

/// Hotspots within a region.
#[derive(Debug, Clone)]
pub struct RegionHotspotsTool;

impl RegionHotspotsTool {
    pub const NAME: &'static str = "get_hotspots_in_region";
    pub const DESCRIPTION: &'static str = "List the birding hotspots in a region.";

    pub fn execute(client: &EbirdClient, params: &RegionHotspotsParams) -> CallToolResult {
        api_result(Self::NAME, client.get(&params.endpoint(), &params.query()))
    }

    pub fn to_tool() -> Tool {
        tool_model::<RegionHotspotsParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<EbirdClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        api_route(Self::to_tool(), client, Self::execute)
    }
}

/// Parameters for hotspots near a point.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct NearbyHotspotsParams {
    #[schemars(description = "Latitude of the center point")]
    pub lat: f64,

    #[schemars(description = "Longitude of the center point")]
    pub lng: f64,

    #[schemars(description = "Only hotspots visited in the last N days. Omitted when not given")]
    #[serde(default)]
    pub back: Option<u32>,

    #[schemars(description = "Search radius in kilometers (default: 25)")]
    #[serde(default = "default_dist")]
    pub dist: u32,

    #[schemars(description = "Response format (default: json)")]
    #[serde(default = "default_fmt")]
    pub fmt: String,
}

impl NearbyHotspotsParams {
    pub fn endpoint(&self) -> String {
        "ref/hotspot/geo".to_string()
    }

    pub fn query(&self) -> QueryParams {
        QueryParams::new()
            .set("lat", self.lat)
            .set("lng", self.lng)
            .set("dist", self.dist)
            .set("fmt", &self.fmt)
            .set_opt("back", self.back)
    }
}

/// Hotspots near a geographic point.
#[derive(Debug, Clone)]
pub struct NearbyHotspotsTool;

impl NearbyHotspotsTool {
    pub const NAME: &'static str = "get_nearby_hotspots";
    pub const DESCRIPTION: &'static str =
        "List birding hotspots within a radius of a latitude/longitude point.";

    pub fn execute(client: &EbirdClient, params: &NearbyHotspotsParams) -> CallToolResult {
        api_result(Self::NAME, client.get(&params.endpoint(), &params.query()))
    }

    pub fn to_tool() -> Tool {
        tool_model::<NearbyHotspotsParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<EbirdClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        api_route(Self::to_tool(), client, Self::execute)
    }
}

/// Parameters for one hotspot's details.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct HotspotInfoParams {
    #[schemars(description = "Hotspot location code, e.g. L99381")]
    pub loc_id: String,

    #[schemars(description = "Response format (default: json)")]
    #[serde(default = "default_fmt")]
    pub fmt: String,
}

impl HotspotInfoParams {
    pub fn endpoint(&self) -> String {
        format!("ref/hotspot/info/{}", self.loc_id)
    }

    pub fn query(&self) -> QueryParams {
        QueryParams::new().set("fmt", &self.fmt)
    }
}

/// Details of one hotspot.
#[derive(Debug, Clone)]
pub struct HotspotInfoTool;

impl HotspotInfoTool {
    pub const NAME: &'static str = "get_hotspot_info";
    pub const DESCRIPTION: &'static str =
        "Get the name and location details of a hotspot by its location code.";

    pub fn execute(client: &EbirdClient, params: &HotspotInfoParams) -> CallToolResult {
        api_result(Self::NAME, client.get(&params.endpoint(), &params.query()))
    }

    pub fn to_tool() -> Tool {
        tool_model::<HotspotInfoParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<EbirdClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        api_route(Self::to_tool(), client, Self::execute)
    }
}
