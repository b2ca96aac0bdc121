//! Historic observation tool.

use std::sync::Arc;

use rmcp::{
    handler::server::tool::ToolRoute,
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;

use super::super::common::{api_result, api_route, default_max_results, default_rank, tool_model};
use crate::ebird::{EbirdClient, QueryParams};

/// Parameters for observations on a historic date.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct HistoricObservationsParams {
    #[schemars(description = "Region code, e.g. US-NY")]
    pub region_code: String,

    #[schemars(description = "Four-digit year")]
    pub year: u32,

    #[schemars(description = "Month (1-12)")]
    pub month: u32,

    #[schemars(description = "Day of month (1-31)")]
    pub day: u32,

    #[schemars(description = "Maximum number of results (default: 100)")]
    #[serde(default = "default_max_results")]
    pub max_results: u32,

    #[schemars(description = "Include unreviewed (provisional) observations (default: false)")]
    #[serde(default)]
    pub include_provisional: bool,

    #[schemars(description = "Only include observations from hotspots (default: false)")]
    #[serde(default)]
    pub hotspot: bool,

    #[schemars(description = "Pick 'mrec' (most recent) or 'create' (first added) record per species (default: mrec)")]
    #[serde(default = "default_rank")]
    pub rank: String,
}

impl HistoricObservationsParams {
    pub fn endpoint(&self) -> String {
        format!(
            "data/obs/{}/historic/{}/{}/{}",
            self.region_code, self.year, self.month, self.day
        )
    }

    pub fn query(&self) -> QueryParams {
        QueryParams::new()
            .set("maxResults", self.max_results)
            .set("includeProvisional", self.include_provisional)
            .set("hotspot", self.hotspot)
            .set("rank", &self.rank)
    }
}

/// Observations for a region on a specific date.
#[derive(Debug, Clone)]
pub struct HistoricObservationsTool;

impl HistoricObservationsTool {
    pub const NAME: &'static str = "get_historic_observations";
    pub const DESCRIPTION: &'static str =
        "Get bird observations for a region on a specific historic date.";

    pub fn execute(client: &EbirdClient, params: &HistoricObservationsParams) -> CallToolResult {
        api_result(Self::NAME, client.get(&params.endpoint(), &params.query()))
    }

    pub fn to_tool() -> Tool {
        tool_model::<HistoricObservationsParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<EbirdClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        api_route(Self::to_tool(), client, Self::execute)
    }
}
