//! Regional statistics and ranking product tools.

use std::sync::Arc;

use rmcp::{
    handler::server::tool::ToolRoute,
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;

use super::super::common::{
    api_result, api_route, default_fmt, default_max_results, default_rank_by, tool_model,
};
use crate::ebird::{EbirdClient, QueryParams};

/// Parameters for the species list of a region.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SpeciesListParams {
    #[schemars(description = "Region code, e.g. US-NY")]
    pub region_code: String,

    #[schemars(description = "Response format (default: json)")]
    #[serde(default = "default_fmt")]
    pub fmt: String,
}

impl SpeciesListParams {
    pub fn endpoint(&self) -> String {
        format!("product/spplist/{}", self.region_code)
    }

    pub fn query(&self) -> QueryParams {
        QueryParams::new().set("fmt", &self.fmt)
    }
}

/// All species ever reported in a region.
#[derive(Debug, Clone)]
pub struct SpeciesListTool;

impl SpeciesListTool {
    pub const NAME: &'static str = "get_species_list";
    pub const DESCRIPTION: &'static str =
        "Get the list of species codes ever reported in a region.";

    pub fn execute(client: &EbirdClient, params: &SpeciesListParams) -> CallToolResult {
        api_result(Self::NAME, client.get(&params.endpoint(), &params.query()))
    }

    pub fn to_tool() -> Tool {
        tool_model::<SpeciesListParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<EbirdClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        api_route(Self::to_tool(), client, Self::execute)
    }
}

/// Parameters for regional statistics on a date.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct RegionalStatisticsParams {
    #[schemars(description = "Region code, e.g. US-NY")]
    pub region_code: String,

    #[schemars(description = "Four-digit year")]
    pub year: u32,

    #[schemars(description = "Month (1-12)")]
    pub month: u32,

    #[schemars(description = "Day of month (1-31)")]
    pub day: u32,
}

impl RegionalStatisticsParams {
    pub fn endpoint(&self) -> String {
        format!(
            "product/stats/{}/{}/{}/{}",
            self.region_code, self.year, self.month, self.day
        )
    }

    pub fn query(&self) -> QueryParams {
        QueryParams::new()
    }
}

/// Checklist and species counts for a region on a date.
#[derive(Debug, Clone)]
pub struct RegionalStatisticsTool;

impl RegionalStatisticsTool {
    pub const NAME: &'static str = "get_regional_statistics";
    pub const DESCRIPTION: &'static str =
        "Get checklist and species statistics for a region on a specific date.";

    pub fn execute(client: &EbirdClient, params: &RegionalStatisticsParams) -> CallToolResult {
        api_result(Self::NAME, client.get(&params.endpoint(), &params.query()))
    }

    pub fn to_tool() -> Tool {
        tool_model::<RegionalStatisticsParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<EbirdClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        api_route(Self::to_tool(), client, Self::execute)
    }
}

/// Parameters for species statistics in a region on a date.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SpeciesStatisticsParams {
    #[schemars(description = "Region code, e.g. US-NY")]
    pub region_code: String,

    #[schemars(description = "eBird species code, e.g. norcar")]
    pub species_code: String,

    #[schemars(description = "Four-digit year")]
    pub year: u32,

    #[schemars(description = "Month (1-12)")]
    pub month: u32,

    #[schemars(description = "Day of month (1-31)")]
    pub day: u32,
}

impl SpeciesStatisticsParams {
    pub fn endpoint(&self) -> String {
        format!(
            "product/stats/{}/{}/{}/{}/{}",
            self.region_code, self.species_code, self.year, self.month, self.day
        )
    }

    pub fn query(&self) -> QueryParams {
        QueryParams::new()
    }
}

/// Statistics for one species in a region on a date.
#[derive(Debug, Clone)]
pub struct SpeciesStatisticsTool;

impl SpeciesStatisticsTool {
    pub const NAME: &'static str = "get_species_statistics";
    pub const DESCRIPTION: &'static str =
        "Get statistics for a species in a region on a specific date.";

    pub fn execute(client: &EbirdClient, params: &SpeciesStatisticsParams) -> CallToolResult {
        api_result(Self::NAME, client.get(&params.endpoint(), &params.query()))
    }

    pub fn to_tool() -> Tool {
        tool_model::<SpeciesStatisticsParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<EbirdClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        api_route(Self::to_tool(), client, Self::execute)
    }
}

/// Parameters for the top-100 contributor ranking.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct Top100Params {
    #[schemars(description = "Region code, e.g. US-NY")]
    pub region_code: String,

    #[schemars(description = "Four-digit year")]
    pub year: u32,

    #[schemars(description = "Month (1-12)")]
    pub month: u32,

    #[schemars(description = "Day of month (1-31)")]
    pub day: u32,

    #[schemars(description = "Rank by 'spp' (species count) or 'cl' (checklist count) (default: spp)")]
    #[serde(default = "default_rank_by")]
    pub rank_by: String,

    #[schemars(description = "Maximum number of results (default: 100)")]
    #[serde(default = "default_max_results")]
    pub max_results: u32,
}

impl Top100Params {
    pub fn endpoint(&self) -> String {
        format!(
            "product/top100/{}/{}/{}/{}",
            self.region_code, self.year, self.month, self.day
        )
    }

    pub fn query(&self) -> QueryParams {
        QueryParams::new()
            .set("rankBy", &self.rank_by)
            .set("maxResults", self.max_results)
    }
}

/// Top contributors for a region on a date.
#[derive(Debug, Clone)]
pub struct Top100Tool;

impl Top100Tool {
    pub const NAME: &'static str = "get_top_100";
    pub const DESCRIPTION: &'static str =
        "Get the top 100 contributors for a region on a specific date.";

    pub fn execute(client: &EbirdClient, params: &Top100Params) -> CallToolResult {
        api_result(Self::NAME, client.get(&params.endpoint(), &params.query()))
    }

    pub fn to_tool() -> Tool {
        tool_model::<Top100Params>(Self::NAME, Self::DESCRIPTION)
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
    fn test_species_list_query() {
        let json = r#"{"region_code": "US-NY"}"#;
        let params: SpeciesListParams = serde_json::from_str(json).unwrap();

        assert_eq!(params.endpoint(), "product/spplist/US-NY");
        assert_eq!(params.query().get("fmt"), Some("json"));
    }

    #[test]
    fn test_regional_statistics_bare_path() {
        let json = r#"{"region_code": "US-NY", "year": 2024, "month": 1, "day": 1}"#;
        let params: RegionalStatisticsParams = serde_json::from_str(json).unwrap();

        assert_eq!(params.endpoint(), "product/stats/US-NY/2024/1/1");
        assert!(params.query().is_empty());
    }

    #[test]
    fn test_species_statistics_path_places_species_before_date() {
        let json =
            r#"{"region_code": "US-NY", "species_code": "norcar", "year": 2024, "month": 1, "day": 1}"#;
        let params: SpeciesStatisticsParams = serde_json::from_str(json).unwrap();

        assert_eq!(params.endpoint(), "product/stats/US-NY/norcar/2024/1/1");
    }

    #[test]
    fn test_top_100_defaults() {
        let json = r#"{"region_code": "US-NY", "year": 2024, "month": 5, "day": 12}"#;
        let params: Top100Params = serde_json::from_str(json).unwrap();

        assert_eq!(params.endpoint(), "product/top100/US-NY/2024/5/12");

        let query = params.query();
        assert_eq!(query.get("rankBy"), Some("spp"));
        assert_eq!(query.get("maxResults"), Some("100"));
    }
}
