//! Administrative region reference tools.

use std::sync::Arc;

use rmcp::{
    handler::server::tool::ToolRoute,
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;

use super::super::common::{
    api_result, api_route, default_fmt, default_region_name_format, tool_model,
};
use crate::ebird::{EbirdClient, QueryParams};

/// Parameters for listing regions of a type.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct RegionListParams {
    #[schemars(description = "Region type: 'country', 'subnational1' or 'subnational2'")]
    pub region_type: String,

    #[schemars(description = "Parent region to list within, e.g. US. Omitted when not given")]
    #[serde(default)]
    pub parent_region: Option<String>,

    #[schemars(description = "Response format (default: json)")]
    #[serde(default = "default_fmt")]
    pub fmt: String,
}

impl RegionListParams {
    /// The parent region, when present, is a trailing path segment rather
    /// than a query parameter.
    pub fn endpoint(&self) -> String {
        match &self.parent_region {
            Some(parent) => format!("ref/region/list/{}/{}", self.region_type, parent),
            None => format!("ref/region/list/{}", self.region_type),
        }
    }

    pub fn query(&self) -> QueryParams {
        QueryParams::new().set("fmt", &self.fmt)
    }
}

/// Regions of a given administrative level.
#[derive(Debug, Clone)]
pub struct RegionListTool;

impl RegionListTool {
    pub const NAME: &'static str = "get_region_list";
    pub const DESCRIPTION: &'static str =
        "List regions of a type (country, subnational1, subnational2), optionally within a parent region.";

    pub fn execute(client: &EbirdClient, params: &RegionListParams) -> CallToolResult {
        api_result(Self::NAME, client.get(&params.endpoint(), &params.query()))
    }

    pub fn to_tool() -> Tool {
        tool_model::<RegionListParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<EbirdClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        api_route(Self::to_tool(), client, Self::execute)
    }
}

/// Parameters for region metadata.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct RegionInfoParams {
    #[schemars(description = "Region code, e.g. US-NY")]
    pub region_code: String,

    #[schemars(description = "Name format, e.g. 'detailed' or 'full' (default: detailed)")]
    #[serde(default = "default_region_name_format")]
    pub region_name_format: String,

    #[schemars(description = "Response format (default: json)")]
    #[serde(default = "default_fmt")]
    pub fmt: String,
}

impl RegionInfoParams {
    pub fn endpoint(&self) -> String {
        format!("ref/region/info/{}", self.region_code)
    }

    pub fn query(&self) -> QueryParams {
        QueryParams::new()
            .set("regionNameFormat", &self.region_name_format)
            .set("fmt", &self.fmt)
    }
}

/// Name and bounds of one region.
#[derive(Debug, Clone)]
pub struct RegionInfoTool;

impl RegionInfoTool {
    pub const NAME: &'static str = "get_region_info";
    pub const DESCRIPTION: &'static str =
        "Get the name and geographic bounds of a region.";

    pub fn execute(client: &EbirdClient, params: &RegionInfoParams) -> CallToolResult {
        api_result(Self::NAME, client.get(&params.endpoint(), &params.query()))
    }

    pub fn to_tool() -> Tool {
        tool_model::<RegionInfoParams>(Self::NAME, Self::DESCRIPTION)
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
    fn test_region_list_without_parent() {
        let json = r#"{"region_type": "subnational1"}"#;
        let params: RegionListParams = serde_json::from_str(json).unwrap();

        assert_eq!(params.endpoint(), "ref/region/list/subnational1");

        let query = params.query();
        assert_eq!(query.len(), 1);
        assert_eq!(query.get("fmt"), Some("json"));
    }

    #[test]
    fn test_region_list_with_parent_segment() {
        let json = r#"{"region_type": "subnational1", "parent_region": "US"}"#;
        let params: RegionListParams = serde_json::from_str(json).unwrap();

        assert_eq!(params.endpoint(), "ref/region/list/subnational1/US");
        // The parent travels in the path, never in the query string.
        assert_eq!(params.query().get("parent_region"), None);
    }

    #[test]
    fn test_region_info_defaults() {
        let json = r#"{"region_code": "US-NY"}"#;
        let params: RegionInfoParams = serde_json::from_str(json).unwrap();

        assert_eq!(params.endpoint(), "ref/region/info/US-NY");
        assert_eq!(params.query().get("regionNameFormat"), Some("detailed"));
    }
}
