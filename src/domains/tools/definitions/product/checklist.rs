//! Checklist product tools.
//!
//! The upstream source exposed `get_checklist`/`get_view_checklist` and
//! `get_checklist_feed`/`get_regional_checklist_feed` as separate tools
//! hitting identical endpoints. Each pair is collapsed into one tool
//! here; the feed's sort key is an ordinary parameter.

use std::sync::Arc;

use rmcp::{
    handler::server::tool::ToolRoute,
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;

use super::super::common::{
    api_result, api_route, default_feed_max_results, default_sort_key, tool_model,
};
use crate::ebird::{EbirdClient, QueryParams};

/// Parameters for viewing a single checklist.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ChecklistParams {
    #[schemars(description = "Checklist submission ID, e.g. S12345678")]
    pub sub_id: String,
}

impl ChecklistParams {
    pub fn endpoint(&self) -> String {
        format!("product/checklist/view/{}", self.sub_id)
    }

    pub fn query(&self) -> QueryParams {
        QueryParams::new()
    }
}

/// Detail view of one submitted checklist.
#[derive(Debug, Clone)]
pub struct ChecklistTool;

impl ChecklistTool {
    pub const NAME: &'static str = "get_checklist";
    pub const DESCRIPTION: &'static str =
        "Get the full details of a submitted checklist by its submission ID.";

    pub fn execute(client: &EbirdClient, params: &ChecklistParams) -> CallToolResult {
        api_result(Self::NAME, client.get(&params.endpoint(), &params.query()))
    }

    pub fn to_tool() -> Tool {
        tool_model::<ChecklistParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<EbirdClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        api_route(Self::to_tool(), client, Self::execute)
    }
}

/// Parameters for the checklist feed on a date.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ChecklistFeedParams {
    #[schemars(description = "Region code, e.g. US-NY")]
    pub region_code: String,

    #[schemars(description = "Four-digit year")]
    pub year: u32,

    #[schemars(description = "Month (1-12)")]
    pub month: u32,

    #[schemars(description = "Day of month (1-31)")]
    pub day: u32,

    #[schemars(description = "Sort key, 'obs_dt' or 'creation_dt' (default: obs_dt)")]
    #[serde(default = "default_sort_key")]
    pub sort_key: String,

    #[schemars(description = "Maximum number of results (default: 200)")]
    #[serde(default = "default_feed_max_results")]
    pub max_results: u32,
}

impl ChecklistFeedParams {
    pub fn endpoint(&self) -> String {
        format!(
            "product/lists/{}/{}/{}/{}",
            self.region_code, self.year, self.month, self.day
        )
    }

    pub fn query(&self) -> QueryParams {
        QueryParams::new()
            .set("sortKey", &self.sort_key)
            .set("maxResults", self.max_results)
    }
}

/// Feed of checklists submitted in a region on a date.
#[derive(Debug, Clone)]
pub struct ChecklistFeedTool;

impl ChecklistFeedTool {
    pub const NAME: &'static str = "get_checklist_feed";
    pub const DESCRIPTION: &'static str =
        "Get the feed of checklists submitted in a region on a specific date.";

    pub fn execute(client: &EbirdClient, params: &ChecklistFeedParams) -> CallToolResult {
        api_result(Self::NAME, client.get(&params.endpoint(), &params.query()))
    }

    pub fn to_tool() -> Tool {
        tool_model::<ChecklistFeedParams>(Self::NAME, Self::DESCRIPTION)
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
    fn test_checklist_has_no_query_parameters() {
        let json = r#"{"sub_id": "S12345678"}"#;
        let params: ChecklistParams = serde_json::from_str(json).unwrap();

        assert_eq!(params.endpoint(), "product/checklist/view/S12345678");
        assert!(params.query().is_empty());
    }

    #[test]
    fn test_checklist_feed_defaults() {
        let json = r#"{"region_code": "US-NY", "year": 2024, "month": 5, "day": 12}"#;
        let params: ChecklistFeedParams = serde_json::from_str(json).unwrap();

        assert_eq!(params.endpoint(), "product/lists/US-NY/2024/5/12");

        let query = params.query();
        assert_eq!(query.get("sortKey"), Some("obs_dt"));
        assert_eq!(query.get("maxResults"), Some("200"));
    }

    #[test]
    fn test_checklist_feed_creation_date_sort() {
        let json = r#"{"region_code": "US-NY", "year": 2024, "month": 5, "day": 12, "sort_key": "creation_dt"}"#;
        let params: ChecklistFeedParams = serde_json::from_str(json).unwrap();
        assert_eq!(params.query().get("sortKey"), Some("creation_dt"));
    }
}
