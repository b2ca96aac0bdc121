//! Common utilities shared across eBird tool definitions.
//!
//! Every tool follows the same shape: deserialize typed parameters, build
//! an endpoint path and a query mapping, dispatch through the shared
//! [`EbirdClient`], and forward the JSON response. The helpers here factor
//! out that shape so each definition only declares its parameters and its
//! path template.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Content, Tool},
};
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::ebird::{EbirdClient, EbirdError};

/// Create an error result with a formatted message.
pub fn error_result(message: &str) -> CallToolResult {
    warn!("{}", message);
    CallToolResult::error(vec![Content::text(message.to_string())])
}

/// Turn a dispatcher result into a tool result.
///
/// A successful response passes through as its JSON text, unmodified. A
/// failure (including a non-2xx [`EbirdError::Http`]) becomes an error
/// result carrying the status and body text.
pub fn api_result(tool: &str, result: Result<serde_json::Value, EbirdError>) -> CallToolResult {
    match result {
        Ok(value) => match serde_json::to_string(&value) {
            Ok(text) => CallToolResult::success(vec![Content::text(text)]),
            Err(e) => error_result(&format!("{tool}: failed to render response: {e}")),
        },
        Err(e) => error_result(&format!("{tool} failed: {e}")),
    }
}

/// Create a Tool model from a name, description and parameter type.
pub fn tool_model<P>(name: &'static str, description: &'static str) -> Tool
where
    P: JsonSchema + DeserializeOwned + 'static,
{
    Tool {
        name: name.into(),
        description: Some(description.into()),
        input_schema: cached_schema_for_type::<P>(),
        annotations: None,
        output_schema: None,
        icons: None,
        meta: None,
        title: None,
    }
}

/// Create a ToolRoute that dispatches one eBird API call.
///
/// Deserializes the call arguments into `P` and runs `execute` on a
/// blocking thread - the dispatcher uses a blocking HTTP client, which
/// must stay off the async runtime.
pub fn api_route<S, P>(
    tool: Tool,
    client: Arc<EbirdClient>,
    execute: fn(&EbirdClient, &P) -> CallToolResult,
) -> ToolRoute<S>
where
    S: Send + Sync + 'static,
    P: DeserializeOwned + Send + 'static,
{
    ToolRoute::new_dyn(tool, move |ctx: ToolCallContext<'_, S>| {
        let client = client.clone();
        let args = ctx.arguments.clone().unwrap_or_default();
        async move {
            let params: P = serde_json::from_value(serde_json::Value::Object(args))
                .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

            let result = tokio::task::spawn_blocking(move || execute(&client, &params))
                .await
                .map_err(|e| McpError::internal_error(e.to_string(), None))?;

            Ok(result)
        }
        .boxed()
    })
}

// ----------------------------------------------------------------------------
// Shared parameter defaults (serde `default` functions)
// ----------------------------------------------------------------------------

/// Lookback window in days.
pub fn default_back() -> u32 {
    14
}

/// Result cap for observation queries.
pub fn default_max_results() -> u32 {
    100
}

/// Result cap for checklist feeds.
pub fn default_feed_max_results() -> u32 {
    200
}

/// Search radius in kilometers.
pub fn default_dist() -> u32 {
    25
}

/// Response format requested from the API.
pub fn default_fmt() -> String {
    "json".to_string()
}

/// Locale for common names.
pub fn default_locale() -> String {
    "en".to_string()
}

/// Detail level for notable-observation queries.
pub fn default_detail() -> String {
    "simple".to_string()
}

/// Sort order for nearby observations.
pub fn default_sort() -> String {
    "date".to_string()
}

/// Ranking for historic observations (most recent vs first added).
pub fn default_rank() -> String {
    "mrec".to_string()
}

/// Ranking criterion for top-100 contributor lists.
pub fn default_rank_by() -> String {
    "spp".to_string()
}

/// Sort key for checklist feeds.
pub fn default_sort_key() -> String {
    "obs_dt".to_string()
}

/// Name format for region info.
pub fn default_region_name_format() -> String {
    "detailed".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;
    use serde_json::json;

    #[test]
    fn test_api_result_passes_body_through() {
        let body = json!([{"comName": "Snowy Owl", "howMany": 1}]);
        let result = api_result("get_recent_observations", Ok(body.clone()));

        assert!(!result.is_error.unwrap_or(true));
        let content = &result.content[0];
        if let RawContent::Text(text) = &content.raw {
            let round_trip: serde_json::Value = serde_json::from_str(&text.text).unwrap();
            assert_eq!(round_trip, body);
        } else {
            panic!("expected text content");
        }
    }

    #[test]
    fn test_api_result_reports_http_failure() {
        let err = EbirdError::Http {
            status: 401,
            body: "User does not exist".to_string(),
        };
        let result = api_result("get_taxonomy", Err(err));

        assert!(result.is_error.unwrap_or(false));
        let content = &result.content[0];
        if let RawContent::Text(text) = &content.raw {
            assert!(text.text.contains("401"));
            assert!(text.text.contains("get_taxonomy"));
        } else {
            panic!("expected text content");
        }
    }
}
