//! Taxonomy reference tools.

use std::sync::Arc;

use rmcp::{
    handler::server::tool::ToolRoute,
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;

use super::super::common::{api_result, api_route, default_fmt, default_locale, tool_model};
use crate::ebird::{EbirdClient, QueryParams};

/// Parameters for the full eBird taxonomy.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct TaxonomyParams {
    #[schemars(description = "Response format (default: json)")]
    #[serde(default = "default_fmt")]
    pub fmt: String,

    #[schemars(description = "Locale for common names (default: en)")]
    #[serde(default = "default_locale")]
    pub locale: String,

    #[schemars(description = "Restrict to a taxonomic category, e.g. 'species'. Omitted when not given")]
    #[serde(default)]
    pub species_group: Option<String>,

    #[schemars(description = "Taxonomy version to fetch. Omitted when not given (latest)")]
    #[serde(default)]
    pub version: Option<String>,
}

impl TaxonomyParams {
    pub fn endpoint(&self) -> String {
        "ref/taxonomy/ebird".to_string()
    }

    pub fn query(&self) -> QueryParams {
        QueryParams::new()
            .set("fmt", &self.fmt)
            .set("locale", &self.locale)
            .set_opt("cat", self.species_group.as_ref())
            .set_opt("version", self.version.as_ref())
    }
}

/// The eBird taxonomy - canonical species naming and classification.
#[derive(Debug, Clone)]
pub struct TaxonomyTool;

impl TaxonomyTool {
    pub const NAME: &'static str = "get_taxonomy";
    pub const DESCRIPTION: &'static str =
        "Get the eBird taxonomy: species codes, common and scientific names.";

    pub fn execute(client: &EbirdClient, params: &TaxonomyParams) -> CallToolResult {
        api_result(Self::NAME, client.get(&params.endpoint(), &params.query()))
    }

    pub fn to_tool() -> Tool {
        tool_model::<TaxonomyParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<EbirdClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        api_route(Self::to_tool(), client, Self::execute)
    }
}

/// Parameters for taxonomic forms of one species.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct TaxonomyFormsParams {
    #[schemars(description = "eBird species code, e.g. norcar")]
    pub species_code: String,
}

impl TaxonomyFormsParams {
    pub fn endpoint(&self) -> String {
        format!("ref/taxonomy/forms/{}", self.species_code)
    }

    pub fn query(&self) -> QueryParams {
        QueryParams::new()
    }
}

/// Subspecies and forms recognized for a species.
#[derive(Debug, Clone)]
pub struct TaxonomyFormsTool;

impl TaxonomyFormsTool {
    pub const NAME: &'static str = "get_taxonomy_forms";
    pub const DESCRIPTION: &'static str =
        "Get the taxonomic forms (subspecies) recognized for a species.";

    pub fn execute(client: &EbirdClient, params: &TaxonomyFormsParams) -> CallToolResult {
        api_result(Self::NAME, client.get(&params.endpoint(), &params.query()))
    }

    pub fn to_tool() -> Tool {
        tool_model::<TaxonomyFormsParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<EbirdClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        api_route(Self::to_tool(), client, Self::execute)
    }
}

/// Parameters for the supported locale list.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct TaxaLocaleCodesParams {
    #[schemars(description = "Response format (default: json)")]
    #[serde(default = "default_fmt")]
    pub fmt: String,
}

impl TaxaLocaleCodesParams {
    pub fn endpoint(&self) -> String {
        "ref/taxonomy/locales".to_string()
    }

    pub fn query(&self) -> QueryParams {
        QueryParams::new().set("fmt", &self.fmt)
    }
}

/// Locales available for taxonomy common names.
#[derive(Debug, Clone)]
pub struct TaxaLocaleCodesTool;

impl TaxaLocaleCodesTool {
    pub const NAME: &'static str = "get_taxa_locale_codes";
    pub const DESCRIPTION: &'static str =
        "Get the locale codes and names supported for taxonomy common names.";

    pub fn execute(client: &EbirdClient, params: &TaxaLocaleCodesParams) -> CallToolResult {
        api_result(Self::NAME, client.get(&params.endpoint(), &params.query()))
    }

    pub fn to_tool() -> Tool {
        tool_model::<TaxaLocaleCodesParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<EbirdClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        api_route(Self::to_tool(), client, Self::execute)
    }
}

/// Parameters for the taxonomy version list.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct TaxonomyVersionsParams {
    #[schemars(description = "Response format (default: json)")]
    #[serde(default = "default_fmt")]
    pub fmt: String,
}

impl TaxonomyVersionsParams {
    pub fn endpoint(&self) -> String {
        "ref/taxonomy/versions".to_string()
    }

    pub fn query(&self) -> QueryParams {
        QueryParams::new().set("fmt", &self.fmt)
    }
}

/// Published taxonomy versions and which one is latest.
#[derive(Debug, Clone)]
pub struct TaxonomyVersionsTool;

impl TaxonomyVersionsTool {
    pub const NAME: &'static str = "get_taxonomy_versions";
    pub const DESCRIPTION: &'static str =
        "Get the list of published eBird taxonomy versions.";

    pub fn execute(client: &EbirdClient, params: &TaxonomyVersionsParams) -> CallToolResult {
        api_result(Self::NAME, client.get(&params.endpoint(), &params.query()))
    }

    pub fn to_tool() -> Tool {
        tool_model::<TaxonomyVersionsParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<EbirdClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        api_route(Self::to_tool(), client, Self::execute)
    }
}

/// Parameters for species group listings.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct TaxonomyGroupsParams {
    #[schemars(description = "Locale for group names (default: en)")]
    #[serde(default = "default_locale")]
    pub group_name_locale: String,

    #[schemars(description = "Response format (default: json)")]
    #[serde(default = "default_fmt")]
    pub fmt: String,
}

impl TaxonomyGroupsParams {
    pub fn endpoint(&self) -> String {
        "ref/sppgroup/merlin".to_string()
    }

    pub fn query(&self) -> QueryParams {
        QueryParams::new()
            .set("groupNameLocale", &self.group_name_locale)
            .set("fmt", &self.fmt)
    }
}

/// Species groups (Merlin ordering) with localized names.
#[derive(Debug, Clone)]
pub struct TaxonomyGroupsTool;

impl TaxonomyGroupsTool {
    pub const NAME: &'static str = "get_taxonomy_groups";
    pub const DESCRIPTION: &'static str =
        "Get the species groups of the eBird taxonomy with localized group names.";

    pub fn execute(client: &EbirdClient, params: &TaxonomyGroupsParams) -> CallToolResult {
        api_result(Self::NAME, client.get(&params.endpoint(), &params.query()))
    }

    pub fn to_tool() -> Tool {
        tool_model::<TaxonomyGroupsParams>(Self::NAME, Self::DESCRIPTION)
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
    fn test_taxonomy_optional_filters_omitted_by_default() {
        let params: TaxonomyParams = serde_json::from_str("{}").unwrap();

        let query = params.query();
        assert_eq!(query.len(), 2);
        assert_eq!(query.get("fmt"), Some("json"));
        assert_eq!(query.get("locale"), Some("en"));
        assert_eq!(query.get("cat"), None);
        assert_eq!(query.get("version"), None);
    }

    #[test]
    fn test_taxonomy_optional_filters_included_when_set() {
        let json = r#"{"species_group": "species", "version": "2023"}"#;
        let params: TaxonomyParams = serde_json::from_str(json).unwrap();

        let query = params.query();
        assert_eq!(query.get("cat"), Some("species"));
        assert_eq!(query.get("version"), Some("2023"));
    }

    #[test]
    fn test_forms_path_and_empty_query() {
        let json = r#"{"species_code": "norcar"}"#;
        let params: TaxonomyFormsParams = serde_json::from_str(json).unwrap();

        assert_eq!(params.endpoint(), "ref/taxonomy/forms/norcar");
        assert!(params.query().is_empty());
    }

    #[test]
    fn test_groups_locale_parameter_name() {
        let json = r#"{"group_name_locale": "fr"}"#;
        let params: TaxonomyGroupsParams = serde_json::from_str(json).unwrap();

        assert_eq!(params.endpoint(), "ref/sppgroup/merlin");
        assert_eq!(params.query().get("groupNameLocale"), Some("fr"));
    }

    #[test]
    fn test_versions_and_locales_default_queries() {
        let versions: TaxonomyVersionsParams = serde_json::from_str("{}").unwrap();
        assert_eq!(versions.endpoint(), "ref/taxonomy/versions");
        assert_eq!(versions.query().get("fmt"), Some("json"));

        let locales: TaxaLocaleCodesParams = serde_json::from_str("{}").unwrap();
        assert_eq!(locales.endpoint(), "ref/taxonomy/locales");
        assert_eq!(locales.query().get("fmt"), Some("json"));
    }
}
