//! Query-parameter mapping for eBird API requests.

/// An ordered mapping of query-parameter names to values.
///
/// Built by each tool from its typed arguments and consumed once by
/// [`EbirdClient::get`](super::EbirdClient::get). Optional parameters go
/// through [`set_opt`](Self::set_opt) so that "not provided" means "omit
/// from the query string" while an explicit zero-like value (`back = 0`)
/// is still sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(&'static str, String)>,
}

impl QueryParams {
    /// Create an empty parameter mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter, always included in the query string.
    pub fn set(mut self, key: &'static str, value: impl ToString) -> Self {
        self.pairs.push((key, value.to_string()));
        self
    }

    /// Add a parameter only when a value was provided.
    pub fn set_opt(self, key: &'static str, value: Option<impl ToString>) -> Self {
        match value {
            Some(v) => self.set(key, v),
            None => self,
        }
    }

    /// The parameter pairs in insertion order.
    pub fn pairs(&self) -> &[(&'static str, String)] {
        &self.pairs
    }

    /// Look up a parameter value by name.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}
