//! eBird API request dispatch.
//!
//! This module owns the single outbound integration point of the server:
//! a blocking HTTP client for the eBird v2 REST API. Tools build an
//! endpoint path and a [`QueryParams`] mapping and hand both to
//! [`EbirdClient::get`]; the JSON response passes through to the caller
//! unchanged.

mod client;
mod error;
mod params;

pub use client::EbirdClient;
pub use error::{EbirdError, Result};
pub use params::QueryParams;
