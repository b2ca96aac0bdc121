//! Domains module containing business logic organized by bounded contexts.
//!
//! This server has a single domain: the tools that expose the eBird API.

pub mod tools;
