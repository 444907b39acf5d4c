//! Job search backend: the search service, corpus loading and the HTTP layer
//! hosting them.

pub mod api;
pub mod config;
pub mod corpus;
pub mod server;
