//! Search API exports.

pub mod search;
