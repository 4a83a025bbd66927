//! record-service - user records over HTTP, persisted as a single JSON file
//!
//! The whole collection is read from disk on every request and rewritten on
//! every create. There is no cache between requests.

pub mod cli;
pub mod config;
pub mod http_server;
pub mod logging;
pub mod store;
