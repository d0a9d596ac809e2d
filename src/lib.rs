//! signlog library entrypoint.
//!
//! Modules:
//! - `app`: startup, configuration, shared state
//! - `http`: Axum router and the ingest handler
//! - `db`: schema creation and the insert path
//! - `models`: request payload and stored row types
//! - `util`: tracing setup

pub mod app;
pub mod db;
pub mod http;
pub mod models;
pub mod util;
