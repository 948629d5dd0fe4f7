//! MCP server answering weather questions from the Korea Meteorological
//! Administration short-term forecast API.

pub mod aggregate;
pub mod client;
pub mod config;
pub mod constants;
pub mod error;
pub mod forecaster;
pub mod formatters;
pub mod issue_time;
pub mod models;
pub mod service;

pub use service::Weather;
