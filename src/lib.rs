pub mod aggregate;
pub mod api;
pub mod cli;
pub mod client;
pub mod config;
pub mod errors;
pub mod models;
pub mod reporting;
