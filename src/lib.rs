pub mod api;
pub mod app;
pub mod cache;
pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod form;
pub mod telemetry;
