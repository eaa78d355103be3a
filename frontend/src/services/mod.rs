pub mod api;
pub mod config;
pub mod location_search;
pub mod logging;
