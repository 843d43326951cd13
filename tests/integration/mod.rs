//! Integration tests for the node pack

mod concatenator;
mod config_integration;
mod registry_surface;
mod test_utils;

pub use test_utils::with_config_env;
