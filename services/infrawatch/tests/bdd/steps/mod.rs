//! BDD step definitions for the dashboard host

pub mod config_steps;
pub mod site_steps;
