pub mod config;
pub mod domain;
pub mod github_client;
mod routes;
mod startup;
pub mod store;
pub mod telemetry;
mod util;

pub use startup::run;
