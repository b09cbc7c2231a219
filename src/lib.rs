pub mod api_client;
pub mod assertions;
pub mod configuration;
pub mod domain;
pub mod fixture;
pub mod observer;
pub mod runner;
pub mod scenarios;
pub mod telemetry;
pub mod utils;
