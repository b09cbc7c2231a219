#![cfg(feature = "live-api-tests")]

//! Runs the scenarios against the API configured under `configuration/`.
//! Network access is required:
//!
//! ```bash
//! cargo test --features live-api-tests --test live
//! ```

#[path = "../common/mod.rs"]
mod common;

use std::sync::LazyLock;
use tourist_suite::configuration::get_configuration;
use tourist_suite::domain::RunId;
use tourist_suite::observer::TracingObserver;
use tourist_suite::runner::SuiteRunner;
use tourist_suite::scenarios::{
    GetNonexistentTourist, GetTouristOk, LoginEmpty, LoginInvalidCredentials, LoginOk, Scenario,
};

// One identifier for the whole test binary
static RUN_ID: LazyLock<RunId> = LazyLock::new(RunId::generate);

async fn run_against_live_api(scenario: impl Scenario) {
    common::init_tracing();

    let configuration = get_configuration().expect("Failed to read configuration.");
    let client = configuration
        .api
        .client()
        .expect("Failed to build the API client.");
    let runner = SuiteRunner::new(client, RUN_ID.clone(), configuration.fixture)
        .with_observer(TracingObserver);

    let report = runner.run_scenario(&scenario).await;

    assert!(
        report.is_passed(),
        "{} failed:\n{:?}",
        report.title,
        report.outcome
    );
}

#[tokio::test]
async fn login_is_successful() {
    run_against_live_api(LoginOk).await;
}

#[tokio::test]
async fn login_with_invalid_credentials() {
    run_against_live_api(LoginInvalidCredentials).await;
}

#[tokio::test]
async fn login_with_empty_credentials() {
    run_against_live_api(LoginEmpty).await;
}

#[tokio::test]
async fn get_tourist_by_id() {
    run_against_live_api(GetTouristOk).await;
}

#[tokio::test]
async fn tourist_not_found() {
    run_against_live_api(GetNonexistentTourist).await;
}
