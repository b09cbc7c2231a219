pub mod constants;
mod login;
mod tourist;

pub use login::{LoginEmpty, LoginInvalidCredentials, LoginOk};
pub use tourist::{GetNonexistentTourist, GetTouristOk};

use crate::api_client::TouristApiClient;
use crate::assertions::AssertionFailure;
use crate::configuration::FixtureSettings;
use crate::domain::RunId;
use crate::fixture::FixtureError;
use crate::observer::ScenarioObserver;
use crate::runner::ScenarioState;
use crate::utils::error_chain_fmt;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(thiserror::Error)]
pub enum ScenarioError {
    #[error("Fixture setup failed.")]
    Setup(#[from] FixtureError),
    #[error(transparent)]
    Assertion(#[from] AssertionFailure),
    #[error("The request to the API failed.")]
    Transport(#[from] reqwest::Error),
    #[error("The response body is not valid JSON.")]
    UnparsableBody(#[from] serde_json::Error),
}

impl std::fmt::Debug for ScenarioError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

/// One independent test case: build a request, send it, assert on the answer.
#[async_trait::async_trait]
pub trait Scenario: Send + Sync {
    /// Stable identifier, used to select a scenario from the command line.
    fn name(&self) -> &'static str;

    /// Human-readable title shown in the report.
    fn title(&self) -> &'static str;

    async fn run(&self, ctx: &ScenarioContext<'_>) -> Result<(), ScenarioError>;
}

/// Everything a scenario may use while it runs.
pub struct ScenarioContext<'a> {
    pub client: &'a TouristApiClient,
    pub run_id: &'a RunId,
    pub fixture: &'a FixtureSettings,
    observer: &'a dyn ScenarioObserver,
    title: &'static str,
    request_sent: AtomicBool,
}

impl<'a> ScenarioContext<'a> {
    pub fn new(
        client: &'a TouristApiClient,
        run_id: &'a RunId,
        fixture: &'a FixtureSettings,
        observer: &'a dyn ScenarioObserver,
        title: &'static str,
    ) -> Self {
        Self {
            client,
            run_id,
            fixture,
            observer,
            title,
            request_sent: AtomicBool::new(false),
        }
    }

    /// Annotate the run with a named step.
    pub fn step(&self, description: &str) {
        self.observer.on_step(description);
    }

    /// Record that the scenario's own request is about to go out.
    pub fn request_sent(&self) {
        if !self.request_sent.swap(true, Ordering::SeqCst) {
            self.observer.on_state(self.title, ScenarioState::RequestSent);
        }
    }

    pub fn was_request_sent(&self) -> bool {
        self.request_sent.load(Ordering::SeqCst)
    }
}

/// The whole suite, in reference order.
pub fn all() -> Vec<Box<dyn Scenario>> {
    vec![
        Box::new(LoginOk),
        Box::new(LoginInvalidCredentials),
        Box::new(LoginEmpty),
        Box::new(GetTouristOk),
        Box::new(GetNonexistentTourist),
    ]
}

pub fn find(name: &str) -> Option<Box<dyn Scenario>> {
    all().into_iter().find(|scenario| scenario.name() == name)
}

pub fn names() -> Vec<&'static str> {
    all().iter().map(|scenario| scenario.name()).collect()
}

/// The scenarios to run: the named one, or the whole suite when no name is given.
pub fn select(name: Option<&str>) -> anyhow::Result<Vec<Box<dyn Scenario>>> {
    match name {
        Some(name) => {
            let scenario = find(name).ok_or_else(|| {
                anyhow::anyhow!(
                    "Unknown scenario `{}`. Known scenarios: {}",
                    name,
                    names().join(", ")
                )
            })?;
            Ok(vec![scenario])
        }
        None => Ok(all()),
    }
}
