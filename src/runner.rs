use crate::api_client::TouristApiClient;
use crate::configuration::FixtureSettings;
use crate::domain::RunId;
use crate::observer::{NoopObserver, ScenarioObserver};
use crate::scenarios::{Scenario, ScenarioContext, ScenarioError};

/// Lifecycle of one scenario: `Pending -> RequestSent -> Passed | Failed`.
///
/// A setup failure goes straight from `Pending` to `Failed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScenarioState {
    Pending,
    RequestSent,
    Passed,
    Failed,
}

impl ScenarioState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScenarioState::Pending => "PENDING",
            ScenarioState::RequestSent => "REQUEST_SENT",
            ScenarioState::Passed => "PASSED",
            ScenarioState::Failed => "FAILED",
        }
    }
}

impl std::fmt::Display for ScenarioState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug)]
pub struct ScenarioReport {
    pub name: &'static str,
    pub title: &'static str,
    pub request_sent: bool,
    pub outcome: Result<(), ScenarioError>,
}

impl ScenarioReport {
    pub fn state(&self) -> ScenarioState {
        match self.outcome {
            Ok(()) => ScenarioState::Passed,
            Err(_) => ScenarioState::Failed,
        }
    }

    pub fn is_passed(&self) -> bool {
        self.outcome.is_ok()
    }

    pub fn failure(&self) -> Option<&ScenarioError> {
        self.outcome.as_ref().err()
    }
}

#[derive(Debug, Default)]
pub struct SuiteReport {
    pub scenarios: Vec<ScenarioReport>,
}

impl SuiteReport {
    pub fn passed(&self) -> usize {
        self.scenarios.iter().filter(|r| r.is_passed()).count()
    }

    pub fn failed(&self) -> usize {
        self.scenarios.len() - self.passed()
    }

    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }

    /// Process exit code: 0 when every scenario passed, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        if self.is_success() { 0 } else { 1 }
    }
}

impl std::fmt::Display for SuiteReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for report in &self.scenarios {
            writeln!(f, "{:<7} {}", report.state().as_str(), report.title)?;
            if let Some(error) = report.failure() {
                for line in format!("{:?}", error).lines().filter(|l| !l.is_empty()) {
                    writeln!(f, "        {}", line)?;
                }
            }
        }
        write!(f, "{} passed, {} failed", self.passed(), self.failed())
    }
}

/// Runs scenarios one after the other against a single API client.
pub struct SuiteRunner {
    client: TouristApiClient,
    run_id: RunId,
    fixture: FixtureSettings,
    observer: Box<dyn ScenarioObserver>,
}

impl SuiteRunner {
    pub fn new(client: TouristApiClient, run_id: RunId, fixture: FixtureSettings) -> Self {
        Self {
            client,
            run_id,
            fixture,
            observer: Box::new(NoopObserver),
        }
    }

    pub fn with_observer(mut self, observer: impl ScenarioObserver + 'static) -> Self {
        self.observer = Box::new(observer);
        self
    }

    pub fn run_id(&self) -> &RunId {
        &self.run_id
    }

    #[tracing::instrument(
        name = "Running scenario",
        skip_all,
        fields(scenario = %scenario.name(), run_id = %self.run_id)
    )]
    pub async fn run_scenario(&self, scenario: &dyn Scenario) -> ScenarioReport {
        let title = scenario.title();
        self.observer.on_title(title);
        self.observer.on_state(title, ScenarioState::Pending);

        let ctx = ScenarioContext::new(
            &self.client,
            &self.run_id,
            &self.fixture,
            self.observer.as_ref(),
            title,
        );
        let outcome = scenario.run(&ctx).await;
        if let Err(e) = &outcome {
            tracing::error!(
                error.cause_chain = ?e,
                error.message = %e,
                "Scenario failed"
            );
        }

        let report = ScenarioReport {
            name: scenario.name(),
            title,
            request_sent: ctx.was_request_sent(),
            outcome,
        };
        self.observer.on_state(title, report.state());
        report
    }

    pub async fn run(&self, scenarios: &[Box<dyn Scenario>]) -> SuiteReport {
        let mut report = SuiteReport::default();
        for scenario in scenarios {
            report.scenarios.push(self.run_scenario(scenario.as_ref()).await);
        }
        report
    }
}
