use crate::runner::ScenarioState;

/// Receives the cosmetic annotations of a run.
///
/// Nothing an observer does can change a scenario's outcome.
pub trait ScenarioObserver: Send + Sync {
    fn on_title(&self, _title: &str) {}

    fn on_step(&self, _step: &str) {}

    fn on_state(&self, _title: &str, _state: ScenarioState) {}
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl ScenarioObserver for NoopObserver {}

/// Emits every annotation as a `tracing` event.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl ScenarioObserver for TracingObserver {
    fn on_title(&self, title: &str) {
        tracing::info!(scenario.title = %title, "Scenario started");
    }

    fn on_step(&self, step: &str) {
        tracing::info!(step = %step, "Scenario step");
    }

    fn on_state(&self, title: &str, state: ScenarioState) {
        match state {
            ScenarioState::Failed => {
                tracing::warn!(scenario.title = %title, scenario.state = %state, "Scenario state changed")
            }
            _ => tracing::info!(scenario.title = %title, scenario.state = %state, "Scenario state changed"),
        }
    }
}
