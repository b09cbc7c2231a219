use super::constants::{INVALID_REQUEST_MESSAGE, NONEXISTENT_TOURIST_ID, get_tourist_step};
use super::{Scenario, ScenarioContext, ScenarioError};
use crate::assertions::{assert_json_field, assert_json_id, assert_status};
use crate::domain::TouristId;
use crate::fixture::with_tourist;
use serde_json::{Value, json};

/// A freshly created tourist can be read back unchanged.
#[derive(Debug, Default, Clone, Copy)]
pub struct GetTouristOk;

#[async_trait::async_trait]
impl Scenario for GetTouristOk {
    fn name(&self) -> &'static str {
        "get_tourist_ok"
    }

    fn title(&self) -> &'static str {
        "Get Tourist by ID"
    }

    async fn run(&self, ctx: &ScenarioContext<'_>) -> Result<(), ScenarioError> {
        let new_tourist = ctx.fixture.new_tourist(ctx.run_id);
        let expected = &new_tourist;

        with_tourist(ctx.client, &new_tourist, move |tourist_id| async move {
            ctx.step(&get_tourist_step(tourist_id.as_ref()));
            ctx.request_sent();
            let response = ctx.client.get_tourist(&tourist_id).await?;

            assert_status(&response, 200)?;
            let body: Value = response.json()?;
            assert_json_id(&body, "/id", &tourist_id)?;
            assert_json_field(&body, "/tourist_name", &json!(expected.tourist_name))?;
            assert_json_field(&body, "/tourist_email", &json!(expected.tourist_email))?;
            assert_json_field(&body, "/tourist_location", &json!(expected.tourist_location))?;
            Ok::<(), ScenarioError>(())
        })
        .await?
    }
}

/// Unknown ids are answered with 400 rather than 404.
#[derive(Debug, Default, Clone, Copy)]
pub struct GetNonexistentTourist;

#[async_trait::async_trait]
impl Scenario for GetNonexistentTourist {
    fn name(&self) -> &'static str {
        "get_nonexistent_tourist"
    }

    fn title(&self) -> &'static str {
        "Tourist not found"
    }

    async fn run(&self, ctx: &ScenarioContext<'_>) -> Result<(), ScenarioError> {
        let tourist_id = TouristId::new(NONEXISTENT_TOURIST_ID);
        ctx.step(&get_tourist_step(tourist_id.as_ref()));
        ctx.request_sent();
        let response = ctx.client.get_tourist(&tourist_id).await?;

        assert_status(&response, 400)?;
        let body: Value = response.json()?;
        assert_json_field(&body, "/Message", &json!(INVALID_REQUEST_MESSAGE))?;
        Ok(())
    }
}
