use super::constants::{
    FIELD_REQUIRED_MESSAGE, INVALID_EMAIL, INVALID_PASSWORD, INVALID_REQUEST_MESSAGE,
    LOGIN_REJECTED_CODE, LOGIN_REJECTED_MESSAGE, MODEL_STATE_EMAIL_KEY, MODEL_STATE_PASSWORD_KEY,
    VALID_EMAIL, VALID_PASSWORD,
};
use super::{Scenario, ScenarioContext, ScenarioError};
use crate::assertions::{assert_json_field, assert_status};
use crate::domain::LoginCredentials;
use serde_json::{Value, json};

/// Valid credentials are accepted. Only the status is checked.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoginOk;

#[async_trait::async_trait]
impl Scenario for LoginOk {
    fn name(&self) -> &'static str {
        "login_ok"
    }

    fn title(&self) -> &'static str {
        "Login is successful"
    }

    async fn run(&self, ctx: &ScenarioContext<'_>) -> Result<(), ScenarioError> {
        let credentials = LoginCredentials::new(VALID_EMAIL, VALID_PASSWORD);
        ctx.request_sent();
        let response = ctx.client.login(&credentials).await?;

        assert_status(&response, 200)?;
        Ok(())
    }
}

/// Wrong credentials are rejected at application level: status 200
/// with a non-zero `code`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoginInvalidCredentials;

#[async_trait::async_trait]
impl Scenario for LoginInvalidCredentials {
    fn name(&self) -> &'static str {
        "login_invalid_credentials"
    }

    fn title(&self) -> &'static str {
        "Login with invalid credentials"
    }

    async fn run(&self, ctx: &ScenarioContext<'_>) -> Result<(), ScenarioError> {
        let credentials = LoginCredentials::new(INVALID_EMAIL, INVALID_PASSWORD);
        ctx.request_sent();
        let response = ctx.client.login(&credentials).await?;

        assert_status(&response, 200)?;
        let body: Value = response.json()?;
        assert_json_field(&body, "/code", &json!(LOGIN_REJECTED_CODE))?;
        assert_json_field(&body, "/message", &json!(LOGIN_REJECTED_MESSAGE))?;
        assert_json_field(&body, "/data", &Value::Null)?;
        Ok(())
    }
}

/// Empty credentials fail model validation with one entry per field.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoginEmpty;

#[async_trait::async_trait]
impl Scenario for LoginEmpty {
    fn name(&self) -> &'static str {
        "login_empty"
    }

    fn title(&self) -> &'static str {
        "Login with empty credentials"
    }

    async fn run(&self, ctx: &ScenarioContext<'_>) -> Result<(), ScenarioError> {
        let credentials = LoginCredentials::new("", "");
        ctx.request_sent();
        let response = ctx.client.login(&credentials).await?;

        assert_status(&response, 400)?;
        let body: Value = response.json()?;
        assert_json_field(&body, "/Message", &json!(INVALID_REQUEST_MESSAGE))?;
        let field_required = json!([FIELD_REQUIRED_MESSAGE]);
        assert_json_field(
            &body,
            &format!("/ModelState/{}", MODEL_STATE_EMAIL_KEY),
            &field_required,
        )?;
        assert_json_field(
            &body,
            &format!("/ModelState/{}", MODEL_STATE_PASSWORD_KEY),
            &field_required,
        )?;
        Ok(())
    }
}
