use crate::helpers::{spawn_mock_api, validation_failure};
use claims::assert_matches;
use serde_json::json;
use tourist_suite::assertions::AssertionFailure;
use tourist_suite::scenarios::constants::{
    FIELD_REQUIRED_MESSAGE, INVALID_EMAIL, INVALID_PASSWORD, LOGIN_REJECTED_MESSAGE, VALID_EMAIL,
    VALID_PASSWORD,
};
use tourist_suite::scenarios::{LoginEmpty, LoginInvalidCredentials, LoginOk, ScenarioError};
use wiremock::ResponseTemplate;

#[tokio::test]
async fn login_ok_passes_when_valid_credentials_get_a_200() {
    // Arrange
    let api = spawn_mock_api().await;
    api.mount_login_ok().await;
    // Act
    let report = api.run(LoginOk).await;
    // Assert
    assert!(report.is_passed(), "{:?}", report.outcome);
    assert!(report.request_sent);
}

#[tokio::test]
async fn login_ok_does_not_inspect_the_body() {
    // Arrange
    let api = spawn_mock_api().await;
    api.mount_login(VALID_EMAIL, VALID_PASSWORD, ResponseTemplate::new(200))
        .await;
    // Act
    let report = api.run(LoginOk).await;
    // Assert
    assert!(report.is_passed(), "{:?}", report.outcome);
}

#[tokio::test]
async fn login_ok_fails_when_the_api_returns_a_401() {
    // Arrange
    let api = spawn_mock_api().await;
    api.mount_login(VALID_EMAIL, VALID_PASSWORD, ResponseTemplate::new(401))
        .await;
    // Act
    let report = api.run(LoginOk).await;
    // Assert
    assert_matches!(
        report.failure(),
        Some(ScenarioError::Assertion(failure)) if *failure == AssertionFailure::new("status code", "200", "401")
    );
}

#[tokio::test]
async fn invalid_credentials_pass_on_an_application_level_rejection() {
    // Arrange
    let api = spawn_mock_api().await;
    api.mount_login_rejection().await;
    // Act
    let report = api.run(LoginInvalidCredentials).await;
    // Assert
    assert!(report.is_passed(), "{:?}", report.outcome);
}

#[tokio::test]
async fn invalid_credentials_fail_when_the_api_answers_with_an_http_error() {
    // Arrange
    let api = spawn_mock_api().await;
    api.mount_login(
        INVALID_EMAIL,
        INVALID_PASSWORD,
        ResponseTemplate::new(401).set_body_json(json!({
            "code": 1,
            "message": LOGIN_REJECTED_MESSAGE,
            "data": null
        })),
    )
    .await;
    // Act
    let report = api.run(LoginInvalidCredentials).await;
    // Assert
    assert_matches!(
        report.failure(),
        Some(ScenarioError::Assertion(failure)) if failure.subject == "status code"
    );
}

#[tokio::test]
async fn invalid_credentials_fail_when_data_is_absent() {
    // Arrange
    let api = spawn_mock_api().await;
    api.mount_login(
        INVALID_EMAIL,
        INVALID_PASSWORD,
        ResponseTemplate::new(200).set_body_json(json!({
            "code": 1,
            "message": LOGIN_REJECTED_MESSAGE
        })),
    )
    .await;
    // Act
    let report = api.run(LoginInvalidCredentials).await;
    // Assert
    assert_matches!(
        report.failure(),
        Some(ScenarioError::Assertion(failure)) if failure.subject == "/data" && failure.actual == "<missing>"
    );
}

#[tokio::test]
async fn invalid_credentials_stop_at_the_first_failed_assertion() {
    // Arrange
    let api = spawn_mock_api().await;
    api.mount_login(
        INVALID_EMAIL,
        INVALID_PASSWORD,
        ResponseTemplate::new(200).set_body_json(json!({
            "code": 2,
            "message": "account locked",
            "data": {}
        })),
    )
    .await;
    // Act
    let report = api.run(LoginInvalidCredentials).await;
    // Assert
    assert_matches!(
        report.failure(),
        Some(ScenarioError::Assertion(failure)) if failure.subject == "/code"
    );
}

#[tokio::test]
async fn invalid_credentials_fail_when_the_body_is_not_json() {
    // Arrange
    let api = spawn_mock_api().await;
    api.mount_login(
        INVALID_EMAIL,
        INVALID_PASSWORD,
        ResponseTemplate::new(200).set_body_string("<html>Login</html>"),
    )
    .await;
    // Act
    let report = api.run(LoginInvalidCredentials).await;
    // Assert
    assert_matches!(report.failure(), Some(ScenarioError::UnparsableBody(_)));
}

#[tokio::test]
async fn empty_credentials_pass_on_a_validation_failure() {
    // Arrange
    let api = spawn_mock_api().await;
    api.mount_login_validation_failure().await;
    // Act
    let report = api.run(LoginEmpty).await;
    // Assert
    assert!(report.is_passed(), "{:?}", report.outcome);
}

#[tokio::test]
async fn empty_credentials_fail_when_a_field_is_not_reported() {
    // Arrange
    let api = spawn_mock_api().await;
    let mut body = validation_failure();
    body["ModelState"]
        .as_object_mut()
        .unwrap()
        .remove("log.password");
    api.mount_login("", "", ResponseTemplate::new(400).set_body_json(body))
        .await;
    // Act
    let report = api.run(LoginEmpty).await;
    // Assert
    assert_matches!(
        report.failure(),
        Some(ScenarioError::Assertion(failure)) if failure.subject == "/ModelState/log.password"
    );
}

#[tokio::test]
async fn empty_credentials_fail_on_a_different_validation_message() {
    // Arrange
    let api = spawn_mock_api().await;
    let mut body = validation_failure();
    body["ModelState"]["log.email"] = json!([FIELD_REQUIRED_MESSAGE, "must be an email"]);
    api.mount_login("", "", ResponseTemplate::new(400).set_body_json(body))
        .await;
    // Act
    let report = api.run(LoginEmpty).await;
    // Assert
    assert_matches!(
        report.failure(),
        Some(ScenarioError::Assertion(failure)) if failure.subject == "/ModelState/log.email"
    );
}
