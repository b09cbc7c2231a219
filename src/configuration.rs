use crate::api_client::TouristApiClient;
use crate::domain::{NewTourist, RunId};
use chrono::{DateTime, Utc};
use serde_aux::field_attributes::deserialize_number_from_string;

#[derive(serde::Deserialize, Clone, Debug)]
pub struct Settings {
    pub api: ApiSettings,
    pub fixture: FixtureSettings,
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct ApiSettings {
    pub base_url: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub timeout_milliseconds: u64,
}

impl ApiSettings {
    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.timeout_milliseconds)
    }

    pub fn client(&self) -> Result<TouristApiClient, reqwest::Error> {
        TouristApiClient::new(self.base_url.clone(), self.timeout())
    }
}

/// Values used for the tourist every fixture creates.
#[derive(serde::Deserialize, Clone, Debug)]
pub struct FixtureSettings {
    pub tourist_location: String,
    pub created_at: DateTime<Utc>,
}

impl FixtureSettings {
    pub fn new_tourist(&self, run_id: &RunId) -> NewTourist {
        NewTourist {
            tourist_name: run_id.tourist_name(),
            tourist_email: run_id.tourist_email(),
            tourist_location: self.tourist_location.clone(),
            createdat: self.created_at,
        }
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path =
        std::env::current_dir().map_err(|e| config::ConfigError::Foreign(Box::new(e)))?;
    let configuration_directory = base_path.join("configuration");

    // Detect the running environment.
    // Default to `local` if unspecified.
    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(config::ConfigError::Message)?;
    let environment_filename = format!("{}.yaml", environment.as_str());

    let settings = config::Config::builder()
        .add_source(config::File::from(
            configuration_directory.join("base.yaml"),
        ))
        .add_source(config::File::from(
            configuration_directory.join(environment_filename),
        ))
        // Add in settings from environment variables (with a prefix of APP and '__' as separator)
        // E.g. `APP_API__BASE_URL=http://localhost:8000` would set `Settings.api.base_url`
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}

/// The possible runtime environment for the suite.
#[derive(Debug, PartialEq, Eq)]
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{} is not a supported environment. \
                Use either `local` or `production`.",
                other
            )),
        }
    }
}
