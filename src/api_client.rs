use crate::domain::{ApiResponse, LoginCredentials, NewTourist, TouristId};
use reqwest::Client;
use secrecy::ExposeSecret;

/// Thin client over the remote Tourist API.
///
/// Every call returns the captured response whatever its status;
/// only transport failures surface as errors.
#[derive(Clone, Debug)]
pub struct TouristApiClient {
    base_url: String,
    http_client: Client,
}

#[derive(serde::Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

impl TouristApiClient {
    pub fn new(base_url: String, timeout: std::time::Duration) -> Result<Self, reqwest::Error> {
        let http_client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http_client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[tracing::instrument(name = "Logging in", skip(self, credentials), fields(email = %credentials.email))]
    pub async fn login(&self, credentials: &LoginCredentials) -> Result<ApiResponse, reqwest::Error> {
        let url = format!("{}/api/AuthAccount/Login", self.base_url);
        let request_body = LoginRequest {
            email: &credentials.email,
            password: credentials.password.expose_secret(),
        };
        let response = self.http_client.post(&url).json(&request_body).send().await?;
        ApiResponse::capture(response).await
    }

    #[tracing::instrument(
        name = "Creating a tourist",
        skip(self, new_tourist),
        fields(tourist_name = %new_tourist.tourist_name)
    )]
    pub async fn create_tourist(&self, new_tourist: &NewTourist) -> Result<ApiResponse, reqwest::Error> {
        let url = format!("{}/api/Tourist", self.base_url);
        let response = self.http_client.post(&url).json(new_tourist).send().await?;
        ApiResponse::capture(response).await
    }

    #[tracing::instrument(name = "Fetching a tourist", skip(self))]
    pub async fn get_tourist(&self, id: &TouristId) -> Result<ApiResponse, reqwest::Error> {
        let url = format!("{}/api/Tourist/{}", self.base_url, id);
        let response = self.http_client.get(&url).send().await?;
        ApiResponse::capture(response).await
    }

    #[tracing::instrument(name = "Deleting a tourist", skip(self))]
    pub async fn delete_tourist(&self, id: &TouristId) -> Result<ApiResponse, reqwest::Error> {
        let url = format!("{}/api/Tourist/{}", self.base_url, id);
        let response = self.http_client.delete(&url).send().await?;
        ApiResponse::capture(response).await
    }
}
