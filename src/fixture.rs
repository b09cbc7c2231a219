//! Scoped lifecycle of the tourist a scenario works against.
//!
//! [`with_tourist`] creates the tourist, hands its id to the scenario body
//! and deletes it again once the body has returned, whatever it returned.
//! A body that panics or is dropped mid-flight still gets its tourist
//! deleted, from a task spawned on the current runtime.
use crate::api_client::TouristApiClient;
use crate::domain::{NewTourist, TouristId};
use crate::utils::error_chain_fmt;
use std::future::Future;
use tracing::{Span, field::display};

#[derive(thiserror::Error)]
pub enum FixtureError {
    #[error("Failed to send the tourist creation request.")]
    Transport(#[source] reqwest::Error),
    #[error("The tourist creation response is not valid JSON.")]
    UnparsableBody(#[source] serde_json::Error),
    #[error("The tourist creation response (status {status}) has no `id` field.")]
    MissingId { status: u16 },
}

impl std::fmt::Debug for FixtureError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

#[tracing::instrument(
    name = "Acquiring a tourist fixture",
    skip_all,
    fields(
        tourist_name = %new_tourist.tourist_name,
        tourist_id = tracing::field::Empty
    ),
    err
)]
pub async fn acquire(
    client: &TouristApiClient,
    new_tourist: &NewTourist,
) -> Result<TouristId, FixtureError> {
    let response = client
        .create_tourist(new_tourist)
        .await
        .map_err(FixtureError::Transport)?;
    let body: serde_json::Value = response.json().map_err(FixtureError::UnparsableBody)?;
    let id = match body.get("id") {
        Some(id) if !id.is_null() => id.clone(),
        _ => {
            return Err(FixtureError::MissingId {
                status: response.status(),
            });
        }
    };
    let id: TouristId = serde_json::from_value(id).map_err(FixtureError::UnparsableBody)?;
    Span::current().record("tourist_id", display(&id));
    Ok(id)
}

/// Best-effort deletion: failures are logged, never returned.
#[tracing::instrument(name = "Releasing a tourist fixture", skip(client))]
pub async fn release(client: &TouristApiClient, id: &TouristId) {
    match client.delete_tourist(id).await {
        Ok(response) if response.is_success() => {
            tracing::debug!("Tourist fixture deleted");
        }
        Ok(response) => {
            tracing::warn!(
                status = response.status(),
                "The API refused to delete the tourist fixture. Skipping."
            );
        }
        Err(e) => {
            tracing::warn!(
                error.cause_chain = ?e,
                error.message = %e,
                "Failed to delete the tourist fixture. Skipping."
            );
        }
    }
}

/// Deletes the tourist when dropped while still armed.
///
/// Armed for as long as the scenario body holds the tourist. Unwinding or
/// cancellation drops it armed, so the deletion moves to a spawned task.
struct ReleaseGuard {
    client: TouristApiClient,
    id: Option<TouristId>,
}

impl ReleaseGuard {
    fn new(client: &TouristApiClient, id: &TouristId) -> Self {
        Self {
            client: client.clone(),
            id: Some(id.clone()),
        }
    }

    fn disarm(&mut self) {
        self.id = None;
    }
}

impl Drop for ReleaseGuard {
    fn drop(&mut self) {
        let Some(id) = self.id.take() else {
            return;
        };
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                let client = self.client.clone();
                handle.spawn(async move { release(&client, &id).await });
            }
            Err(_) => {
                tracing::warn!(
                    tourist_id = %id,
                    "No async runtime left to delete the tourist fixture. Skipping."
                );
            }
        }
    }
}

/// Run `body` against a freshly created tourist.
///
/// A creation failure is returned before `body` runs. Otherwise the tourist
/// is deleted exactly once after `body` completes and its output is returned.
/// If `body` panics, or the returned future is dropped before completion,
/// the deletion is spawned onto the current tokio runtime instead.
pub async fn with_tourist<F, Fut, T>(
    client: &TouristApiClient,
    new_tourist: &NewTourist,
    body: F,
) -> Result<T, FixtureError>
where
    F: FnOnce(TouristId) -> Fut,
    Fut: Future<Output = T>,
{
    let id = acquire(client, new_tourist).await?;
    let mut guard = ReleaseGuard::new(client, &id);
    let output = body(id.clone()).await;
    release(client, &id).await;
    guard.disarm();
    Ok(output)
}
