//! Client for the face-training engine.
//!
//! After a criminal is created the engine is asked to learn the new face.
//! Delivery is best effort: failures are logged and never reach the caller.

use std::time::Duration;

use actix_web::http::StatusCode;
use awc::error::{PayloadError, SendRequestError};
use serde::Serialize;
use thiserror::Error;

use crate::domain::criminal::Criminal;
use crate::domain::types::PublicId;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Body posted to the engine's train endpoint.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TrainRequest {
    pub guid: PublicId,
    pub id: i32,
    pub name: Option<String>,
}

impl From<&Criminal> for TrainRequest {
    fn from(criminal: &Criminal) -> Self {
        Self {
            guid: criminal.guid,
            id: criminal.id.get(),
            name: criminal.criminal_name.clone(),
        }
    }
}

#[derive(Debug, Error)]
pub enum TrainingEngineError {
    #[error("request to training engine failed: {0}")]
    Send(#[from] SendRequestError),

    #[error("failed to read training engine response: {0}")]
    Body(#[from] PayloadError),
}

/// Receives a notification for every newly created criminal.
pub trait TrainingNotifier {
    fn notify_new_criminal(&self, request: TrainRequest);
}

/// HTTP notifier posting JSON to a configured train URL.
#[derive(Debug, Clone)]
pub struct TrainingEngine {
    train_url: Option<String>,
    timeout: Duration,
}

impl TrainingEngine {
    /// Blank URLs disable notifications.
    pub fn new(train_url: Option<String>) -> Self {
        Self {
            train_url: train_url
                .map(|url| url.trim().to_string())
                .filter(|url| !url.is_empty()),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn disabled() -> Self {
        Self::new(None)
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn train_url(&self) -> Option<&str> {
        self.train_url.as_deref()
    }

    /// Posts `request` to `url` and returns the engine's status and body.
    pub async fn post(
        url: &str,
        timeout: Duration,
        request: &TrainRequest,
    ) -> Result<(StatusCode, String), TrainingEngineError> {
        let client = awc::Client::builder().timeout(timeout).finish();
        let mut response = client.post(url).send_json(request).await?;
        let body = response.body().await?;
        Ok((response.status(), String::from_utf8_lossy(&body).into_owned()))
    }
}

impl TrainingNotifier for TrainingEngine {
    /// Spawns the request on the current actix runtime; must be called from
    /// within a running system (any request handler).
    fn notify_new_criminal(&self, request: TrainRequest) {
        let Some(url) = self.train_url.clone() else {
            return;
        };
        let timeout = self.timeout;

        actix_web::rt::spawn(async move {
            match Self::post(&url, timeout, &request).await {
                Ok((status, body)) => {
                    log::info!("Train endpoint responded with {status}: {body}");
                }
                Err(e) => log::warn!("Failed to notify training engine for {}: {e}", request.guid),
            }
        });
    }
}

#[cfg(any(test, feature = "test-mocks"))]
mockall::mock! {
    pub Notifier {}

    impl TrainingNotifier for Notifier {
        fn notify_new_criminal(&self, request: TrainRequest);
    }
}
