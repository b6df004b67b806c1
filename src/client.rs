use std::sync::Arc;

use reqwest::{Response, StatusCode};
use thiserror::Error;
use tracing::debug;
use url::Url;

use crate::models::Seminar;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Unexpected response status: {0}")]
    Status(StatusCode),
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Invalid seminar URL: {0}")]
    Url(#[from] url::ParseError),
}

impl ClientError {
    /// Message shown to the user. A non-2xx status collapses to `on_status`,
    /// anything else surfaces its own text.
    pub fn user_message(&self, on_status: &str) -> String {
        match self {
            ClientError::Status(_) => on_status.to_string(),
            other => other.to_string(),
        }
    }
}

/// Client for the remote seminars API rooted at the collection endpoint.
#[derive(Clone)]
pub struct SeminarsClient {
    client: reqwest::Client,
    base_url: Arc<Url>,
}

impl SeminarsClient {
    pub fn new(base_url: Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: Arc::new(base_url),
        }
    }

    fn seminar_url(&self, id: i64) -> Result<Url, ClientError> {
        let base = self.base_url.as_str().trim_end_matches('/');
        Ok(Url::parse(&format!("{base}/{id}"))?)
    }

    fn check_status(response: Response) -> Result<Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            Err(ClientError::Status(status))
        }
    }

    pub async fn fetch_seminars(&self) -> Result<Vec<Seminar>, ClientError> {
        let response = self.client.get(self.base_url.as_str()).send().await?;
        let response = Self::check_status(response)?;
        let seminars: Vec<Seminar> = response.json().await?;
        debug!(count = seminars.len(), "fetched seminars");
        Ok(seminars)
    }

    pub async fn delete_seminar(&self, id: i64) -> Result<(), ClientError> {
        let url = self.seminar_url(id)?;
        let response = self.client.delete(url.as_str()).send().await?;
        Self::check_status(response)?;
        Ok(())
    }

    pub async fn update_seminar(&self, seminar: &Seminar) -> Result<(), ClientError> {
        let url = self.seminar_url(seminar.id)?;
        let response = self.client.put(url.as_str()).json(seminar).send().await?;
        Self::check_status(response)?;
        Ok(())
    }
}
