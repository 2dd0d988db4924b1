//! HTTP implementation of [`RemoteStore`] for a jsonplaceholder-style
//! endpoint: `GET <base>?_limit=<n>` to read, `POST <base>` to create.

use async_trait::async_trait;
use log::{debug, info, warn};

use super::store::{ApiError, RemoteStore};
use super::types::Todo;

pub struct HttpStore {
    base_url: String,
    client: reqwest::Client,
}

impl HttpStore {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }
}

/// Drains a non-success response into an `ApiError::Api`.
async fn status_error(response: reqwest::Response) -> ApiError {
    let status = response.status().as_u16();
    let message = response
        .text()
        .await
        .unwrap_or_else(|_| "unknown error".to_string());
    warn!("Endpoint rejected request: {} - {}", status, message);
    ApiError::Api { status, message }
}

#[async_trait]
impl RemoteStore for HttpStore {
    async fn fetch(&self, limit: u32) -> Result<Vec<Todo>, ApiError> {
        info!("Fetching up to {} todos from {}", limit, self.base_url);

        let response = self
            .client
            .get(&self.base_url)
            .query(&[("_limit", limit)])
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        debug!("Fetch response status: {}", response.status());

        if !response.status().is_success() {
            return Err(status_error(response).await);
        }

        let todos: Vec<Todo> = response
            .json()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))?;

        info!("Fetched {} todos", todos.len());
        Ok(todos)
    }

    async fn create(&self, todo: &Todo) -> Result<(), ApiError> {
        info!("Creating todo {} remotely", todo.id);

        let response = self
            .client
            .post(&self.base_url)
            .json(todo)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        debug!("Create response status: {}", response.status());

        if !response.status().is_success() {
            return Err(status_error(response).await);
        }

        // The endpoint echoes the created object; nothing in it is used.
        Ok(())
    }
}
