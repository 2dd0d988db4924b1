//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;

use async_trait::async_trait;

use crate::api::{ApiError, RemoteStore, Todo};
use crate::core::state::App;

/// A no-op store for tests that don't touch the network.
pub struct NoopStore;

#[async_trait]
impl RemoteStore for NoopStore {
    async fn fetch(&self, _limit: u32) -> Result<Vec<Todo>, ApiError> {
        Ok(Vec::new())
    }

    async fn create(&self, _todo: &Todo) -> Result<(), ApiError> {
        Ok(())
    }
}

/// Creates a test App with a NoopStore.
pub fn test_app() -> App {
    App::new(Arc::new(NoopStore), 10)
}

/// Three todos with ids "1".."3"; only "2" is completed.
pub fn sample_todos() -> Vec<Todo> {
    vec![
        Todo {
            id: "1".to_string(),
            title: "A".to_string(),
            completed: false,
        },
        Todo {
            id: "2".to_string(),
            title: "B".to_string(),
            completed: true,
        },
        Todo {
            id: "3".to_string(),
            title: "C".to_string(),
            completed: false,
        },
    ]
}
