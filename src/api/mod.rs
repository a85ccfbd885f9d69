//! Client side of the remote users API.

use async_trait::async_trait;

use crate::domain::user::{NewUser, User};

mod client;

pub use client::HttpUsersApi;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request to the users API failed")]
    Request(#[from] reqwest::Error),
    #[error("users API answered with status {status}")]
    UnexpectedStatus {
        status: reqwest::StatusCode,
        body: String,
    },
}

/// Operations the pages need from the users backend.
#[async_trait]
pub trait UsersApi: Send + Sync {
    /// Creates a user. The creation timestamp is attached by the implementation.
    async fn create_user(&self, user: &NewUser) -> Result<User, ApiError>;

    async fn list_users(&self) -> Result<Vec<User>, ApiError>;
}
