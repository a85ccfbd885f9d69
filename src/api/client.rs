use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{Client, Response};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};

use super::{ApiError, UsersApi};
use crate::domain::user::{NewUser, User};

#[derive(Clone)]
pub struct HttpUsersApi {
    http_client: Client,
    base_url: String,
}

#[derive(Serialize)]
struct CreateUserRequestBody<'a> {
    user: CreateUserPayload<'a>,
}

#[derive(Serialize)]
struct CreateUserPayload<'a> {
    name: &'a str,
    email: &'a str,
    password: &'a str,
    password_confirmation: &'a str,
    created_at: DateTime<Utc>,
}

#[derive(Deserialize)]
struct CreateUserResponseBody {
    user: User,
}

#[derive(Deserialize)]
struct ListUsersResponseBody {
    users: Vec<User>,
}

impl HttpUsersApi {
    pub fn new(base_url: String, timeout: Duration) -> Result<Self, ApiError> {
        let http_client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http_client,
            base_url,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }
}

async fn ensure_success(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(ApiError::UnexpectedStatus { status, body })
}

#[async_trait]
impl UsersApi for HttpUsersApi {
    #[tracing::instrument(name = "Send new user to the users API", skip(self, user), fields(email = %user.email))]
    async fn create_user(&self, user: &NewUser) -> Result<User, ApiError> {
        let body = CreateUserRequestBody {
            user: CreateUserPayload {
                name: &user.name,
                email: &user.email,
                password: user.password.expose_secret(),
                password_confirmation: user.password_confirmation.expose_secret(),
                created_at: Utc::now(),
            },
        };

        let response = self
            .http_client
            .post(self.endpoint("users"))
            .json(&body)
            .send()
            .await?;

        let created: CreateUserResponseBody = ensure_success(response).await?.json().await?;
        Ok(created.user)
    }

    #[tracing::instrument(name = "Fetch users from the users API", skip(self))]
    async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        let response = self.http_client.get(self.endpoint("users")).send().await?;

        let listed: ListUsersResponseBody = ensure_success(response).await?.json().await?;
        Ok(listed.users)
    }
}
