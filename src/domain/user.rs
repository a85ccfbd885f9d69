use chrono::{DateTime, Utc};
use derive_more::Display;
use secrecy::Secret;
use serde::{Deserialize, Serialize};

/// Identifiers come back either as numbers or as strings depending on the backend.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Display)]
#[serde(untagged)]
pub enum UserId {
    #[display(fmt = "{}", _0)]
    Number(u64),
    #[display(fmt = "{}", _0)]
    Text(String),
}

/// A user as returned by the users API.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct User {
    #[serde(default)]
    pub id: Option<UserId>,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl User {
    pub fn created_on(&self) -> String {
        self.created_at
            .map(|created_at| created_at.format("%d/%m/%Y").to_string())
            .unwrap_or_else(|| "-".to_owned())
    }
}

/// Validated input of the create-user form, ready to be sent to the users API.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: Secret<String>,
    pub password_confirmation: Secret<String>,
}
