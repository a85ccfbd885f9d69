use askama::Template;
use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Form,
};

use super::schema::{CreateUserFormData, CREATE_USER_SCHEMA};
use super::USERS_QUERY_KEY;
use crate::api::ApiError;
use crate::app::{component::InputField, error::AppResult, navigation::redirect_to, AppState};
use crate::domain::user::{NewUser, User};
use crate::form::FieldErrors;

const CREATE_USER_FAILURE: &str = "Não foi possível criar o usuário. Tente novamente.";

#[derive(Template)]
#[template(path = "users.html")]
pub struct UsersTemplate {
    users: Vec<User>,
}

#[derive(Template)]
#[template(path = "create_user.html")]
struct CreateUserTemplate {
    name: InputField,
    email: InputField,
    password: InputField,
    password_confirmation: InputField,
    failure: Option<&'static str>,
}

impl CreateUserTemplate {
    fn new(values: Option<&CreateUserFormData>, errors: &FieldErrors) -> Self {
        Self {
            name: InputField::new("name")
                .label("Nome completo")
                .value(values.map(|values| values.name.as_str()))
                .error(errors.get("name")),
            email: InputField::new("email")
                .label("E-mail")
                .input_type("email")
                .value(values.map(|values| values.email.as_str()))
                .error(errors.get("email")),
            password: InputField::new("password")
                .label("Senha")
                .input_type("password")
                .error(errors.get("password"))
                .attribute("autocomplete", "new-password"),
            password_confirmation: InputField::new("password_confirmation")
                .label("Confirmação da senha")
                .input_type("password")
                .error(errors.get("password_confirmation"))
                .attribute("autocomplete", "new-password"),
            failure: None,
        }
    }

    fn failed(mut self, message: &'static str) -> Self {
        self.failure = Some(message);
        self
    }
}

#[tracing::instrument(name = "Users page", skip(state))]
pub async fn users_page(State(state): State<AppState>) -> AppResult<UsersTemplate> {
    let users = state
        .query_cache
        .fetch(USERS_QUERY_KEY, || state.users_api.list_users())
        .await?;

    Ok(UsersTemplate { users })
}

#[tracing::instrument(name = "Create user form")]
pub async fn create_user_form() -> impl IntoResponse {
    CreateUserTemplate::new(None, &FieldErrors::default())
}

#[tracing::instrument(name = "Create user", skip(state, headers, form), fields(email = %form.email))]
pub async fn create_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<CreateUserFormData>,
) -> Response {
    if let Err(errors) = CREATE_USER_SCHEMA.validate(&form) {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            CreateUserTemplate::new(Some(&form), &errors),
        )
            .into_response();
    }

    match submit_new_user(&state, form.clone().into()).await {
        Ok(user) => {
            tracing::info!(id = ?user.id, "user created");
            redirect_to(&headers, "/users")
        }
        Err(e) => {
            tracing::error!(error = ?e, "failed to create user");
            (
                StatusCode::BAD_GATEWAY,
                CreateUserTemplate::new(Some(&form), &FieldErrors::default())
                    .failed(CREATE_USER_FAILURE),
            )
                .into_response()
        }
    }
}

/// Sends the user to the API and, once it is stored, marks the cached users
/// collection as stale.
#[tracing::instrument(name = "Submit new user", skip(state, user))]
async fn submit_new_user(state: &AppState, user: NewUser) -> Result<User, ApiError> {
    let created = state.users_api.create_user(&user).await?;
    state.query_cache.invalidate(USERS_QUERY_KEY).await;

    Ok(created)
}
