use askama::Template;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Form,
};

use super::schema::{SignInFormData, SIGN_IN_SCHEMA};
use crate::app::{component::InputField, AppState};
use crate::form::FieldErrors;

#[derive(Template)]
#[template(path = "sign_in.html")]
struct SignInTemplate {
    email: InputField,
    password: InputField,
}

impl SignInTemplate {
    fn new(values: Option<&SignInFormData>, errors: &FieldErrors) -> Self {
        Self {
            email: InputField::new("email")
                .label("E-mail")
                .input_type("email")
                .value(values.map(|values| values.email.as_str()))
                .error(errors.get("email"))
                .attribute("autocomplete", "email"),
            // Passwords are never echoed back into the page.
            password: InputField::new("password")
                .label("Senha")
                .input_type("password")
                .error(errors.get("password"))
                .attribute("autocomplete", "current-password"),
        }
    }
}

#[tracing::instrument(name = "Sign-in form")]
pub async fn sign_in_form() -> impl IntoResponse {
    SignInTemplate::new(None, &FieldErrors::default())
}

#[tracing::instrument(name = "Sign in", skip(state, form), fields(email = %form.email))]
pub async fn sign_in(State(state): State<AppState>, Form(form): Form<SignInFormData>) -> Response {
    if let Err(errors) = SIGN_IN_SCHEMA.validate(&form) {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            SignInTemplate::new(Some(&form), &errors),
        )
            .into_response();
    }

    tracing::info!(email = %form.email, "sign-in submitted");
    let page = SignInTemplate::new(Some(&form), &FieldErrors::default());
    state.sign_ins.record(form);

    page.into_response()
}
