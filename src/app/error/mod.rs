use askama::Template;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::api::ApiError;

pub type AppResult<T, E = AppError> = std::result::Result<T, E>;

/// Failures a page handler cannot recover from on its own.
///
/// Field validation errors never end up here: they are rendered inline by the form
/// pages. What is left is turned into the error page with a matching status code.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("the users API could not be reached")]
    Upstream(#[from] ApiError),
}

#[derive(Template)]
#[template(path = "error.html")]
struct ErrorTemplate {
    title: &'static str,
    message: &'static str,
}

impl AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }

    fn template(&self) -> ErrorTemplate {
        match self {
            Self::Upstream(_) => ErrorTemplate {
                title: "Serviço indisponível",
                message: "Não foi possível carregar os dados. Tente novamente em instantes.",
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::Upstream(ref e) => tracing::error!(error = ?e, "users API request failed"),
        }

        (self.status_code(), self.template()).into_response()
    }
}
