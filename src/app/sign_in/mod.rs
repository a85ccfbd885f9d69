use axum::{routing::get, Router};

use super::AppState;

pub mod route;
pub mod schema;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(route::sign_in_form).post(route::sign_in))
}
