use axum::{routing::get, Router};

use super::AppState;

pub mod route;
pub mod schema;

/// Query key of the users collection in the query cache.
pub const USERS_QUERY_KEY: &str = "users";

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", get(route::users_page))
        .route(
            "/users/create",
            get(route::create_user_form).post(route::create_user),
        )
}
