use axum::{
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Redirect, Response},
};

/// Client-side navigation after a successful form submission.
///
/// htmx requests get an `HX-Redirect` header so the browser changes page instead of
/// swapping the response in; plain form posts get a `303 See Other`.
pub fn redirect_to(headers: &HeaderMap, location: &'static str) -> Response {
    if headers.contains_key("HX-Request") {
        (StatusCode::OK, [("HX-Redirect", location)]).into_response()
    } else {
        Redirect::to(location).into_response()
    }
}
