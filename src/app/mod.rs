use std::{io, net::SocketAddr, sync::Arc};

use anyhow::Context;
use axum::{http::Request, http::StatusCode, routing::get, Router};
use tokio::net::TcpListener;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::{
    api::{HttpUsersApi, UsersApi},
    cache::QueryCache,
    config::Settings,
    diagnostics::DiagnosticLog,
};

mod component;
mod error;
mod navigation;
mod not_found;
mod sign_in;
mod users;

pub use self::sign_in::schema::SignInFormData;

/// Services shared by every page, handed to the handlers through axum state.
#[derive(Clone)]
pub struct AppState {
    users_api: Arc<dyn UsersApi>,
    query_cache: QueryCache,
    sign_ins: DiagnosticLog<SignInFormData>,
}

impl AppState {
    pub fn new(
        users_api: Arc<dyn UsersApi>,
        query_cache: QueryCache,
        sign_ins: DiagnosticLog<SignInFormData>,
    ) -> Self {
        Self {
            users_api,
            query_cache,
            sign_ins,
        }
    }
}

async fn health_check() -> StatusCode {
    StatusCode::OK
}

fn app_router() -> Router<AppState> {
    Router::new()
        .route("/health_check", get(health_check))
        .merge(sign_in::router())
        .merge(users::router())
        .nest_service("/assets", ServeDir::new("assets"))
        .fallback(not_found::not_found_page)
}

pub struct App {
    listener: TcpListener,
    state: AppState,
}

impl App {
    pub async fn with(config: Settings) -> anyhow::Result<Self> {
        let users_api = HttpUsersApi::new(config.api.base_url.clone(), config.api.timeout())
            .context("Failed to build the users API client")?;

        let state = AppState::new(
            Arc::new(users_api),
            QueryCache::new(config.cache.stale_time()),
            DiagnosticLog::new(config.diagnostics.capacity),
        );

        let listener = TcpListener::bind(format!(
            "{}:{}",
            config.application.host, config.application.port
        ))
        .await
        .context("Failed to bind the application address")?;

        Ok(Self { listener, state })
    }

    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Sign-in submissions accepted so far, shared with the running server.
    pub fn sign_ins(&self) -> DiagnosticLog<SignInFormData> {
        self.state.sign_ins.clone()
    }

    pub async fn serve(self) -> Result<(), io::Error> {
        let app = app_router().with_state(self.state).layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
                let id = uuid::Uuid::new_v4();
                tracing::info_span!(
                    "request",
                    method = ?request.method(),
                    uri = ?request.uri(),
                    %id,
                )
            }),
        );

        axum::serve(self.listener, app.into_make_service()).await
    }
}
