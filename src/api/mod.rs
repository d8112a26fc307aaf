// src/api/mod.rs — HTTP front-end: login gate, chat page, chat endpoint

pub mod auth;
pub mod handlers;
pub mod pages;
pub mod types;

use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::core::dispatcher::Dispatcher;
use crate::infra::config::Config;
use crate::infra::errors::ChatGateError;
use crate::infra::session::SessionStore;
use pages::Pages;

/// Shared state for API handlers.
#[derive(Clone)]
pub struct AppState {
    pub activation_code: Arc<str>,
    pub session_ttl_secs: u64,
    pub sessions: SessionStore,
    pub dispatcher: Arc<Dispatcher>,
    pub pages: Arc<Pages>,
}

impl AppState {
    pub fn new(config: &Config, dispatcher: Dispatcher) -> Result<Self, ChatGateError> {
        Ok(Self {
            activation_code: Arc::from(config.auth.activation_code.as_str()),
            session_ttl_secs: config.server.session_ttl_secs,
            sessions: SessionStore::new(config.server.session_ttl_secs),
            dispatcher: Arc::new(dispatcher),
            pages: Arc::new(Pages::new()?),
        })
    }

    /// State built from `config`, with HTTP providers for the configured keys.
    pub fn from_config(config: &Config) -> Result<Self, ChatGateError> {
        Self::new(config, Dispatcher::from_config(&config.providers))
    }

    #[cfg(test)]
    pub(crate) fn for_tests(activation_code: &str) -> Self {
        let mut config = Config::default();
        config.auth.activation_code = activation_code.to_string();
        Self::new(&config, Dispatcher::new(None, None, "g", "o")).unwrap()
    }
}

/// Build the axum router with all routes.
pub fn build_router(state: AppState) -> Router {
    let protected = Router::new()
        .route("/", get(pages::index))
        .route("/chat", post(handlers::chat))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_authenticated,
        ));

    Router::new()
        .route("/login", get(pages::login_form).post(auth::submit_activation))
        .route("/logout", get(auth::logout))
        .route("/health", get(handlers::health))
        .merge(protected)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the HTTP server and run until Ctrl-C.
pub async fn start_server(config: &Config, state: AppState) -> anyhow::Result<()> {
    let addr = config.bind_addr();

    let router = build_router(state);

    tracing::info!("Listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::warn!("Could not listen for Ctrl-C: {}", e);
                std::future::pending::<()>().await;
            }
            tracing::info!("Shutting down");
        })
        .await?;
    Ok(())
}
