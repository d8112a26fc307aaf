// src/api/auth.rs — Activation-code login and the session guard

use axum::extract::{Request, State};
use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::{AppendHeaders, Html, IntoResponse, Redirect, Response};
use axum::extract::rejection::FormRejection;
use axum::Form;

use crate::api::types::{internal_error, ApiError, LoginForm};
use crate::api::AppState;

pub const SESSION_COOKIE: &str = "chatgate_session";

/// Shown on the login page after a wrong code: "The activation code is incorrect".
pub const INVALID_CODE_MESSAGE: &str = "رمز التفعيل غير صحيح";

/// Value of the session cookie, if the request carries one.
pub fn session_id(headers: &HeaderMap) -> Option<&str> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .map(|(_, value)| value)
        .filter(|value| !value.is_empty())
}

/// Plain equality against the configured secret; there are no accounts.
pub fn check_activation(state: &AppState, code: &str) -> bool {
    code == &*state.activation_code
}

fn session_cookie(id: &str, max_age_secs: u64) -> String {
    format!("{SESSION_COOKIE}={id}; HttpOnly; SameSite=Lax; Path=/; Max-Age={max_age_secs}")
}

/// Middleware for protected routes: no authenticated session, no entry.
pub async fn require_authenticated(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let authenticated = session_id(request.headers())
        .is_some_and(|id| state.sessions.is_authenticated(id));

    if !authenticated {
        tracing::debug!("Unauthenticated request to {}", request.uri().path());
        return Redirect::to("/login").into_response();
    }
    next.run(request).await
}

/// POST /login — Exchange the activation code for a session cookie.
///
/// A body that is not a form counts as a missing code.
pub async fn submit_activation(
    State(state): State<AppState>,
    form: Result<Form<LoginForm>, FormRejection>,
) -> Result<Response, ApiError> {
    let code = match form {
        Ok(Form(form)) => form.activation_code,
        Err(e) => {
            tracing::debug!("Unreadable login body: {}", e);
            None
        }
    };

    // A missing code never matches, even an empty configured secret
    if !code.is_some_and(|c| check_activation(&state, &c)) {
        tracing::info!("Rejected login with invalid activation code");
        let page = state
            .pages
            .login(Some(INVALID_CODE_MESSAGE))
            .map_err(internal_error)?;
        return Ok(Html(page).into_response());
    }

    let id = state.sessions.create_authenticated();
    tracing::info!("Session created ({} active)", state.sessions.len());

    Ok((
        AppendHeaders([(SET_COOKIE, session_cookie(&id, state.session_ttl_secs))]),
        Redirect::to("/"),
    )
        .into_response())
}

/// GET /logout — Drop the session and expire the cookie.
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> Response {
    if let Some(id) = session_id(&headers) {
        state.sessions.remove(id);
    }
    (
        AppendHeaders([(SET_COOKIE, session_cookie("", 0))]),
        Redirect::to("/login"),
    )
        .into_response()
}
