// src/api/pages.rs — Server-rendered login and chat pages

use axum::extract::State;
use axum::response::Html;
use minijinja::{context, Environment};

use crate::api::types::{internal_error, ApiError};
use crate::api::AppState;
use crate::infra::errors::ChatGateError;

const LOGIN_TEMPLATE: &str = "login.html";
const INDEX_TEMPLATE: &str = "index.html";

/// Templates compiled into the binary.
pub struct Pages {
    env: Environment<'static>,
}

impl Pages {
    pub fn new() -> Result<Self, ChatGateError> {
        let mut env = Environment::new();
        env.add_template(LOGIN_TEMPLATE, include_str!("../../templates/login.html"))?;
        env.add_template(INDEX_TEMPLATE, include_str!("../../templates/index.html"))?;
        Ok(Self { env })
    }

    pub fn login(&self, error: Option<&str>) -> Result<String, ChatGateError> {
        let tmpl = self.env.get_template(LOGIN_TEMPLATE)?;
        Ok(tmpl.render(context! { error => error })?)
    }

    pub fn index(&self) -> Result<String, ChatGateError> {
        let tmpl = self.env.get_template(INDEX_TEMPLATE)?;
        Ok(tmpl.render(context! { version => env!("CARGO_PKG_VERSION") })?)
    }
}

/// GET /login
pub async fn login_form(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    state.pages.login(None).map(Html).map_err(internal_error)
}

/// GET / — Chat page (behind the session guard).
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    state.pages.index().map(Html).map_err(internal_error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_without_error() {
        let pages = Pages::new().unwrap();
        let html = pages.login(None).unwrap();
        assert!(html.contains(r#"name="activation_code""#));
        assert!(!html.contains(r#"class="error""#));
    }

    #[test]
    fn test_login_with_error() {
        let pages = Pages::new().unwrap();
        let html = pages.login(Some("رمز التفعيل غير صحيح")).unwrap();
        assert!(html.contains("رمز التفعيل غير صحيح"));
        assert!(html.contains(r#"class="error""#));
    }

    #[test]
    fn test_index_posts_to_chat() {
        let pages = Pages::new().unwrap();
        let html = pages.index().unwrap();
        assert!(html.contains("/chat"));
        assert!(html.contains(r#"value="gemini""#));
    }
}
