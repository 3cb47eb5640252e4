//! Access Guard middleware
//!
//! Intercepts every request targeting a protected path prefix and lets it
//! through only if a session marker is present; otherwise redirects to the
//! unauthenticated entry surface, preserving no query state.
//!
//! Deliberately decoupled from the age-gate flow: the guard knows nothing
//! about age or consent, only session presence. The guarantee that a session
//! is only issued after a satisfying age-gate outcome is an invariant the
//! external session-issuing collaborator upholds.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

/// Access guard configuration
#[derive(Debug, Clone)]
pub struct GuardConfig {
    /// Path prefixes the guard protects
    pub protected_prefixes: Vec<String>,
    /// Where unauthenticated requests are redirected
    pub entry_path: String,
    /// Name of the session marker cookie
    pub session_cookie: String,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            protected_prefixes: vec![
                "/content".to_string(),
                "/feed".to_string(),
                "/settings".to_string(),
            ],
            entry_path: "/welcome".to_string(),
            session_cookie: "agegate_session".to_string(),
        }
    }
}

/// Session-presence guard for protected path prefixes
pub async fn access_guard(
    State(config): State<GuardConfig>,
    req: Request,
    next: Next,
) -> Response {
    if !is_protected(req.uri().path(), &config.protected_prefixes) {
        return next.run(req).await;
    }

    if has_session_marker(&req, &config.session_cookie) {
        return next.run(req).await;
    }

    tracing::debug!(
        path = %req.uri().path(),
        "No session marker on protected path, redirecting to entry"
    );

    // Redirect target carries no query state from the original request
    Redirect::to(&config.entry_path).into_response()
}

/// Whether `path` falls under any protected prefix.
///
/// A prefix matches the path itself and anything nested below it; it never
/// matches a sibling that merely shares leading characters ("/feedback" is
/// not under "/feed").
fn is_protected(path: &str, prefixes: &[String]) -> bool {
    prefixes.iter().any(|prefix| {
        path == prefix || path.strip_prefix(prefix.as_str()).is_some_and(|rest| rest.starts_with('/'))
    })
}

/// Whether the request carries a non-empty session marker cookie
fn has_session_marker(req: &Request, cookie_name: &str) -> bool {
    let Some(header) = req.headers().get(axum::http::header::COOKIE) else {
        return false;
    };
    let Ok(cookies) = header.to_str() else {
        return false;
    };

    cookies.split(';').any(|pair| {
        let mut parts = pair.trim().splitn(2, '=');
        parts.next() == Some(cookie_name)
            && parts.next().is_some_and(|value| !value.is_empty())
    })
}
