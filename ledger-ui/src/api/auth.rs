//! Session gate for dashboard routes
//!
//! Requests under /dashboard without a session cookie are redirected to
//! the login page. Session issuance and verification live with the
//! authentication collaborator; this gate only checks cookie presence.
//! The gate can be disabled at startup, which also simplifies testing.

use axum::{
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

use crate::{AppState, LOGIN_PATH};

/// Name of the session cookie checked by the gate
pub const SESSION_COOKIE: &str = "ledger_session";

/// Authentication middleware
///
/// Applied to dashboard routes only; the health endpoint stays open.
pub async fn auth_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    if !state.require_auth {
        // Gate disabled - pass through without checking
        return next.run(request).await;
    }

    if has_session(request.headers()) {
        next.run(request).await
    } else {
        Redirect::to(LOGIN_PATH).into_response()
    }
}

/// Whether the request carries a non-empty session cookie
fn has_session(headers: &HeaderMap) -> bool {
    let Some(cookies) = headers.get(header::COOKIE).and_then(|v| v.to_str().ok()) else {
        return false;
    };

    cookies.split(';').any(|cookie| {
        cookie
            .trim()
            .strip_prefix(SESSION_COOKIE)
            .and_then(|rest| rest.strip_prefix('='))
            .map(|value| !value.is_empty())
            .unwrap_or(false)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with_cookie(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_no_cookie_header() {
        assert!(!has_session(&HeaderMap::new()));
    }

    #[test]
    fn test_session_cookie_present() {
        assert!(has_session(&headers_with_cookie("ledger_session=abc123")));
    }

    #[test]
    fn test_session_cookie_among_others() {
        assert!(has_session(&headers_with_cookie(
            "theme=dark; ledger_session=abc123; lang=en"
        )));
    }

    #[test]
    fn test_empty_session_cookie_rejected() {
        assert!(!has_session(&headers_with_cookie("ledger_session=")));
    }

    #[test]
    fn test_other_cookies_only() {
        assert!(!has_session(&headers_with_cookie("theme=dark; lang=en")));
    }
}
