use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;

use crate::paths::pages;

/// Name of the cookie whose presence marks a request as signed in.
pub const AUTH_COOKIE: &str = "krill-auth";
pub const ROOT_PATH: &str = pages::HOME;
pub const LOGIN_PATH: &str = pages::LOGIN;

// Path prefixes (after the leading slash) that never reach the gate.
const EXCLUDED_PREFIXES: [&str; 3] = ["api", "_next/static", "_next/image"];
const EXCLUDED_FILES: [&str; 1] = ["favicon.ico"];

/// PathClass
///
/// How a request path is treated by the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathClass {
    /// Only the root path.
    Public,
    /// The login page and everything under the `/login` prefix.
    AuthPage,
    Protected,
}

/// Decision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Continue,
    RedirectToLogin,
}

/// GatePolicy
///
/// What happens to a protected request without the auth cookie. `PassThrough`
/// forwards it unchanged, which is the long-standing behaviour. `RedirectToLogin`
/// sends it to the login page and must be opted into through configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GatePolicy {
    #[default]
    PassThrough,
    RedirectToLogin,
}

impl GatePolicy {
    pub fn decide(self, path: &str, has_auth_cookie: bool) -> Decision {
        match self {
            GatePolicy::PassThrough => evaluate(path, has_auth_cookie),
            GatePolicy::RedirectToLogin => {
                if classify(path) == PathClass::Protected && !has_auth_cookie {
                    Decision::RedirectToLogin
                } else {
                    Decision::Continue
                }
            }
        }
    }
}

/// classify
///
/// Exact root first, then the `/login` prefix, then everything else.
pub fn classify(path: &str) -> PathClass {
    if path == ROOT_PATH {
        PathClass::Public
    } else if path.starts_with(LOGIN_PATH) {
        PathClass::AuthPage
    } else {
        PathClass::Protected
    }
}

/// evaluate
///
/// The gate's pass-through decision. A protected path without the auth cookie
/// is classified but still allowed through.
pub fn evaluate(path: &str, has_auth_cookie: bool) -> Decision {
    match classify(path) {
        PathClass::Public | PathClass::AuthPage => Decision::Continue,
        PathClass::Protected if !has_auth_cookie => Decision::Continue,
        PathClass::Protected => Decision::Continue,
    }
}

/// is_excluded
///
/// True for API routes, build-internal asset routes and the favicon. These
/// bypass evaluation entirely.
pub fn is_excluded(path: &str) -> bool {
    let rest = path.strip_prefix('/').unwrap_or(path);

    let under_prefix = EXCLUDED_PREFIXES.iter().any(|prefix| {
        rest.strip_prefix(prefix)
            .is_some_and(|tail| tail.is_empty() || tail.starts_with('/'))
    });

    under_prefix || EXCLUDED_FILES.iter().any(|file| rest == *file)
}

/// access_gate
///
/// Axum middleware wrapping the whole router. Only the presence of the auth
/// cookie is checked; its value is never inspected.
pub async fn access_gate(
    State(policy): State<GatePolicy>,
    request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path();

    if is_excluded(path) {
        return next.run(request).await;
    }

    let has_auth_cookie = CookieJar::from_headers(request.headers())
        .get(AUTH_COOKIE)
        .is_some();

    match policy.decide(path, has_auth_cookie) {
        Decision::Continue => next.run(request).await,
        Decision::RedirectToLogin => {
            tracing::debug!(path = request.uri().path(), "no auth cookie; redirecting to login");
            Redirect::temporary(LOGIN_PATH).into_response()
        }
    }
}
