//! The connected user's session, carried in a private cookie.
//!
//! The session is established by the log-in flow, which lives outside this
//! crate. Pages only read it, via [session_guard], and receive it as an
//! explicit `Extension<Session>`.

use axum::{
    extract::{FromRef, FromRequestParts, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{Html, IntoResponse, Response},
};
use axum_extra::extract::{
    PrivateCookieJar,
    cookie::{Cookie, Key, SameSite},
};
use serde::{Deserialize, Serialize};

use crate::{AppState, Error, html::error_view};

/// The name of the private cookie holding the session as JSON.
pub(crate) const COOKIE_USER: &str = "user";

/// The role of the connected user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserType {
    /// An employee who submits bills.
    Employee,
    /// An administrator who reviews bills.
    Administrator,
}

/// The connected user, e.g. `{"type": "Employee", "email": "a@a"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// The role of the user.
    #[serde(rename = "type")]
    pub user_type: UserType,
    /// The email the user logged in with.
    pub email: String,
}

impl Session {
    /// Whether the user is an employee.
    pub fn is_employee(&self) -> bool {
        self.user_type == UserType::Employee
    }
}

/// Add the session cookie for `session` to `jar`.
///
/// # Errors
/// Returns an [Error::JSONSerializationError] if the session could not be serialized.
pub fn set_session_cookie(
    jar: PrivateCookieJar,
    session: &Session,
) -> Result<PrivateCookieJar, Error> {
    let value = serde_json::to_string(session)
        .map_err(|error| Error::JSONSerializationError(error.to_string()))?;

    Ok(jar.add(
        Cookie::build((COOKIE_USER, value))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Strict)
            .secure(true),
    ))
}

/// Read the session from the private cookie in `jar`.
///
/// # Errors
/// Returns an [Error::InvalidSession] if the cookie is missing or does not hold a session.
pub(crate) fn get_session_from_cookies(jar: &PrivateCookieJar) -> Result<Session, Error> {
    let cookie = jar.get(COOKIE_USER).ok_or(Error::InvalidSession)?;

    serde_json::from_str(cookie.value_trimmed())
        .inspect_err(|error| tracing::warn!("could not parse session cookie: {error}"))
        .map_err(|_| Error::InvalidSession)
}

/// The state needed for the session middleware
#[derive(Clone)]
pub struct SessionState {
    /// The key to be used for decrypting private cookies.
    pub cookie_key: Key,
}

impl FromRef<AppState> for SessionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            cookie_key: state.cookie_key.clone(),
        }
    }
}

// this impl tells `PrivateCookieJar` how to access the key from our state
impl FromRef<SessionState> for Key {
    fn from_ref(state: &SessionState) -> Self {
        state.cookie_key.clone()
    }
}

/// Middleware function that reads the session cookie.
///
/// The session is placed into the request and the request executed normally
/// if the cookie holds a valid session, otherwise the 401 page is returned.
///
/// **Note**: Route handlers can use the function argument `Extension(session): Extension<Session>` to receive the session.
pub async fn session_guard(
    State(state): State<SessionState>,
    request: Request,
    next: Next,
) -> Response {
    let (mut parts, body) = request.into_parts();
    let jar = match PrivateCookieJar::<Key>::from_request_parts(&mut parts, &state).await {
        Ok(jar) => jar,
        Err(error) => {
            tracing::error!("Error getting cookie jar: {error:?}.");
            return get_401_unauthorized_response();
        }
    };

    let session = match get_session_from_cookies(&jar) {
        Ok(session) => session,
        Err(error) => {
            tracing::debug!("rejecting request to {}: {error}", parts.uri.path());
            return error.into_response();
        }
    };

    parts.extensions.insert(session);
    next.run(Request::from_parts(parts, body)).await
}

pub(crate) fn get_401_unauthorized_response() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Html(
            error_view(
                "Non connecté",
                "401",
                "Vous n'êtes pas connecté.",
                "Connectez-vous depuis la page de connexion puis réessayez.",
            )
            .into_string(),
        ),
    )
        .into_response()
}
