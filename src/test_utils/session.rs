use axum::{http::header::SET_COOKIE, response::IntoResponse};
use axum_extra::extract::{
    PrivateCookieJar,
    cookie::{Cookie, Key},
};

use crate::session::{Session, set_session_cookie};

/// The encrypted session cookie for `session`, as a client would send it back.
#[track_caller]
pub(crate) fn session_cookie(key: &Key, session: &Session) -> Cookie<'static> {
    let jar = set_session_cookie(PrivateCookieJar::new(key.clone()), session)
        .expect("Could not set session cookie");
    let response = jar.into_response();
    let header = response
        .headers()
        .get(SET_COOKIE)
        .expect("set-cookie header missing")
        .to_str()
        .expect("Could not convert to str")
        .to_owned();

    Cookie::parse(header).expect("Could not parse session cookie")
}
