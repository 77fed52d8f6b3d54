use axum::{
    body::Body,
    http::{StatusCode, header::CONTENT_TYPE},
    response::Response,
};

#[track_caller]
pub(crate) fn assert_status_ok(response: &Response<Body>) {
    assert_eq!(response.status(), StatusCode::OK);
}

/// Assert that the `Content-Type` header of `response` is exactly `content_type`.
#[track_caller]
pub(crate) fn assert_content_type(response: &Response<Body>, content_type: &str) {
    let got = response.headers().get(CONTENT_TYPE);

    assert_eq!(
        got.and_then(|value| value.to_str().ok()),
        Some(content_type),
        "unexpected content type"
    );
}

/// Assert that `response` tells HTMX to change page to `route`.
#[track_caller]
pub(crate) fn assert_hx_redirect(response: &Response<Body>, route: &str) {
    let got = response.headers().get("hx-redirect");

    assert_eq!(
        got.and_then(|value| value.to_str().ok()),
        Some(route),
        "want HX-Redirect to {route}"
    );
}
