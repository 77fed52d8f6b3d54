#![allow(missing_docs)]

pub(crate) mod html;
pub(crate) mod http;
pub(crate) mod session;

pub(crate) use html::{
    assert_valid_html, must_get_by_test_id, must_get_text, parse_html_document,
    parse_html_fragment,
};
pub(crate) use http::{assert_content_type, assert_hx_redirect, assert_status_ok};
pub(crate) use session::session_cookie;
