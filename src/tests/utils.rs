use crate::config::Config;
use crate::notify::Toast;
use crate::router::handle;
use crate::state::AppState;
use astra::{Body, Response};
use http::{Method, Request};
use std::io::Read;

pub const ADMIN_EMAIL: &str = "admin@rewear.app";

/// Fresh app state with default settings and the seeded moderation queue.
pub fn test_state() -> AppState {
    AppState::new(Config::default())
}

pub fn get(uri: &str, session: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(Method::GET).uri(uri);
    if let Some(token) = session {
        builder = builder.header("Cookie", format!("session={token}"));
    }
    builder.body(Body::empty()).unwrap()
}

pub fn post_form(uri: &str, session: Option<&str>, form: &[(&str, &str)]) -> Request<Body> {
    let body = url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(form)
        .finish();

    let mut builder = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "application/x-www-form-urlencoded");
    if let Some(token) = session {
        builder = builder.header("Cookie", format!("session={token}"));
    }
    builder.body(Body::from(body)).unwrap()
}

pub const BOUNDARY: &str = "----rewearTestBoundary";

/// One multipart part: a text field, or a file when `filename` is set.
pub struct Part<'a> {
    pub name: &'a str,
    pub filename: Option<&'a str>,
    pub content_type: &'a str,
    pub data: &'a [u8],
}

impl<'a> Part<'a> {
    pub fn text(name: &'a str, value: &'a str) -> Self {
        Self {
            name,
            filename: None,
            content_type: "text/plain",
            data: value.as_bytes(),
        }
    }

    pub fn image(filename: &'a str, data: &'a [u8]) -> Self {
        Self {
            name: "images",
            filename: Some(filename),
            content_type: "image/png",
            data,
        }
    }
}

pub fn post_multipart(uri: &str, session: Option<&str>, parts: &[Part<'_>]) -> Request<Body> {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        match part.filename {
            Some(filename) => body.extend_from_slice(
                format!(
                    "Content-Disposition: form-data; name=\"{}\"; filename=\"{filename}\"\r\n\
                     Content-Type: {}\r\n\r\n",
                    part.name, part.content_type
                )
                .as_bytes(),
            ),
            None => body.extend_from_slice(
                format!("Content-Disposition: form-data; name=\"{}\"\r\n\r\n", part.name)
                    .as_bytes(),
            ),
        }
        body.extend_from_slice(part.data);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

    let mut builder = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(
            "Content-Type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        );
    if let Some(token) = session {
        builder = builder.header("Cookie", format!("session={token}"));
    }
    builder.body(Body::from(body)).unwrap()
}

/// Sign in through the login route and return the session token.
pub fn sign_in(state: &AppState, email: &str, name: &str) -> String {
    let resp = handle(
        post_form("/auth/login", None, &[("email", email), ("name", name)]),
        state,
    )
    .expect("login failed");
    assert_eq!(resp.status(), 303);

    cookie_value(&resp, "session").expect("no session cookie set")
}

pub fn sign_in_admin(state: &AppState) -> String {
    sign_in(state, ADMIN_EMAIL, "Admin")
}

/// Value of a cookie set by `resp`.
pub fn cookie_value(resp: &Response, name: &str) -> Option<String> {
    resp.headers()
        .get_all("Set-Cookie")
        .iter()
        .filter_map(|v| v.to_str().ok())
        .filter_map(|v| v.split(';').next()?.split_once('='))
        .find(|(k, _)| *k == name)
        .map(|(_, v)| v.to_string())
}

/// The toast a redirect carries to the next page.
pub fn flash(resp: &Response) -> Option<Toast> {
    Toast::from_cookie_value(&cookie_value(resp, "flash")?)
}

pub fn location(resp: &Response) -> Option<&str> {
    resp.headers().get("Location")?.to_str().ok()
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body()
        .reader()
        .read_to_string(&mut body)
        .unwrap();
    body
}
