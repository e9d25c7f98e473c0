mod common;

use axum::http::{HeaderValue, StatusCode, header::COOKIE};
use common::{
    StubExchange, console_server, login_result, set_cookie_header, unused_exchange,
};

#[tokio::test]
async fn test_dashboard_without_session_redirects_to_login() {
    let server = console_server(unused_exchange());

    let response = server.get("/dashboard").await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.headers().get("location").unwrap(), "/login");
    assert!(!response.text().contains("Welcome to the Console"));
}

#[tokio::test]
async fn test_dashboard_with_empty_cookie_redirects() {
    let server = console_server(unused_exchange());

    let response = server
        .get("/dashboard")
        .add_header(COOKIE, HeaderValue::from_static("console_token="))
        .await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.headers().get("location").unwrap(), "/login");
}

#[tokio::test]
async fn test_dashboard_ignores_unrelated_cookies() {
    let server = console_server(unused_exchange());

    let response = server
        .get("/dashboard")
        .add_header(COOKIE, HeaderValue::from_static("theme=dark; auth_token=x"))
        .await;

    response.assert_status(StatusCode::SEE_OTHER);
}

#[tokio::test]
async fn test_dashboard_with_session_renders_shell() {
    let server = console_server(unused_exchange());

    let response = server
        .get("/dashboard")
        .add_header(COOKIE, HeaderValue::from_static("theme=dark; console_token=tok"))
        .await;

    response.assert_status_ok();
    assert!(response.headers().get("location").is_none());

    let body = response.text();
    assert!(body.contains("<title>Console</title>"));
    assert!(body.contains("Welcome to the Console"));
    assert!(body.contains("Users"));
    assert!(body.contains("Settings"));
    assert!(body.contains("Analytics"));
    assert!(body.contains("action=\"/logout\""));
    assert!(body.contains("Logout"));
}

#[tokio::test]
async fn test_root_redirects_to_dashboard() {
    let server = console_server(unused_exchange());

    let response = server.get("/").await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.headers().get("location").unwrap(), "/dashboard");
}

#[tokio::test]
async fn test_logout_clears_cookie_and_redirects() {
    let server = console_server(unused_exchange());

    let response = server
        .post("/logout")
        .add_header(COOKIE, HeaderValue::from_static("console_token=tok"))
        .await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.headers().get("location").unwrap(), "/login");

    let removal = set_cookie_header(&response).expect("removal cookie");
    assert!(removal.starts_with("console_token=;"));
    assert!(removal.contains("Max-Age=0"));
}

#[tokio::test]
async fn test_logout_via_get() {
    let server = console_server(unused_exchange());

    let response = server.get("/logout").await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.headers().get("location").unwrap(), "/login");
}

#[tokio::test]
async fn test_login_dashboard_logout_flow() {
    let exchange =
        StubExchange::returning(Ok(login_result(Some("LOGIN_SUCCESS"), Some("tok_flow"))));
    let server = console_server(exchange.clone());

    let callback = server
        .get("/auth/callback")
        .add_query_param("code", "abc")
        .await;
    callback.assert_status(StatusCode::SEE_OTHER);

    let set_cookie = set_cookie_header(&callback).unwrap();
    let session = set_cookie.split(';').next().unwrap().to_string();
    assert_eq!(session, "console_token=tok_flow");

    let dashboard = server
        .get("/dashboard")
        .add_header(COOKIE, HeaderValue::from_str(&session).unwrap())
        .await;
    dashboard.assert_status_ok();

    let logout = server
        .post("/logout")
        .add_header(COOKIE, HeaderValue::from_str(&session).unwrap())
        .await;
    logout.assert_status(StatusCode::SEE_OTHER);

    let cleared = set_cookie_header(&logout).unwrap();
    let cleared_session = cleared.split(';').next().unwrap().to_string();

    let after = server
        .get("/dashboard")
        .add_header(COOKIE, HeaderValue::from_str(&cleared_session).unwrap())
        .await;
    after.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(after.headers().get("location").unwrap(), "/login");

    assert_eq!(exchange.calls(), 1);
}
