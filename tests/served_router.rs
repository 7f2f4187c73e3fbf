//! Tests through the router as it is served: path normalization, CORS and
//! peer address resolution.

mod common;

use axum::body::{Body, to_bytes};
use axum::extract::ConnectInfo;
use axum::http::{Method, Request, StatusCode, header};
use axum::response::Response;
use std::net::SocketAddr;
use tower::ServiceExt;
use tracked_links::domain::repositories::LinkRepository;

const SHORT_URL: &str = "alice-promo-Zk3x_9QbLw2a";

async fn body_json(response: Response) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_stats_with_trailing_slash() {
    let (app, links) = common::spawn_service();
    links
        .create(common::new_link(SHORT_URL, "https://example.com"))
        .await
        .unwrap();

    let response = app
        .oneshot(get(&format!("/stats/{}/", SHORT_URL)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["shortUrl"], SHORT_URL);
    assert_eq!(json["clickCount"], 0);
}

#[tokio::test]
async fn test_redirect_with_trailing_slash() {
    let (app, links) = common::spawn_service();
    links
        .create(common::new_link(SHORT_URL, "https://example.com"))
        .await
        .unwrap();

    let response = app.oneshot(get(&format!("/{}/", SHORT_URL))).await.unwrap();

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(response.headers()[header::LOCATION], "https://example.com");
}

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let (app, links) = common::spawn_service();
    links
        .create(common::new_link(SHORT_URL, "https://example.com"))
        .await
        .unwrap();

    let request = Request::builder()
        .uri(format!("/stats/{}", SHORT_URL))
        .header(header::ORIGIN, "https://dashboard.example.org")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
}

#[tokio::test]
async fn test_cors_preflight_for_shorten() {
    let (app, _) = common::spawn_service();

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/shorten")
        .header(header::ORIGIN, "https://dashboard.example.org")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
}

#[tokio::test]
async fn test_redirect_records_peer_address() {
    let (app, links) = common::spawn_service();
    links
        .create(common::new_link(SHORT_URL, "https://example.com"))
        .await
        .unwrap();

    let mut request = get(&format!("/{}", SHORT_URL));
    request
        .extensions_mut()
        .insert(ConnectInfo(SocketAddr::from(([192, 0, 2, 10], 51000))));

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::FOUND);

    let link = links.find_by_short_url(SHORT_URL).await.unwrap().unwrap();
    assert_eq!(link.click_count, 1);
    assert_eq!(link.clicks[0].ip.as_deref(), Some("192.0.2.10"));
}

#[tokio::test]
async fn test_forwarded_for_takes_precedence_over_peer_address() {
    let (app, links) = common::spawn_service();
    links
        .create(common::new_link(SHORT_URL, "https://example.com"))
        .await
        .unwrap();

    let mut request = Request::builder()
        .uri(format!("/{}", SHORT_URL))
        .header("x-forwarded-for", "203.0.113.50, 10.0.0.1")
        .body(Body::empty())
        .unwrap();
    request
        .extensions_mut()
        .insert(ConnectInfo(SocketAddr::from(([192, 0, 2, 10], 51000))));

    app.oneshot(request).await.unwrap();

    let link = links.find_by_short_url(SHORT_URL).await.unwrap().unwrap();
    assert_eq!(link.clicks[0].ip.as_deref(), Some("203.0.113.50"));
}
