#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use axum_test::TestServer;
use sqlx::PgPool;
use std::sync::Arc;
use tower_http::normalize_path::NormalizePath;
use tracked_links::AppError;
use tracked_links::domain::entities::{ClickEvent, Link, NewLink};
use tracked_links::domain::repositories::{ClickLogRepository, LinkRepository};
use tracked_links::infrastructure::persistence::{
    MemoryClickLogRepository, MemoryLinkRepository, PgClickLogRepository, PgLinkRepository,
};
use tracked_links::routes::{app_router, router};
use tracked_links::state::AppState;

pub const BASE_URL: &str = "http://localhost:3000";

/// Test server over in-process repositories, with handles to inspect them.
pub struct TestApp {
    pub server: TestServer,
    pub links: Arc<MemoryLinkRepository>,
    pub click_log: Arc<MemoryClickLogRepository>,
}

impl TestApp {
    /// Creates a link through the API and returns its short identifier.
    pub async fn shorten(&self, original_url: &str, user_name: &str, link_type: &str) -> String {
        let response = self
            .server
            .post("/shorten")
            .json(&serde_json::json!({
                "originalUrl": original_url,
                "userName": user_name,
                "linkType": link_type
            }))
            .await;

        response.assert_status_ok();

        let json = response.json::<serde_json::Value>();
        let short_url = json["shortUrl"].as_str().unwrap();

        short_url
            .strip_prefix(&format!("{}/", BASE_URL))
            .unwrap()
            .to_string()
    }
}

pub fn spawn_app() -> TestApp {
    build_app(true)
}

pub fn spawn_app_without_click_log() -> TestApp {
    build_app(false)
}

fn build_app(click_log_enabled: bool) -> TestApp {
    let links = Arc::new(MemoryLinkRepository::new());
    let click_log = Arc::new(MemoryClickLogRepository::new());

    let click_log_sink = if click_log_enabled {
        Some(click_log.clone() as Arc<dyn ClickLogRepository>)
    } else {
        None
    };

    let state = AppState::new(
        links.clone() as Arc<dyn LinkRepository>,
        click_log_sink,
        BASE_URL,
    );

    TestApp {
        server: TestServer::new(router(state)).unwrap(),
        links,
        click_log,
    }
}

/// The router as served, with CORS and path normalization, over in-process
/// repositories.
pub fn spawn_service() -> (NormalizePath<Router>, Arc<MemoryLinkRepository>) {
    let links = Arc::new(MemoryLinkRepository::new());
    let click_log: Arc<dyn ClickLogRepository> = Arc::new(MemoryClickLogRepository::new());

    let state = AppState::new(
        links.clone() as Arc<dyn LinkRepository>,
        Some(click_log),
        BASE_URL,
    );

    (app_router(state), links)
}

/// Test server whose link store rejects every operation.
pub fn spawn_app_with_broken_store() -> TestServer {
    let state = AppState::new(Arc::new(UnavailableLinkRepository), None, BASE_URL);

    TestServer::new(router(state)).unwrap()
}

/// Link store that answers every call with an internal error.
pub struct UnavailableLinkRepository;

#[async_trait]
impl LinkRepository for UnavailableLinkRepository {
    async fn create(&self, _new_link: NewLink) -> Result<Link, AppError> {
        Err(AppError::internal("store unavailable"))
    }

    async fn find_by_short_url(&self, _short_url: &str) -> Result<Option<Link>, AppError> {
        Err(AppError::internal("store unavailable"))
    }

    async fn append_click(&self, _short_url: &str, _click: &ClickEvent) -> Result<bool, AppError> {
        Err(AppError::internal("store unavailable"))
    }

    async fn ping(&self) -> Result<(), AppError> {
        Err(AppError::internal("store unavailable"))
    }
}

pub fn pg_repositories(pool: PgPool) -> (PgLinkRepository, PgClickLogRepository) {
    let pool = Arc::new(pool);

    (
        PgLinkRepository::new(pool.clone()),
        PgClickLogRepository::new(pool),
    )
}

pub fn new_link(short_url: &str, original_url: &str) -> NewLink {
    NewLink {
        short_url: short_url.to_string(),
        original_url: original_url.to_string(),
        user_name: "alice".to_string(),
        link_type: "promo".to_string(),
    }
}
