pub mod curl;
pub mod dig;
pub mod health;
pub mod pages;

use crate::config;
use crate::curl::{CurlService, ReqwestExchange};
use crate::dig::{DigService, ResolverExchange};
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::services::ServeDir;

#[derive(Clone)]
pub struct AppState {
    pub dig: DigService,
    pub curl: CurlService,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(pages::index_page))
        .route("/dig", post(dig::dig_api))
        .route("/curl", post(curl::curl_api))
        .route("/partials/dig-results", post(dig::dig_partial))
        .route("/partials/curl-results", post(curl::curl_partial))
        .route("/health", get(health::health))
        .nest_service("/web", ServeDir::new(config::web_dir()))
        .with_state(state)
}

pub fn default_state() -> AppState {
    AppState {
        dig: DigService::new(Arc::new(ResolverExchange)),
        curl: CurlService::new(Arc::new(ReqwestExchange)),
    }
}
