use std::sync::Arc;

use axum::{
    routing::{delete, get, post},
    Router,
};
use tokio::sync::Mutex;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod data;
pub mod html;
pub mod routes;

use config::Config;
use data::{Catalog, Sessions};

#[derive(Clone)]
pub struct AppState {
    catalog: Arc<Catalog>,
    sessions: Arc<Mutex<Sessions>>,
    reject_blank_comments: bool,
}

impl AppState {
    pub fn new(catalog: Catalog, config: &Config) -> Self {
        AppState {
            catalog: Arc::new(catalog),
            sessions: Arc::new(Mutex::new(Sessions::new(config.max_sessions))),
            reject_blank_comments: config.reject_blank_comments,
        }
    }
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::pages::home))
        .route("/blog", get(routes::pages::blog))
        .route("/blog/:slug", get(routes::pages::post))
        .route("/script/:file", get(routes::files::script))
        .route("/session/:session", delete(routes::comments::close))
        .route(
            "/session/:session/comments",
            get(routes::comments::section).post(routes::comments::add),
        )
        .route(
            "/session/:session/comments/:comment",
            delete(routes::comments::delete),
        )
        .route(
            "/session/:session/comments/:comment/like",
            post(routes::comments::like),
        )
        .route(
            "/session/:session/comments/:comment/replies",
            post(routes::comments::reply),
        )
        .route("/style/:file", get(routes::files::style))
        .fallback(routes::fallback)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
