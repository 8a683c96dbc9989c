//! HTTP server for the blog pages
//!
//! ## Routes
//!
//! - `GET /` - Redirect to the post list
//! - `GET /blog/` - Post list
//! - `GET /blog/{id}/` - Post detail (404 for unknown or non-canonical ids)
//!
//! The store handed to [`AppState`] is consulted on every request; with a
//! file-backed store, posts written by `jammlog new` show up immediately.

use anyhow::Result;
use axum::{
    extract::State,
    http::{Request, Uri},
    response::{Html, Redirect},
    routing::get,
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::Level;

use crate::error::BlogError;
use crate::helpers::{BLOG_PATH, POST_ROUTE};
use crate::store::PostStore;
use crate::views::{Route, Views};
use crate::Jammlog;

/// Server state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    pub views: Arc<Views>,
    pub store: PostStore,
}

impl AppState {
    pub fn new(views: Views, store: PostStore) -> Self {
        Self {
            views: Arc::new(views),
            store,
        }
    }
}

/// Build the router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route(BLOG_PATH, get(post_list))
        .route(POST_ROUTE, get(post_detail))
        .with_state(state)
}

/// Start the server
pub async fn start(app: &Jammlog, ip: &str, port: u16) -> Result<()> {
    let store = app.open_store()?;
    let views = Views::new(&app.config.language)?;
    tracing::info!("Serving {} posts from {:?}", store.count()?, app.posts_path);

    let app = router(AppState::new(views, store)).layer(
        TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
            tracing::span!(
                Level::INFO,
                "http_request",
                method = %request.method(),
                path = %request.uri().path(),
            )
        }),
    );

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    println!("Server running at http://{}:{}{}", ip, port, BLOG_PATH);
    println!("Press Ctrl+C to stop.");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn home() -> Redirect {
    Redirect::to(BLOG_PATH)
}

async fn post_list(State(state): State<AppState>) -> Result<Html<String>, BlogError> {
    let page = state.views.dispatch(Route::List, &state.store)?;
    Ok(Html(page))
}

// Only the exact path `post_url` produces is served, so "/blog/01/" is not
// an alias of "/blog/1/".
async fn post_detail(State(state): State<AppState>, uri: Uri) -> Result<Html<String>, BlogError> {
    let route = Route::parse(uri.path())
        .ok_or_else(|| BlogError::PageNotFound(uri.path().to_string()))?;
    let page = state.views.dispatch(route, &state.store)?;
    Ok(Html(page))
}
