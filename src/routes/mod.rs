//! Route modules for the frases server
//!
//! - frases: welcome and random-quote endpoints

pub mod frases;

use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::quotes::QuoteList;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Loaded quote list, read-only for the process lifetime
    pub quotes: Arc<QuoteList>,
}

impl AppState {
    /// Create a new AppState
    pub fn new(quotes: Arc<QuoteList>) -> Self {
        Self { quotes }
    }
}

/// Build the main application router
pub fn build_router(quotes: Arc<QuoteList>) -> Router {
    let state = AppState::new(quotes);

    Router::new()
        .merge(frases::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
