use axum::{
    Router,
    routing::{get, patch, post, put},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::handlers::{
    AppState, borrow_book, create_book, delete_book, edit_draft, get_book, get_library,
    get_stats, list_books, list_categories, list_events, return_book, submit_draft,
    toggle_add_form, update_filter,
};

/// Creates the API router with all catalog endpoints
///
/// Command endpoints (Write operations):
/// - POST /books - Add a book
/// - POST /books/:id/borrow - Borrow a book
/// - POST /books/:id/return - Return a book
/// - DELETE /books/:id?confirm=true - Delete a book
/// - PUT /filter - Update search/category/status filters
/// - PATCH /draft, POST /draft/toggle, POST /draft/submit - Add-book form
///
/// Query endpoints (Read operations):
/// - GET /library - Whole view (stats, categories, filtered books, form)
/// - GET /books, GET /books/:id, GET /categories, GET /stats, GET /events
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check endpoint
        .route("/health", get(health_check))
        .route("/library", get(get_library))
        .route("/books", get(list_books).post(create_book))
        .route("/books/:id", get(get_book).delete(delete_book))
        .route("/books/:id/borrow", post(borrow_book))
        .route("/books/:id/return", post(return_book))
        .route("/categories", get(list_categories))
        .route("/stats", get(get_stats))
        .route("/filter", put(update_filter))
        .route("/draft", patch(edit_draft))
        .route("/draft/toggle", post(toggle_add_form))
        .route("/draft/submit", post(submit_draft))
        .route("/events", get(list_events))
        // Add tracing middleware
        .layer(TraceLayer::new_for_http())
        // Add application state
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
