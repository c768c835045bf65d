use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use chrono::NaiveDate;
use rusty_library_catalog::api::handlers::AppState;
use rusty_library_catalog::api::router::create_router;
use rusty_library_catalog::api::types::*;
use rusty_library_catalog::application::library::LibraryController;
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;

// ============================================================================
// E2Eテスト用のヘルパー関数
// ============================================================================

/// E2Eテストで使う「本日」
fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 10, 16).unwrap()
}

/// 初期蔵書を持つアプリケーションのセットアップ
///
/// 日付は固定し、実行時刻に左右されないようにする。
fn setup_e2e_app() -> axum::Router {
    let app_state = Arc::new(AppState::with_clock(LibraryController::seeded(), today));
    create_router(app_state)
}

async fn send(app: &axum::Router, method: &str, uri: &str, body: Option<Value>) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    app.clone().oneshot(request).await.unwrap()
}

async fn read_json<T: serde::de::DeserializeOwned>(response: Response) -> T {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

fn ids(books: &[BookResponse]) -> Vec<u64> {
    books.iter().map(|b| b.id).collect()
}

// ============================================================================
// E2Eテスト: 参照系
// ============================================================================

#[tokio::test]
async fn test_e2e_health_check() {
    let app = setup_e2e_app();

    let response = send(&app, "GET", "/health", None).await;

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_e2e_initial_library_view() {
    let app = setup_e2e_app();

    let response = send(&app, "GET", "/library", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let library: LibraryResponse = read_json(response).await;
    assert_eq!(
        library.stats,
        StatsResponse {
            total: 8,
            available: 6,
            borrowed: 2,
        }
    );
    assert_eq!(
        library.categories,
        vec!["all", "Fiction", "Science", "History", "Biography"]
    );
    assert_eq!(ids(&library.books), (1..=8).collect::<Vec<_>>());
    assert!(!library.no_matches);
    assert!(!library.catalog_empty);
    assert!(!library.draft.open);
    assert_eq!(library.draft.category, "Fiction");
}

#[tokio::test]
async fn test_e2e_get_borrowed_book_includes_loan_details() {
    let app = setup_e2e_app();

    let response = send(&app, "GET", "/books/2", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let book: BookResponse = read_json(response).await;
    assert_eq!(book.status, "borrowed");
    assert_eq!(book.borrower.as_deref(), Some("John Doe"));
    assert_eq!(book.due_date.map(|d| d.to_string()).as_deref(), Some("2025-11-01"));
}

#[tokio::test]
async fn test_e2e_non_numeric_id_returns_json_error() {
    let app = setup_e2e_app();

    let response = send(&app, "GET", "/books/abc", None).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let error: ErrorResponse = read_json(response).await;
    assert_eq!(error.error, "INVALID_PATH");
    assert!(!error.message.is_empty());
}

#[tokio::test]
async fn test_e2e_get_unknown_book_returns_404() {
    let app = setup_e2e_app();

    let response = send(&app, "GET", "/books/42", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let error: ErrorResponse = read_json(response).await;
    assert_eq!(error.error, "BOOK_NOT_FOUND");
}

// ============================================================================
// E2Eテスト: 絞り込み
// ============================================================================

#[tokio::test]
async fn test_e2e_status_filter_borrowed() {
    let app = setup_e2e_app();

    let response = send(&app, "PUT", "/filter", Some(json!({ "status": "borrowed" }))).await;
    assert_eq!(response.status(), StatusCode::OK);

    let filter: FilterResponse = read_json(response).await;
    assert_eq!(filter.status, "borrowed");
    assert_eq!(filter.category, "all");

    let books: Vec<BookResponse> = read_json(send(&app, "GET", "/books", None).await).await;
    assert_eq!(ids(&books), vec![2, 7]);
}

#[tokio::test]
async fn test_e2e_query_filter_without_matches() {
    let app = setup_e2e_app();

    send(&app, "PUT", "/filter", Some(json!({ "query": "tolkien" }))).await;

    let library: LibraryResponse = read_json(send(&app, "GET", "/library", None).await).await;
    assert!(library.books.is_empty());
    assert!(library.no_matches);
    // 集計は絞り込みの影響を受けない
    assert_eq!(library.stats.total, 8);
}

#[tokio::test]
async fn test_e2e_invalid_status_filter_changes_nothing() {
    let app = setup_e2e_app();

    let response = send(
        &app,
        "PUT",
        "/filter",
        Some(json!({ "query": "orwell", "status": "lost" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let error: ErrorResponse = read_json(response).await;
    assert_eq!(error.error, "INVALID_FILTER");

    let library: LibraryResponse = read_json(send(&app, "GET", "/library", None).await).await;
    assert_eq!(library.filter.query, "");
    assert_eq!(library.books.len(), 8);
}

// ============================================================================
// E2Eテスト: 追加
// ============================================================================

#[tokio::test]
async fn test_e2e_add_book() {
    let app = setup_e2e_app();

    let response = send(
        &app,
        "POST",
        "/books",
        Some(json!({
            "title": "Dune",
            "author": "Frank Herbert",
            "isbn": "978-0441013593",
            "category": "Science",
        })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let created: BookCreatedResponse = read_json(response).await;
    assert_eq!(created.id, 9);
    assert_eq!(created.book.status, "available");
    assert_eq!(created.book.borrower, None);

    let stats: StatsResponse = read_json(send(&app, "GET", "/stats", None).await).await;
    assert_eq!(stats.total, 9);
    assert_eq!(stats.available, 7);
}

#[tokio::test]
async fn test_e2e_add_book_defaults_to_fiction() {
    let app = setup_e2e_app();

    let response = send(
        &app,
        "POST",
        "/books",
        Some(json!({
            "title": "Beloved",
            "author": "Toni Morrison",
            "isbn": "978-1400033416",
        })),
    )
    .await;

    let created: BookCreatedResponse = read_json(response).await;
    assert_eq!(created.book.category, "Fiction");
}

#[tokio::test]
async fn test_e2e_add_book_without_author_is_rejected() {
    let app = setup_e2e_app();

    let response = send(
        &app,
        "POST",
        "/books",
        Some(json!({ "title": "Dune", "isbn": "978-0441013593" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let error: ErrorResponse = read_json(response).await;
    assert_eq!(error.error, "MISSING_FIELD");

    let stats: StatsResponse = read_json(send(&app, "GET", "/stats", None).await).await;
    assert_eq!(stats.total, 8);
}

#[tokio::test]
async fn test_e2e_add_book_without_json_body_returns_json_error() {
    let app = setup_e2e_app();

    let response = send(&app, "POST", "/books", None).await;
    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);

    let error: ErrorResponse = read_json(response).await;
    assert_eq!(error.error, "INVALID_BODY");
}

#[tokio::test]
async fn test_e2e_add_form_flow() {
    let app = setup_e2e_app();

    let draft: DraftResponse = read_json(send(&app, "POST", "/draft/toggle", None).await).await;
    assert!(draft.open);

    for (field, value) in [
        ("title", "The Pragmatic Programmer"),
        ("author", "Andrew Hunt"),
        ("isbn", "978-0201616224"),
        ("category", "Technology"),
    ] {
        let response = send(
            &app,
            "PATCH",
            "/draft",
            Some(json!({ "field": field, "value": value })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = send(&app, "POST", "/draft/submit", None).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created: BookCreatedResponse = read_json(response).await;
    assert_eq!(created.id, 9);
    assert_eq!(created.book.category, "Technology");

    let library: LibraryResponse = read_json(send(&app, "GET", "/library", None).await).await;
    assert!(!library.draft.open);
    assert_eq!(library.draft.title, "");
    assert_eq!(library.draft.category, "Fiction");
    assert_eq!(library.categories.last().map(String::as_str), Some("Technology"));
}

#[tokio::test]
async fn test_e2e_unknown_draft_field_is_rejected() {
    let app = setup_e2e_app();

    let response = send(
        &app,
        "PATCH",
        "/draft",
        Some(json!({ "field": "publisher", "value": "Penguin" })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error: ErrorResponse = read_json(response).await;
    assert_eq!(error.error, "INVALID_DRAFT_FIELD");
}

// ============================================================================
// E2Eテスト: 貸出・返却
// ============================================================================

#[tokio::test]
async fn test_e2e_borrow_and_return_flow() {
    let app = setup_e2e_app();

    // Step 1: 貸出（POST /books/1/borrow）
    let response = send(
        &app,
        "POST",
        "/books/1/borrow",
        Some(json!({ "borrower": "Alice" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let book: BookResponse = read_json(response).await;
    assert_eq!(book.status, "borrowed");
    assert_eq!(book.borrower.as_deref(), Some("Alice"));
    assert_eq!(book.due_date, NaiveDate::from_ymd_opt(2025, 10, 30));

    // Step 2: 貸出中の書籍は再度貸し出せない
    let response = send(
        &app,
        "POST",
        "/books/1/borrow",
        Some(json!({ "borrower": "Bob" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let error: ErrorResponse = read_json(response).await;
    assert_eq!(error.error, "BOOK_NOT_AVAILABLE");

    // Step 3: 返却（POST /books/1/return）
    let response = send(&app, "POST", "/books/1/return", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let book: BookResponse = read_json(response).await;
    assert_eq!(book.status, "available");
    assert_eq!(book.borrower, None);
    assert_eq!(book.due_date, None);

    // Step 4: ジャーナルには貸出と返却のみが記録される
    let events: Vec<Value> = read_json(send(&app, "GET", "/events", None).await).await;
    let types: Vec<&str> = events.iter().filter_map(|e| e["type"].as_str()).collect();
    assert_eq!(types, vec!["BookBorrowed", "BookReturned"]);
}

#[tokio::test]
async fn test_e2e_borrow_without_borrower_is_rejected() {
    let app = setup_e2e_app();

    // ボディなし・借り手なし・空文字はいずれもキャンセル扱い
    for body in [None, Some(json!({})), Some(json!({ "borrower": "" }))] {
        let response = send(&app, "POST", "/books/3/borrow", body).await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let error: ErrorResponse = read_json(response).await;
        assert_eq!(error.error, "BORROWER_NOT_PROVIDED");
    }

    let book: BookResponse = read_json(send(&app, "GET", "/books/3", None).await).await;
    assert_eq!(book.status, "available");
}

#[tokio::test]
async fn test_e2e_return_book_2() {
    let app = setup_e2e_app();

    let response = send(&app, "POST", "/books/2/return", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let stats: StatsResponse = read_json(send(&app, "GET", "/stats", None).await).await;
    assert_eq!(stats.available, 7);
    assert_eq!(stats.borrowed, 1);
}

// ============================================================================
// E2Eテスト: 削除
// ============================================================================

#[tokio::test]
async fn test_e2e_delete_requires_confirmation() {
    let app = setup_e2e_app();

    let response = send(&app, "DELETE", "/books/3", None).await;
    assert_eq!(response.status(), StatusCode::PRECONDITION_REQUIRED);
    let error: ErrorResponse = read_json(response).await;
    assert_eq!(error.error, "DELETION_NOT_CONFIRMED");

    let response = send(&app, "DELETE", "/books/3?confirm=false", None).await;
    assert_eq!(response.status(), StatusCode::PRECONDITION_REQUIRED);

    let response = send(&app, "DELETE", "/books/3?confirm=true", None).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = send(&app, "GET", "/books/3", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let stats: StatsResponse = read_json(send(&app, "GET", "/stats", None).await).await;
    assert_eq!(stats.total, 7);
}

#[tokio::test]
async fn test_e2e_delete_unknown_book_returns_404() {
    let app = setup_e2e_app();

    let response = send(&app, "DELETE", "/books/99?confirm=true", None).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_e2e_deleting_last_book_of_category_drops_it() {
    let app = setup_e2e_app();

    send(&app, "DELETE", "/books/6?confirm=true", None).await;

    let categories: Vec<String> =
        read_json(send(&app, "GET", "/categories", None).await).await;
    assert_eq!(categories, vec!["all", "Fiction", "History", "Biography"]);
}
