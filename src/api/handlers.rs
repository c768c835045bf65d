use crate::adapters::preset::{PresetConfirmation, PresetTextInput};
use crate::application::library::{LibraryApplicationError, LibraryController, ServiceDependencies};
use crate::domain::{
    BookId, BorrowBook, CategoryFilter, DeleteBook, DomainEvent, ReturnBook, draft::DraftField,
};
use axum::{Json, extract::State, http::StatusCode};
use chrono::NaiveDate;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::{
    error::ApiError,
    extract::{ApiJson, ApiPath, ApiQuery},
    types::{
        AddBookRequest, BookCreatedResponse, BookResponse, BorrowBookRequest, DeleteBookQuery,
        DraftResponse, EditDraftRequest, FilterResponse, LibraryResponse, StatsResponse,
        UpdateFilterRequest, category_options, parse_status_filter,
    },
};

// ============================================================================
// State
// ============================================================================

/// ハンドラー間で共有されるアプリケーション状態
///
/// コントローラーはMutexで保護され、リクエストは1件ずつ順に処理される。
/// 貸出・返却の日付は`today`から取得する（既定はUTCの現在日付）。
pub struct AppState {
    pub library: Mutex<LibraryController>,
    today: Box<dyn Fn() -> NaiveDate + Send + Sync>,
}

impl AppState {
    pub fn new(controller: LibraryController) -> Self {
        Self::with_clock(controller, || chrono::Utc::now().date_naive())
    }

    /// 日付の取得元を差し替えて作成する
    pub fn with_clock(
        controller: LibraryController,
        today: impl Fn() -> NaiveDate + Send + Sync + 'static,
    ) -> Self {
        Self {
            library: Mutex::new(controller),
            today: Box::new(today),
        }
    }

    pub fn today(&self) -> NaiveDate {
        (self.today)()
    }
}

/// リクエストで受け取った回答を依存関係として組み立てる
fn request_dependencies(confirmed: bool, borrower: Option<String>) -> ServiceDependencies {
    ServiceDependencies {
        confirmation: Arc::new(PresetConfirmation::new(confirmed)),
        text_input: Arc::new(PresetTextInput::new(borrower)),
    }
}

// ============================================================================
// Command handlers
// ============================================================================

/// POST /books - 書籍を追加
///
/// タイトル・著者・ISBNが必須。カテゴリ省略時は"Fiction"。
pub async fn create_book(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<AddBookRequest>,
) -> Result<(StatusCode, Json<BookCreatedResponse>), ApiError> {
    let mut library = state.library.lock().await;

    let book_id = library.add_book(req.to_command())?;
    let book = library
        .catalog()
        .get(book_id)
        .ok_or(LibraryApplicationError::BookNotFound(book_id))?;

    let response = BookCreatedResponse {
        id: book_id.value(),
        book: BookResponse::from(book),
    };

    Ok((StatusCode::CREATED, Json(response)))
}

/// POST /books/:id/borrow - 書籍を貸し出す
///
/// リクエストの`borrower`を借り手名プロンプトへの回答として扱う。
/// ボディがない、または読めない場合はプロンプトのキャンセルとみなす。
/// 返却期限は本日 + 14日。
pub async fn borrow_book(
    State(state): State<Arc<AppState>>,
    ApiPath(book_id): ApiPath<u64>,
    body: Option<Json<BorrowBookRequest>>,
) -> Result<Json<BookResponse>, ApiError> {
    let borrower = body.and_then(|Json(req)| req.borrower);
    let deps = request_dependencies(false, borrower);
    let cmd = BorrowBook {
        book_id: BookId::new(book_id),
        borrowed_on: state.today(),
    };

    let book = state.library.lock().await.borrow_book(&deps, cmd)?;

    Ok(Json(BookResponse::from(&book)))
}

/// POST /books/:id/return - 書籍を返却する
pub async fn return_book(
    State(state): State<Arc<AppState>>,
    ApiPath(book_id): ApiPath<u64>,
) -> Result<Json<BookResponse>, ApiError> {
    let cmd = ReturnBook {
        book_id: BookId::new(book_id),
        returned_on: state.today(),
    };

    let book = state.library.lock().await.return_book(cmd)?;

    Ok(Json(BookResponse::from(&book)))
}

/// DELETE /books/:id?confirm=true - 書籍を削除する
///
/// `confirm`が削除確認への回答。省略時は確認されなかったものとして扱う。
pub async fn delete_book(
    State(state): State<Arc<AppState>>,
    ApiPath(book_id): ApiPath<u64>,
    ApiQuery(query): ApiQuery<DeleteBookQuery>,
) -> Result<StatusCode, ApiError> {
    let deps = request_dependencies(query.confirm, None);
    let cmd = DeleteBook {
        book_id: BookId::new(book_id),
    };

    state.library.lock().await.delete_book(&deps, cmd)?;

    Ok(StatusCode::NO_CONTENT)
}

/// PUT /filter - 絞り込み条件を更新する
///
/// 値をすべて検証してから反映するため、不正な値が含まれる場合は何も変更しない。
pub async fn update_filter(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<UpdateFilterRequest>,
) -> Result<Json<FilterResponse>, ApiError> {
    let status = req
        .status
        .as_deref()
        .map(parse_status_filter)
        .transpose()
        .map_err(ApiError::InvalidFilter)?;

    let mut library = state.library.lock().await;

    if let Some(query) = req.query {
        library.set_search_term(query);
    }
    if let Some(category) = req.category.as_deref() {
        library.set_category_filter(CategoryFilter::from(category));
    }
    if let Some(status) = status {
        library.set_status_filter(status);
    }

    Ok(Json(FilterResponse::from(&library.state().filter)))
}

/// PATCH /draft - 追加フォームの項目を更新する
pub async fn edit_draft(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<EditDraftRequest>,
) -> Result<Json<DraftResponse>, ApiError> {
    let field = req
        .field
        .parse::<DraftField>()
        .map_err(ApiError::InvalidDraftField)?;

    let mut library = state.library.lock().await;
    library.edit_draft(field, req.value);

    let snapshot = library.state();
    Ok(Json(DraftResponse::new(&snapshot.draft, snapshot.add_form_open)))
}

/// POST /draft/toggle - 追加フォームを開閉する
pub async fn toggle_add_form(State(state): State<Arc<AppState>>) -> Json<DraftResponse> {
    let mut library = state.library.lock().await;
    library.toggle_add_form();

    let snapshot = library.state();
    Json(DraftResponse::new(&snapshot.draft, snapshot.add_form_open))
}

/// POST /draft/submit - 追加フォームを送信する
pub async fn submit_draft(
    State(state): State<Arc<AppState>>,
) -> Result<(StatusCode, Json<BookCreatedResponse>), ApiError> {
    let mut library = state.library.lock().await;

    let book_id = library.submit_draft()?;
    let book = library
        .catalog()
        .get(book_id)
        .ok_or(LibraryApplicationError::BookNotFound(book_id))?;

    let response = BookCreatedResponse {
        id: book_id.value(),
        book: BookResponse::from(book),
    };

    Ok((StatusCode::CREATED, Json(response)))
}

// ============================================================================
// Query handlers (GET)
// ============================================================================

/// GET /library - 画面全体のビュー
pub async fn get_library(State(state): State<Arc<AppState>>) -> Json<LibraryResponse> {
    let view = state.library.lock().await.view();

    Json(LibraryResponse {
        stats: StatsResponse::from(view.stats),
        categories: category_options(&view.categories),
        filter: FilterResponse::from(&view.filter),
        books: view.books.iter().map(BookResponse::from).collect(),
        no_matches: view.no_matches,
        catalog_empty: view.catalog_empty,
        draft: DraftResponse::new(&view.draft, view.add_form_open),
    })
}

/// GET /books - 現在の条件で絞り込んだ書籍一覧
pub async fn list_books(State(state): State<Arc<AppState>>) -> Json<Vec<BookResponse>> {
    let snapshot = state.library.lock().await.state();

    Json(
        snapshot
            .filtered_books()
            .into_iter()
            .map(BookResponse::from)
            .collect(),
    )
}

/// GET /books/:id - 書籍をIDで取得
pub async fn get_book(
    State(state): State<Arc<AppState>>,
    ApiPath(book_id): ApiPath<u64>,
) -> Result<Json<BookResponse>, ApiError> {
    let book_id = BookId::new(book_id);
    let snapshot = state.library.lock().await.state();

    let book = snapshot
        .catalog
        .get(book_id)
        .ok_or(LibraryApplicationError::BookNotFound(book_id))?;

    Ok(Json(BookResponse::from(book)))
}

/// GET /categories - カテゴリの選択肢（先頭は"all"）
pub async fn list_categories(State(state): State<Arc<AppState>>) -> Json<Vec<String>> {
    let snapshot = state.library.lock().await.state();
    Json(category_options(&snapshot.catalog.categories()))
}

/// GET /stats - 全体の集計
pub async fn get_stats(State(state): State<Arc<AppState>>) -> Json<StatsResponse> {
    let snapshot = state.library.lock().await.state();
    Json(StatsResponse::from(snapshot.catalog.stats()))
}

/// GET /events - カタログ変更のジャーナル
///
/// ジャーナルは起動時から全件を保持しており、毎回全件を返す。
pub async fn list_events(State(state): State<Arc<AppState>>) -> Json<Vec<DomainEvent>> {
    Json(state.library.lock().await.journal().to_vec())
}
