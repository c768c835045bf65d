use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{
    AddBook, Category, CategoryFilter, StatusFilter, book::Book, catalog::CatalogStats,
    draft::BookDraft, filter::BookFilter,
};

/// 書籍追加リクエスト（POST /books）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddBookRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub isbn: String,
    #[serde(default = "default_category")]
    pub category: String,
}

fn default_category() -> String {
    crate::domain::draft::DEFAULT_CATEGORY.to_string()
}

impl AddBookRequest {
    pub fn to_command(&self) -> AddBook {
        AddBook {
            title: self.title.clone(),
            author: self.author.clone(),
            isbn: self.isbn.clone(),
            category: Category::new(self.category.clone()),
        }
    }
}

/// 貸出リクエスト（POST /books/:id/borrow）
///
/// `borrower`はプロンプトへの回答。省略はキャンセル扱い。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BorrowBookRequest {
    pub borrower: Option<String>,
}

/// 削除のクエリパラメータ（DELETE /books/:id?confirm=true）
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeleteBookQuery {
    #[serde(default)]
    pub confirm: bool,
}

/// 絞り込み条件の更新リクエスト（PUT /filter）
///
/// 指定された項目のみ更新する。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateFilterRequest {
    pub query: Option<String>,
    pub category: Option<String>,
    pub status: Option<String>,
}

/// 下書き項目の更新リクエスト（PATCH /draft）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditDraftRequest {
    pub field: String,
    #[serde(default)]
    pub value: String,
}

/// 書籍レスポンス
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookResponse {
    pub id: u64,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub category: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub borrower: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub due_date: Option<NaiveDate>,
}

impl From<&Book> for BookResponse {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id.value(),
            title: book.title.clone(),
            author: book.author.clone(),
            isbn: book.isbn.clone(),
            category: book.category.as_str().to_string(),
            status: book.status().as_str().to_string(),
            borrower: book.borrower().map(str::to_string),
            due_date: book.due_date(),
        }
    }
}

/// 書籍追加レスポンス
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookCreatedResponse {
    pub id: u64,
    pub book: BookResponse,
}

/// 集計レスポンス
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsResponse {
    pub total: usize,
    pub available: usize,
    pub borrowed: usize,
}

impl From<CatalogStats> for StatsResponse {
    fn from(stats: CatalogStats) -> Self {
        Self {
            total: stats.total,
            available: stats.available,
            borrowed: stats.borrowed,
        }
    }
}

/// 絞り込み条件レスポンス
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterResponse {
    pub query: String,
    pub category: String,
    pub status: String,
}

impl From<&BookFilter> for FilterResponse {
    fn from(filter: &BookFilter) -> Self {
        Self {
            query: filter.query.clone(),
            category: filter.category.as_str().to_string(),
            status: filter.status.as_str().to_string(),
        }
    }
}

/// 下書きレスポンス
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftResponse {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub category: String,
    pub open: bool,
}

impl DraftResponse {
    pub fn new(draft: &BookDraft, open: bool) -> Self {
        Self {
            title: draft.title.clone(),
            author: draft.author.clone(),
            isbn: draft.isbn.clone(),
            category: draft.category.as_str().to_string(),
            open,
        }
    }
}

/// 画面全体のレスポンス（GET /library）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LibraryResponse {
    pub stats: StatsResponse,
    pub categories: Vec<String>,
    pub filter: FilterResponse,
    pub books: Vec<BookResponse>,
    pub no_matches: bool,
    pub catalog_empty: bool,
    pub draft: DraftResponse,
}

/// カテゴリ選択肢を文字列表現に変換する
pub fn category_options(categories: &[CategoryFilter]) -> Vec<String> {
    categories.iter().map(|c| c.as_str().to_string()).collect()
}

/// エラーレスポンス
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
        }
    }
}

/// ステータスフィルタのパースとバリデーション
pub fn parse_status_filter(status: &str) -> Result<StatusFilter, String> {
    status.parse::<StatusFilter>()
}
