use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{BookId, book::Book};

/// イベント：書籍が追加された
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookAdded {
    pub book: Book,
}

/// イベント：書籍が貸し出された
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookBorrowed {
    pub book_id: BookId,
    pub borrower: String,
    pub borrowed_on: NaiveDate,
    pub due_date: NaiveDate,
}

/// イベント：書籍が返却された
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookReturned {
    pub book_id: BookId,
    pub returned_on: NaiveDate,
    /// 返却時に貸出中だったか（貸出可能な書籍への返却は項目のクリアのみ）
    pub was_borrowed: bool,
}

/// イベント：書籍が削除された
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookDeleted {
    pub book_id: BookId,
    pub title: String,
}

/// ドメインイベント統合型
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum DomainEvent {
    BookAdded(BookAdded),
    BookBorrowed(BookBorrowed),
    BookReturned(BookReturned),
    BookDeleted(BookDeleted),
}

impl DomainEvent {
    /// イベントの対象書籍
    pub fn book_id(&self) -> BookId {
        match self {
            DomainEvent::BookAdded(e) => e.book.id,
            DomainEvent::BookBorrowed(e) => e.book_id,
            DomainEvent::BookReturned(e) => e.book_id,
            DomainEvent::BookDeleted(e) => e.book_id,
        }
    }
}
