use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use super::{
    AddBook, AddBookError, BookAdded, BookBorrowed, BookId, BookReturned, BookStatus,
    BorrowBookError, Category,
};

/// 貸出期間（日数）
pub const LOAN_PERIOD_DAYS: i64 = 14;

// ============================================================================
// 型安全な状態パターン
// ============================================================================

/// 書籍の貸出状態
///
/// 借り手と返却期限は貸出中の状態にのみ存在する。
/// 「貸出中なら借り手と期限がある」という不変条件を型で強制する。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BookState {
    Available,
    Borrowed {
        borrower: String,
        due_date: NaiveDate,
    },
}

/// 書籍 - カタログの1エントリ
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub category: Category,
    #[serde(flatten)]
    pub state: BookState,
}

impl Book {
    pub fn status(&self) -> BookStatus {
        match self.state {
            BookState::Available => BookStatus::Available,
            BookState::Borrowed { .. } => BookStatus::Borrowed,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self.state, BookState::Available)
    }

    pub fn borrower(&self) -> Option<&str> {
        match &self.state {
            BookState::Borrowed { borrower, .. } => Some(borrower.as_str()),
            BookState::Available => None,
        }
    }

    pub fn due_date(&self) -> Option<NaiveDate> {
        match self.state {
            BookState::Borrowed { due_date, .. } => Some(due_date),
            BookState::Available => None,
        }
    }
}

/// 純粋関数：返却期限を計算する
pub fn due_date_for(borrowed_on: NaiveDate) -> NaiveDate {
    borrowed_on + Duration::days(LOAN_PERIOD_DAYS)
}

/// 純粋関数：書籍を作成する
///
/// ビジネスルール：
/// - タイトル・著者・ISBNは必須（空文字は不可、形式は問わない）
/// - 初期状態は貸出可能
///
/// IDの採番は呼び出し側（カタログ）の責務。
pub fn add_book(id: BookId, cmd: AddBook) -> Result<(Book, BookAdded), AddBookError> {
    if cmd.title.is_empty() {
        return Err(AddBookError::MissingTitle);
    }
    if cmd.author.is_empty() {
        return Err(AddBookError::MissingAuthor);
    }
    if cmd.isbn.is_empty() {
        return Err(AddBookError::MissingIsbn);
    }

    let book = Book {
        id,
        title: cmd.title,
        author: cmd.author,
        isbn: cmd.isbn,
        category: cmd.category,
        state: BookState::Available,
    };

    let event = BookAdded { book: book.clone() };

    Ok((book, event))
}

/// 純粋関数：書籍を貸し出す
///
/// ビジネスルール：
/// - 貸出可能な書籍のみ
/// - 借り手の名前は空不可
/// - 返却期限は貸出日 + 14日
///
/// 副作用なし。新しいBookとイベントを返す。
pub fn borrow_book(
    book: &Book,
    borrower: &str,
    borrowed_on: NaiveDate,
) -> Result<(Book, BookBorrowed), BorrowBookError> {
    if !book.is_available() {
        return Err(BorrowBookError::AlreadyBorrowed);
    }
    if borrower.is_empty() {
        return Err(BorrowBookError::EmptyBorrower);
    }

    let due_date = due_date_for(borrowed_on);

    let new_book = Book {
        state: BookState::Borrowed {
            borrower: borrower.to_string(),
            due_date,
        },
        ..book.clone()
    };

    let event = BookBorrowed {
        book_id: book.id,
        borrower: borrower.to_string(),
        borrowed_on,
        due_date,
    };

    Ok((new_book, event))
}

/// 純粋関数：書籍を返却する
///
/// 借り手と期限は無条件にクリアされる。
/// 貸出可能な書籍に対しても失敗しない（状態は変わらない）。
pub fn return_book(book: &Book, returned_on: NaiveDate) -> (Book, BookReturned) {
    let new_book = Book {
        state: BookState::Available,
        ..book.clone()
    };

    let event = BookReturned {
        book_id: book.id,
        returned_on,
        was_borrowed: !book.is_available(),
    };

    (new_book, event)
}
