use serde::{Deserialize, Serialize};

use super::{
    BookId, BookStatus, CategoryFilter, DomainEvent, ReplayError,
    book::{Book, BookState},
    filter::{BookFilter, filter_books},
};

/// 蔵書カタログ - 書籍の順序付きコレクション
///
/// 追加順を保持する。削除はその場で取り除く。
/// 変更操作はすべて新しいCatalogを返し、元の値は変更しない。
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    books: Vec<Book>,
}

/// 集計値（絞り込み前の全体に対して計算する）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogStats {
    pub total: usize,
    pub available: usize,
    pub borrowed: usize,
}

impl Catalog {
    pub fn new(books: Vec<Book>) -> Self {
        Self { books }
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn get(&self, id: BookId) -> Option<&Book> {
        self.books.iter().find(|book| book.id == id)
    }

    pub fn contains(&self, id: BookId) -> bool {
        self.get(id).is_some()
    }

    /// 次に採番するID（既存IDの最大値 + 1、空なら1）
    pub fn next_id(&self) -> BookId {
        self.books
            .iter()
            .map(|book| book.id)
            .max()
            .map_or(BookId::FIRST, BookId::next)
    }

    /// 末尾に書籍を追加した新しいカタログ
    pub fn with_book(&self, book: Book) -> Self {
        let mut books = self.books.clone();
        books.push(book);
        Self { books }
    }

    /// 同じIDの書籍を置き換えた新しいカタログ（位置は維持）
    pub fn with_replaced(&self, book: Book) -> Self {
        let books = self
            .books
            .iter()
            .map(|existing| {
                if existing.id == book.id {
                    book.clone()
                } else {
                    existing.clone()
                }
            })
            .collect();
        Self { books }
    }

    /// 指定IDの書籍を取り除いた新しいカタログ
    pub fn without(&self, id: BookId) -> Self {
        let books = self
            .books
            .iter()
            .filter(|book| book.id != id)
            .cloned()
            .collect();
        Self { books }
    }

    /// 選択肢用のカテゴリ一覧
    ///
    /// 先頭は常に`All`。以降は初出順で重複を除いたカテゴリ。
    pub fn categories(&self) -> Vec<CategoryFilter> {
        let mut options = vec![CategoryFilter::All];
        for book in &self.books {
            let option = CategoryFilter::Only(book.category.clone());
            if !options.contains(&option) {
                options.push(option);
            }
        }
        options
    }

    pub fn stats(&self) -> CatalogStats {
        let available = self
            .books
            .iter()
            .filter(|book| book.status() == BookStatus::Available)
            .count();
        let borrowed = self
            .books
            .iter()
            .filter(|book| book.status() == BookStatus::Borrowed)
            .count();

        CatalogStats {
            total: self.books.len(),
            available,
            borrowed,
        }
    }

    pub fn filter(&self, filter: &BookFilter) -> Vec<&Book> {
        filter_books(&self.books, filter)
    }
}

/// イベントを適用して新しいカタログを生成する純粋関数
///
/// ジャーナルの再生（foldパターン）で使用される。
///
/// # エラー
/// - 追加イベントのIDが既に存在する場合は`DuplicateBook`
/// - 対象の書籍が存在しない場合は`UnknownBook`
pub fn apply_event(catalog: &Catalog, event: &DomainEvent) -> Result<Catalog, ReplayError> {
    match event {
        DomainEvent::BookAdded(e) => {
            if catalog.contains(e.book.id) {
                return Err(ReplayError::DuplicateBook(e.book.id));
            }
            Ok(catalog.with_book(e.book.clone()))
        }
        DomainEvent::BookBorrowed(e) => {
            let book = catalog
                .get(e.book_id)
                .ok_or(ReplayError::UnknownBook(e.book_id))?;
            let borrowed = Book {
                state: BookState::Borrowed {
                    borrower: e.borrower.clone(),
                    due_date: e.due_date,
                },
                ..book.clone()
            };
            Ok(catalog.with_replaced(borrowed))
        }
        DomainEvent::BookReturned(e) => {
            let book = catalog
                .get(e.book_id)
                .ok_or(ReplayError::UnknownBook(e.book_id))?;
            let returned = Book {
                state: BookState::Available,
                ..book.clone()
            };
            Ok(catalog.with_replaced(returned))
        }
        DomainEvent::BookDeleted(e) => {
            if !catalog.contains(e.book_id) {
                return Err(ReplayError::UnknownBook(e.book_id));
            }
            Ok(catalog.without(e.book_id))
        }
    }
}

/// 初期カタログにイベント列を順に適用して現在のカタログを復元する
pub fn replay_events(initial: &Catalog, events: &[DomainEvent]) -> Result<Catalog, ReplayError> {
    events
        .iter()
        .try_fold(initial.clone(), |catalog, event| apply_event(&catalog, event))
}
