use serde::{Deserialize, Serialize};

use super::{CategoryFilter, StatusFilter, book::Book};

/// 検索・絞り込み条件
///
/// 3つの条件（テキスト検索、カテゴリ、ステータス）をANDで組み合わせる。
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BookFilter {
    /// タイトル・著者・ISBNに対する部分一致検索
    pub query: String,
    pub category: CategoryFilter,
    pub status: StatusFilter,
}

impl BookFilter {
    /// 書籍が全条件を満たすか
    pub fn matches(&self, book: &Book) -> bool {
        self.matches_query(book)
            && self.category.matches(&book.category)
            && self.status.matches(book.status())
    }

    /// タイトル・著者は大文字小文字を区別しない。ISBNは入力そのままで比較する。
    fn matches_query(&self, book: &Book) -> bool {
        if self.query.is_empty() {
            return true;
        }
        let needle = self.query.to_lowercase();
        book.title.to_lowercase().contains(&needle)
            || book.author.to_lowercase().contains(&needle)
            || book.isbn.contains(&self.query)
    }
}

/// 純粋関数：条件に一致する書籍を元の順序のまま抽出する
pub fn filter_books<'a>(books: &'a [Book], filter: &BookFilter) -> Vec<&'a Book> {
    books.iter().filter(|book| filter.matches(book)).collect()
}
