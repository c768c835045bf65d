use super::BookId;

/// 書籍追加のエラー
///
/// 存在チェックのみ。形式や一意性は検証しない。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddBookError {
    /// タイトル未入力
    MissingTitle,
    /// 著者未入力
    MissingAuthor,
    /// ISBN未入力
    MissingIsbn,
}

impl AddBookError {
    /// 欠けているフィールド名
    pub fn field(&self) -> &'static str {
        match self {
            AddBookError::MissingTitle => "title",
            AddBookError::MissingAuthor => "author",
            AddBookError::MissingIsbn => "isbn",
        }
    }
}

/// 貸出のエラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BorrowBookError {
    /// 既に貸出中
    AlreadyBorrowed,
    /// 借り手の名前が空
    EmptyBorrower,
}

/// イベント再生のエラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplayError {
    /// 同じIDの書籍が既に存在する
    DuplicateBook(BookId),
    /// 対象の書籍が存在しない
    UnknownBook(BookId),
}
