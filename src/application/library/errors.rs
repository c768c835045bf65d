use thiserror::Error;

use crate::domain::{AddBookError, BookId};

/// 蔵書管理アプリケーション層のエラー
///
/// どのエラーの場合も状態は変更されない。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LibraryApplicationError {
    /// 書籍が見つからない
    #[error("Book {0} not found")]
    BookNotFound(BookId),

    /// 必須項目が未入力
    #[error("Missing required field: {}", .0.field())]
    MissingField(AddBookError),

    /// 書籍が貸出不可（既に貸出中）
    #[error("Book {0} is not available for loan")]
    BookNotAvailable(BookId),

    /// 借り手の名前が入力されなかった（キャンセルまたは空）
    #[error("Borrower name was not provided")]
    BorrowerNotProvided,

    /// 削除が確認されなかった
    #[error("Deletion of book {0} was not confirmed")]
    DeletionNotConfirmed(BookId),
}

impl From<AddBookError> for LibraryApplicationError {
    fn from(err: AddBookError) -> Self {
        LibraryApplicationError::MissingField(err)
    }
}

/// アプリケーション層の Result型
pub type Result<T> = std::result::Result<T, LibraryApplicationError>;
