use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{BookId, Category};

/// コマンド：書籍を追加する
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddBook {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub category: Category,
}

/// コマンド：書籍を貸し出す
///
/// 借り手の名前はコマンドに含まれない。実行時にTextInputProviderから取得する。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BorrowBook {
    pub book_id: BookId,
    pub borrowed_on: NaiveDate,
}

/// コマンド：書籍を返却する
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReturnBook {
    pub book_id: BookId,
    pub returned_on: NaiveDate,
}

/// コマンド：書籍を削除する
///
/// 実行時にConfirmationProviderの同意が必要。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteBook {
    pub book_id: BookId,
}
