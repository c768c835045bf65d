use crate::domain::{
    self, AddBook, BookDeleted, BookId, BorrowBook, BorrowBookError, DeleteBook, DomainEvent,
    ReturnBook, book::Book, draft::BookDraft,
};
use crate::ports::*;
use std::sync::Arc;

use super::errors::{LibraryApplicationError, Result};
use super::state::LibraryState;

/// 借り手の名前を問い合わせるメッセージ
pub const BORROWER_PROMPT: &str = "Enter borrower name:";

/// 削除確認のメッセージ
pub const DELETE_CONFIRMATION: &str = "Are you sure you want to delete this book?";

/// サービスの依存関係
///
/// オペレーターへの問い合わせ（確認・テキスト入力）を注入可能な能力として受け取る。
/// テストでは決定的なスタブに差し替える。
#[derive(Clone)]
pub struct ServiceDependencies {
    pub confirmation: Arc<dyn ConfirmationProvider>,
    pub text_input: Arc<dyn TextInputProvider>,
}

fn find_book(state: &LibraryState, book_id: BookId) -> Result<&Book> {
    state
        .catalog
        .get(book_id)
        .ok_or(LibraryApplicationError::BookNotFound(book_id))
}

/// 書籍を追加する
///
/// ビジネスルール：
/// - タイトル・著者・ISBNが入力されていること（存在チェックのみ）
/// - IDは既存IDの最大値 + 1
/// - 末尾に追加される
pub fn add_book(state: &LibraryState, cmd: AddBook) -> Result<(LibraryState, DomainEvent)> {
    let book_id = state.catalog.next_id();
    let (book, event) = domain::book::add_book(book_id, cmd)?;

    let new_state = state.with_catalog(state.catalog.with_book(book));

    Ok((new_state, DomainEvent::BookAdded(event)))
}

/// 追加フォームの内容で書籍を追加する
///
/// 成功時はフォームを初期値に戻して閉じる。
/// 失敗時は入力途中のフォームをそのまま残す。
pub fn submit_draft(state: &LibraryState) -> Result<(LibraryState, DomainEvent)> {
    let (added, event) = add_book(state, state.draft.to_command())?;

    let new_state = LibraryState {
        draft: BookDraft::default(),
        add_form_open: false,
        ..added
    };

    Ok((new_state, event))
}

/// 書籍を貸し出す
///
/// ビジネスルール：
/// - 書籍が存在すること
/// - 書籍が貸出可能であること
/// - 借り手の名前が入力されること（キャンセル・空の場合は何もしない）
/// - 返却期限は貸出日 + 14日
///
/// 問い合わせは書籍の存在と貸出可否を確認してから行う。
pub fn borrow_book(
    deps: &ServiceDependencies,
    state: &LibraryState,
    cmd: BorrowBook,
) -> Result<(LibraryState, DomainEvent)> {
    // 1. 書籍の存在と貸出可否を確認
    let book = find_book(state, cmd.book_id)?;
    if !book.is_available() {
        return Err(LibraryApplicationError::BookNotAvailable(cmd.book_id));
    }

    // 2. 借り手の名前を問い合わせ
    let borrower = deps
        .text_input
        .prompt(BORROWER_PROMPT)
        .filter(|name| !name.is_empty())
        .ok_or(LibraryApplicationError::BorrowerNotProvided)?;

    // 3. ドメイン層の純粋関数を呼び出し
    let (borrowed, event) = domain::book::borrow_book(book, &borrower, cmd.borrowed_on)
        .map_err(|e| match e {
            BorrowBookError::AlreadyBorrowed => {
                LibraryApplicationError::BookNotAvailable(cmd.book_id)
            }
            BorrowBookError::EmptyBorrower => LibraryApplicationError::BorrowerNotProvided,
        })?;

    let new_state = state.with_catalog(state.catalog.with_replaced(borrowed));

    Ok((new_state, DomainEvent::BookBorrowed(event)))
}

/// 書籍を返却する
///
/// 借り手と返却期限をクリアする。貸出可能な書籍に対しても成功する。
pub fn return_book(state: &LibraryState, cmd: ReturnBook) -> Result<(LibraryState, DomainEvent)> {
    let book = find_book(state, cmd.book_id)?;

    let (returned, event) = domain::book::return_book(book, cmd.returned_on);

    let new_state = state.with_catalog(state.catalog.with_replaced(returned));

    Ok((new_state, DomainEvent::BookReturned(event)))
}

/// 書籍を削除する
///
/// ビジネスルール：
/// - 書籍が存在すること
/// - オペレーターが削除を確認すること（取り消し不可）
pub fn delete_book(
    deps: &ServiceDependencies,
    state: &LibraryState,
    cmd: DeleteBook,
) -> Result<(LibraryState, DomainEvent)> {
    let book = find_book(state, cmd.book_id)?;

    if !deps.confirmation.confirm(DELETE_CONFIRMATION) {
        return Err(LibraryApplicationError::DeletionNotConfirmed(cmd.book_id));
    }

    let event = BookDeleted {
        book_id: book.id,
        title: book.title.clone(),
    };

    let new_state = state.with_catalog(state.catalog.without(cmd.book_id));

    Ok((new_state, DomainEvent::BookDeleted(event)))
}
