use std::sync::Arc;

use crate::domain::{
    AddBook, BookId, BorrowBook, CategoryFilter, DeleteBook, DomainEvent, ReturnBook,
    StatusFilter,
    book::Book,
    catalog::Catalog,
    draft::DraftField,
    seed::seed_catalog,
};

use super::errors::{LibraryApplicationError, Result};
use super::library_service::{self, ServiceDependencies};
use super::state::{LibraryState, LibraryView};

/// 蔵書管理の状態コンテナ
///
/// 唯一の可変状態（スナップショット）を所有し、名前付きコマンドで更新する。
/// コマンドは新しいスナップショットを作り、成功した場合のみ丸ごと差し替える。
/// 失敗したコマンドは状態を一切変更しない。
///
/// カタログへの変更はイベントとしてジャーナルに記録され、
/// `replay_events`で初期カタログから再生できる。
/// ジャーナルは切り詰めないため、コントローラーの生存期間中は増え続ける。
#[derive(Debug, Clone)]
pub struct LibraryController {
    initial: Catalog,
    state: Arc<LibraryState>,
    journal: Vec<DomainEvent>,
}

impl Default for LibraryController {
    fn default() -> Self {
        Self::new(Catalog::default())
    }
}

impl LibraryController {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            state: Arc::new(LibraryState::new(catalog.clone())),
            initial: catalog,
            journal: Vec::new(),
        }
    }

    /// 初期蔵書（8冊）で開始する
    pub fn seeded() -> Self {
        Self::new(seed_catalog())
    }

    /// 現在のスナップショット
    pub fn state(&self) -> Arc<LibraryState> {
        Arc::clone(&self.state)
    }

    pub fn view(&self) -> LibraryView {
        self.state.view()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.state.catalog
    }

    pub fn initial_catalog(&self) -> &Catalog {
        &self.initial
    }

    pub fn journal(&self) -> &[DomainEvent] {
        &self.journal
    }

    // ------------------------------------------------------------------------
    // カタログ操作
    // ------------------------------------------------------------------------

    pub fn add_book(&mut self, cmd: AddBook) -> Result<BookId> {
        let result = library_service::add_book(&self.state, cmd);
        self.commit("add_book", result).map(|event| event.book_id())
    }

    /// 追加フォームを送信する
    pub fn submit_draft(&mut self) -> Result<BookId> {
        let result = library_service::submit_draft(&self.state);
        self.commit("submit_draft", result).map(|event| event.book_id())
    }

    pub fn borrow_book(&mut self, deps: &ServiceDependencies, cmd: BorrowBook) -> Result<Book> {
        let book_id = cmd.book_id;
        let result = library_service::borrow_book(deps, &self.state, cmd);
        self.commit("borrow_book", result)?;
        self.current_book(book_id)
    }

    pub fn return_book(&mut self, cmd: ReturnBook) -> Result<Book> {
        let book_id = cmd.book_id;
        let result = library_service::return_book(&self.state, cmd);
        self.commit("return_book", result)?;
        self.current_book(book_id)
    }

    pub fn delete_book(&mut self, deps: &ServiceDependencies, cmd: DeleteBook) -> Result<()> {
        let result = library_service::delete_book(deps, &self.state, cmd);
        self.commit("delete_book", result).map(|_| ())
    }

    // ------------------------------------------------------------------------
    // 絞り込み・フォーム操作（ジャーナルには記録しない）
    // ------------------------------------------------------------------------

    pub fn set_search_term(&mut self, query: impl Into<String>) {
        self.state = Arc::new(self.state.with_search_term(query));
    }

    pub fn set_category_filter(&mut self, category: CategoryFilter) {
        self.state = Arc::new(self.state.with_category_filter(category));
    }

    pub fn set_status_filter(&mut self, status: StatusFilter) {
        self.state = Arc::new(self.state.with_status_filter(status));
    }

    pub fn edit_draft(&mut self, field: DraftField, value: impl Into<String>) {
        self.state = Arc::new(self.state.with_draft_field(field, value));
    }

    /// フォームの開閉を切り替え、切り替え後に開いているかを返す
    pub fn toggle_add_form(&mut self) -> bool {
        self.state = Arc::new(self.state.with_add_form_toggled());
        self.state.add_form_open
    }

    fn current_book(&self, book_id: BookId) -> Result<Book> {
        self.state
            .catalog
            .get(book_id)
            .cloned()
            .ok_or(LibraryApplicationError::BookNotFound(book_id))
    }

    /// 成功したコマンドの結果を反映する
    fn commit(
        &mut self,
        command: &'static str,
        result: Result<(LibraryState, DomainEvent)>,
    ) -> Result<DomainEvent> {
        match result {
            Ok((state, event)) => {
                tracing::info!(command, book_id = %event.book_id(), "command applied");
                self.state = Arc::new(state);
                self.journal.push(event.clone());
                Ok(event)
            }
            Err(err) => {
                tracing::debug!(command, error = %err, "command declined");
                Err(err)
            }
        }
    }
}
