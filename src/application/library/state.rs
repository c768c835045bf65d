use serde::Serialize;

use crate::domain::{
    CategoryFilter, StatusFilter,
    book::Book,
    catalog::{Catalog, CatalogStats},
    draft::{BookDraft, DraftField},
    filter::BookFilter,
};

/// 画面全体の状態スナップショット
///
/// 不変の値として扱い、操作のたびに新しいスナップショットを作って丸ごと置き換える。
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LibraryState {
    pub catalog: Catalog,
    pub filter: BookFilter,
    pub draft: BookDraft,
    pub add_form_open: bool,
}

/// 表示用に導出されたビュー
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LibraryView {
    pub stats: CatalogStats,
    pub categories: Vec<CategoryFilter>,
    pub filter: BookFilter,
    pub books: Vec<Book>,
    /// 絞り込み結果が空
    pub no_matches: bool,
    /// カタログ自体が空
    pub catalog_empty: bool,
    pub draft: BookDraft,
    pub add_form_open: bool,
}

impl LibraryState {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            ..Default::default()
        }
    }

    pub fn with_catalog(&self, catalog: Catalog) -> Self {
        Self {
            catalog,
            ..self.clone()
        }
    }

    pub fn with_search_term(&self, query: impl Into<String>) -> Self {
        Self {
            filter: BookFilter {
                query: query.into(),
                ..self.filter.clone()
            },
            ..self.clone()
        }
    }

    pub fn with_category_filter(&self, category: CategoryFilter) -> Self {
        Self {
            filter: BookFilter {
                category,
                ..self.filter.clone()
            },
            ..self.clone()
        }
    }

    pub fn with_status_filter(&self, status: StatusFilter) -> Self {
        Self {
            filter: BookFilter {
                status,
                ..self.filter.clone()
            },
            ..self.clone()
        }
    }

    pub fn with_draft_field(&self, field: DraftField, value: impl Into<String>) -> Self {
        Self {
            draft: self.draft.with_field(field, value),
            ..self.clone()
        }
    }

    pub fn with_add_form_toggled(&self) -> Self {
        Self {
            add_form_open: !self.add_form_open,
            ..self.clone()
        }
    }

    /// 現在の条件で絞り込んだ書籍
    pub fn filtered_books(&self) -> Vec<&Book> {
        self.catalog.filter(&self.filter)
    }

    pub fn view(&self) -> LibraryView {
        let books: Vec<Book> = self.filtered_books().into_iter().cloned().collect();
        LibraryView {
            stats: self.catalog.stats(),
            categories: self.catalog.categories(),
            filter: self.filter.clone(),
            no_matches: books.is_empty(),
            catalog_empty: self.catalog.is_empty(),
            books,
            draft: self.draft.clone(),
            add_form_open: self.add_form_open,
        }
    }
}
