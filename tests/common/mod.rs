#![allow(dead_code)]

use chrono::NaiveDate;
use rusty_library_catalog::adapters::mock::{ConfirmationProvider, TextInputProvider};
use rusty_library_catalog::application::library::ServiceDependencies;
use rusty_library_catalog::domain::{AddBook, Category};
use std::sync::Arc;

/// テスト用の固定日付
pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// 確認ダイアログとテキスト入力のスタブを組み立てる
///
/// 呼び出し側で問い合わせ内容を検証できるよう、スタブも返す。
pub fn stub_dependencies(
    confirmation: ConfirmationProvider,
    text_input: TextInputProvider,
) -> (
    ServiceDependencies,
    Arc<ConfirmationProvider>,
    Arc<TextInputProvider>,
) {
    let confirmation = Arc::new(confirmation);
    let text_input = Arc::new(text_input);
    let deps = ServiceDependencies {
        confirmation: confirmation.clone(),
        text_input: text_input.clone(),
    };
    (deps, confirmation, text_input)
}

pub fn dune() -> AddBook {
    AddBook {
        title: "Dune".to_string(),
        author: "Frank Herbert".to_string(),
        isbn: "978-0441013593".to_string(),
        category: Category::new("Science"),
    }
}
