use serde::{Deserialize, Serialize};

use super::{AddBook, Category};

/// 追加フォームで選択できるカテゴリ
pub const CATEGORY_CHOICES: [&str; 6] = [
    "Fiction",
    "Science",
    "History",
    "Biography",
    "Technology",
    "Other",
];

/// 新規フォームの初期カテゴリ
pub const DEFAULT_CATEGORY: &str = "Fiction";

/// 追加フォームの入力項目
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DraftField {
    Title,
    Author,
    Isbn,
    Category,
}

impl std::str::FromStr for DraftField {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "title" => Ok(DraftField::Title),
            "author" => Ok(DraftField::Author),
            "isbn" => Ok(DraftField::Isbn),
            "category" => Ok(DraftField::Category),
            _ => Err(format!("Invalid draft field: {}", s)),
        }
    }
}

/// 書籍追加フォームの下書き
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookDraft {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub category: Category,
}

impl Default for BookDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            author: String::new(),
            isbn: String::new(),
            category: Category::new(DEFAULT_CATEGORY),
        }
    }
}

impl BookDraft {
    /// 1項目だけ差し替えた新しい下書き
    pub fn with_field(&self, field: DraftField, value: impl Into<String>) -> Self {
        let value = value.into();
        match field {
            DraftField::Title => Self {
                title: value,
                ..self.clone()
            },
            DraftField::Author => Self {
                author: value,
                ..self.clone()
            },
            DraftField::Isbn => Self {
                isbn: value,
                ..self.clone()
            },
            DraftField::Category => Self {
                category: Category::new(value),
                ..self.clone()
            },
        }
    }

    pub fn to_command(&self) -> AddBook {
        AddBook {
            title: self.title.clone(),
            author: self.author.clone(),
            isbn: self.isbn.clone(),
            category: self.category.clone(),
        }
    }
}
