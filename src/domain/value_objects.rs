use serde::{Deserialize, Serialize};
use std::fmt;

/// フィルタのワイルドカードを表す文字列表現
pub const ALL_MARKER: &str = "all";

/// 書籍ID - カタログ内で一意な正の整数
///
/// 採番は`Catalog::next_id`が担う（既存IDの最大値 + 1、空なら1）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(u64);

impl BookId {
    /// 最初に採番されるID
    pub const FIRST: BookId = BookId(1);

    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    /// 次のID
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// カテゴリ - 自由入力のラベル（固定の列挙ではない）
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 書籍の貸出ステータス
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookStatus {
    /// 貸出可能
    Available,
    /// 貸出中
    Borrowed,
}

impl BookStatus {
    /// 文字列表現を取得する
    pub fn as_str(&self) -> &'static str {
        match self {
            BookStatus::Available => "available",
            BookStatus::Borrowed => "borrowed",
        }
    }
}

impl std::str::FromStr for BookStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "available" => Ok(BookStatus::Available),
            "borrowed" => Ok(BookStatus::Borrowed),
            _ => Err(format!("Invalid book status: {}", s)),
        }
    }
}

/// カテゴリフィルタ
///
/// 文字列`"all"`はワイルドカードとして解釈される。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, category: &Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(expected) => expected == category,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_MARKER,
            CategoryFilter::Only(category) => category.as_str(),
        }
    }
}

impl From<&str> for CategoryFilter {
    fn from(value: &str) -> Self {
        if value == ALL_MARKER {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(Category::new(value))
        }
    }
}

impl Serialize for CategoryFilter {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for CategoryFilter {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(CategoryFilter::from(raw.as_str()))
    }
}

/// ステータスフィルタ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(BookStatus),
}

impl StatusFilter {
    pub fn matches(&self, status: BookStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(expected) => *expected == status,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::All => ALL_MARKER,
            StatusFilter::Only(status) => status.as_str(),
        }
    }
}

impl std::str::FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if s == ALL_MARKER {
            return Ok(StatusFilter::All);
        }
        s.parse::<BookStatus>().map(StatusFilter::Only)
    }
}

impl Serialize for StatusFilter {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for StatusFilter {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_id_next() {
        assert_eq!(BookId::FIRST.next(), BookId::new(2));
        assert_eq!(BookId::new(8).next().value(), 9);
    }

    #[test]
    fn test_book_status_round_trips_through_str() {
        for status in [BookStatus::Available, BookStatus::Borrowed] {
            assert_eq!(status.as_str().parse::<BookStatus>(), Ok(status));
        }
        assert!("lost".parse::<BookStatus>().is_err());
    }

    // TDD: CategoryFilter のテスト
    #[test]
    fn test_category_filter_all_marker_is_wildcard() {
        let filter = CategoryFilter::from("all");
        assert_eq!(filter, CategoryFilter::All);
        assert!(filter.matches(&Category::new("Fiction")));
        assert!(filter.matches(&Category::new("")));
    }

    #[test]
    fn test_category_filter_exact_match_only() {
        let filter = CategoryFilter::from("Fiction");
        assert!(filter.matches(&Category::new("Fiction")));
        assert!(!filter.matches(&Category::new("fiction")));
        assert!(!filter.matches(&Category::new("Science")));
    }

    // TDD: StatusFilter のテスト
    #[test]
    fn test_status_filter_parse() {
        assert_eq!("all".parse::<StatusFilter>(), Ok(StatusFilter::All));
        assert_eq!(
            "borrowed".parse::<StatusFilter>(),
            Ok(StatusFilter::Only(BookStatus::Borrowed))
        );
        assert!("overdue".parse::<StatusFilter>().is_err());
    }

    #[test]
    fn test_status_filter_matches() {
        assert!(StatusFilter::All.matches(BookStatus::Borrowed));
        assert!(StatusFilter::Only(BookStatus::Available).matches(BookStatus::Available));
        assert!(!StatusFilter::Only(BookStatus::Available).matches(BookStatus::Borrowed));
    }

    #[test]
    fn test_filters_serialize_as_plain_strings() {
        let json = serde_json::to_string(&StatusFilter::Only(BookStatus::Borrowed)).unwrap();
        assert_eq!(json, "\"borrowed\"");
        let json = serde_json::to_string(&CategoryFilter::All).unwrap();
        assert_eq!(json, "\"all\"");

        let parsed: CategoryFilter = serde_json::from_str("\"History\"").unwrap();
        assert_eq!(parsed, CategoryFilter::Only(Category::new("History")));
    }
}
