use chrono::NaiveDate;

use super::{
    BookId, Category,
    book::{Book, BookState},
    catalog::Catalog,
};

fn available(id: u64, title: &str, author: &str, isbn: &str, category: &str) -> Book {
    Book {
        id: BookId::new(id),
        title: title.to_string(),
        author: author.to_string(),
        isbn: isbn.to_string(),
        category: Category::new(category),
        state: BookState::Available,
    }
}

fn borrowed(
    id: u64,
    title: &str,
    author: &str,
    isbn: &str,
    category: &str,
    borrower: &str,
    due_date: (i32, u32, u32),
) -> Book {
    let (year, month, day) = due_date;
    let due_date = NaiveDate::from_ymd_opt(year, month, day).expect("seed due dates are valid");
    Book {
        state: BookState::Borrowed {
            borrower: borrower.to_string(),
            due_date,
        },
        ..available(id, title, author, isbn, category)
    }
}

/// 初期蔵書（8冊、うち2冊が貸出中）
pub fn seed_books() -> Vec<Book> {
    vec![
        available(1, "The Great Gatsby", "F. Scott Fitzgerald", "978-0743273565", "Fiction"),
        borrowed(
            2,
            "To Kill a Mockingbird",
            "Harper Lee",
            "978-0061120084",
            "Fiction",
            "John Doe",
            (2025, 11, 1),
        ),
        available(3, "1984", "George Orwell", "978-0451524935", "Fiction"),
        available(4, "Pride and Prejudice", "Jane Austen", "978-0141439518", "Fiction"),
        available(5, "The Catcher in the Rye", "J.D. Salinger", "978-0316769174", "Fiction"),
        available(6, "A Brief History of Time", "Stephen Hawking", "978-0553380163", "Science"),
        borrowed(
            7,
            "Sapiens",
            "Yuval Noah Harari",
            "978-0062316097",
            "History",
            "Jane Smith",
            (2025, 11, 5),
        ),
        available(8, "Educated", "Tara Westover", "978-0399590504", "Biography"),
    ]
}

pub fn seed_catalog() -> Catalog {
    Catalog::new(seed_books())
}
