mod controller;
mod errors;
mod library_service;
mod state;

pub use controller::LibraryController;
pub use errors::{LibraryApplicationError, Result};
pub use library_service::{
    BORROWER_PROMPT, DELETE_CONFIRMATION, ServiceDependencies, add_book, borrow_book,
    delete_book, return_book, submit_draft,
};
pub use state::{LibraryState, LibraryView};
