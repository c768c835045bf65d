pub mod book;
pub mod catalog;
pub mod commands;
pub mod draft;
pub mod errors;
pub mod events;
pub mod filter;
pub mod seed;
pub mod value_objects;

pub use commands::*;
pub use errors::*;
pub use events::*;
pub use value_objects::*;
