//! In-memory book catalog: search/filter, add, borrow, return and delete,
//! driven through a single state container and served over a JSON API.

pub mod adapters;
pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
