//! SQLite storage backend.

mod conversions;
mod error;
mod repository;
mod schema;

pub use repository::SqliteRepository;
