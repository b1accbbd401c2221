//! Storage module for the journal database.

pub mod database;
pub mod journal_store;
pub mod schema;

pub use database::{Database, DatabaseError};
pub use journal_store::{JournalStore, StoreError};
