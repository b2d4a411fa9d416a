//! Persistence contracts and SQLite implementations.

pub mod note_repo;
