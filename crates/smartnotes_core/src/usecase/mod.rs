//! Use-case facades consumed by the view models.
//!
//! # Responsibility
//! - Bundle repositories, the file explorer and the preference store
//!   behind intent-level operations.
//! - Stay free of presentation state; response wrapping happens in the
//!   view-model layer.

pub mod note_usecase;
pub mod user_usecase;
