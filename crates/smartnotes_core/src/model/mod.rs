//! Domain model for notes and user-facing value types.
//!
//! # Responsibility
//! - Define the canonical data structures used by core business logic.
//! - Keep model types immutable-by-convention: mutation produces a new
//!   value instead of editing in place.
//!
//! # Invariants
//! - Every note and photo carries a stable id that is never reused.
//! - List identity is defined by id, not by content.

pub mod note;
pub mod photo;
pub mod view_type;
