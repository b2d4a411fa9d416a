//! List presentation preference.

use serde::{Deserialize, Serialize};

/// How the notes overview is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewType {
    /// One note per row.
    #[default]
    List,
    /// Grid of note cards.
    Grid,
}
