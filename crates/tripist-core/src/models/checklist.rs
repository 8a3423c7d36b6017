//! Checklist item model definition.

use serde::{Deserialize, Serialize};

/// Smallest indent a checklist item may carry.
pub const MIN_INDENT: u8 = 1;

/// Largest indent a checklist item may carry.
pub const MAX_INDENT: u8 = 4;

/// A templated checklist entry, loaded once per run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChecklistItem {
    /// Task text, may contain the `DAYS` placeholder
    pub template: String,

    /// Nesting depth within the project, in `[1, 4]`
    pub indent: u8,

    /// Human readable offset, e.g. `2 days before end`
    pub due_expression: String,
}

impl ChecklistItem {
    /// Creates a checklist item.
    pub fn new(template: impl Into<String>, indent: u8, due_expression: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            indent,
            due_expression: due_expression.into(),
        }
    }
}
