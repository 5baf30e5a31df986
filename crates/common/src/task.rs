//! Task domain types
//!
//! `Task` is the backend's canonical record; `TaskDraft` is the unsaved
//! title/description pair composed in the form. Wire names are camelCase to
//! match the backend's JSON.

use serde::{Deserialize, Serialize};

/// Validation message shown when the title is empty or whitespace-only.
pub const TITLE_REQUIRED: &str = "Title is required";

/// A persisted todo as returned by the backend.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Task {
    pub id: i64,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub completed: bool,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

impl Task {
    /// Label for the completion badge
    pub fn status_label(&self) -> &'static str {
        if self.completed {
            "Completed"
        } else {
            "Pending"
        }
    }

    /// Whether there is a description worth rendering (absent and empty
    /// both mean no)
    pub fn has_description(&self) -> bool {
        self.description.as_deref().is_some_and(|d| !d.is_empty())
    }

    /// Human-readable rendering of `created_at`.
    ///
    /// The backend sends an ISO-8601 local timestamp; anything that fails to
    /// parse is shown as received rather than dropped.
    pub fn created_display(&self) -> String {
        chrono::NaiveDateTime::parse_from_str(&self.created_at, "%Y-%m-%dT%H:%M:%S%.f")
            .map(|dt| dt.format("%b %-d, %Y, %-I:%M %p").to_string())
            .unwrap_or_else(|_| self.created_at.clone())
    }
}

/// The unsaved title/description pair composed in the form.
///
/// Serialized as the POST body; the backend fills in everything else.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
}

impl TaskDraft {
    /// Validation gate for form submission.
    ///
    /// Rejects a whitespace-only title with [`TITLE_REQUIRED`]; otherwise
    /// passes the entered values through untrimmed.
    pub fn from_input(title: &str, description: &str) -> Result<Self, &'static str> {
        if title.trim().is_empty() {
            return Err(TITLE_REQUIRED);
        }
        Ok(Self {
            title: title.to_string(),
            description: description.to_string(),
        })
    }
}
