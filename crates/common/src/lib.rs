//! Common types for the todo web client
//!
//! Shared between the UI components and the API layer.

pub mod error;
pub mod task;

pub use error::{Error, Result};
pub use task::{Task, TaskDraft, TITLE_REQUIRED};
