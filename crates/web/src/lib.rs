//! Leptos web client for the todo backend
//!
//! Client-side rendered single page: a creation form on top, the todo list
//! below, all state held in memory for the lifetime of the page.

pub mod api;
pub mod app;
pub mod components;
