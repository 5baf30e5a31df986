//! HTTP client for the todo backend
//!
//! Two calls, one request each, no retry and no caching. Failures are
//! logged to the console and handed back to the caller.

use todo_common::{Result, Task, TaskDraft};

#[cfg(not(target_arch = "wasm32"))]
use todo_common::Error;

/// Fallback when `TODO_API_URL` is not set at build time.
const DEFAULT_API_BASE: &str = "http://localhost:8080/api";

/// Base URL for the backend API, set at build time via `TODO_API_URL`.
pub fn api_base() -> &'static str {
    option_env!("TODO_API_URL").unwrap_or(DEFAULT_API_BASE)
}

fn endpoint(path: &str) -> String {
    format!(
        "{}/{}",
        api_base().trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Fetch the full todo list as currently known to the backend.
pub async fn list_todos() -> Result<Vec<Task>> {
    let result = get_json(&endpoint("todos")).await;
    if let Err(e) = &result {
        leptos::logging::error!("Error fetching todos: {e}");
    }
    result
}

/// Send a draft to the backend and return its canonical record,
/// with the assigned id and creation timestamp.
pub async fn create_todo(draft: &TaskDraft) -> Result<Task> {
    let result = post_json(&endpoint("todos"), draft).await;
    if let Err(e) = &result {
        leptos::logging::error!("Error creating todo: {e}");
    }
    result
}

#[cfg(target_arch = "wasm32")]
async fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T> {
    use gloo_net::http::Request;
    use todo_common::Error;

    let resp = Request::get(url)
        .send()
        .await
        .map_err(|e| Error::Transport(e.to_string()))?;
    decode(resp).await
}

#[cfg(target_arch = "wasm32")]
async fn post_json<T, B>(url: &str, body: &B) -> Result<T>
where
    T: serde::de::DeserializeOwned,
    B: serde::Serialize,
{
    use gloo_net::http::Request;
    use todo_common::Error;

    let resp = Request::post(url)
        .json(body)
        .map_err(|e| Error::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| Error::Transport(e.to_string()))?;
    decode(resp).await
}

#[cfg(target_arch = "wasm32")]
async fn decode<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T> {
    use todo_common::Error;

    // 200 and 201 are both success; the backend answers POST with 201
    if !resp.ok() {
        return Err(Error::Status(resp.status()));
    }
    resp.json().await.map_err(|e| Error::Decode(e.to_string()))
}

// Fetch only exists in the browser; these keep native builds and tests
// compiling.

#[cfg(not(target_arch = "wasm32"))]
async fn get_json<T: serde::de::DeserializeOwned>(_url: &str) -> Result<T> {
    Err(Error::Transport(
        "no fetch transport outside the browser".to_string(),
    ))
}

#[cfg(not(target_arch = "wasm32"))]
async fn post_json<T, B>(_url: &str, _body: &B) -> Result<T>
where
    T: serde::de::DeserializeOwned,
    B: serde::Serialize,
{
    Err(Error::Transport(
        "no fetch transport outside the browser".to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_base_and_path() {
        assert_eq!(endpoint("todos"), format!("{}/todos", api_base()));
    }

    #[test]
    fn test_endpoint_normalizes_slashes() {
        assert_eq!(endpoint("/todos"), endpoint("todos"));
    }
}
