//! Application shell
//!
//! Owns the authoritative todo collection and the load status, fetches the
//! list once at startup, and hands the form a creation action that appends
//! to the collection on success.

use leptos::*;
use todo_common::{Result, Task, TaskDraft};

use crate::api;
use crate::components::{ErrorBanner, Loading, TodoForm, TodoList};

/// Banner shown when the initial load fails.
pub const LOAD_FAILED: &str = "Failed to load todos. Please check if the backend is running.";

#[component]
pub fn App() -> impl IntoView {
    let (todos, set_todos) = create_signal(Vec::<Task>::new());
    let (loading, set_loading) = create_signal(true);
    let (error, set_error) = create_signal(String::new());

    // Exactly one fetch at startup. On failure the collection is cleared
    // rather than left stale, and the banner replaces the list.
    spawn_local(async move {
        let (list, banner) = load_outcome(api::list_todos().await);
        set_todos.set(list);
        set_error.set(banner);
        set_loading.set(false);
    });

    // Creation failures stay with the form; the shell shows no banner for
    // them.
    let create = create_action(move |draft: &TaskDraft| {
        let draft = draft.clone();
        async move { create_and_append(draft, set_todos).await }
    });

    view! {
        <div class="app">
            <header class="app-header">
                <h1>"Todo App"</h1>
                <p>"Create and keep track of your tasks"</p>
            </header>

            <main class="app-main">
                {move || {
                    let msg = error.get();
                    (!msg.is_empty()).then(|| view! { <ErrorBanner message=msg/> })
                }}

                <TodoForm create=create/>

                {move || {
                    if loading.get() {
                        view! { <Loading/> }.into_view()
                    } else if error.with(|e| e.is_empty()) {
                        view! { <TodoList todos=todos.get()/> }.into_view()
                    } else {
                        // Initial load failed: banner only, no list
                        ().into_view()
                    }
                }}

            </main>

            <footer class="app-footer">
                <p>"Create & read - todos live on the backend"</p>
            </footer>
        </div>
    }
}

/// Outcome of the startup fetch: the collection to store and the banner
/// text, empty when the load succeeded.
fn load_outcome(result: Result<Vec<Task>>) -> (Vec<Task>, String) {
    match result {
        Ok(list) => (list, String::new()),
        Err(_) => (Vec::new(), LOAD_FAILED.to_string()),
    }
}

/// Create a todo on the backend and append the returned record to the
/// collection. The error flows back through the action to the form.
async fn create_and_append(draft: TaskDraft, set_todos: WriteSignal<Vec<Task>>) -> Result<()> {
    let todo = api::create_todo(&draft).await?;
    set_todos.update(|todos| append_created(todos, todo));
    Ok(())
}

/// Newly created todos go at the end; order is otherwise untouched.
fn append_created(todos: &mut Vec<Task>, todo: Task) {
    todos.push(todo);
}

#[cfg(test)]
mod tests {
    use super::*;
    use todo_common::Error;

    fn make_task(id: i64, title: &str) -> Task {
        Task {
            id,
            title: title.to_string(),
            description: None,
            completed: false,
            created_at: "2024-01-01T00:00:00".to_string(),
        }
    }

    #[test]
    fn test_load_failure_clears_collection_and_sets_banner() {
        let (todos, banner) =
            load_outcome(Err(Error::Transport("connection refused".to_string())));
        assert!(todos.is_empty());
        assert_eq!(banner, LOAD_FAILED);
    }

    #[test]
    fn test_load_success_stores_list_and_clears_banner() {
        let list = vec![make_task(1, "A"), make_task(2, "B")];
        let (todos, banner) = load_outcome(Ok(list.clone()));
        assert_eq!(todos, list);
        assert_eq!(banner, "");
    }

    #[test]
    fn test_created_todo_appended_after_existing_entries() {
        let mut todos = vec![make_task(1, "A"), make_task(2, "B")];
        let created = Task {
            id: 3,
            title: "Buy milk".to_string(),
            description: Some(String::new()),
            completed: false,
            created_at: "2024-02-01T00:00:00".to_string(),
        };

        append_created(&mut todos, created.clone());

        assert_eq!(todos.len(), 3);
        assert_eq!(todos[2], created);
        assert_eq!(todos[0].id, 1);
        assert_eq!(todos[1].id, 2);
    }
}
