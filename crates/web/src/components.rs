//! Leptos components for the todo client

use leptos::*;
use todo_common::{Result, Task, TaskDraft};

// =============================================================================
// Shared Components
// =============================================================================

/// Page-level error banner
#[component]
pub fn ErrorBanner(message: String) -> impl IntoView {
    view! { <div class="error-banner">{message}</div> }
}

/// Empty state component
#[component]
pub fn EmptyState(message: &'static str) -> impl IntoView {
    view! { <p class="no-todos">{message}</p> }
}

/// Loading state component
#[component]
pub fn Loading() -> impl IntoView {
    view! { <div class="loading">"Loading todos..."</div> }
}

/// Completion badge ("Completed" / "Pending")
#[component]
pub fn StatusBadge(completed: bool) -> impl IntoView {
    let class = if completed {
        "badge badge-completed"
    } else {
        "badge badge-pending"
    };
    let label = if completed { "Completed" } else { "Pending" };
    view! { <span class=class>{label}</span> }
}

// =============================================================================
// Creation Form
// =============================================================================

/// Form for composing a new todo.
///
/// Owns the draft fields and the local error line. Submission validates the
/// title, then hands the draft to the shell's creation action; success
/// clears the fields, failure keeps them so the user can retry without
/// retyping. Nothing disables the button while a creation is in flight.
#[component]
pub fn TodoForm(create: Action<TaskDraft, Result<()>>) -> impl IntoView {
    let (title, set_title) = create_signal(String::new());
    let (description, set_description) = create_signal(String::new());
    let (error, set_error) = create_signal(String::new());

    create_effect(move |_| {
        if let Some(result) = create.value().get() {
            match result {
                Ok(()) => {
                    set_title.set(String::new());
                    set_description.set(String::new());
                    set_error.set(String::new());
                }
                Err(_) => {
                    set_error.set("Failed to create todo. Please try again.".to_string());
                }
            }
        }
    });

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        set_error.set(String::new());

        match TaskDraft::from_input(&title.get_untracked(), &description.get_untracked()) {
            Ok(draft) => create.dispatch(draft),
            Err(msg) => set_error.set(msg.to_string()),
        }
    };

    view! {
        <div class="todo-form">
            <h2>"Add New Todo"</h2>
            {move || {
                let msg = error.get();
                (!msg.is_empty()).then(|| view! { <div class="error-message">{msg}</div> })
            }}

            <form on:submit=on_submit>
                <div class="form-group">
                    <input
                        type="text"
                        class="form-input"
                        placeholder="Todo title *"
                        prop:value=move || title.get()
                        on:input=move |ev| set_title.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <textarea
                        class="form-input"
                        placeholder="Description (optional)"
                        rows="3"
                        prop:value=move || description.get()
                        on:input=move |ev| set_description.set(event_target_value(&ev))
                    ></textarea>
                </div>
                <button type="submit" class="btn-primary">"Add Todo"</button>
            </form>
        </div>
    }
}

// =============================================================================
// List View
// =============================================================================

/// Heading shown above the list
pub fn list_heading(count: usize) -> String {
    if count == 0 {
        "My Todos".to_string()
    } else {
        format!("My Todos ({count})")
    }
}

/// Todo list, a pure rendering of its input in the order received
#[component]
pub fn TodoList(todos: Vec<Task>) -> impl IntoView {
    if todos.is_empty() {
        return view! {
            <div class="todo-list">
                <h2>{list_heading(0)}</h2>
                <EmptyState message="No todos yet. Create one above!"/>
            </div>
        }
        .into_view();
    }

    view! {
        <div class="todo-list">
            <h2>{list_heading(todos.len())}</h2>
            <ul class="todos-container">
                {todos
                    .into_iter()
                    .map(|todo| view! { <TodoItem todo=todo/> })
                    .collect_view()}

            </ul>
        </div>
    }
    .into_view()
}

#[component]
fn TodoItem(todo: Task) -> impl IntoView {
    view! {
        <li class="todo-item">
            <div class="todo-content">
                <h3 class="todo-title">{todo.title.clone()}</h3>
                {todo
                    .has_description()
                    .then(|| {
                        view! {
                            <p class="todo-description">
                                {todo.description.clone().unwrap_or_default()}
                            </p>
                        }
                    })}

                <small class="todo-date">"Created: " {todo.created_display()}</small>
            </div>
            <div class="todo-status">
                <StatusBadge completed=todo.completed/>
            </div>
        </li>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_heading_shows_count() {
        assert_eq!(list_heading(1), "My Todos (1)");
        assert_eq!(list_heading(12), "My Todos (12)");
    }

    #[test]
    fn test_list_heading_without_count_when_empty() {
        assert_eq!(list_heading(0), "My Todos");
    }
}
