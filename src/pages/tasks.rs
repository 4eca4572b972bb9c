//! Tasks page: the authenticated landing route.
//!
//! SYSTEM CONTEXT
//! ==============
//! Lists the user's tasks. The list component only mounts once the guard
//! allows the route, so the fetch always runs with a session token attached.

#[cfg(test)]
#[path = "tasks_test.rs"]
mod tasks_test;

use leptos::prelude::*;

use crate::components::guarded::Guarded;
use crate::net::types::TaskSummary;
use crate::routing::RouteName;

fn status_label(status: &str) -> &'static str {
    match status {
        "todo" => "To Do",
        "in_progress" => "In Progress",
        "done" => "Done",
        "archived" => "Archived",
        _ => "Unknown",
    }
}

fn priority_class(priority: &str) -> &'static str {
    match priority {
        "low" => "task__priority task__priority--low",
        "high" => "task__priority task__priority--high",
        "urgent" => "task__priority task__priority--urgent",
        _ => "task__priority task__priority--medium",
    }
}

/// `(open, done)` task counts.
fn task_counts(tasks: &[TaskSummary]) -> (usize, usize) {
    let done = tasks.iter().filter(|t| t.is_done()).count();
    (tasks.len() - done, done)
}

#[component]
pub fn TasksPage() -> impl IntoView {
    view! {
        <Guarded route=RouteName::Tasks>
            <TaskList/>
        </Guarded>
    }
}

#[component]
fn TaskList() -> impl IntoView {
    let tasks = RwSignal::new(Vec::<TaskSummary>::new());
    let loading = RwSignal::new(true);

    #[cfg(feature = "hydrate")]
    {
        use crate::components::toast_stack::notify;
        use crate::config::ClientConfig;
        use crate::state::session::AuthState;
        use crate::state::toast::{ToastKind, ToastQueue};

        let auth = expect_context::<RwSignal<AuthState>>();
        let toasts = expect_context::<RwSignal<ToastQueue>>();
        let config = expect_context::<ClientConfig>();
        let api_base = StoredValue::new(config.api_base);
        let duration_ms = config.toast_duration_ms;

        Effect::new(move || {
            let session = auth.with(|state| state.store.session().clone());
            if !session.is_authenticated() {
                return;
            }
            let base = api_base.get_value();
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_tasks(&base, &session).await {
                    Ok(list) => tasks.set(list),
                    Err(e) => notify(toasts, format!("Could not load tasks: {e}"), ToastKind::Error, duration_ms),
                }
                loading.set(false);
            });
        });
    }

    let summary = move || {
        let (open, done) = tasks.with(|t| task_counts(t));
        format!("{open} open, {done} done")
    };

    view! {
        <section class="tasks-page">
            <h1>"My Tasks"</h1>
            <p class="tasks-page__summary">{summary}</p>
            <Show when=move || !loading.get() fallback=|| view! { <p class="tasks-page__loading">"Loading tasks..."</p> }>
                <Show
                    when=move || tasks.with(|t| !t.is_empty())
                    fallback=|| view! { <p class="tasks-page__empty">"No tasks yet."</p> }
                >
                    <ul class="task-list">
                        <For
                            each=move || tasks.get()
                            key=|task| task.id
                            children=|task| {
                                let done_class = if task.is_done() { "task task--done" } else { "task" };
                                view! {
                                    <li class=done_class>
                                        <span class=priority_class(&task.priority)></span>
                                        <span class="task__title">{task.title.clone()}</span>
                                        <span class="task__status">{status_label(&task.status)}</span>
                                        {task.due_date.clone().map(|due| view! { <span class="task__due">{due}</span> })}
                                    </li>
                                }
                            }
                        />
                    </ul>
                </Show>
            </Show>
        </section>
    }
}
