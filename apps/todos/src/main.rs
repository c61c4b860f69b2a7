//! To-do store demo binary
//!
//! Dispatches a short session against the seeded store and prints the
//! resulting state.

use slicekit_runtime::StoreConfig;
use todos::{configure_store, AppAction, AppStore, SelectedTodoAction, TodoEnvironment, TodoId, TodosAction};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todos=debug,slicekit_runtime=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = StoreConfig::from_env();
    tracing::info!(?config, "Starting to-do store");

    let store = configure_store(TodoEnvironment::default(), config);

    println!("=== To-do Store ===\n");
    print_list(&store).await;

    let ids: Vec<TodoId> = store
        .state(|s| s.todos.iter().map(|t| t.id.clone()).collect())
        .await;
    let [first, second, third] = ids.as_slice() else {
        anyhow::bail!("expected three seed items, found {}", ids.len());
    };

    let session: [AppAction; 5] = [
        TodosAction::create("Learn Rust").into(),
        TodosAction::toggle(third.clone(), true).into(),
        TodosAction::remove(second.clone()).into(),
        TodosAction::edit(first.clone(), "Learn React hooks").into(),
        SelectedTodoAction::select(Some(first.clone())).into(),
    ];

    for action in session {
        println!("\n>>> Sending: {action:?}");
        store.send(action).await?;
    }

    println!();
    print_list(&store).await;

    let state = store.snapshot().await;
    if let Some(selected) = state.selected_todo.resolve(&state.todos) {
        println!("Selected: {}", selected.description);
    }
    println!("Changes: {}", state.counter.value());
    println!("\n{}", serde_json::to_string_pretty(&state)?);

    store.shutdown();
    Ok(())
}

async fn print_list(store: &AppStore) {
    let lines: Vec<String> = store
        .state(|s| {
            s.todos
                .iter()
                .map(|t| format!("[{}] {} ({})", if t.is_complete { 'x' } else { ' ' }, t.description, t.id))
                .collect()
        })
        .await;
    for line in lines {
        println!("{line}");
    }
}
