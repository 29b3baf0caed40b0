//! Command handlers for CLI subcommands.

use std::io::{self, BufRead, Write};

use taskboard_client::{TaskApi, TaskClient};
use taskboard_events::RowEventBus;
use taskboard_models::{TaskRow, TaskStatus};
use taskboard_sync::{RowRepository, SyncConfig, TaskList, TaskListSynchronizer};
use taskboard_ui::{
    ClickOutcome, DeleteConfirmation, DeleteOutcome, NoticeLog, StatusController, TagInput,
};
use tracing::{info, warn};

use crate::board::BoardStore;
use crate::cli::{Cli, Commands, OutputFormat};

/// Result type for command operations.
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Execute a CLI command.
pub fn execute(cli: Cli) -> Result<()> {
    let store = cli.board_store();

    match &cli.command {
        Commands::Show { format } => cmd_show(&store, *format),
        Commands::Apply { id, status, label } => {
            cmd_apply(&store, cli.sync_config(), id, status, label)
        }
        Commands::SetStatus { id, status } => {
            let client = build_client(&cli)?;
            let outcome = block_on(set_status(&store, client, cli.sync_config(), id, status))??;
            report_click(id, outcome)
        }
        Commands::Delete { id, yes } => {
            if !yes && !confirm_prompt(id)? {
                println!("Cancelled.");
                return Ok(());
            }
            let client = build_client(&cli)?;
            let outcome = block_on(delete(&store, &client, id))??;
            report_delete(outcome)
        }
        Commands::Tags { input } => {
            let client = build_client(&cli)?;
            for tag in block_on(suggest_tags(&client, input))?? {
                println!("{}", tag);
            }
            Ok(())
        }
        Commands::Check => cmd_check(&store),
    }
}

fn block_on<F: std::future::Future>(future: F) -> Result<F::Output> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    Ok(runtime.block_on(future))
}

/// Builds the HTTP client. An explicit `--csrf-token` wins over `--cookie`.
pub fn build_client(cli: &Cli) -> Result<TaskClient> {
    let mut client = TaskClient::new(cli.client_config()?)?;
    match (&cli.csrf_token, &cli.cookie) {
        (Some(token), _) => client = client.with_csrf_token(token.clone()),
        (None, Some(cookie)) => client = client.with_cookie_header(cookie),
        (None, None) => {
            warn!("No CSRF token configured; the server will likely refuse POST requests")
        }
    }
    Ok(client)
}

fn confirm_prompt(id: &str) -> Result<bool> {
    print!("Delete task {}? [y/N] ", id);
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}

fn cmd_show(store: &BoardStore, format: OutputFormat) -> Result<()> {
    let list = store.load()?;

    match format {
        OutputFormat::Table => {
            if list.is_empty() {
                println!("No tasks.");
                return Ok(());
            }
            for row in list.rows() {
                println!("{}", format_row(row));
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&list)?),
    }
    Ok(())
}

/// One table line for a row: marker, id, label, due date with style, title.
pub fn format_row(row: &TaskRow) -> String {
    let marker = if row.completed_marker { "x" } else { " " };
    let label = row.status_label.as_deref().unwrap_or(row.status.as_str());
    let due = match &row.due_display {
        Some(display) => match display.style {
            Some(style) => format!("{} ({})", display.text, style.css_class()),
            None => display.text.clone(),
        },
        None => "-".to_string(),
    };
    format!("[{}] {:<8} {:<14} {:<24} {}", marker, row.id, label, due, row.title)
}

/// Applies a server-confirmed status change to the stored board.
pub fn cmd_apply(
    store: &BoardStore,
    config: SyncConfig,
    id: &str,
    status: &str,
    label: &str,
) -> Result<()> {
    let status: TaskStatus = status.parse()?;
    let mut list = store.load()?;

    TaskListSynchronizer::new(config).apply(&mut list, &id.into(), status, label)?;
    store.save(&list)?;

    info!(task_id = %id, status = %status, "Applied status");
    println!("{} -> {}", id, status);
    Ok(())
}

/// Requests a status change and stores the synchronized board.
pub async fn set_status<A: TaskApi>(
    store: &BoardStore,
    api: A,
    config: SyncConfig,
    id: &str,
    status: &str,
) -> Result<ClickOutcome> {
    let mut list = store.load()?;
    let controller = StatusController::new(api, config, RowEventBus::new());
    let mut notices = NoticeLog::new();

    let outcome = controller
        .handle_click(&mut list, &mut notices, &id.into(), status)
        .await;

    for notice in notices.drain() {
        eprintln!("{}", notice);
    }
    if matches!(outcome, ClickOutcome::Applied { .. }) {
        store.save(&list)?;
    }
    Ok(outcome)
}

fn report_click(id: &str, outcome: ClickOutcome) -> Result<()> {
    match outcome {
        ClickOutcome::Applied { label } => {
            println!("{} -> {}", id, label);
            Ok(())
        }
        ClickOutcome::Rejected { message } => Err(format!("server refused: {}", message).into()),
        ClickOutcome::Failed => Err("status request failed".into()),
        ClickOutcome::RowMissing => Err(format!("task {} is not on the board", id).into()),
        ClickOutcome::Ignored => Err("invalid task id or status".into()),
    }
}

/// Deletes a task on the server and removes its row from the stored board.
pub async fn delete<A: TaskApi + ?Sized>(
    store: &BoardStore,
    api: &A,
    id: &str,
) -> Result<DeleteOutcome> {
    let mut list: TaskList = store.load()?;
    let mut dialog = DeleteConfirmation::new(RowEventBus::new());
    let mut notices = NoticeLog::new();

    dialog.request(id.into());
    let outcome = dialog.confirm(api, &mut list, &mut notices).await;

    for notice in notices.drain() {
        eprintln!("{}", notice);
    }
    if matches!(outcome, DeleteOutcome::Deleted(_)) {
        store.save(&list)?;
    }
    Ok(outcome)
}

fn report_delete(outcome: DeleteOutcome) -> Result<()> {
    match outcome {
        DeleteOutcome::Deleted(id) => {
            println!("Deleted task {}", id);
            Ok(())
        }
        DeleteOutcome::RowMissing(id) => {
            println!("Deleted task {} (not on the board)", id);
            Ok(())
        }
        DeleteOutcome::Failed(id) => Err(format!("failed to delete task {}", id).into()),
        DeleteOutcome::NoPending => Ok(()),
    }
}

/// Fetches tag suggestions for the last term of `input`.
pub async fn suggest_tags<A: TaskApi + ?Sized>(api: &A, input: &str) -> Result<Vec<String>> {
    let mut tags = TagInput::new();
    tags.on_input(api, input).await?;
    Ok(tags.suggestions().to_vec())
}

fn cmd_check(store: &BoardStore) -> Result<()> {
    let list = store.load()?;
    if !list.is_well_ordered() {
        let ids: Vec<String> = list.row_ids().iter().map(|id| id.to_string()).collect();
        return Err(format!("board is out of order: {}", ids.join(", ")).into());
    }
    println!("Board OK ({} rows)", list.len());
    Ok(())
}
