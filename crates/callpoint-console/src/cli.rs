/*
[INPUT]:  Operator keystrokes and the live task snapshot feed.
[OUTPUT]: Dispatched lines, interactive parameter collection, rendered tasks.
[POS]:    CLI presentation flow - line loop and resolution prompt.
[UPDATE]: When prompt flow or task rendering changes.
*/

use anyhow::{Context, Result};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use console::style;
use dialoguer::{Confirm, Input, theme::ColorfulTheme};
use std::io::Write as _;
use tokio::io::{AsyncBufReadExt, BufReader};

use callpoint_console::notify::{Notification, NotificationSink, Severity};
use callpoint_console::session::{ConsoleSession, LineOutcome};
use callpoint_console::dispatch::PendingResolution;
use callpoint_console::poller::TaskSnapshot;

use callpoint_adapter::Task;

/// Sink that renders notifications straight to the terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct TermSink;

impl NotificationSink for TermSink {
    fn publish(&self, note: Notification) {
        let line = match note.severity {
            Severity::Success => style(format!("[+] {}", note.text)).green(),
            Severity::Warning => style(format!("[!] {}", note.text)).yellow(),
            Severity::Error => style(format!("[x] {}", note.text)).red(),
        };
        println!("{line}");
    }
}

/// Run the operator line loop until EOF or `exit`.
pub async fn run_console(session: &mut ConsoleSession) -> Result<()> {
    let mut tasks_rx = session.tasks();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!(
        "{}",
        style(format!(
            "Callback {} bound; {} commands loaded. Type a command, or 'exit' to quit.",
            session.callback_id(),
            session.catalog().len()
        ))
        .cyan()
    );

    loop {
        if tasks_rx.has_changed().unwrap_or(false) {
            let snapshot = tasks_rx.borrow_and_update().clone();
            render_tasks(&snapshot);
        }

        print!("{} ", style(">").bold());
        std::io::stdout().flush().ok();

        let Some(raw_line) = lines.next_line().await.context("read operator input")? else {
            break;
        };

        let trimmed = raw_line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed == "exit" {
            break;
        }

        if let LineOutcome::AwaitingResolution(token) = session.handle_line(&raw_line).await {
            let pending = session
                .pending_resolution(token)
                .cloned()
                .context("pending resolution vanished")?;

            match collect_parameters(&pending)? {
                Some((params, files)) => {
                    let command = pending.command.cmd.clone();
                    session
                        .complete_resolution(token, command, params, files)
                        .await?;
                }
                None => {
                    session.cancel_resolution(token);
                }
            }
        }
    }

    Ok(())
}

/// Prompt for each declared parameter of a suspended dispatch.
///
/// Returns `None` when the operator declines to submit. File parameters are
/// read from disk and carried as a base64 payload; all collected values are
/// keyed by parameter id in the params JSON object.
fn collect_parameters(pending: &PendingResolution) -> Result<Option<(String, Option<String>)>> {
    let theme = ColorfulTheme::default();
    println!(
        "{}",
        style(format!(
            "{} needs parameters (typed: '{}')",
            pending.command.cmd, pending.typed_line
        ))
        .cyan()
    );

    let mut values = serde_json::Map::new();
    let mut file_payloads: Vec<String> = Vec::new();

    for parameter in &pending.command.parameters {
        if parameter.parameter_type.is_file() {
            let path: String = Input::with_theme(&theme)
                .with_prompt(format!("parameter {} (file path)", parameter.id))
                .interact_text()?;
            let contents = std::fs::read(&path)
                .with_context(|| format!("read file parameter from {path}"))?;
            file_payloads.push(BASE64.encode(contents));
            values.insert(parameter.id.to_string(), serde_json::Value::String(path));
        } else {
            let value: String = Input::with_theme(&theme)
                .with_prompt(format!("parameter {}", parameter.id))
                .allow_empty(true)
                .interact_text()?;
            values.insert(parameter.id.to_string(), serde_json::Value::String(value));
        }
    }

    let confirmed = Confirm::with_theme(&theme)
        .with_prompt("Submit task?")
        .default(true)
        .interact()?;
    if !confirmed {
        return Ok(None);
    }

    let params = serde_json::Value::Object(values).to_string();
    let files = if file_payloads.is_empty() {
        None
    } else {
        Some(file_payloads.join(","))
    };

    Ok(Some((params, files)))
}

fn render_tasks(snapshot: &TaskSnapshot) {
    for task in &snapshot.tasks {
        println!("{}", format_task(task));
    }
}

fn format_task(task: &Task) -> String {
    let command = task
        .command
        .as_ref()
        .map(|c| c.cmd.as_str())
        .unwrap_or("<deleted>");
    let state = if task.completed {
        "done"
    } else {
        task.status.as_str()
    };
    let gates = if task.opsec_blocked() {
        " [opsec blocked]"
    } else if task.opsec_pre_bypassed || task.opsec_post_bypassed {
        " [opsec bypassed]"
    } else {
        ""
    };

    format!(
        "#{} {} {} ({}, {} responses){}",
        task.id,
        command,
        task.display_params,
        state,
        task.responses.len(),
        gates
    )
}
