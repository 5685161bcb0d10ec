//! Terminal client for the todo RPC server.
//!
//! Each command loads the list from the server, performs one call, and
//! prints the reconciled list:
//!
//! ```text
//! todo list
//! todo add Buy milk
//! todo toggle 3
//! todo rename 3 Buy oat milk
//! todo done 3
//! todo undo 3
//! todo remove 3
//! todo show 3
//! ```
//!
//! The server URL comes from `--server` or `TODO_SERVER`. Failed calls are
//! logged and the process exits with a non-zero status.

use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::process::ExitCode;
use todolist::{
    client::{ClientError, RpcClient, TodoSession, view},
    config::ClientArgs,
    telemetry,
    todo::domain::TodoId,
};

#[derive(Debug, Parser)]
#[command(name = "todo", about = "Manage todos on a todo RPC server", version)]
struct Cli {
    #[command(flatten)]
    connection: ClientArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List every todo, newest first.
    List,
    /// Add a todo.
    Add {
        /// Title of the new todo; words are joined with spaces.
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,
    },
    /// Flip a todo between pending and completed.
    Toggle {
        /// Todo identifier.
        id: i32,
    },
    /// Replace the title of a todo.
    Rename {
        /// Todo identifier.
        id: i32,
        /// New title; words are joined with spaces.
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,
    },
    /// Mark a todo as completed.
    Done {
        /// Todo identifier.
        id: i32,
    },
    /// Mark a todo as pending.
    Undo {
        /// Todo identifier.
        id: i32,
    },
    /// Delete a todo.
    Remove {
        /// Todo identifier.
        id: i32,
    },
    /// Show one todo with both timestamps.
    Show {
        /// Todo identifier.
        id: i32,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let env_file = dotenvy::dotenv();
    let cli = Cli::parse();
    if let Err(err) = telemetry::init("warn") {
        let _ignored = writeln!(io::stderr(), "{err}");
    }
    match env_file {
        Ok(path) => tracing::debug!(path = %path.display(), "loaded environment file"),
        Err(err) if err.not_found() => {}
        Err(err) => tracing::warn!(error = %err, "failed to load environment file"),
    }

    let rendered = match run(cli).await {
        Ok(rendered) => rendered,
        Err(err) => {
            let _ignored = writeln!(io::stderr(), "error: {err}");
            return ExitCode::FAILURE;
        }
    };

    match writeln!(io::stdout().lock(), "{rendered}") {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}

async fn run(cli: Cli) -> Result<String, ClientError> {
    let mut session = TodoSession::new(RpcClient::new(cli.connection.server));
    session.load().await?;

    match cli.command {
        Command::List => {}
        Command::Add { title } => {
            session.add(&title.join(" ")).await?;
        }
        Command::Toggle { id } => {
            session.toggle(TodoId::new(id)).await?;
        }
        Command::Rename { id, title } => {
            session.rename(TodoId::new(id), &title.join(" ")).await?;
        }
        Command::Done { id } => {
            session.set_completed(TodoId::new(id), true).await?;
        }
        Command::Undo { id } => {
            session.set_completed(TodoId::new(id), false).await?;
        }
        Command::Remove { id } => {
            session.remove(TodoId::new(id)).await?;
        }
        Command::Show { id } => {
            let todo = session.show(TodoId::new(id)).await?;
            return Ok(format!(
                "{}\nupdated {}",
                view::render_todo(&todo),
                todo.updated_at().to_rfc3339()
            ));
        }
    }

    Ok(view::render_list(session.todos()))
}
