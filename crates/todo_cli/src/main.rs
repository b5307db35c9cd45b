//! Command-line entry point.
//!
//! # Responsibility
//! - Run the administrator bootstrap against a database file.
//! - Offer a generic CRUD scaffold over to-do items.
//! - Map failures to a non-zero exit status.

use clap::{Parser, Subcommand};
use log::error;
use std::path::PathBuf;
use std::process::ExitCode;
use todo_core::db::open_db;
use todo_core::{
    core_version, default_log_level, ensure_admin_user, init_logging, AdminAccount, SeedOutcome,
    SqliteTodoRepository, TodoItemId, TodoListQuery, TodoService,
};

#[derive(Debug, Parser)]
#[command(name = "todo", version, about = "To-do store and admin bootstrap")]
struct Cli {
    /// SQLite database file.
    #[arg(long, env = "TODO_DB_PATH", default_value = "todo.db")]
    db: PathBuf,

    /// Absolute directory for rotating log files; logging is off when unset.
    #[arg(long, env = "TODO_LOG_DIR")]
    log_dir: Option<PathBuf>,

    /// Log level for the file logger; only valid together with `--log-dir`.
    #[arg(long, env = "TODO_LOG_LEVEL", requires = "log_dir")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Create the administrator account if no user exists yet.
    Seed,
    /// Add a to-do item.
    Add {
        text: String,
        #[arg(long)]
        done: bool,
    },
    /// List to-do items.
    List {
        #[arg(long, conflicts_with = "done")]
        pending: bool,
        #[arg(long)]
        done: bool,
        #[arg(long)]
        limit: Option<u32>,
        #[arg(long, default_value_t = 0)]
        offset: u32,
    },
    /// Show one item.
    Show { id: TodoItemId },
    /// Flip the completion flag of an item.
    Toggle { id: TodoItemId },
    /// Replace the text of an item.
    Edit { id: TodoItemId, text: String },
    /// Delete an item permanently.
    Delete { id: TodoItemId },
    /// Print the core version.
    Version,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(log_dir) = &cli.log_dir {
        let level = cli.log_level.as_deref().unwrap_or_else(|| default_log_level());
        if let Err(err) = init_logging(level, log_dir) {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=cli_exit module=cli status=error error={err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    if let Command::Version = cli.command {
        println!("todo_core version={}", core_version());
        return Ok(());
    }

    let logging_enabled = cli.log_dir.is_some();
    let mut conn = open_db(&cli.db)?;

    if let Command::Seed = cli.command {
        let account = AdminAccount::from_env();
        match ensure_admin_user(&mut conn, &account)? {
            SeedOutcome::Created(user) => {
                println!("created administrator `{}`", user.username);
                if let Some(notice) = default_password_notice(&account, logging_enabled) {
                    eprintln!("{notice}");
                }
            }
            SeedOutcome::Skipped { existing_users } => {
                println!("skipped: {existing_users} user(s) already exist");
            }
        }
        return Ok(());
    }

    let service = TodoService::new(SqliteTodoRepository::try_new(&conn)?);
    match cli.command {
        Command::Add { text, done } => {
            let item = service.create_item(text, Some(done))?;
            println!("{}\t{}", item.id, item);
        }
        Command::List {
            pending,
            done,
            limit,
            offset,
        } => {
            let query = TodoListQuery {
                done: match (pending, done) {
                    (true, _) => Some(false),
                    (_, true) => Some(true),
                    _ => None,
                },
                limit,
                offset,
            };
            for item in service.list_items(&query)? {
                println!("{}\t{}", item.id, item);
            }
        }
        Command::Show { id } => {
            println!("{}\t{}", id, service.display_text(id)?);
        }
        Command::Toggle { id } => {
            let item = service.toggle_done(id)?;
            println!("{}\t{}", item.id, item);
        }
        Command::Edit { id, text } => {
            let item = service.edit_text(id, text)?;
            println!("{}\t{}", item.id, item);
        }
        Command::Delete { id } => {
            service.delete_item(id)?;
            println!("deleted {id}");
        }
        Command::Seed | Command::Version => {}
    }

    Ok(())
}

// With logging on, the seeder's own `warn!` already reaches stderr.
fn default_password_notice(account: &AdminAccount, logging_enabled: bool) -> Option<&'static str> {
    if logging_enabled || !account.uses_default_password() {
        return None;
    }
    Some("warning: administrator uses the default password; set TODO_ADMIN_PASSWORD")
}
