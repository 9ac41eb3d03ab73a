//! `todo` command-line front end.
//!
//! Each invocation hydrates the list from the SQLite key-value store, applies
//! one user action through a `TodoSession`, and prints the result.

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use todo_core::{parse_due_date, SqliteStore, TodoItem, TodoListManager, TodoSession, TodoStats};
use uuid::Uuid;

mod config;

use config::RuntimeConfig;

const EMPTY_LIST_NOTICE: &str = "No todos found. Add some tasks!";

#[derive(Parser, Debug)]
#[command(name = "todo", author, version, about = "Keep a persistent todo list")]
struct Cli {
    /// SQLite database holding the list
    #[arg(long, global = true, env = "TODO_DB")]
    db: Option<PathBuf>,

    /// Directory for rolling log files
    #[arg(long, global = true, env = "TODO_LOG_DIR")]
    log_dir: Option<PathBuf>,

    /// trace|debug|info|warn|error
    #[arg(long, global = true, env = "TODO_LOG_LEVEL")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Add a new item at the top of the list
    Add {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
        /// Due date as YYYY-MM-DD
        #[arg(long)]
        due: Option<String>,
    },
    /// Show stats and items
    List {
        /// all|active|completed
        #[arg(long, short, default_value = "all")]
        filter: String,
    },
    /// Flip an item between open and completed
    Toggle { id: Uuid },
    /// Delete an item
    Remove { id: Uuid },
    /// Replace an item's text
    Edit {
        id: Uuid,
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// Show total/completed/pending counters
    Stats,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = RuntimeConfig::resolve(cli.db, cli.log_dir, cli.log_level)?;

    let log_dir = config
        .log_dir
        .to_str()
        .ok_or_else(|| anyhow!("log dir is not valid UTF-8: {}", config.log_dir.display()))?;
    if let Err(err) = todo_core::init_logging(&config.log_level, log_dir) {
        eprintln!("warning: logging disabled: {err}");
    }

    if let Some(parent) = config.db_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    let store = SqliteStore::open(&config.db_path)
        .with_context(|| format!("Failed to open {}", config.db_path.display()))?;
    info!(
        "event=cli_start module=cli status=ok db_path={}",
        config.db_path.display()
    );

    let mut session = TodoSession::new(TodoListManager::load(store));
    run(&mut session, cli.command)
}

fn run(session: &mut TodoSession<SqliteStore>, command: Commands) -> Result<()> {
    match command {
        Commands::Add { text, due } => {
            let due_date = match due.as_deref() {
                Some(raw) => parse_due_date(raw)?,
                None => None,
            };
            session.set_pending_text(text.join(" "));
            session.set_pending_due_date(due_date);
            match session.submit_pending() {
                Some(id) => println!("added {id}"),
                None => println!("nothing added: text is empty"),
            }
        }
        Commands::List { filter } => {
            session.set_filter(filter.as_str());
            print_stats(&session.stats());
            print_items(&session.visible_items());
        }
        Commands::Toggle { id } => {
            if !session.toggle(id) {
                println!("no todo with id {id}");
            } else if let Some(item) = session.manager().get(id) {
                println!("{}", format_item(item));
            }
        }
        Commands::Remove { id } => {
            if session.remove(id) {
                println!("removed {id}");
            } else {
                println!("no todo with id {id}");
            }
        }
        Commands::Edit { id, text } => {
            if !session.start_edit(id) {
                println!("no todo with id {id}");
                return Ok(());
            }
            session.set_edit_text(text.join(" "));
            if session.commit_edit() {
                println!("updated {id}");
            } else {
                session.cancel_edit();
                println!("not updated: text is empty");
            }
        }
        Commands::Stats => print_stats(&session.stats()),
    }
    Ok(())
}

fn print_stats(stats: &TodoStats) {
    println!(
        "total={} completed={} pending={}",
        stats.total, stats.completed, stats.pending
    );
}

fn print_items(items: &[&TodoItem]) {
    if items.is_empty() {
        println!("{EMPTY_LIST_NOTICE}");
        return;
    }
    for item in items {
        println!("{}", format_item(item));
    }
}

fn format_item(item: &TodoItem) -> String {
    let mark = if item.completed { 'x' } else { ' ' };
    let mut line = format!("[{mark}] {} {}", item.id, item.text);
    if let Some(due) = item.due_date {
        line.push_str(&format!(" (due {due})"));
    }
    line
}
