use std::path::PathBuf;
use std::time::Duration;

use chrono::NaiveDateTime;
use clap::{Parser, Subcommand};

use http_relay::config::{self, RelayConfig};
use http_relay::todo::{HttpTodoClient, StaticTodoClient, Todo, TodoDraft, TodoService};

#[derive(Parser)]
#[command(name = "relay-cli")]
#[command(about = "Management CLI for the relay's upstream todo API", long_about = None)]
struct Cli {
    /// Upstream base URL. Overrides the config file.
    #[arg(short, long)]
    url: Option<String>,

    /// Relay config file to take the upstream settings from.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Use fixed local data instead of the network.
    #[arg(long)]
    offline: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search todos by keyword
    Search { keyword: String },
    /// Fetch a single todo by id
    Get { id: u32 },
    /// Create a new todo
    Add {
        description: String,
        /// Deadline, e.g. 2025-10-01T12:00:00
        #[arg(long)]
        deadline: NaiveDateTime,
    },
    /// Mark a todo as completed
    Done { id: u32 },
    /// Delete a todo
    Rm { id: u32 },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let service: Box<dyn TodoService> = if cli.offline {
        Box::new(StaticTodoClient)
    } else {
        let upstream = match (&cli.url, &cli.config) {
            (Some(url), _) => {
                let mut upstream = RelayConfig::default().upstream;
                upstream.base_url = url.clone();
                upstream
            }
            (None, Some(path)) => config::load_config(path)?.upstream,
            (None, None) => RelayConfig::default().upstream,
        };
        Box::new(HttpTodoClient::new(
            &upstream.base_url,
            Duration::from_millis(upstream.connect_timeout_ms),
            Duration::from_millis(upstream.read_timeout_ms),
        )?)
    };

    match cli.command {
        Commands::Search { keyword } => {
            let todos = service.search(&keyword).await?;
            print_todos(&todos)?;
        }
        Commands::Get { id } => match service.fetch(id).await? {
            Some(todo) => print_todos(std::slice::from_ref(&todo))?,
            None => eprintln!("todo {} not found", id),
        },
        Commands::Add {
            description,
            deadline,
        } => {
            let draft = TodoDraft {
                description,
                completed: None,
                deadline,
            };
            let location = service.create(&draft).await?;
            println!("created at {}", location);
        }
        Commands::Done { id } => match service.fetch(id).await? {
            Some(todo) => {
                let draft = TodoDraft {
                    description: todo.description,
                    completed: Some(true),
                    deadline: todo.deadline,
                };
                service.update(id, &draft).await?;
                println!("completed {}", id);
            }
            None => eprintln!("todo {} not found", id),
        },
        Commands::Rm { id } => {
            service.remove(id).await?;
            println!("deleted {}", id);
        }
    }

    Ok(())
}

fn print_todos(todos: &[Todo]) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(todos)?);
    Ok(())
}
