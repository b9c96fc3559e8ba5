use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use kanban_board::{Board, FileStorage, KanbanService, Outcome, Storage, StorageConfig};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "kanban")]
#[command(version, about = "Single-board kanban backed by a JSON file")]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to the board document. Overrides KANBAN_DATA_FILE.
    #[arg(long, global = true)]
    data_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the board
    Show,
    /// Append a column
    AddColumn { title: String },
    DeleteColumn { column: String },
    RenameColumn { column: String, title: String },
    /// Append a card to a column
    AddCard { column: String, content: String },
    DeleteCard { column: String, card: String },
    /// Move a card to the end of another column
    MoveCard {
        card: String,
        from: String,
        to: String,
    },
    /// Move a column to the position currently held by another
    ReorderColumn { dragged: String, target: String },
    /// Replace the board with seed data
    Reset,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match cli.data_file {
        Some(path) => StorageConfig::new(path),
        None => StorageConfig::from_env().context("failed to read storage configuration")?,
    }
    .with_root(std::env::current_dir().context("failed to resolve working directory")?);
    let storage = FileStorage::from_config(&config);
    storage
        .initialize()
        .await
        .with_context(|| format!("failed to initialize {}", config.data_file.display()))?;
    let service = KanbanService::new(storage);

    let outcome = match cli.command {
        Commands::Show => {
            print_board(&service.board().await);
            return Ok(());
        }
        Commands::Reset => {
            let board = service.reset().await.context("failed to reset board")?;
            print_board(&board);
            return Ok(());
        }
        Commands::AddColumn { title } => service.add_column(title).await,
        Commands::DeleteColumn { column } => service.delete_column(column.into()).await,
        Commands::RenameColumn { column, title } => {
            service.rename_column(column.into(), title).await
        }
        Commands::AddCard { column, content } => service.add_card(column.into(), content).await,
        Commands::DeleteCard { column, card } => {
            service.delete_card(column.into(), card.into()).await
        }
        Commands::MoveCard { card, from, to } => {
            service.move_card(card.into(), from.into(), to.into()).await
        }
        Commands::ReorderColumn { dragged, target } => {
            service.reorder_column(dragged.into(), target.into()).await
        }
    }
    .context("board change was not saved")?;

    match outcome {
        Outcome::Changed(board) => print_board(&board),
        Outcome::Unchanged => println!("no change"),
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_board(board: &Board) {
    for column in &board.columns {
        println!("{} [{}]", column.title, column.id);
        for card in &column.cards {
            println!("  - {} [{}]", card.content, card.id);
        }
    }
}
