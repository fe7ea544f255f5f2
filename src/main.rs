use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use menu_board::api::MenuClient;
use menu_board::backend::{LocalBackend, MenuBackend, RemoteBackend};
use menu_board::cli::{self, TerminalPrompter};
use menu_board::config::{BackendKind, Config};
use menu_board::controller::Controller;
use menu_board::models::Category;
use menu_board::render::render_view;
use menu_board::storage::SqliteStorage;
use menu_board::store::MenuStore;

#[derive(Parser)]
#[command(name = "menuboard")]
#[command(about = "Manage a café menu by category")]
struct Cli {
    /// Where the menu is kept
    #[arg(long, value_enum)]
    backend: Option<BackendKind>,

    /// Base URL of the menu API (remote backend)
    #[arg(long)]
    url: Option<String>,

    /// SQLite file (local backend)
    #[arg(long)]
    db: Option<std::path::PathBuf>,

    /// Category to open
    #[arg(short, long)]
    category: Option<Category>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive menu editor
    Repl {
        /// Also print the list markup after each render
        #[arg(long)]
        html: bool,
    },
    /// Print one category and exit
    List {
        #[arg(long)]
        html: bool,
    },
}

/// Logs go to stderr so stdout carries only rendered menus.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "menu_board=info".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut config = Config::load();
    if let Some(backend) = cli.backend {
        config.backend = backend;
    }
    if let Some(url) = cli.url {
        config.api_url = url;
    }
    if let Some(db) = cli.db {
        config.database = Some(db);
    }
    if let Some(category) = cli.category {
        config.category = category;
    }

    let command = cli.command.unwrap_or(Commands::Repl { html: false });

    match config.backend {
        BackendKind::Remote => {
            tracing::info!("Using menu API at {}", config.api_url);
            let client = MenuClient::new(config.api_url.clone(), config.api_key.clone());
            run(RemoteBackend::new(client), config.category, command).await
        }
        BackendKind::Local => {
            let storage = match config.database {
                Some(path) => SqliteStorage::open(path)?,
                None => SqliteStorage::open_default()?,
            };
            storage.migrate()?;
            run(LocalBackend::new(storage), config.category, command).await
        }
    }
}

async fn run<B: MenuBackend>(
    backend: B,
    category: Category,
    command: Commands,
) -> anyhow::Result<()> {
    let store = Arc::new(MenuStore::with_category(backend, category));

    match command {
        Commands::Repl { html } => {
            let mut controller = Controller::new(store, TerminalPrompter);
            cli::run_repl(&mut controller, html).await?;
        }
        Commands::List { html } => {
            let items = store.set_current_category(category).await?;
            cli::print_view(&render_view(category, items), html);
        }
    }

    Ok(())
}
