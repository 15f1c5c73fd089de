use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, Event, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{
    io,
    path::{Path, PathBuf},
    sync::Arc,
    time::Duration,
};

use emojifav::{
    catalog::Catalog,
    config::{self, Config},
    logging,
    logic::{self, pagination},
    model,
};

/// Emoji favicon browser
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging to <temp dir>/emojifav-debug.log
    #[arg(short, long, global = true)]
    debug: bool,

    /// Enable vim keybindings (hjkl, gg/G)
    #[arg(long)]
    vim: bool,

    /// Path to config file (default: platform-specific, see docs)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Emoji dataset JSON (default: bundled sample table)
    #[arg(long, global = true)]
    dataset: Option<PathBuf>,

    /// Directory exported favicons are written to
    #[arg(short, long, global = true)]
    output_dir: Option<PathBuf>,

    /// Emoji per page
    #[arg(long, global = true)]
    page_size: Option<usize>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print one page of emoji matching a query
    List {
        /// Search text matched against names and keywords
        #[arg(default_value = "", allow_hyphen_values = true)]
        query: String,

        /// Page to print (1-based)
        #[arg(short, long, default_value = "1")]
        page: usize,
    },

    /// Export an emoji as an SVG favicon
    Export {
        /// Emoji symbol or its exact name (case-insensitive)
        emoji: String,
    },
}

mod app;
mod handlers;
mod ui;

pub struct App {
    pub model: model::Model,

    output_dir: PathBuf,
    clipboard_command: Option<String>,
}

impl App {
    fn new(catalog: Arc<Catalog>, config: &Config) -> Self {
        App {
            model: model::Model::new(catalog, config.page_size, config.vim_mode),
            output_dir: config.resolved_output_dir(),
            clipboard_command: config.clipboard_command.clone(),
        }
    }

    /// Handle keyboard input
    /// Delegated to handlers::keyboard module
    fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        handlers::handle_key(self, key)
    }
}

/// Load config from disk and apply CLI overrides
fn resolve_config(args: &Args) -> Result<Config> {
    let mut config = match config::find_config_path(args.config.as_deref())? {
        Some(path) => {
            log::debug!("Loading config from: {:?}", path);
            Config::load(&path)?
        }
        None => {
            log::debug!("No config file found, using defaults");
            Config::default()
        }
    };

    if args.vim {
        config.vim_mode = true;
    }
    if let Some(dataset) = &args.dataset {
        config.dataset_path = Some(dataset.clone());
    }
    if let Some(output_dir) = &args.output_dir {
        config.output_dir = Some(output_dir.clone());
    }
    if let Some(page_size) = args.page_size {
        if page_size == 0 {
            anyhow::bail!("--page-size must be greater than zero");
        }
        config.page_size = page_size;
    }

    Ok(config)
}

/// Build the catalog once; any dataset problem is fatal
fn load_catalog(dataset_path: Option<&Path>) -> Result<Catalog> {
    let catalog = match dataset_path {
        Some(path) => Catalog::load(path),
        None => Catalog::bundled(),
    }
    .context("Failed to load emoji catalog")?;

    log::info!("Catalog ready with {} emoji", catalog.len());
    Ok(catalog)
}

fn run_list(catalog: &Catalog, page_size: usize, query: &str, page: usize) {
    let view = logic::search::filter(catalog.records(), query);
    let slice = pagination::paginate(&view, page.max(1), page_size);

    if view.is_empty() {
        println!("No emojis found matching your search.");
        return;
    }

    for record in &slice.items {
        if record.keywords.is_empty() {
            println!("{}  {}", record.symbol, record.name);
        } else {
            println!("{}  {}  ({})", record.symbol, record.name, record.keywords.join(", "));
        }
    }
    println!(
        "Page {} of {} ({} matches)",
        slice.page,
        slice.display_total_pages(),
        slice.total_items
    );
}

fn run_export(catalog: &Catalog, output_dir: &Path, emoji: &str) -> Result<()> {
    let record = catalog
        .find_by_symbol(emoji)
        .or_else(|| catalog.find_by_name(emoji))
        .with_context(|| format!("No emoji matching '{}'", emoji))?;

    let path = emojifav::export::export_record(record, output_dir)?;
    println!("Saved {}", path.display());
    Ok(())
}

fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse();

    logging::init(args.debug);

    let config = resolve_config(&args)?;
    let catalog = load_catalog(config.dataset_path.as_deref())?;

    match args.command {
        Some(Command::List { query, page }) => {
            run_list(&catalog, config.page_size, &query, page);
            return Ok(());
        }
        Some(Command::Export { emoji }) => {
            return run_export(&catalog, &config.resolved_output_dir(), &emoji);
        }
        None => {}
    }

    // Initialize app
    let mut app = App::new(Arc::new(catalog), &config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app with error handler
    let result = run_app(&mut terminal, &mut app);

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Return result after cleanup
    result
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| {
            ui::render(f, app);
        })?;

        if app.model.should_dismiss_toast() {
            app.model.dismiss_toast();
        }

        if app.model.ui.should_quit {
            break;
        }

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                // Windows reports releases too
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key)?;
                }
            }
        }
    }

    log::logger().flush();
    Ok(())
}
