use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use dotenv::dotenv;
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{
    io,
    sync::Arc,
    time::{Duration, Instant},
};
use cli_log::*;
use clap::Parser;

// Import from our local library modules
use product_search::{render_ui, App, Cli, FilterCatalog, HttpBackend, OutputFormat};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    init_cli_log!();
    info!("Starting product search client...");

    let cli = Cli::parse();
    let mut app = build_app(&cli)?;

    if let Some(query) = cli.query.as_deref() {
        app.input = query.to_string();
        app.submit_query();
    }

    if cli.once {
        return run_once(&mut app, cli.format).await;
    }

    let result = run_tui_app(&mut app).await;

    // Restore terminal state even when the loop bailed out early
    disable_raw_mode().ok();
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture).ok();

    if let Err(err) = &result {
        info!("App error: {err:?}");
    }
    result
}

fn build_app(cli: &Cli) -> Result<App> {
    let backend = HttpBackend::new(&cli.endpoint, Duration::from_secs(cli.timeout_secs))?;
    info!("Using search service at {}", cli.endpoint);

    let catalog = match cli.metadata {
        Some(ref path) => {
            let catalog = FilterCatalog::load(path)?;
            info!(
                "Loaded filter catalogue: {} categories, {} brands, {} manufacturers",
                catalog.categories.len(),
                catalog.brands.len(),
                catalog.manufacturers.len()
            );
            catalog
        }
        None => FilterCatalog::default(),
    };

    Ok(App::new(Arc::new(backend), &catalog, cli.mode))
}

/// Headless mode: wait for the startup query and print its cards.
async fn run_once(app: &mut App, format: OutputFormat) -> Result<()> {
    app.settle().await;

    if let Some(ref failure) = app.last_failure {
        return Err(anyhow::anyhow!("{failure}"));
    }

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&app.cards)?),
        OutputFormat::Text if app.cards.is_empty() => println!("No results found."),
        OutputFormat::Text => {
            let cards: Vec<String> = app.cards.iter().map(ToString::to_string).collect();
            println!("{}", cards.join("\n\n"));
        }
    }
    Ok(())
}

async fn run_tui_app(app: &mut App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app).await;

    terminal.show_cursor()?;
    res
}

async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    let tick_rate = Duration::from_millis(product_search::config::TICK_RATE_MS);
    let mut last_data_update = Instant::now();
    let data_update_rate = Duration::from_millis(product_search::config::DATA_UPDATE_RATE_MS);
    let mut last_ui_update = Instant::now();
    let ui_update_rate = Duration::from_millis(product_search::config::UI_UPDATE_RATE_MS);

    loop {
        if event::poll(tick_rate)? {
            match event::read()? {
                Event::Key(key) => {
                    if !app.handle_key_input(key) {
                        return Ok(()); // Exit requested
                    }
                }
                Event::Mouse(mouse) => app.handle_mouse_input(mouse),
                Event::Resize(_, _) => app.needs_redraw = true,
                _ => {}
            }
        }

        // Only poll backend replies periodically, not every loop
        if last_data_update.elapsed() >= data_update_rate {
            app.update();
            last_data_update = Instant::now();
        }

        // Redraw at least once per second, and keep the spinner moving while loading
        let force_redraw = last_ui_update.elapsed() >= ui_update_rate;

        if app.needs_redraw || app.affordances.loading || force_redraw {
            terminal.draw(|f| render_ui(f, app))?;
            app.needs_redraw = false;
            if force_redraw {
                last_ui_update = Instant::now();
            }
        }

        // Backend calls only run on spawned tasks
        tokio::task::yield_now().await;
    }
}
