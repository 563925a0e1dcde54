use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

use retailflow::app::App;
use retailflow::config::{Cli, Command, Config};
use retailflow::database::Database;
use retailflow::logging::init_logging;
use retailflow::ui::ui;
use retailflow_sdk::SavedWorkflows;

fn main() -> Result<()> {
    // .env is optional
    dotenv::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::from_cli(&cli)?;
    let _guard = init_logging(&config.log_dir(), &config.log_level)?;

    match cli.command.unwrap_or(Command::Tui) {
        Command::Tui => run_tui(&config),
        Command::List => list_saved(&config),
        Command::Clear => clear_saved(&config),
    }
}

fn list_saved(config: &Config) -> Result<()> {
    let saved = SavedWorkflows::load(Database::open(config.db_path())?)?;
    println!("{}", serde_json::to_string_pretty(saved.records())?);
    Ok(())
}

fn clear_saved(config: &Config) -> Result<()> {
    let mut saved = SavedWorkflows::load_or_default(Database::open(config.db_path())?)?.0;
    let count = saved.len();
    saved.clear()?;
    tracing::info!(count, "cleared saved workflows from CLI");
    println!("Removed {} saved workflow(s)", count);
    Ok(())
}

fn run_tui(config: &Config) -> Result<()> {
    // Open storage before touching the terminal so errors print normally
    let mut app = App::from_config(config)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run main loop
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        tracing::error!(error = ?err, "TUI exited with error");
    }
    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        // Apply results of finished saves
        app.poll_commands();
        app.notifications.cleanup_expired();

        terminal.draw(|f| ui(f, app))?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key);
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
