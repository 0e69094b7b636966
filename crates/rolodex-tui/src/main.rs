mod actions;
mod app;
mod system;
mod ui;

use std::io::{self, Stdout};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context as _, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::actions::execute_action;
use crate::app::App;
use rolodex_config::AppConfig;
use rolodex_store::{paths, ContactBook, LoadOutcome, Store};
use rolodex_sync::{FileSeedSource, HttpSeedSource, SeedSource};

#[derive(Debug, Parser)]
#[command(name = "rolodex-tui", version, about = "rolodex TUI")]
struct Args {
    #[arg(long)]
    db_path: Option<PathBuf>,
    #[arg(long)]
    config: Option<PathBuf>,
    /// Seed an empty store from this JSON file instead of the seed URL
    #[arg(long, value_name = "PATH")]
    seed_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = rolodex_config::load(args.config).with_context(|| "load config")?;
    let db_path = paths::resolve_db_path(args.db_path).with_context(|| "resolve database path")?;
    let store = Store::open(&db_path)
        .with_context(|| format!("open database {}", db_path.display()))?;
    store.migrate().with_context(|| "run migrations")?;

    let mut app = App::new(config.search.debounce(), config.ui.theme);
    let mut terminal = TerminalGuard::new()?;
    terminal.terminal_mut().draw(|frame| ui::draw(frame, &app))?;

    let (mut book, outcome) = load_book(store, &config, args.seed_file)?;
    app.finish_loading(&outcome);
    run_app(&mut terminal, &mut book, &mut app)
}

fn load_book(
    store: Store,
    config: &AppConfig,
    seed_file: Option<PathBuf>,
) -> Result<(ContactBook, LoadOutcome)> {
    let source: Option<Box<dyn SeedSource>> = match seed_file {
        Some(path) => Some(Box::new(FileSeedSource::new(path))),
        None if config.seed.enabled => Some(Box::new(HttpSeedSource::new(
            config.seed.url.clone(),
            config.seed.timeout(),
        ))),
        None => None,
    };
    let loaded = match source {
        Some(source) => ContactBook::load(store, || source.fetch_seed()),
        None => ContactBook::load_without_seed(store),
    };
    loaded.with_context(|| "load contacts")
}

fn run_app(terminal: &mut TerminalGuard, book: &mut ContactBook, app: &mut App) -> Result<()> {
    let tick_rate = Duration::from_millis(200);
    let mut last_tick = Instant::now();

    loop {
        app.poll_search(Instant::now());
        while let Some(action) = app.next_action() {
            if let Err(err) = execute_action(app, book, action) {
                app.set_error(err.to_string());
            }
        }

        terminal.terminal_mut().draw(|frame| ui::draw(frame, app))?;

        if app.should_quit {
            break;
        }

        let mut timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::from_secs(0));
        if let Some(remaining) = app.search_timeout(Instant::now()) {
            timeout = timeout.min(remaining);
        }
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => app.handle_key(key),
                Event::Resize(_, _) => {}
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_rate {
            last_tick = Instant::now();
        }
    }

    Ok(())
}

struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalGuard {
    fn new() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;

        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = restore_terminal();
            original_hook(info);
        }));

        Ok(Self { terminal })
    }

    fn terminal_mut(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = restore_terminal();
    }
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}
