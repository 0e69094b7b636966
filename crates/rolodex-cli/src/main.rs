mod commands;
mod error;
mod util;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use crate::commands::{codes, completions, contacts, features, tui, Context};
use crate::error::{exit_code_for, report_error};
use rolodex_config as config;
use rolodex_config::AppConfig;
use rolodex_store::{paths, ContactBook, LoadOutcome, Store};
use rolodex_sync::{FileSeedSource, HttpSeedSource, SeedSource};

#[derive(Debug, Parser)]
#[command(name = "rolodex", version, about = "rolodex contact book CLI")]
struct Cli {
    #[arg(long, global = true)]
    db_path: Option<PathBuf>,
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Seed an empty store from this JSON file instead of the seed URL
    #[arg(long, global = true, value_name = "PATH")]
    seed_file: Option<PathBuf>,
    #[arg(long, global = true)]
    json: bool,
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List contacts grouped by first letter
    List(contacts::ListArgs),
    Show(contacts::ShowArgs),
    Add(contacts::AddArgs),
    Edit(contacts::EditArgs),
    Delete(contacts::DeleteArgs),
    /// Print the dialing-code table
    Codes,
    Features,
    /// Generate shell completions
    Completions(completions::CompletionsArgs),
    Tui,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    init_logging(verbose);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, verbose);
            exit_code_for(&err)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        db_path,
        config: config_path,
        seed_file,
        json,
        verbose,
        command,
    } = cli;

    match command {
        Command::Tui => tui::launch(db_path, config_path, seed_file, verbose),
        Command::Completions(args) => completions::emit(args),
        Command::Codes => codes::list_codes(json),
        Command::Features => features::list_features(json),
        command => {
            let app_config = config::load(config_path.clone()).with_context(|| "load config")?;
            if verbose {
                match config::resolve_config_path(config_path.clone()) {
                    Ok(path) => {
                        if path.exists() {
                            debug!(path = %path.display(), "config resolved");
                        } else {
                            debug!(path = %path.display(), "config missing, using defaults");
                        }
                    }
                    Err(err) => {
                        debug!(error = %err, "config unavailable");
                    }
                }
            }
            let db_path =
                paths::resolve_db_path(db_path).with_context(|| "resolve database path")?;
            debug!(path = %db_path.display(), "database path resolved");

            let store = Store::open(&db_path)
                .with_context(|| format!("open database {}", db_path.display()))?;
            store.migrate().with_context(|| "run migrations")?;
            let mut book = load_book(store, &app_config, seed_file)?;

            let mut ctx = Context {
                book: &mut book,
                json,
            };

            match command {
                Command::List(args) => contacts::list_contacts(&ctx, args),
                Command::Show(args) => contacts::show_contact(&ctx, args),
                Command::Add(args) => contacts::add_contact(&mut ctx, args),
                Command::Edit(args) => contacts::edit_contact(&mut ctx, args),
                Command::Delete(args) => contacts::delete_contact(&mut ctx, args),
                Command::Tui
                | Command::Completions(_)
                | Command::Codes
                | Command::Features => {
                    unreachable!("command handled before store initialization")
                }
            }
        }
    }
}

fn load_book(store: Store, config: &AppConfig, seed_file: Option<PathBuf>) -> Result<ContactBook> {
    let source: Option<Box<dyn SeedSource>> = match seed_file {
        Some(path) => Some(Box::new(FileSeedSource::new(path))),
        None if config.seed.enabled => Some(Box::new(HttpSeedSource::new(
            config.seed.url.clone(),
            config.seed.timeout(),
        ))),
        None => None,
    };

    let (book, outcome) = match source {
        Some(source) => {
            debug!(source = source.source_name(), "seed source ready");
            ContactBook::load(store, || source.fetch_seed())
        }
        None => ContactBook::load_without_seed(store),
    }
    .with_context(|| "load contacts")?;

    match outcome {
        LoadOutcome::Restored => debug!(count = book.len(), "contacts restored"),
        LoadOutcome::Seeded => debug!(count = book.len(), "contacts seeded"),
        LoadOutcome::Unseeded => debug!("seeding disabled, starting empty"),
        LoadOutcome::SeedFailed(message) => {
            eprintln!("warning: failed to fetch seed contacts: {message}");
        }
    }
    Ok(book)
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .try_init();
}
