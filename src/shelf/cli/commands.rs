//! # CLI Layer
//!
//! This module is **one possible UI client** for shelf; it is not the application itself.
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Handles argument parsing
//! - Installs the log subscriber
//! - Formats output for human consumption
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: Convert shell arguments into typed commands via clap
//! 2. **Context Setup**: Resolve paths, config and the library file. The store is
//!    only opened (and seeded if missing) by commands that read or change books
//! 3. **Dispatch**: Route commands to API calls
//! 4. **Output Formatting**: Hand results to `render`

use super::args::{Cli, Commands};
use super::render::{
    eprint_messages, print_books, print_config, print_genres, print_messages, print_stats,
};
use clap::Parser;
use shelf::api::{self, ConfigAction, GenreFilter, ListOptions, ShelfApi};
use shelf::commands::load_messages;
use shelf::config::{ShelfConfig, ShelfPaths};
use shelf::error::Result;
use shelf::model::NewBook;
use shelf::store::fs::FsBackend;
use shelf::store::library::Store;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "SHELF_LOG";

struct AppContext {
    paths: ShelfPaths,
    config: ShelfConfig,
    library_file: PathBuf,
}

impl AppContext {
    fn open_api(&self) -> Result<ShelfApi<FsBackend>> {
        let mut store = Store::new(FsBackend::new(self.library_file.clone()))
            .with_keep_corrupt(self.config.keep_corrupt);
        let report = store.load()?;
        eprint_messages(&load_messages(&report));
        Ok(ShelfApi::new(store))
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::List {
            genre,
            status,
            sort,
        }) => {
            let options = ListOptions {
                genre: GenreFilter::from_option(genre.as_deref()),
                status,
                sort,
            };
            let result = ctx.open_api()?.list_books(&options)?;
            print_books(&result.listed_books);
            print_messages(&result.messages);
        }
        Some(Commands::Add {
            title,
            author,
            year,
            genre,
            read,
        }) => {
            let result = ctx
                .open_api()?
                .add_book(NewBook::new(title, author, year, genre, read))?;
            print_messages(&result.messages);
        }
        Some(Commands::Remove { indexes }) => {
            let result = ctx.open_api()?.remove_books(&indexes)?;
            print_messages(&result.messages);
        }
        Some(Commands::Toggle { indexes }) => {
            let result = ctx.open_api()?.toggle_books(&indexes)?;
            print_messages(&result.messages);
        }
        Some(Commands::Read { indexes }) => {
            let result = ctx.open_api()?.mark_books(&indexes, true)?;
            print_messages(&result.messages);
        }
        Some(Commands::Unread { indexes }) => {
            let result = ctx.open_api()?.mark_books(&indexes, false)?;
            print_messages(&result.messages);
        }
        Some(Commands::Search { term, field }) => {
            let result = ctx.open_api()?.search_books(field, &term)?;
            print_books(&result.listed_books);
            print_messages(&result.messages);
        }
        Some(Commands::Recent { count }) => {
            let count = count.unwrap_or(ctx.config.recent_count);
            let result = ctx.open_api()?.recent_books(count)?;
            print_books(&result.listed_books);
        }
        Some(Commands::Genres) => {
            let result = ctx.open_api()?.genres()?;
            print_genres(&result.genres);
        }
        Some(Commands::Path) => {
            println!("{}", ctx.library_file.display());
        }
        Some(Commands::Config { key, value }) => {
            let action = match (key, value) {
                (None, _) => ConfigAction::ShowAll,
                (Some(key), None) => ConfigAction::ShowKey(key),
                (Some(key), Some(value)) => ConfigAction::Set(key, value),
            };
            let result = api::config(&ctx.paths, action)?;
            if let Some(config) = &result.config {
                print_config(config);
            }
            print_messages(&result.messages);
        }
        Some(Commands::Stats) | None => {
            let result = ctx.open_api()?.stats(ctx.config.recent_count)?;
            if let Some(stats) = &result.stats {
                print_stats(stats, &result.recent_books);
            }
            print_messages(&result.messages);
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(format!("shelf={}", default_level)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let paths = ShelfPaths::discover()?;
    let config = ShelfConfig::load(&paths.config_dir)?;
    let library_file = config.library_file(cli.file.as_deref(), &paths.data_dir);
    tracing::debug!("Using library file {}", library_file.display());

    Ok(AppContext {
        paths,
        config,
        library_file,
    })
}
