//! Lightbox CLI — terminal favorites gallery

mod tui;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use lightbox::favorites::FavoritesStore;
use lightbox::gallery::{self, EmptyReason, GalleryView};
use lightbox::Result;

#[derive(Parser)]
#[command(name = "lightbox", about = "Favorite image gallery", version)]
struct Cli {
    /// Favorites file to use instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    data_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Save a URL to the favorites list
    Add { url: String },
    /// Remove a URL from the favorites list
    Remove { url: String },
    /// Print the gallery, optionally filtered
    List {
        /// Case-insensitive substring matched against caption or URL
        #[arg(long)]
        filter: Option<String>,
    },
    /// Remove every favorite
    Clear,
    /// Browse the gallery interactively
    Browse,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let mut store = open_store(cli)?;

    match &cli.command {
        Command::Add { url } => {
            if store.add(url)? {
                println!("Saved {url}");
            } else {
                println!("Already a favorite: {url}");
            }
        }
        Command::Remove { url } => {
            if store.remove(url)? {
                println!("Removed {url}");
            } else {
                println!("Not a favorite: {url}");
            }
        }
        Command::List { filter } => {
            print_gallery(&store, filter.as_deref().unwrap_or(""));
        }
        Command::Clear => {
            store.clear()?;
            println!("Favorites cleared");
        }
        Command::Browse => tui::run(store)?,
    }

    Ok(())
}

fn open_store(cli: &Cli) -> Result<FavoritesStore> {
    match &cli.data_file {
        Some(path) => {
            log::debug!("using favorites file {:?}", path);
            FavoritesStore::open(path)
        }
        None => FavoritesStore::open_default(),
    }
}

fn print_gallery(store: &FavoritesStore, filter: &str) {
    match gallery::render(store.list(), filter) {
        GalleryView::Gallery(items) => {
            for item in items {
                println!("{:<24} {}", item.caption, item.url);
            }
        }
        GalleryView::Empty(EmptyReason::NoFavorites) => {
            println!("No favorites saved yet");
        }
        GalleryView::Empty(EmptyReason::NoMatches) => {
            println!("No favorites match the filter");
        }
    }
}
