mod config_cmd;
mod export;
mod list;
mod lookup;
mod outline;
mod validate;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::content::{Catalog, Track};
use crate::models::config;

#[derive(Parser)]
#[command(name = "langdeck")]
#[command(about = "Language tutorials and interview question banks", long_about = None)]
pub struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List languages and interview roles
    List,
    /// Print the navigation order of a track
    Outline { track: Option<String> },
    /// Find an entry, category, question or topic by id
    Lookup { track: String, id: String },
    /// Check content invariants
    Validate {
        /// Track to check; all tracks when omitted
        track: Option<String>,
        /// Validate a JSON document instead of shipped content
        #[arg(long, conflicts_with = "track")]
        file: Option<PathBuf>,
        /// Print reports as JSON
        #[arg(long)]
        json: bool,
        /// Fail on warnings too
        #[arg(long)]
        strict: bool,
    },
    /// Write a composed track as JSON
    Export {
        track: String,
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Show or change preferences
    Config {
        #[arg(long)]
        track: Option<String>,
        #[arg(long)]
        strict: Option<bool>,
    },
}

pub fn run(cli: Cli) {
    match cli.command {
        None | Some(Commands::List) => list::list_tracks(&load_catalog()),
        Some(Commands::Outline { track }) => {
            let catalog = load_catalog();
            outline::print_outline(resolve_track(&catalog, track));
        }
        Some(Commands::Lookup { track, id }) => {
            let catalog = load_catalog();
            lookup::lookup(resolve_track(&catalog, Some(track)), &id);
        }
        Some(Commands::Validate {
            track,
            file,
            json,
            strict,
        }) => validate::handle_validate(track, file, json, strict),
        Some(Commands::Export { track, out }) => {
            let catalog = load_catalog();
            export::export_track(resolve_track(&catalog, Some(track)), out);
        }
        Some(Commands::Config { track, strict }) => config_cmd::handle_config(track, strict),
    }
}

fn load_catalog() -> Catalog {
    match Catalog::load() {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("Failed to load content: {}", e);
            std::process::exit(1);
        }
    }
}

/// Falls back to the configured default track when `id` is `None`.
fn resolve_track(catalog: &Catalog, id: Option<String>) -> Track<'_> {
    let id = match id.or_else(|| config::load_config().default_track) {
        Some(id) => id,
        None => {
            eprintln!("No track given and no default set. Run `langdeck config --track <id>`.");
            std::process::exit(1);
        }
    };

    match catalog.track(&id) {
        Ok(track) => track,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}
