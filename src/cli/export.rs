use std::fs;
use std::path::PathBuf;

use tracing::info;

use crate::content::Track;

pub fn export_track(track: Track<'_>, out: Option<PathBuf>) {
    let json = match track.to_json() {
        Ok(json) => json,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    match out {
        None => println!("{}", json),
        Some(path) => {
            if let Err(e) = fs::write(&path, json) {
                eprintln!("Failed to write {}: {}", path.display(), e);
                std::process::exit(1);
            }
            info!("Exported '{}' to {}", track.id(), path.display());
        }
    }
}
