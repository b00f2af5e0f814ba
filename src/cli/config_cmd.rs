use crate::models::config;

pub fn handle_config(track: Option<String>, strict: Option<bool>) {
    let mut user_config = config::load_config();

    if track.is_none() && strict.is_none() {
        println!(
            "Default track: {}",
            user_config.default_track.as_deref().unwrap_or("(none)")
        );
        println!("Strict validation: {}", user_config.strict);
        if let Some(path) = config::get_config_path() {
            println!();
            println!("Stored in {}", path.display());
        }
        println!();
        println!("To change: langdeck config --track <id> --strict <true|false>");
        return;
    }

    if let Some(id) = track {
        let catalog = super::load_catalog();
        if let Err(e) = catalog.track(&id) {
            eprintln!("{}", e);
            std::process::exit(1);
        }
        println!("Default track set to {}", id);
        user_config.default_track = Some(id);
    }

    if let Some(strict) = strict {
        println!("Strict validation {}", if strict { "enabled" } else { "disabled" });
        user_config.strict = strict;
    }

    if let Err(e) = config::save_config(&user_config) {
        eprintln!("Failed to save config: {}", e);
        std::process::exit(1);
    }
}
