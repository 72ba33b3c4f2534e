use std::path::Path;

use anyhow::Result;
use owo_colors::OwoColorize;
use sis2ics_core::Settings;

pub fn run(path: &Path) -> Result<()> {
    if Settings::create_default_config(path)? {
        println!("{} {}", "Created".green(), path.display());
    } else {
        println!("{} {}", "Already exists:".dimmed(), path.display());
    }
    Ok(())
}
