pub mod export;
pub mod init;
pub mod serve;

use std::fmt;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use sis2ics_core::{CalendarDocument, Settings};

pub fn create_spinner(message: String) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["-", "\\", "|", "/"])
            .template("{msg} {spinner}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(message);
    spinner.enable_steady_tick(std::time::Duration::from_millis(80));
    spinner
}

/// Where a finished calendar goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    File(PathBuf),
    Stdout,
}

impl Target {
    pub fn from_args(output: Option<PathBuf>, stdout: bool, settings: &Settings) -> Self {
        if stdout {
            return Target::Stdout;
        }
        Target::File(output.unwrap_or_else(|| settings.output.clone()))
    }

    pub fn write(&self, document: &CalendarDocument) -> Result<()> {
        match self {
            Target::File(path) => std::fs::write(path, document.as_str())
                .with_context(|| format!("Could not write {}", path.display())),
            Target::Stdout => {
                let mut out = std::io::stdout().lock();
                out.write_all(document.as_str().as_bytes())?;
                out.flush()?;
                Ok(())
            }
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::File(path) => write!(f, "{}", path.display()),
            Target::Stdout => f.write_str("stdout"),
        }
    }
}
