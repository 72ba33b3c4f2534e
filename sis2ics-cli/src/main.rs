mod commands;
mod fetch;
mod logging;
mod render;
mod routes;
mod source;

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use sis2ics_core::{CalendarConfig, Flavor, Settings};

use crate::commands::Target;
use crate::fetch::Fetcher;
use crate::source::Source;

#[derive(Parser)]
#[command(name = "sis2ics")]
#[command(version)]
#[command(about = "Turn a sis-handball.de team schedule into an .ics calendar")]
struct Cli {
    /// Settings file (defaults to ~/.config/sis2ics/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(flatten)]
    overrides: Overrides,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Flags that win over the settings file.
#[derive(Args)]
struct Overrides {
    /// Team schedule page
    #[arg(long, global = true)]
    url: Option<String>,

    /// Calendar title shown in every event
    #[arg(long, global = true)]
    title: Option<String>,

    /// Reproduce the historic output byte for byte
    #[arg(long, global = true)]
    legacy: bool,
}

impl Overrides {
    fn apply(&self, settings: &mut Settings) {
        if let Some(ref url) = self.url {
            settings.url = url.clone();
        }
        if let Some(ref title) = self.title {
            settings.title = title.clone();
        }
        if self.legacy {
            settings.flavor = Flavor::Legacy;
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the schedule page and write the calendar
    Export {
        /// Output file (defaults to the `output` setting)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Write the calendar to stdout instead of a file
        #[arg(long, conflicts_with = "output")]
        stdout: bool,

        /// Write an empty calendar when the page lists no games
        #[arg(long)]
        allow_empty: bool,
    },
    /// Convert a saved schedule page without touching the network
    Convert {
        /// HTML file to read
        input: PathBuf,

        #[arg(short, long)]
        output: Option<PathBuf>,

        #[arg(long, conflicts_with = "output")]
        stdout: bool,

        #[arg(long)]
        allow_empty: bool,
    },
    /// Serve the calendar over HTTP, fetching the page on every request
    Serve {
        /// Address to listen on (defaults to the `listen` setting)
        #[arg(long)]
        listen: Option<String>,
    },
    /// Write a default settings file
    Init,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Init => {
            let path = match config_path {
                Some(path) => path.to_path_buf(),
                None => Settings::config_path()?,
            };
            commands::init::run(&path)
        }
        Commands::Export {
            output,
            stdout,
            allow_empty,
        } => {
            let (settings, config) = load_settings(config_path, &cli.overrides)?;
            let source = remote_source(&settings, &config)?;
            let target = Target::from_args(output, stdout, &settings);
            commands::export::run(&source, &config, &target, allow_empty).await
        }
        Commands::Convert {
            input,
            output,
            stdout,
            allow_empty,
        } => {
            let (settings, config) = load_settings(config_path, &cli.overrides)?;
            let target = Target::from_args(output, stdout, &settings);
            commands::export::run(&Source::File(input), &config, &target, allow_empty).await
        }
        Commands::Serve { listen } => {
            let (settings, config) = load_settings(config_path, &cli.overrides)?;
            let source = remote_source(&settings, &config)?;
            let listen = listen.unwrap_or_else(|| settings.listen.clone());
            commands::serve::run(source, config, settings.download_name, &listen).await
        }
    }
}

/// Settings file plus flags, validated before anything touches the network.
fn load_settings(
    config_path: Option<&Path>,
    overrides: &Overrides,
) -> Result<(Settings, CalendarConfig)> {
    let mut settings = Settings::load(config_path)?;
    overrides.apply(&mut settings);

    let config = settings.calendar_config()?;
    Ok((settings, config))
}

fn remote_source(settings: &Settings, config: &CalendarConfig) -> Result<Source> {
    Ok(Source::Remote {
        fetcher: Fetcher::new(Duration::from_secs(settings.timeout_secs))?,
        url: config.source_url().to_string(),
    })
}
