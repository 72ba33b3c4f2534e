//! Where the schedule HTML comes from.

use std::fmt;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::fetch::Fetcher;

#[derive(Clone)]
pub enum Source {
    Remote { fetcher: Fetcher, url: String },
    /// A page saved to disk, read as (lossy) UTF-8.
    File(PathBuf),
}

impl Source {
    pub async fn load(&self) -> Result<String> {
        match self {
            Source::Remote { fetcher, url } => fetcher.fetch_html(url).await,
            Source::File(path) => {
                let bytes = tokio::fs::read(path)
                    .await
                    .with_context(|| format!("Could not read {}", path.display()))?;
                Ok(String::from_utf8_lossy(&bytes).into_owned())
            }
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Remote { url, .. } => write!(f, "{}", url),
            Source::File(path) => write!(f, "{}", path.display()),
        }
    }
}
