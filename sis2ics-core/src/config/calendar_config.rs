//! Validated, immutable settings for one conversion.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{Sis2IcsError, Sis2IcsResult};

/// Output dialect.
///
/// `Legacy` reproduces the historic sis2ics output byte for byte, quirks
/// included. `Strict` uses a row pattern that cannot leak across rows and
/// writes RFC 5545 conforming properties.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Flavor {
    Legacy,
    #[default]
    Strict,
}

impl std::str::FromStr for Flavor {
    type Err = Sis2IcsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "legacy" => Ok(Flavor::Legacy),
            "strict" => Ok(Flavor::Strict),
            other => Err(Sis2IcsError::Configuration(format!(
                "Unknown flavor '{other}' (expected 'legacy' or 'strict')"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarConfig {
    source_url: String,
    title: String,
    flavor: Flavor,
}

impl CalendarConfig {
    /// Validate a source URL and a title.
    ///
    /// The URL must be an absolute http(s) URL with a host; the title must
    /// contain something other than whitespace. Both are stored trimmed.
    pub fn new(source_url: &str, title: &str, flavor: Flavor) -> Sis2IcsResult<Self> {
        let source_url = source_url.trim();
        if source_url.is_empty() {
            return Err(Sis2IcsError::Configuration(
                "Please specify a valid url!".into(),
            ));
        }

        let parsed = Url::parse(source_url).map_err(|e| {
            Sis2IcsError::Configuration(format!("Please specify a valid url! ({source_url}: {e})"))
        })?;

        if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
            return Err(Sis2IcsError::Configuration(format!(
                "Please specify a valid url! ({source_url} is not an http(s) address)"
            )));
        }

        let title = title.trim();
        if title.is_empty() {
            return Err(Sis2IcsError::Configuration("Please specify a title!".into()));
        }

        Ok(CalendarConfig {
            source_url: source_url.to_string(),
            title: title.to_string(),
            flavor,
        })
    }

    /// The URL exactly as configured, used for PRODID, UID and URL.
    pub fn source_url(&self) -> &str {
        &self.source_url
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn flavor(&self) -> Flavor {
        self.flavor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_config_keeps_url_verbatim() {
        let config = CalendarConfig::new("http://example.org", "T", Flavor::Strict).unwrap();
        // No trailing slash added by URL normalization
        assert_eq!(config.source_url(), "http://example.org");
        assert_eq!(config.title(), "T");
        assert_eq!(config.flavor(), Flavor::Strict);
    }

    #[test]
    fn test_values_are_trimmed() {
        let config = CalendarConfig::new("  https://example.org/x?a=1 ", " DKB HBL ", Flavor::Legacy)
            .unwrap();
        assert_eq!(config.source_url(), "https://example.org/x?a=1");
        assert_eq!(config.title(), "DKB HBL");
    }

    #[test]
    fn test_empty_title_is_configuration_error() {
        for title in ["", "   ", "\t\n"] {
            let err = CalendarConfig::new("http://example.org", title, Flavor::Strict).unwrap_err();
            assert!(
                matches!(err, Sis2IcsError::Configuration(ref msg) if msg.contains("title")),
                "unexpected error for {:?}: {:?}",
                title,
                err
            );
        }
    }

    #[test]
    fn test_malformed_url_is_configuration_error() {
        for url in ["", "   ", "not a url", "example.org/page", "ftp://example.org", "mailto:a@b.c", "http://"] {
            let err = CalendarConfig::new(url, "T", Flavor::Strict).unwrap_err();
            assert!(
                matches!(err, Sis2IcsError::Configuration(_)),
                "unexpected error for {:?}: {:?}",
                url,
                err
            );
        }
    }

    #[test]
    fn test_flavor_from_str() {
        assert_eq!("legacy".parse::<Flavor>().unwrap(), Flavor::Legacy);
        assert_eq!(" Strict ".parse::<Flavor>().unwrap(), Flavor::Strict);
        assert!("rfc".parse::<Flavor>().is_err());
    }
}
