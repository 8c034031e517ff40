//! Site-wide configuration, read once per build. The only setting the
//! pipeline consumes is the base URL used to absolutize relative
//! social-media asset paths.

use log::warn;
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use url::Url;

#[derive(Clone, Debug, Default, Deserialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub site: Site,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Site {
    pub base_url: Option<Url>,
}

impl SiteConfig {
    /// Loads the site configuration. The file is optional; a missing
    /// file yields the default configuration silently, while a file that
    /// cannot be read or parsed yields the default with a warning.
    pub fn load(path: &Path) -> SiteConfig {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return SiteConfig::default();
            }
            Err(err) => {
                warn!(
                    "could not read site config from {}: {}",
                    path.display(),
                    err
                );
                return SiteConfig::default();
            }
        };
        match serde_yaml::from_str::<Option<SiteConfig>>(&contents) {
            Ok(config) => config.unwrap_or_default(),
            Err(err) => {
                warn!(
                    "could not parse site config from {}: {}",
                    path.display(),
                    err
                );
                SiteConfig::default()
            }
        }
    }

    /// Prefixes a relative asset path with the configured base URL.
    /// Already-absolute URLs pass through untouched, as does everything
    /// when no base URL is configured.
    pub fn absolutize(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_owned();
        }
        match &self.site.base_url {
            Some(base) => {
                let base = base.as_str().trim_end_matches('/');
                if path.is_empty() {
                    base.to_owned()
                } else {
                    format!("{}/{}", base, path)
                }
            }
            None => path.to_owned(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::fs;

    fn with_base(base: &str) -> SiteConfig {
        SiteConfig {
            site: Site {
                base_url: Some(Url::parse(base).unwrap()),
            },
        }
    }

    #[test]
    fn test_absolutize_relative_path() {
        let config = with_base("https://example.org");
        assert_eq!(
            "https://example.org/images/a.png",
            config.absolutize("images/a.png")
        );
    }

    #[test]
    fn test_absolutize_passes_through_absolute() {
        let config = with_base("https://example.org");
        assert_eq!(
            "https://cdn.example.net/a.png",
            config.absolutize("https://cdn.example.net/a.png")
        );
    }

    #[test]
    fn test_absolutize_without_base_url() {
        let config = SiteConfig::default();
        assert_eq!("images/a.png", config.absolutize("images/a.png"));
    }

    #[test]
    fn test_load_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = SiteConfig::load(&dir.path().join("config.yml"));
        assert!(config.site.base_url.is_none());
    }

    #[test]
    fn test_load_malformed_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yml");
        fs::write(&path, "site: [oops").unwrap();
        assert!(SiteConfig::load(&path).site.base_url.is_none());
    }

    #[test]
    fn test_load_base_url() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yml");
        fs::write(&path, "site:\n  base_url: https://example.org\n").unwrap();
        let config = SiteConfig::load(&path);
        assert_eq!(
            "https://example.org",
            config.absolutize(""),
        );
    }
}
