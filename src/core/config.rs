//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.folio/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use clap::ValueEnum;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct FolioConfig {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub appearance: AppearanceConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct CatalogConfig {
    pub path: Option<PathBuf>,
    pub page_size: Option<usize>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct AppearanceConfig {
    pub theme: Option<ThemeChoice>,
}

/// Startup theme. `Auto` follows the terminal's color scheme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    #[default]
    Auto,
    Day,
    Night,
}

impl ThemeChoice {
    fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Some(ThemeChoice::Auto),
            "day" => Some(ThemeChoice::Day),
            "night" => Some(ThemeChoice::Night),
            _ => None,
        }
    }
}

/// Values given on the command line (None = not specified).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub catalog: Option<PathBuf>,
    pub page_size: Option<usize>,
    pub theme: Option<ThemeChoice>,
}

// ============================================================================
// Resolved Config (concrete values where a default exists)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// None = use the bundled sample catalog.
    pub catalog_path: Option<PathBuf>,
    /// None = use the catalog document's own page size.
    pub page_size: Option<usize>,
    pub theme: ThemeChoice,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.folio/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".folio").join("config.toml"))
}

/// Load config from `~/.folio/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `FolioConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<FolioConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(FolioConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(FolioConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: FolioConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Folio Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [catalog]
# path = "/path/to/books.json"   # Or set FOLIO_CATALOG; bundled sample if unset
# page_size = 36                 # Or set FOLIO_PAGE_SIZE

# [appearance]
# theme = "auto"                 # "auto", "day" or "night"; or set FOLIO_THEME
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &FolioConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

fn resolve_with_env(
    config: &FolioConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Catalog: CLI → env → config → bundled
    let catalog_path = cli
        .catalog
        .clone()
        .or_else(|| env("FOLIO_CATALOG").map(PathBuf::from))
        .or_else(|| config.catalog.path.clone());

    // Page size: CLI → env → config → catalog document
    let page_size = cli
        .page_size
        .or_else(|| {
            env("FOLIO_PAGE_SIZE").and_then(|v| match v.trim().parse() {
                Ok(n) => Some(n),
                Err(_) => {
                    warn!("Ignoring FOLIO_PAGE_SIZE={:?}: not a number", v);
                    None
                }
            })
        })
        .or(config.catalog.page_size);

    // Theme: CLI → env → config → auto
    let theme = cli
        .theme
        .or_else(|| {
            env("FOLIO_THEME").and_then(|v| {
                let parsed = ThemeChoice::parse(&v);
                if parsed.is_none() {
                    warn!("Ignoring FOLIO_THEME={:?}: expected auto, day or night", v);
                }
                parsed
            })
        })
        .or(config.appearance.theme)
        .unwrap_or_default();

    ResolvedConfig {
        catalog_path,
        page_size,
        theme,
    }
}

/// Ambient dark-scheme signal. Forced by `day`/`night`; `auto` reads the
/// terminal's `COLORFGBG` (`"fg;bg"`), where backgrounds 0–6 and 8 are dark.
pub fn prefers_dark(theme: ThemeChoice) -> bool {
    match theme {
        ThemeChoice::Day => false,
        ThemeChoice::Night => true,
        ThemeChoice::Auto => std::env::var("COLORFGBG")
            .ok()
            .is_some_and(|v| colorfgbg_is_dark(&v)),
    }
}

fn colorfgbg_is_dark(value: &str) -> bool {
    value
        .rsplit(';')
        .next()
        .and_then(|bg| bg.trim().parse::<u8>().ok())
        .is_some_and(|bg| bg <= 6 || bg == 8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config_parses() {
        let config = FolioConfig::default();
        assert!(config.catalog.path.is_none());
        assert!(config.appearance.theme.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve_with_env(
            &FolioConfig::default(),
            &CliOverrides::default(),
            env_from(&[]),
        );
        assert_eq!(
            resolved,
            ResolvedConfig {
                catalog_path: None,
                page_size: None,
                theme: ThemeChoice::Auto,
            }
        );
    }

    #[test]
    fn test_resolve_env_overrides_config() {
        let config = FolioConfig {
            catalog: CatalogConfig {
                path: Some(PathBuf::from("from-config.json")),
                page_size: Some(12),
            },
            appearance: AppearanceConfig {
                theme: Some(ThemeChoice::Day),
            },
        };
        let env = env_from(&[
            ("FOLIO_CATALOG", "from-env.json"),
            ("FOLIO_PAGE_SIZE", "20"),
            ("FOLIO_THEME", "Night"),
        ]);
        let resolved = resolve_with_env(&config, &CliOverrides::default(), env);
        assert_eq!(resolved.catalog_path, Some(PathBuf::from("from-env.json")));
        assert_eq!(resolved.page_size, Some(20));
        assert_eq!(resolved.theme, ThemeChoice::Night);
    }

    #[test]
    fn test_resolve_cli_wins() {
        let config = FolioConfig {
            catalog: CatalogConfig {
                path: Some(PathBuf::from("from-config.json")),
                page_size: Some(12),
            },
            ..Default::default()
        };
        let cli = CliOverrides {
            catalog: Some(PathBuf::from("from-cli.json")),
            page_size: Some(5),
            theme: Some(ThemeChoice::Day),
        };
        let env = env_from(&[("FOLIO_PAGE_SIZE", "20"), ("FOLIO_THEME", "night")]);
        let resolved = resolve_with_env(&config, &cli, env);
        assert_eq!(resolved.catalog_path, Some(PathBuf::from("from-cli.json")));
        assert_eq!(resolved.page_size, Some(5));
        assert_eq!(resolved.theme, ThemeChoice::Day);
    }

    #[test]
    fn test_invalid_env_values_fall_through() {
        let config = FolioConfig {
            catalog: CatalogConfig {
                page_size: Some(12),
                ..Default::default()
            },
            appearance: AppearanceConfig {
                theme: Some(ThemeChoice::Night),
            },
        };
        let env = env_from(&[("FOLIO_PAGE_SIZE", "lots"), ("FOLIO_THEME", "sepia")]);
        let resolved = resolve_with_env(&config, &CliOverrides::default(), env);
        assert_eq!(resolved.page_size, Some(12));
        assert_eq!(resolved.theme, ThemeChoice::Night);
    }

    #[test]
    fn test_sparse_toml_parses() {
        let toml_str = r#"
[appearance]
theme = "night"
"#;
        let config: FolioConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.appearance.theme, Some(ThemeChoice::Night));
        assert!(config.catalog.path.is_none());
        assert!(config.catalog.page_size.is_none());
    }

    #[test]
    fn test_full_toml_parses() {
        let toml_str = r#"
[catalog]
path = "/srv/books.json"
page_size = 24

[appearance]
theme = "auto"
"#;
        let config: FolioConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.catalog.path, Some(PathBuf::from("/srv/books.json")));
        assert_eq!(config.catalog.page_size, Some(24));
        assert_eq!(config.appearance.theme, Some(ThemeChoice::Auto));
    }

    #[test]
    fn test_unknown_theme_in_toml_is_error() {
        let toml_str = "[appearance]\ntheme = \"sepia\"\n";
        assert!(toml::from_str::<FolioConfig>(toml_str).is_err());
    }

    #[test]
    fn test_forced_preferences() {
        assert!(prefers_dark(ThemeChoice::Night));
        assert!(!prefers_dark(ThemeChoice::Day));
    }

    #[test]
    fn test_colorfgbg_is_dark() {
        assert!(colorfgbg_is_dark("15;0"));
        assert!(colorfgbg_is_dark("15;default;8"));
        assert!(!colorfgbg_is_dark("0;15"));
        assert!(!colorfgbg_is_dark("0;7"));
        assert!(!colorfgbg_is_dark("garbage"));
    }
}
