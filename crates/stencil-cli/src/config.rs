//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only receives the [`Conventions`]
//! and paths it needs.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `STENCIL__PATHS__OUTPUT=web/gen`
//! 3. `--config FILE`, or else `./stencil.toml` then the global config file
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

use stencil_core::domain::{Conventions, DEFAULT_CLIENT_MODULE};

/// Name of the project-local configuration file.
pub const LOCAL_FILE: &str = "stencil.toml";

/// Prefix for environment overrides; nested keys are separated by `__`.
const ENV_PREFIX: &str = "STENCIL";

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Input and output locations.
    pub paths: PathsConfig,
    /// Field names and literals the extractor and emitters rely on.
    pub conventions: Conventions,
    /// Output settings.
    pub output: OutputConfig,

    /// File the configuration was read from, if any.
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Directory holding collection definitions.
    pub input: PathBuf,
    /// Directory for `types.ts` and `client.ts`.
    pub output: PathBuf,
    /// Directory route scaffolds are written under.
    pub routes: PathBuf,
    /// Module specifier route files import the client from.
    pub client_module: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("src/collections"),
            output: PathBuf::from("src/generated"),
            routes: PathBuf::from("src/app"),
            client_module: DEFAULT_CLIENT_MODULE.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "human".into(),
        }
    }
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// `explicit` is the path passed via `--config`; it must exist.  Without
    /// it, `./stencil.toml` and the global config file are both optional.
    pub fn load(explicit: Option<&PathBuf>) -> anyhow::Result<Self> {
        let cwd = std::env::current_dir().context("Cannot determine current directory")?;
        Self::load_in(explicit.map(PathBuf::as_path), &cwd)
    }

    /// [`AppConfig::load`] with an explicit working directory.
    pub fn load_in(explicit: Option<&Path>, cwd: &Path) -> anyhow::Result<Self> {
        let defaults =
            Config::try_from(&AppConfig::default()).context("Cannot serialise default config")?;
        let mut builder = Config::builder().add_source(defaults);

        let source = match explicit {
            Some(path) => {
                builder = builder.add_source(File::from(path).format(FileFormat::Toml));
                Some(path.to_path_buf())
            }
            None => {
                let global = Self::config_path();
                let local = cwd.join(LOCAL_FILE);
                builder = builder
                    .add_source(File::from(global.as_path()).format(FileFormat::Toml).required(false))
                    .add_source(File::from(local.as_path()).format(FileFormat::Toml).required(false));
                [local, global].into_iter().find(|p| p.is_file())
            }
        };

        let mut cfg: AppConfig = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration values")?;

        cfg.conventions
            .validate()
            .context("Invalid [conventions] section")?;
        cfg.source = source;

        debug!(source = ?cfg.source, "Configuration loaded");
        Ok(cfg)
    }

    /// Path to the global configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.stencil.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "stencil", "stencil")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".stencil.toml"))
    }

    /// Render as the TOML written by `stencil init`.
    pub fn to_toml(&self) -> anyhow::Result<String> {
        toml::to_string_pretty(self).context("Failed to serialise configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_point_at_conventional_paths() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.paths.input, PathBuf::from("src/collections"));
        assert_eq!(cfg.paths.client_module, DEFAULT_CLIENT_MODULE);
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn load_without_files_returns_defaults() {
        let dir = TempDir::new().unwrap();
        let cfg = AppConfig::load_in(None, dir.path()).unwrap();
        assert_eq!(cfg.paths.output, PathBuf::from("src/generated"));
        assert_eq!(cfg.conventions, Conventions::default());
    }

    #[test]
    fn local_file_overrides_only_what_it_names() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join(LOCAL_FILE),
            "[paths]\noutput = \"web/gen\"\n\n[conventions.fields]\nslug = \"permalink\"\n",
        )
        .unwrap();

        let cfg = AppConfig::load_in(None, dir.path()).unwrap();
        assert_eq!(cfg.paths.output, PathBuf::from("web/gen"));
        assert_eq!(cfg.paths.input, PathBuf::from("src/collections"));
        assert_eq!(cfg.conventions.fields.slug, "permalink");
        assert_eq!(cfg.conventions.fields.status, "status");
        assert_eq!(cfg.source, Some(dir.path().join(LOCAL_FILE)));
    }

    #[test]
    fn explicit_file_must_exist() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(AppConfig::load_in(Some(&missing), dir.path()).is_err());
    }

    #[test]
    fn invalid_conventions_are_rejected() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("custom.toml");
        std::fs::write(&file, "[conventions.windows]\ntype_window = 0\n").unwrap();
        assert!(AppConfig::load_in(Some(&file), dir.path()).is_err());
    }

    #[test]
    fn toml_output_loads_back() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join(LOCAL_FILE);
        std::fs::write(&file, AppConfig::default().to_toml().unwrap()).unwrap();

        let cfg = AppConfig::load_in(Some(&file), dir.path()).unwrap();
        assert_eq!(cfg.paths.routes, PathBuf::from("src/app"));
        assert_eq!(cfg.conventions.status.published, "published");
    }

    #[test]
    fn config_path_is_not_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}
