//! Settings for the OpenMensa endpoint and the widget links.
//!
//! Sources, later ones winning:
//! 1. Built-in defaults (Mensa Am Adenauerring)
//! 2. `~/.config/mensa-widget/config.toml`, or the file given with `--config`
//! 3. `MENSA__*` environment variables, e.g. `MENSA__API__CANTEEN_ID=1720`

use std::path::{Path, PathBuf};
use std::time::Duration;

use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use tracing::debug;

use crate::error::{MensaError, Result};

const DEFAULTS: &str = r#"
[api]
base_url = "https://openmensa.org/api/v2"
canteen_id = 1719
timeout_seconds = 15
user_agent = "mensa-widget"

[widget]
icon_url = "https://www.sw-ka.de/favicon.ico"
menu_url = "https://www.sw-ka.de/de/hochschulgastronomie/speiseplan/mensa_adenauerring/"
"#;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Settings {
    pub api: ApiConfig,
    pub widget: WidgetConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
    pub canteen_id: u32,
    pub timeout_seconds: u64,
    pub user_agent: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct WidgetConfig {
    pub icon_url: String,
    /// Opened by the user instead of a widget tap
    pub menu_url: String,
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

/// `~/.config/mensa-widget/config.toml` (platform config dir)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("mensa-widget").join("config.toml"))
}

impl Settings {
    /// Load from defaults, the optional config file and the environment
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULTS, FileFormat::Toml));

        match config_path {
            // An explicitly requested file has to exist
            Some(path) => {
                debug!(path = %path.display(), "loading config file");
                builder = builder.add_source(File::from(path).format(FileFormat::Toml));
            }
            None => {
                if let Some(path) = default_config_path() {
                    debug!(path = %path.display(), "looking for config file");
                    builder = builder.add_source(
                        File::from(path).format(FileFormat::Toml).required(false),
                    );
                }
            }
        }

        let settings: Settings = builder
            .add_source(
                Environment::with_prefix("MENSA")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<()> {
        for (key, url) in [
            ("api.base_url", &self.api.base_url),
            ("widget.icon_url", &self.widget.icon_url),
            ("widget.menu_url", &self.widget.menu_url),
        ] {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(MensaError::InvalidSetting {
                    key,
                    reason: format!("expected an http(s) URL, got {url:?}"),
                });
            }
        }

        if self.api.timeout_seconds == 0 {
            return Err(MensaError::InvalidSetting {
                key: "api.timeout_seconds",
                reason: "must be greater than zero".to_string(),
            });
        }

        Ok(())
    }
}
