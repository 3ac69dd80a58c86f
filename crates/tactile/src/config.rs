//! Render configuration.
//!
//! Settings come from defaults, a JSON document, or `TACTILE_*` environment variables.

use anyhow::Context as _;
use core::time::Duration;
use log::warn;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::Path;
use tactile_layout::{DEFAULT_LINE_HEIGHT, LayoutOptions};
use tactile_matrix::DEFAULT_WIDTH;
use tactile_translate::{EngineMode, TranslatorSettings};

/// Page geometry and translator settings of a [`crate::Renderer`].
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TactileConfig {
    /// Page width in pins.
    pub max_width: usize,
    /// Rows per line for elements without a `line-height`.
    pub line_height: usize,
    pub translator: TranslatorSettings,
}

impl Default for TactileConfig {
    fn default() -> Self {
        Self {
            max_width: DEFAULT_WIDTH,
            line_height: DEFAULT_LINE_HEIGHT,
            translator: TranslatorSettings::default(),
        }
    }
}

impl TactileConfig {
    /// Load configuration from environment variables.
    ///
    /// - `TACTILE_MAX_WIDTH`: page width in pins (default 120)
    /// - `TACTILE_LINE_HEIGHT`: default line-height in rows (default 5)
    /// - `TACTILE_TRANSLATOR`: translator program (default `lou_translate`)
    /// - `TACTILE_TABLES`: comma-separated translation tables
    /// - `TACTILE_TRANSLATE_TIMEOUT_MS`: per-chunk timeout (default 5000)
    /// - `TACTILE_TRANSLATOR_MODE`: `process` or `worker` (default `process`)
    ///
    /// Unparsable values are logged and replaced by their default.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`TactileConfig::from_env`] over an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let number = |key: &str, default: usize| {
            lookup(key).map_or(default, |raw| {
                raw.trim().parse::<usize>().unwrap_or_else(|_| {
                    warn!(target: "tactile", "{key}={raw:?} is not a number, using {default}");
                    default
                })
            })
        };

        let max_width = number("TACTILE_MAX_WIDTH", defaults.max_width).max(1);
        let line_height = number("TACTILE_LINE_HEIGHT", defaults.line_height).max(1);
        let timeout_ms = number(
            "TACTILE_TRANSLATE_TIMEOUT_MS",
            defaults.translator.timeout_ms as usize,
        ) as u64;

        let program = lookup("TACTILE_TRANSLATOR")
            .map(|raw| raw.trim().to_owned())
            .filter(|program| !program.is_empty())
            .unwrap_or(defaults.translator.program);
        let tables = lookup("TACTILE_TABLES").map_or(defaults.translator.tables, |raw| {
            raw.split(',')
                .map(str::trim)
                .filter(|table| !table.is_empty())
                .map(str::to_owned)
                .collect()
        });
        let mode = lookup("TACTILE_TRANSLATOR_MODE").map_or(EngineMode::Process, |raw| {
            raw.parse().unwrap_or_else(|err: String| {
                warn!(target: "tactile", "{err}, using process mode");
                EngineMode::Process
            })
        });

        Self {
            max_width,
            line_height,
            translator: TranslatorSettings {
                program,
                tables,
                timeout_ms,
                mode,
            },
        }
    }

    /// Parse a JSON document; missing fields keep their defaults.
    ///
    /// # Errors
    /// Malformed JSON or fields of the wrong type.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Read and parse a JSON configuration file.
    ///
    /// # Errors
    /// The file cannot be read or is not a valid configuration.
    pub fn from_json_file(path: &Path) -> anyhow::Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::from_json_str(&json).with_context(|| format!("parsing config {}", path.display()))
    }

    #[inline]
    pub const fn layout_options(&self) -> LayoutOptions {
        LayoutOptions {
            max_width: self.max_width,
            line_height: self.line_height,
        }
    }

    #[inline]
    pub const fn translate_timeout(&self) -> Duration {
        self.translator.timeout()
    }
}
