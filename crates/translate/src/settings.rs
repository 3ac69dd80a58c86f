use crate::bridge::TranslationBridge;
use crate::error::TranslationError;
use crate::process::{ProcessEngine, TranslatorCommand};
use crate::worker::WorkerEngine;
use core::str::FromStr;
use core::time::Duration;
use serde::Deserialize;

/// How the translator process is driven.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineMode {
    /// A fresh process for every chunk.
    #[default]
    Process,
    /// One long-lived process answering line by line.
    Worker,
}

impl FromStr for EngineMode {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "process" => Ok(Self::Process),
            "worker" => Ok(Self::Worker),
            other => Err(format!("unknown translator mode {other:?}")),
        }
    }
}

/// Everything needed to start a translator.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TranslatorSettings {
    pub program: String,
    pub tables: Vec<String>,
    pub timeout_ms: u64,
    pub mode: EngineMode,
}

impl TranslatorSettings {
    #[inline]
    pub const fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn command(&self) -> TranslatorCommand {
        TranslatorCommand::forward(self.program.clone(), &self.tables)
    }

    /// Build a bridge over the engine selected by [`TranslatorSettings::mode`].
    ///
    /// # Errors
    /// Fails if the engine runtime cannot be created. No process is started here.
    pub fn build_bridge(&self) -> Result<TranslationBridge, TranslationError> {
        Ok(match self.mode {
            EngineMode::Process => {
                TranslationBridge::new(ProcessEngine::new(self.command(), self.timeout())?)
            }
            EngineMode::Worker => {
                TranslationBridge::new(WorkerEngine::new(self.command(), self.timeout())?)
            }
        })
    }
}

impl Default for TranslatorSettings {
    fn default() -> Self {
        Self {
            program: "lou_translate".to_owned(),
            tables: vec!["unicode.dis".to_owned(), "en-us-g2.ctb".to_owned()],
            timeout_ms: 5_000,
            mode: EngineMode::Process,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_parses_case_insensitively() {
        assert_eq!("Worker".parse::<EngineMode>(), Ok(EngineMode::Worker));
        assert_eq!(" process ".parse::<EngineMode>(), Ok(EngineMode::Process));
        assert!("pool".parse::<EngineMode>().is_err());
    }

    #[test]
    fn default_command_uses_forward_tables() {
        let settings = TranslatorSettings::default();
        assert_eq!(settings.command().args, vec!["--forward", "unicode.dis,en-us-g2.ctb"]);
        assert_eq!(settings.timeout(), Duration::from_secs(5));
    }
}
