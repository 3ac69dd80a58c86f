use core::fmt;
use core::time::Duration;
use std::error::Error;
use std::io;

/// Failure to obtain a translation for a chunk.
#[derive(Debug)]
pub enum TranslationError {
    /// The engine process could not be started.
    Spawn { program: String, source: io::Error },
    /// Reading from or writing to the engine failed.
    Io(io::Error),
    /// The engine exited unsuccessfully.
    ExitStatus { code: Option<i32>, stderr: String },
    /// No answer within the configured timeout.
    TimedOut(Duration),
    /// A long-lived worker closed its output stream.
    WorkerClosed,
    /// Failure reported by an in-process engine.
    Engine(String),
}

impl fmt::Display for TranslationError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Spawn { program, source } => {
                write!(formatter, "Failed to start translator {program:?}: {source}")
            }
            Self::Io(err) => write!(formatter, "Translator I/O error: {err}"),
            Self::ExitStatus { code: Some(code), stderr } => {
                write!(formatter, "Translator exited with status {code}: {}", stderr.trim())
            }
            Self::ExitStatus { code: None, stderr } => {
                write!(formatter, "Translator killed by signal: {}", stderr.trim())
            }
            Self::TimedOut(after) => write!(formatter, "Translator timed out after {after:?}"),
            Self::WorkerClosed => write!(formatter, "Translator worker closed its output"),
            Self::Engine(msg) => write!(formatter, "Translation failed: {msg}"),
        }
    }
}

impl Error for TranslationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Spawn { source, .. } => Some(source),
            Self::Io(err) => Some(err),
            Self::ExitStatus { .. } | Self::TimedOut(_) | Self::WorkerClosed | Self::Engine(_) => {
                None
            }
        }
    }
}

impl From<io::Error> for TranslationError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}
