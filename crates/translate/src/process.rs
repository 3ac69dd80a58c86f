use crate::bridge::TranslationEngine;
use crate::error::TranslationError;
use core::time::Duration;
use log::{debug, trace};
use std::io;
use std::process::Stdio;
use tokio::io::AsyncWriteExt as _;
use tokio::process::{Child, Command};
use tokio::runtime::{Builder, Runtime};
use tokio::time::timeout;

/// Program and arguments used to start the translator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TranslatorCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl TranslatorCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    #[must_use]
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// `program --forward table1,table2,...`, the invocation of a liblouis style translator.
    pub fn forward(program: impl Into<String>, tables: &[String]) -> Self {
        Self::new(program).arg("--forward").arg(tables.join(","))
    }

    /// Start the translator with piped stdin and stdout. Must run inside the engine runtime.
    pub(crate) fn spawn(&self, capture_stderr: bool) -> Result<Child, TranslationError> {
        debug!(target: "tactile_translate", "spawning {} {:?}", self.program, self.args);
        Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(if capture_stderr {
                Stdio::piped()
            } else {
                Stdio::null()
            })
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| TranslationError::Spawn {
                program: self.program.clone(),
                source,
            })
    }
}

/// Drop the last two characters the one-shot translator appends to its output.
pub fn trim_engine_suffix(output: &str) -> String {
    let keep = output.chars().count().saturating_sub(2);
    output.chars().take(keep).collect()
}

/// Runtime used to drive child processes from synchronous layout code.
pub(crate) fn engine_runtime() -> Result<Runtime, TranslationError> {
    Ok(Builder::new_current_thread().enable_all().build()?)
}

/// One translator process per chunk.
pub struct ProcessEngine {
    command: TranslatorCommand,
    timeout: Duration,
    runtime: Runtime,
}

impl ProcessEngine {
    /// # Errors
    /// Fails if the async runtime cannot be created.
    pub fn new(command: TranslatorCommand, timeout: Duration) -> Result<Self, TranslationError> {
        Ok(Self {
            command,
            timeout,
            runtime: engine_runtime()?,
        })
    }

    #[inline]
    pub const fn command(&self) -> &TranslatorCommand {
        &self.command
    }
}

async fn exchange(mut child: Child, chunk: &str) -> Result<String, TranslationError> {
    if let Some(mut stdin) = child.stdin.take() {
        // A translator may exit before reading; its exit status is the error worth reporting.
        if let Err(err) = stdin.write_all(chunk.as_bytes()).await
            && err.kind() != io::ErrorKind::BrokenPipe
        {
            return Err(err.into());
        }
    }
    let output = child.wait_with_output().await?;
    if !output.status.success() {
        return Err(TranslationError::ExitStatus {
            code: output.status.code(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        });
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

impl TranslationEngine for ProcessEngine {
    fn translate_chunk(&mut self, chunk: &str) -> Result<String, TranslationError> {
        let limit = self.timeout;
        let command = &self.command;
        let raw = self.runtime.block_on(async {
            let child = command.spawn(true)?;
            timeout(limit, exchange(child, chunk))
                .await
                .map_err(|_elapsed| TranslationError::TimedOut(limit))?
        })?;
        trace!(target: "tactile_translate", "raw output {raw:?}");
        Ok(trim_engine_suffix(&raw))
    }
}
