use crate::bridge::TranslationEngine;
use crate::error::TranslationError;
use crate::process::{TranslatorCommand, engine_runtime};
use core::time::Duration;
use log::{debug, warn};
use tokio::io::{AsyncBufReadExt as _, AsyncWriteExt as _, BufReader, Lines};
use tokio::process::{Child, ChildStdin, ChildStdout};
use tokio::runtime::Runtime;
use tokio::time::timeout;

/// A running translator answering one line per request line.
struct Worker {
    child: Child,
    stdin: ChildStdin,
    stdout: Lines<BufReader<ChildStdout>>,
}

impl Worker {
    fn start(command: &TranslatorCommand) -> Result<Self, TranslationError> {
        let mut child = command.spawn(false)?;
        let (Some(stdin), Some(stdout)) = (child.stdin.take(), child.stdout.take()) else {
            return Err(TranslationError::WorkerClosed);
        };
        debug!(target: "tactile_translate", "worker started, pid {:?}", child.id());
        Ok(Self {
            child,
            stdin,
            stdout: BufReader::new(stdout).lines(),
        })
    }

    fn pid(&self) -> Option<u32> {
        self.child.id()
    }

    async fn request(&mut self, chunk: &str) -> Result<String, TranslationError> {
        let mut line = chunk.replace(['\n', '\r'], " ");
        line.push('\n');
        self.stdin.write_all(line.as_bytes()).await?;
        self.stdin.flush().await?;
        self.stdout
            .next_line()
            .await?
            .ok_or(TranslationError::WorkerClosed)
    }
}

/// One translator process kept alive across chunks.
///
/// A request is the chunk on a single line; the response is the next output line. Any
/// failure, a timeout included, kills the worker and the next request starts a new one.
pub struct WorkerEngine {
    command: TranslatorCommand,
    timeout: Duration,
    // Declared before the runtime so the child is killed while the runtime still exists.
    worker: Option<Worker>,
    runtime: Runtime,
    spawned: usize,
}

impl WorkerEngine {
    /// The process is started lazily on the first chunk.
    ///
    /// # Errors
    /// Fails if the async runtime cannot be created.
    pub fn new(command: TranslatorCommand, timeout: Duration) -> Result<Self, TranslationError> {
        Ok(Self {
            command,
            timeout,
            worker: None,
            runtime: engine_runtime()?,
            spawned: 0,
        })
    }

    /// Number of processes started so far.
    #[inline]
    pub const fn spawned(&self) -> usize {
        self.spawned
    }

    /// Process id of the running worker, if one is alive.
    #[inline]
    pub fn worker_pid(&self) -> Option<u32> {
        self.worker.as_ref().and_then(Worker::pid)
    }
}

impl TranslationEngine for WorkerEngine {
    fn translate_chunk(&mut self, chunk: &str) -> Result<String, TranslationError> {
        let limit = self.timeout;
        let command = &self.command;
        let slot = &mut self.worker;
        let spawned = &mut self.spawned;
        let result = self.runtime.block_on(async {
            if slot.is_none() {
                *slot = Some(Worker::start(command)?);
                *spawned += 1;
            }
            let Some(worker) = slot.as_mut() else {
                return Err(TranslationError::WorkerClosed);
            };
            timeout(limit, worker.request(chunk))
                .await
                .map_err(|_elapsed| TranslationError::TimedOut(limit))?
        });
        if let Err(err) = &result {
            warn!(target: "tactile_translate", "dropping translator worker: {err}");
            self.worker = None;
        }
        result
    }
}
