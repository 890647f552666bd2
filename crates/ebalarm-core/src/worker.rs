//! Background worker
//!
//! One long-lived thread runs parse and export tasks so the foreground
//! never blocks on I/O. Commands go in over one channel, results come back
//! over another; both are FIFO and the worker finishes a task before taking
//! the next, so results arrive in submission order.
//!
//! A failing task ends the worker. The error is returned by [`Worker::join`];
//! the caller decides whether to spawn a new worker.

use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender, TryRecvError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use tracing::{debug, info};

use crate::category::{classify_all, Alarm, CategoryRegistry, StyleTable};
use crate::error::{AlarmError, Result};
use crate::export::write_report;
use crate::import::{read_symbols, ImportSource};

/// Default bounded wait on the command channel
pub const DEFAULT_COMMAND_TIMEOUT: Duration = Duration::from_secs(1);

const THREAD_NAME: &str = "ebalarm-worker";

/// Work submitted to the worker
#[derive(Debug)]
pub enum Command {
    /// Read `path` as `source` and classify with `registry`
    Parse {
        source: ImportSource,
        path: PathBuf,
        registry: CategoryRegistry,
    },
    /// Write `alarms` to `path`
    Export {
        alarms: Vec<Alarm>,
        plc_name: String,
        path: PathBuf,
        styles: StyleTable,
    },
    /// Finish after the current task
    Stop,
}

impl Command {
    fn kind(&self) -> &'static str {
        match self {
            Self::Parse { .. } => "parse",
            Self::Export { .. } => "export",
            Self::Stop => "stop",
        }
    }
}

/// Outcome of a completed task
#[derive(Debug)]
pub enum TaskResult {
    Parsed(Vec<Alarm>),
    Exported(PathBuf),
}

/// Handle on the worker thread and its two channels
pub struct Worker {
    commands: Sender<Command>,
    results: Receiver<TaskResult>,
    handle: Option<JoinHandle<Result<()>>>,
}

impl Worker {
    pub fn spawn() -> Result<Self> {
        Self::spawn_with_timeout(DEFAULT_COMMAND_TIMEOUT)
    }

    /// Spawn with a custom bounded wait on the command channel.
    pub fn spawn_with_timeout(command_timeout: Duration) -> Result<Self> {
        let (command_tx, command_rx) = mpsc::channel();
        let (result_tx, result_rx) = mpsc::channel();

        let handle = thread::Builder::new()
            .name(THREAD_NAME.to_string())
            .spawn(move || run(command_rx, result_tx, command_timeout))?;

        Ok(Self {
            commands: command_tx,
            results: result_rx,
            handle: Some(handle),
        })
    }

    /// Queue a command. Fails once the worker has exited.
    pub fn submit(&self, command: Command) -> Result<()> {
        self.commands
            .send(command)
            .map_err(|_| AlarmError::WorkerDisconnected)
    }

    pub fn parse(&self, source: ImportSource, path: PathBuf, registry: CategoryRegistry) -> Result<()> {
        self.submit(Command::Parse {
            source,
            path,
            registry,
        })
    }

    pub fn export(
        &self,
        alarms: Vec<Alarm>,
        plc_name: String,
        path: PathBuf,
        styles: StyleTable,
    ) -> Result<()> {
        self.submit(Command::Export {
            alarms,
            plc_name,
            path,
            styles,
        })
    }

    pub fn stop(&self) -> Result<()> {
        self.submit(Command::Stop)
    }

    /// Drain every result posted so far without blocking.
    pub fn poll(&self) -> Vec<TaskResult> {
        let mut ready = Vec::new();
        loop {
            match self.results.try_recv() {
                Ok(result) => ready.push(result),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        ready
    }

    /// Whether the worker thread has exited (stopped or failed)
    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().map_or(true, JoinHandle::is_finished)
    }

    /// Wait for the thread to exit and return how it ended.
    pub fn join(mut self) -> Result<()> {
        match self.handle.take() {
            Some(handle) => handle.join().map_err(|_| AlarmError::WorkerPanicked)?,
            None => Ok(()),
        }
    }
}

impl Drop for Worker {
    fn drop(&mut self) {
        // Detach: an in-flight task still runs to completion.
        if self.handle.is_some() {
            let _ = self.commands.send(Command::Stop);
        }
    }
}

fn run(commands: Receiver<Command>, results: Sender<TaskResult>, timeout: Duration) -> Result<()> {
    debug!("Worker started");
    loop {
        let command = match commands.recv_timeout(timeout) {
            Ok(command) => command,
            Err(RecvTimeoutError::Timeout) => continue,
            Err(RecvTimeoutError::Disconnected) => break,
        };
        debug!("Worker command: {}", command.kind());

        let result = match command {
            Command::Parse {
                source,
                path,
                registry,
            } => {
                let symbols = read_symbols(&path, source)?;
                let alarms = classify_all(symbols, &registry);
                info!("Parsed {}: {} alarms", path.display(), alarms.len());
                TaskResult::Parsed(alarms)
            }
            Command::Export {
                alarms,
                plc_name,
                path,
                styles,
            } => {
                write_report(&path, &plc_name, &alarms, &styles)?;
                TaskResult::Exported(path)
            }
            Command::Stop => break,
        };

        if results.send(result).is_err() {
            debug!("Result receiver dropped");
            break;
        }
    }
    debug!("Worker stopped");
    Ok(())
}
