//! Fire-and-forget remote tuning over TCP.
//!
//! [`RemoteControl`] hands commands to a single worker thread that owns the
//! socket. The worker connects lazily, writes each command once and never
//! reads a reply. Commands that cannot be delivered are dropped, and so are
//! commands issued while the worker is still busy with an earlier one.

pub mod protocol;

use protocol::{Command, DEFAULT_ADDR, LINE_TERMINATOR};
use std::io::Write;
use std::net::{SocketAddr, TcpStream};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, SyncSender, TrySendError};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(1);
/// Commands that may wait while the worker is busy; the rest are dropped.
pub const QUEUE_DEPTH: usize = 1;

#[derive(Debug, Clone)]
pub struct RemoteConfig {
    pub addr: SocketAddr,
    pub timeout: Duration,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            addr: DEFAULT_ADDR,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum RemoteError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("remote control worker panicked")]
    WorkerPanicked,
}

pub struct RemoteControl {
    sender: Option<SyncSender<Command>>,
    connected: Arc<AtomicBool>,
    worker: Option<JoinHandle<()>>,
}

impl RemoteControl {
    pub fn new() -> Self {
        Self::with_config(RemoteConfig::default())
    }

    pub fn with_config(config: RemoteConfig) -> Self {
        let (sender, receiver) = mpsc::sync_channel(QUEUE_DEPTH);
        let connected = Arc::new(AtomicBool::new(false));
        let worker = Worker {
            config,
            stream: None,
            connected: Arc::clone(&connected),
        };
        let handle = std::thread::spawn(move || {
            worker.run(receiver);
        });
        Self {
            sender: Some(sender),
            connected,
            worker: Some(handle),
        }
    }

    /// Queues a frequency change and returns immediately.
    pub fn tune(&self, frequency: f64) {
        self.send(Command::tune(frequency));
    }

    /// Hands `command` to the worker. Returns `false` when it was dropped.
    pub fn send(&self, command: Command) -> bool {
        let Some(sender) = &self.sender else {
            return false;
        };
        match sender.try_send(command) {
            Ok(()) => true,
            Err(TrySendError::Full(command)) => {
                log::debug!("Remote control busy, dropping {command:?}");
                false
            }
            Err(TrySendError::Disconnected(_)) => {
                log::debug!("Remote control worker stopped, dropping command");
                false
            }
        }
    }

    pub fn is_connected(&self) -> bool {
        self.connected.load(Ordering::Acquire)
    }

    /// Stops accepting commands and waits for queued ones to be attempted.
    pub fn close(mut self) -> Result<(), RemoteError> {
        self.sender.take();
        if let Some(worker) = self.worker.take() {
            worker.join().map_err(|_| RemoteError::WorkerPanicked)?;
        }
        Ok(())
    }
}

impl Default for RemoteControl {
    fn default() -> Self {
        Self::new()
    }
}

struct Worker {
    config: RemoteConfig,
    stream: Option<TcpStream>,
    connected: Arc<AtomicBool>,
}

impl Worker {
    /// Runs until every sender is gone; returns how many queued commands
    /// were discarded after failed deliveries.
    fn run(mut self, receiver: Receiver<Command>) -> usize {
        let mut discarded = 0;
        while let Ok(command) = receiver.recv() {
            self.handle(&command);
            if self.stream.is_none() {
                let dropped = receiver.try_iter().count();
                if dropped > 0 {
                    log::debug!("Dropped {dropped} command(s) queued while disconnected");
                }
                discarded += dropped;
            }
        }
        discarded
    }

    fn handle(&mut self, command: &Command) {
        self.connect();
        let Some(stream) = self.stream.as_mut() else {
            log::debug!("Not connected to {}, dropping {command:?}", self.config.addr);
            return;
        };
        if let Err(err) = write_command(stream, command) {
            log::debug!("Send to {} failed: {err}", self.config.addr);
            self.disconnect();
        }
    }

    fn connect(&mut self) {
        if self.stream.is_some() {
            return;
        }
        match open_stream(&self.config) {
            Ok(stream) => {
                log::debug!("Connected to {}", self.config.addr);
                self.stream = Some(stream);
                self.connected.store(true, Ordering::Release);
            }
            Err(err) => {
                log::debug!("Connect to {} failed: {err}", self.config.addr);
                self.disconnect();
            }
        }
    }

    fn disconnect(&mut self) {
        // dropping the stream closes the socket
        self.stream = None;
        self.connected.store(false, Ordering::Release);
    }
}

fn open_stream(config: &RemoteConfig) -> Result<TcpStream, RemoteError> {
    let stream = TcpStream::connect_timeout(&config.addr, config.timeout)?;
    stream.set_nodelay(true)?;
    stream.set_write_timeout(Some(config.timeout))?;
    Ok(stream)
}

fn write_command(stream: &mut TcpStream, command: &Command) -> Result<(), RemoteError> {
    let payload = serde_json::to_string(command)?;
    stream.write_all(payload.as_bytes())?;
    stream.write_all(LINE_TERMINATOR)?;
    Ok(())
}
