//! JSON-lines bridge for Hunian
//!
//! The host process (the web frontend's desktop shell, or a test harness)
//! writes one `UiToViewer` JSON object per line to the viewer's stdin and
//! reads one `ViewerToUi` object per line from its stdout. Logs go to stderr.

use std::io::{BufRead, BufReader, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

use hunian_frontend_core::{BridgeLifecycle, FrontendBridge, FrontendError};
use hunian_ipc::{UiToViewer, ViewerToUi, decode_ui_message, encode, error_codes};
use tokio::sync::mpsc;

/// Bridge reading commands from a line reader on a background thread
pub struct StdioBridge {
    writer: Box<dyn Write>,
    /// Decoded commands, or the reason a line could not be decoded
    from_ui_rx: mpsc::UnboundedReceiver<Result<UiToViewer, String>>,
    disconnected: Arc<AtomicBool>,
}

impl StdioBridge {
    /// Bridge over the process's own stdin/stdout
    pub fn spawn() -> Self {
        Self::with_io(BufReader::new(std::io::stdin()), std::io::stdout())
    }

    /// Bridge over arbitrary streams
    pub fn with_io<R, W>(reader: R, writer: W) -> Self
    where
        R: BufRead + Send + 'static,
        W: Write + 'static,
    {
        let (from_ui_tx, from_ui_rx) = mpsc::unbounded_channel();
        let disconnected = Arc::new(AtomicBool::new(false));
        let disconnected_flag = disconnected.clone();

        let spawned = thread::Builder::new()
            .name("hunian-stdin".to_string())
            .spawn(move || {
                read_lines(reader, from_ui_tx);
                disconnected_flag.store(true, Ordering::Release);
            });
        if let Err(e) = spawned {
            tracing::error!("Failed to spawn stdin reader: {}", e);
            disconnected.store(true, Ordering::Release);
        }

        Self {
            writer: Box::new(writer),
            from_ui_rx,
            disconnected,
        }
    }
}

/// Decode lines until EOF or until the receiving side is gone
fn read_lines<R: BufRead>(reader: R, tx: mpsc::UnboundedSender<Result<UiToViewer, String>>) {
    for line in reader.lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                tracing::warn!("Stdin read failed: {}", e);
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }
        let decoded = decode_ui_message(&line).map_err(|e| {
            tracing::warn!("Dropping malformed UI message: {}", e);
            e.to_string()
        });
        if tx.send(decoded).is_err() {
            break;
        }
    }
    tracing::info!("Host UI closed stdin");
}

impl FrontendBridge for StdioBridge {
    fn name(&self) -> &'static str {
        "stdio"
    }

    fn lifecycle(&self) -> BridgeLifecycle {
        if self.disconnected.load(Ordering::Acquire) && self.from_ui_rx.is_empty() {
            BridgeLifecycle::Disconnected
        } else {
            BridgeLifecycle::Ready
        }
    }

    fn send_to_ui(&mut self, msg: &ViewerToUi) -> Result<(), FrontendError> {
        let json = encode(msg).map_err(|e| FrontendError::SendFailed(e.to_string()))?;
        writeln!(self.writer, "{json}")
            .and_then(|_| self.writer.flush())
            .map_err(|e| FrontendError::SendFailed(e.to_string()))
    }

    fn try_recv_from_ui(&mut self) -> Option<UiToViewer> {
        loop {
            match self.from_ui_rx.try_recv().ok()? {
                Ok(msg) => return Some(msg),
                Err(reason) => {
                    // Tell the host which line was rejected, then keep reading
                    let reply = ViewerToUi::Error {
                        code: error_codes::INVALID_MESSAGE.to_string(),
                        message: reason,
                    };
                    if let Err(e) = self.send_to_ui(&reply) {
                        tracing::warn!("Failed to report malformed message: {}", e);
                    }
                }
            }
        }
    }
}
