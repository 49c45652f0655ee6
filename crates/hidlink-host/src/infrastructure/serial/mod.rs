//! Serial transport for assembled HID reports.
//!
//! A USB HID adapter sits on the other end of the serial line and replays
//! every report to the target machine as if it were a plugged-in keyboard.
//! The wire protocol is nothing but raw 8-byte reports, in order; there is
//! no framing byte and no acknowledgement, so writes are flushed
//! immediately to keep latency down.

use async_trait::async_trait;
use hidlink_core::HidReport;
use thiserror::Error;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use tokio_serial::{SerialPortBuilderExt, SerialStream};
use tracing::{info, trace};

use crate::application::assemble_report::ReportTransmitter;

/// Error type for serial transport operations.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("failed to open serial port {port}: {source}")]
    Open {
        port: String,
        #[source]
        source: tokio_serial::Error,
    },
    #[error("serial write failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Serial implementation of [`ReportTransmitter`].
///
/// The stream sits behind a tokio [`Mutex`] so `send_scancode` and
/// `release` can be called from the event pump without interleaving the
/// bytes of two reports.
pub struct SerialHidTransport {
    stream: Mutex<SerialStream>,
}

impl SerialHidTransport {
    /// Opens the serial port at the given baud rate.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Open`] when the port cannot be opened
    /// (missing device node, permissions, port already in use).
    pub fn open(port: &str, baud_rate: u32) -> Result<Self, TransportError> {
        let stream = tokio_serial::new(port, baud_rate)
            .open_native_async()
            .map_err(|source| TransportError::Open {
                port: port.to_string(),
                source,
            })?;
        info!(port, baud_rate, "serial port open");
        Ok(Self {
            stream: Mutex::new(stream),
        })
    }

    async fn write_report(&self, report: HidReport) -> Result<(), TransportError> {
        let bytes = report.to_bytes();
        let mut stream = self.stream.lock().await;
        stream.write_all(&bytes).await?;
        stream.flush().await?;
        trace!(%report, "report written");
        Ok(())
    }
}

#[async_trait]
impl ReportTransmitter for SerialHidTransport {
    async fn send_scancode(&self, report: HidReport) -> Result<(), String> {
        self.write_report(report).await.map_err(|e| e.to_string())
    }

    async fn release(&self) -> Result<(), String> {
        self.write_report(HidReport::idle())
            .await
            .map_err(|e| e.to_string())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_open_reports_the_failing_port_by_name() {
        // Act – a device node that cannot exist
        let result = SerialHidTransport::open("/dev/hidlink-test-no-such-port", 9600);

        // Assert
        match result {
            Err(TransportError::Open { port, .. }) => {
                assert_eq!(port, "/dev/hidlink-test-no-such-port");
            }
            Err(other) => panic!("expected Open error, got {other:?}"),
            Ok(_) => panic!("open should fail for a nonexistent port"),
        }
    }

    #[test]
    fn test_transport_error_display_includes_context() {
        // Arrange
        let err = TransportError::Io(std::io::Error::new(
            std::io::ErrorKind::BrokenPipe,
            "adapter unplugged",
        ));

        // Assert
        assert_eq!(err.to_string(), "serial write failed: adapter unplugged");
    }
}
