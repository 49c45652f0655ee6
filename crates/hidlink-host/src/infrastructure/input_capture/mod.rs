//! Input capture infrastructure for the host application.
//!
//! On Linux, this reads key events from an evdev character device
//! (`/dev/input/event*`) on a dedicated thread. Raw events are translated
//! to [`LogicalKey`] and placed into an unbounded channel consumed by the
//! Tokio async runtime.
//!
//! # Passive capture
//!
//! The device is never grabbed (no `EVIOCGRAB`), so every keystroke still
//! reaches the local session while a copy is forwarded to the target. This
//! also means capture keeps running when the terminal loses focus.
//!
//! # Testability
//!
//! The `InputSource` trait allows unit tests to inject synthetic events
//! without requiring a real input device.

use hidlink_core::LogicalKey;
use tokio::sync::mpsc::UnboundedReceiver;

pub mod mock;

#[cfg(target_os = "linux")]
pub mod linux_evdev;

/// A raw key event produced by the input capture infrastructure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawKeyEvent {
    /// A key was pressed down. Auto-repeat is reported as another `KeyDown`.
    KeyDown {
        /// The key, already translated from the platform code.
        key: LogicalKey,
    },
    /// A key was released.
    KeyUp { key: LogicalKey },
}

/// Error type for input capture operations.
#[derive(Debug, thiserror::Error)]
pub enum CaptureError {
    #[error("failed to open input device {path}: {source}")]
    DeviceOpen {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to spawn capture thread: {source}")]
    ThreadSpawn { source: std::io::Error },
    #[error("no keyboard-capable input device found")]
    NoKeyboardFound,
    #[error("capture channel closed; the capture thread has stopped")]
    ChannelClosed,
    #[error("platform not supported: {0}")]
    UnsupportedPlatform(&'static str),
}

/// Trait abstracting key event production.
///
/// The production implementation reads an evdev device; tests use
/// [`mock::MockInputSource`].
pub trait InputSource: Send {
    /// Starts the input source and returns a receiver for captured events.
    fn start(&self) -> Result<UnboundedReceiver<RawKeyEvent>, CaptureError>;

    /// Stops the input source and releases all OS resources.
    fn stop(&self);
}
