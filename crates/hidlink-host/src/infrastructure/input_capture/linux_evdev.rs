//! Linux evdev keyboard capture implementation.
//!
//! This module reads key events straight from an evdev character device
//! (`/dev/input/event*`) on a dedicated thread, translates the kernel key
//! codes through [`KeyMap::linux_evdev_to_key`], and delivers the results
//! into a tokio channel.
//!
//! The device is opened without grabbing (no `EVIOCGRAB`), so the local
//! session keeps seeing every keystroke. Running usually requires membership
//! in the `input` group or root.

#![cfg(target_os = "linux")]

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

use evdev::{Device, EventType, Key};
use hidlink_core::KeyMap;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, info, trace, warn};

use super::{CaptureError, InputSource, RawKeyEvent};

/// evdev event value for a key release.
const VALUE_RELEASE: i32 = 0;

/// Linux evdev input capture service.
///
/// Opens the configured device node, or discovers the first keyboard-capable
/// device, and runs a dedicated blocking read thread.
pub struct EvdevInputSource {
    /// Explicit device node to open; `None` enables discovery.
    device_path: Option<PathBuf>,
    /// Set to `true` when `stop()` has been called.
    stopped: Arc<AtomicBool>,
}

impl EvdevInputSource {
    /// Creates a new (unstarted) service instance.
    pub fn new(device_path: Option<PathBuf>) -> Self {
        Self {
            device_path,
            stopped: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Opens the configured device, or walks `/dev/input` for the first
    /// device that advertises an `A` key. Mice and power buttons also expose
    /// `EV_KEY`, so the check is for a letter key rather than the event type.
    fn open_device(&self) -> Result<Device, CaptureError> {
        if let Some(path) = &self.device_path {
            let device = Device::open(path).map_err(|source| CaptureError::DeviceOpen {
                path: path.display().to_string(),
                source,
            })?;
            info!(path = %path.display(), "using configured input device");
            return Ok(device);
        }

        for (path, device) in evdev::enumerate() {
            let is_keyboard = device
                .supported_keys()
                .map(|keys| keys.contains(Key::KEY_A))
                .unwrap_or(false);
            if is_keyboard {
                info!(
                    path = %path.display(),
                    name = device.name().unwrap_or("<unnamed>"),
                    "discovered keyboard device"
                );
                return Ok(device);
            }
        }
        Err(CaptureError::NoKeyboardFound)
    }
}

impl InputSource for EvdevInputSource {
    fn start(&self) -> Result<UnboundedReceiver<RawKeyEvent>, CaptureError> {
        let (tx, rx) = mpsc::unbounded_channel();
        let device = self.open_device()?;

        self.stopped.store(false, Ordering::SeqCst);
        let stopped = Arc::clone(&self.stopped);

        // Spawn the blocking read thread. fetch_events parks in the kernel
        // until input arrives, which must stay off the async runtime.
        thread::Builder::new()
            .name("hidlink-capture".to_string())
            .spawn(move || run_capture_loop(device, tx, stopped))
            .map_err(|source| CaptureError::ThreadSpawn { source })?;

        Ok(rx)
    }

    fn stop(&self) {
        self.stopped.store(true, Ordering::SeqCst);
        // The capture thread checks the flag after its next event batch and
        // exits, dropping the sender.
    }
}

/// Entry point for the dedicated capture thread.
fn run_capture_loop(
    mut device: Device,
    tx: UnboundedSender<RawKeyEvent>,
    stopped: Arc<AtomicBool>,
) {
    loop {
        if stopped.load(Ordering::SeqCst) {
            debug!("capture thread stopping");
            return;
        }

        let events = match device.fetch_events() {
            Ok(events) => events,
            Err(err) => {
                warn!(%err, "input device read failed; capture thread exiting");
                return;
            }
        };

        for event in events {
            if event.event_type() != EventType::KEY {
                continue;
            }
            let Some(key) = KeyMap::linux_evdev_to_key(event.code()) else {
                trace!(code = event.code(), "ignoring unmapped key code");
                continue;
            };
            // Value 1 is a press and 2 an auto-repeat; both forward as
            // KeyDown so held keys keep refreshing their recency.
            let raw = if event.value() == VALUE_RELEASE {
                RawKeyEvent::KeyUp { key }
            } else {
                RawKeyEvent::KeyDown { key }
            };
            if tx.send(raw).is_err() {
                // Receiver gone; the application is shutting down.
                return;
            }
        }
    }
}
