//! AssembleReportUseCase: folds key events into boot-keyboard reports.
//!
//! This use case is the heart of the host application. It receives raw key
//! events from the capture service, tracks which keys are currently held,
//! and after every event hands the merged 8-byte report to the
//! [`ReportTransmitter`].
//!
//! # Architecture
//!
//! This use case depends only on the [`ReportTransmitter`] trait and domain
//! types ([`LogicalKey`], [`HidReport`]). The serial implementation is
//! injected at construction time, making the use case fully unit-testable.
//!
//! # Report semantics
//!
//! Each held key contributes either a modifier bit (byte 0) or a usage code
//! (byte 2) to the report. Modifier bits OR together; the single usage slot
//! goes to the most recently pressed non-modifier key. Releasing any key
//! first sends the all-zero idle report and only then forgets the key, so
//! every release momentarily lifts all keys on the target; the next press
//! restores whatever is still held. Receivers are paired with this exact
//! cadence and depend on it.

use std::sync::Arc;

use async_trait::async_trait;
use hidlink_core::{HidReport, KeyMap, LogicalKey};
use thiserror::Error;
use tracing::{debug, warn};

use crate::infrastructure::input_capture::RawKeyEvent;

/// Error type for the assemble-report use case.
#[derive(Debug, Error)]
pub enum ForwardError {
    #[error("transmitter error: {0}")]
    Transmit(String),
}

/// Trait for delivering assembled reports to the HID adapter.
///
/// Infrastructure implementations write to a serial port; test
/// implementations record calls.
#[async_trait]
pub trait ReportTransmitter: Send + Sync {
    /// Sends one 8-byte report representing the current keyboard state.
    async fn send_scancode(&self, report: HidReport) -> Result<(), String>;

    /// Sends the all-zero idle report, lifting every key on the target.
    async fn release(&self) -> Result<(), String>;
}

/// What the capture loop should do after a press was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Keep listening.
    Continue,
    /// The exit chord (Ctrl+Escape) was recognised; stop the capture loop.
    Exit,
}

/// The currently held keys and their report contributions, in press order.
///
/// Owned exclusively by the use case. A Vec keeps insertion order so the
/// merge can prefer the most recent non-modifier key; with at most a handful
/// of fingers on the keyboard a linear scan is cheaper than any map.
#[derive(Debug, Default)]
struct ModifierState {
    entries: Vec<(LogicalKey, HidReport)>,
}

impl ModifierState {
    /// Inserts or refreshes a contribution. Re-pressing a held key
    /// (auto-repeat) moves it to the back, so recency follows the latest
    /// press and no key ever has two entries.
    fn insert(&mut self, key: LogicalKey, contribution: HidReport) {
        self.entries.retain(|(held, _)| *held != key);
        self.entries.push((key, contribution));
    }

    /// Forgets a key. Unknown keys are a no-op.
    fn remove(&mut self, key: LogicalKey) {
        self.entries.retain(|(held, _)| *held != key);
    }

    /// Merges all contributions into the report that goes on the wire:
    /// modifier bits OR together, and the usage slot takes the most recently
    /// pressed key that has one (zero when none does).
    fn merged(&self) -> HidReport {
        let mut report = HidReport::idle();
        for (_, contribution) in &self.entries {
            report.modifiers = report.modifiers.union(contribution.modifiers);
        }
        if let Some((_, contribution)) = self.entries.iter().rev().find(|(_, c)| c.keycode != 0) {
            report.keycode = contribution.keycode;
        }
        report
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

/// The Assemble Report use case.
///
/// Receives raw key events, tracks held keys, and sends the merged HID
/// report to the transmitter after every event.
pub struct AssembleReportUseCase {
    state: ModifierState,
    transmitter: Arc<dyn ReportTransmitter>,
}

impl AssembleReportUseCase {
    /// Creates a new use case instance.
    pub fn new(transmitter: Arc<dyn ReportTransmitter>) -> Self {
        Self {
            state: ModifierState::default(),
            transmitter,
        }
    }

    /// Handles a raw key event from the capture service.
    ///
    /// Returns [`KeyAction::Exit`] when the exit chord was pressed.
    ///
    /// # Errors
    ///
    /// Returns [`ForwardError::Transmit`] if the transmitter fails to deliver
    /// the report. State is already updated at that point; the caller may log
    /// and keep pumping events.
    pub async fn handle_event(&mut self, event: RawKeyEvent) -> Result<KeyAction, ForwardError> {
        match event {
            RawKeyEvent::KeyDown { key } => self.on_press(key).await,
            RawKeyEvent::KeyUp { key } => {
                self.on_release(key).await?;
                Ok(KeyAction::Continue)
            }
        }
    }

    /// Handles a key press.
    ///
    /// The merged report is sent even when the key itself contributed
    /// nothing (media keys, unmappable characters), so the wire always
    /// reflects the current held-key state.
    pub async fn on_press(&mut self, key: LogicalKey) -> Result<KeyAction, ForwardError> {
        // Exit chord: Escape while either Ctrl is held. Nothing goes on the
        // wire and the state keeps its entries; the caller tears down the
        // loop and sends the final release.
        if key == LogicalKey::Escape && self.state.merged().modifiers.ctrl() {
            return Ok(KeyAction::Exit);
        }

        if let Some(contribution) = Self::contribution(key) {
            self.state.insert(key, contribution);
        }

        let report = self.state.merged();
        debug!(%report, "key down");
        self.transmitter
            .send_scancode(report)
            .await
            .map_err(ForwardError::Transmit)?;
        Ok(KeyAction::Continue)
    }

    /// Handles a key release.
    ///
    /// The idle report goes out before the state changes; see the module
    /// docs for why the order matters. The key is forgotten even when the
    /// write fails: a stale entry would come back in every later merged
    /// report.
    pub async fn on_release(&mut self, key: LogicalKey) -> Result<(), ForwardError> {
        debug!(report = %HidReport::idle(), "key up, idling");
        let sent = self
            .transmitter
            .release()
            .await
            .map_err(ForwardError::Transmit);
        self.state.remove(key);
        sent
    }

    /// Number of keys currently tracked as held.
    pub fn held_key_count(&self) -> usize {
        self.state.len()
    }

    /// The report the current held-key set merges to.
    pub fn current_report(&self) -> HidReport {
        self.state.merged()
    }

    // ── Private helpers ───────────────────────────────────────────────────────

    /// Computes the report contribution for a key.
    ///
    /// `None` for keys with no boot-keyboard representation: media keys
    /// silently, unmappable characters with a warning.
    fn contribution(key: LogicalKey) -> Option<HidReport> {
        if let Some(bits) = KeyMap::modifier_bit(key) {
            return Some(HidReport::from_modifiers(bits));
        }
        if let Some(usage) = KeyMap::usage_code(key) {
            return Some(HidReport::from_keycode(usage));
        }
        if let LogicalKey::Char(ch) = key {
            match KeyMap::ascii_usage_code(ch) {
                Ok(usage) => return Some(HidReport::from_keycode(usage)),
                Err(err) => {
                    warn!(%err, "dropping keystroke");
                    return None;
                }
            }
        }
        None
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
