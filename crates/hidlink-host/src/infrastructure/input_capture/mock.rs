//! Mock input source for unit testing.
//!
//! Allows tests to inject synthetic [`RawKeyEvent`]s without requiring an
//! input device or elevated permissions.

use std::sync::{Arc, Mutex};

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use super::{CaptureError, InputSource, RawKeyEvent};

/// A mock implementation of [`InputSource`] that allows tests to inject events.
pub struct MockInputSource {
    sender: Arc<Mutex<Option<UnboundedSender<RawKeyEvent>>>>,
}

impl MockInputSource {
    /// Creates a new mock input source.
    pub fn new() -> Self {
        Self {
            sender: Arc::new(Mutex::new(None)),
        }
    }

    /// Injects a synthetic event, as if captured from hardware.
    ///
    /// Panics if `start()` has not been called or if `stop()` has been called.
    pub fn inject_event(&self, event: RawKeyEvent) {
        let guard = self.sender.lock().expect("lock poisoned");
        if let Some(ref sender) = *guard {
            sender
                .send(event)
                .expect("receiver has been dropped; call start() first");
        } else {
            panic!("MockInputSource::inject_event called before start()");
        }
    }
}

impl Default for MockInputSource {
    fn default() -> Self {
        Self::new()
    }
}

impl InputSource for MockInputSource {
    fn start(&self) -> Result<UnboundedReceiver<RawKeyEvent>, CaptureError> {
        let (tx, rx) = mpsc::unbounded_channel();
        *self.sender.lock().expect("lock poisoned") = Some(tx);
        Ok(rx)
    }

    fn stop(&self) {
        // Drop the sender to close the channel
        *self.sender.lock().expect("lock poisoned") = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hidlink_core::LogicalKey;

    #[tokio::test]
    async fn test_mock_input_source_starts_and_receives_events() {
        // Arrange
        let source = MockInputSource::new();
        let mut rx = source.start().expect("start should succeed");

        // Act
        source.inject_event(RawKeyEvent::KeyDown {
            key: LogicalKey::Char('a'),
        });

        // Assert
        let event = rx.recv().await.expect("should receive event");
        assert_eq!(
            event,
            RawKeyEvent::KeyDown {
                key: LogicalKey::Char('a')
            }
        );
    }

    #[tokio::test]
    async fn test_mock_input_source_stop_closes_channel() {
        // Arrange
        let source = MockInputSource::new();
        let mut rx = source.start().expect("start should succeed");

        // Act
        source.stop();

        // Assert – channel should be disconnected
        assert!(rx.recv().await.is_none(), "channel should be closed after stop()");
    }

    #[test]
    #[should_panic(expected = "called before start()")]
    fn test_mock_input_source_rejects_injection_before_start() {
        // Arrange
        let source = MockInputSource::new();

        // Act – must panic, no receiver exists yet
        source.inject_event(RawKeyEvent::KeyDown {
            key: LogicalKey::Char('a'),
        });
    }

    #[tokio::test]
    async fn test_mock_input_source_preserves_event_order() {
        // Arrange
        let source = MockInputSource::new();
        let mut rx = source.start().expect("start should succeed");

        // Act – a press/release pair followed by an unrelated press
        source.inject_event(RawKeyEvent::KeyDown {
            key: LogicalKey::Char('h'),
        });
        source.inject_event(RawKeyEvent::KeyUp {
            key: LogicalKey::Char('h'),
        });
        source.inject_event(RawKeyEvent::KeyDown {
            key: LogicalKey::Escape,
        });

        // Assert
        assert_eq!(
            rx.recv().await.unwrap(),
            RawKeyEvent::KeyDown {
                key: LogicalKey::Char('h')
            }
        );
        assert_eq!(
            rx.recv().await.unwrap(),
            RawKeyEvent::KeyUp {
                key: LogicalKey::Char('h')
            }
        );
        assert_eq!(
            rx.recv().await.unwrap(),
            RawKeyEvent::KeyDown {
                key: LogicalKey::Escape
            }
        );
    }
}
