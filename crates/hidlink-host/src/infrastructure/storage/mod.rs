//! Storage infrastructure: configuration file persistence.
//!
//! The `config` sub-module owns everything the forwarder remembers between
//! runs:
//!
//! - Which serial port the HID adapter sits on and at what baud rate.
//! - Which evdev node to capture from (absent means auto-discover).
//! - Sensible defaults when the TOML file does not exist yet (first run).
//!
//! Nothing outside this module touches the file system for settings, so the
//! on-disk format can change without rippling into the capture or serial
//! code.

pub mod config;
