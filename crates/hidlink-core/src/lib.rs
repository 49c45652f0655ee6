//! # hidlink-core
//!
//! Shared library for hidlink containing the domain entities and the key
//! translation tables used to build USB HID boot-keyboard reports.
//!
//! It has zero dependencies on OS APIs, UI frameworks, or serial ports.
//!
//! # Architecture overview (for beginners)
//!
//! hidlink turns one computer's keyboard into a USB keyboard for another
//! computer.  The host captures local key events, folds them into the 8-byte
//! HID boot-keyboard report format, and ships each report over a serial link
//! to a small adapter that replays it as genuine USB keyboard traffic.
//!
//! This crate (`hidlink-core`) is the pure foundation.  It defines:
//!
//! - **`domain`** – The entities: [`LogicalKey`], the identity of a pressed
//!   key as the capture source reports it, and [`HidReport`], the 8 bytes
//!   that travel over the wire (modifier bitmask, reserved byte, one usage
//!   slot, five zero bytes).
//!
//! - **`keymap`** – Translation tables: modifier keys to their bit in report
//!   byte 0, named keys to their fixed usage code, printable US-layout
//!   characters to the usage code of the key that produces them, and Linux
//!   evdev key codes to [`LogicalKey`] for the capture boundary.
//!
//! The stateful part (which keys are currently held, what merged report to
//! send next) lives in the host application crate, not here.

// Declare the two top-level modules.  Rust will look for each in a
// subdirectory with the same name (e.g., src/keymap/mod.rs).
pub mod domain;
pub mod keymap;

// Re-export the most-used types at the crate root so callers can write
// `hidlink_core::HidReport` instead of `hidlink_core::domain::report::HidReport`.
pub use domain::key::LogicalKey;
pub use domain::report::{HidReport, Modifiers, HID_REPORT_SIZE};
pub use keymap::{KeyMap, UnmappedCharacter};
