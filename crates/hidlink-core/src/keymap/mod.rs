//! Key translation tables for building boot-keyboard reports.
//!
//! The canonical representation on the wire is USB HID Usage IDs (page 0x07,
//! Keyboard/Keypad).  Capture-source codes are translated to [`LogicalKey`]
//! at the capture boundary and to HID bytes when a report is assembled.

pub mod hid;
pub mod linux_evdev;

pub use hid::UnmappedCharacter;

use crate::domain::key::LogicalKey;
use crate::domain::report::Modifiers;

/// Unified key map providing all translation directions.
pub struct KeyMap;

impl KeyMap {
    /// Returns the report byte-0 bit for a modifier key.
    ///
    /// Returns `None` for every non-modifier key.
    pub fn modifier_bit(key: LogicalKey) -> Option<Modifiers> {
        hid::modifier_bit(key)
    }

    /// Returns the fixed usage code for a named non-modifier key.
    ///
    /// Returns `None` for modifiers, characters, and keys with no
    /// boot-keyboard representation (the media keys).
    pub fn usage_code(key: LogicalKey) -> Option<u8> {
        hid::usage_code(key)
    }

    /// Returns the US-layout usage code for a printable character.
    ///
    /// Fails with [`UnmappedCharacter`] for anything outside printable ASCII.
    pub fn ascii_usage_code(ch: char) -> Result<u8, UnmappedCharacter> {
        hid::ascii_usage_code(ch)
    }

    /// Translates a Linux evdev key code to a [`LogicalKey`].
    ///
    /// Returns `None` if the code is outside the forwarder's key set.
    pub fn linux_evdev_to_key(code: u16) -> Option<LogicalKey> {
        linux_evdev::key_from_code(code)
    }
}
