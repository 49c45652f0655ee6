//! USB HID boot-protocol keyboard report.
//!
//! The wire format is the 8-byte boot report every BIOS understands:
//!
//! ```text
//! byte 0   modifier bitmask (one bit per modifier key, see [`Modifiers`])
//! byte 1   reserved, always 0x00
//! byte 2   usage code of the active non-modifier key (0x00 = none)
//! bytes 3..7   always 0x00
//! ```
//!
//! A full boot report carries up to six usage codes in bytes 2..7.  This
//! forwarder deliberately uses only the first slot: one non-modifier key at a
//! time, with later presses displacing earlier ones in the slot.  Bytes 3..7
//! are therefore always zero.

use std::fmt;

/// Size in bytes of a boot-protocol keyboard report.
pub const HID_REPORT_SIZE: usize = 8;

/// Bit flags for the report's modifier byte (byte 0).
///
/// Bit positions follow the HID boot-keyboard layout: the low nibble is the
/// left-hand side, the high nibble the right-hand side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Modifiers(pub u8);

impl Modifiers {
    pub const LEFT_CTRL: u8 = 1 << 0;
    pub const LEFT_SHIFT: u8 = 1 << 1;
    pub const LEFT_ALT: u8 = 1 << 2;
    pub const LEFT_META: u8 = 1 << 3;
    pub const RIGHT_CTRL: u8 = 1 << 4;
    pub const RIGHT_SHIFT: u8 = 1 << 5;
    pub const RIGHT_ALT: u8 = 1 << 6;
    pub const RIGHT_META: u8 = 1 << 7;

    /// No modifiers held.
    pub const fn none() -> Self {
        Modifiers(0)
    }

    /// Returns true if either Ctrl key is held.
    pub fn ctrl(&self) -> bool {
        self.0 & (Self::LEFT_CTRL | Self::RIGHT_CTRL) != 0
    }

    /// Returns true if either Shift key is held.
    pub fn shift(&self) -> bool {
        self.0 & (Self::LEFT_SHIFT | Self::RIGHT_SHIFT) != 0
    }

    /// Returns true if either Alt key is held.
    pub fn alt(&self) -> bool {
        self.0 & (Self::LEFT_ALT | Self::RIGHT_ALT) != 0
    }

    /// Returns true if either Meta (GUI/Cmd/Win) key is held.
    pub fn meta(&self) -> bool {
        self.0 & (Self::LEFT_META | Self::RIGHT_META) != 0
    }

    /// Returns true when no modifier bit is set.
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Union of two modifier sets.
    pub const fn union(self, other: Modifiers) -> Modifiers {
        Modifiers(self.0 | other.0)
    }
}

/// One boot-protocol keyboard report, restricted to a single usage slot.
///
/// Also used for per-key *contributions*: a held modifier contributes a
/// report with only a modifier bit set, a held letter contributes a report
/// with only the usage slot set.  Contributions merge into the report that
/// actually goes on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HidReport {
    /// Byte 0: modifier bitmask.
    pub modifiers: Modifiers,
    /// Byte 2: usage code of the active non-modifier key, 0x00 for none.
    pub keycode: u8,
}

impl HidReport {
    /// The all-zero report: no modifiers, no key.  Sending it releases
    /// everything on the target.
    pub const fn idle() -> Self {
        HidReport {
            modifiers: Modifiers::none(),
            keycode: 0,
        }
    }

    /// A contribution carrying only a modifier bit.
    pub const fn from_modifiers(modifiers: Modifiers) -> Self {
        HidReport { modifiers, keycode: 0 }
    }

    /// A contribution carrying only a usage code.
    pub const fn from_keycode(keycode: u8) -> Self {
        HidReport {
            modifiers: Modifiers::none(),
            keycode,
        }
    }

    /// Returns true for the all-zero report.
    pub fn is_idle(&self) -> bool {
        self.modifiers.is_empty() && self.keycode == 0
    }

    /// Encodes the report into the 8 bytes that go over the wire.
    pub fn to_bytes(&self) -> [u8; HID_REPORT_SIZE] {
        [self.modifiers.0, 0x00, self.keycode, 0x00, 0x00, 0x00, 0x00, 0x00]
    }
}

impl fmt::Display for HidReport {
    /// Hex dump of the wire bytes, e.g. `01 00 06 00 00 00 00 00`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bytes = self.to_bytes();
        for (i, byte) in bytes.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modifier_bits_match_boot_keyboard_layout() {
        // Arrange
        let expected: &[(u8, u8)] = &[
            (Modifiers::LEFT_CTRL, 0x01),
            (Modifiers::LEFT_SHIFT, 0x02),
            (Modifiers::LEFT_ALT, 0x04),
            (Modifiers::LEFT_META, 0x08),
            (Modifiers::RIGHT_CTRL, 0x10),
            (Modifiers::RIGHT_SHIFT, 0x20),
            (Modifiers::RIGHT_ALT, 0x40),
            (Modifiers::RIGHT_META, 0x80),
        ];

        // Act / Assert
        for &(bit, value) in expected {
            assert_eq!(bit, value, "bit 0x{value:02x} misplaced");
        }
    }

    #[test]
    fn test_side_insensitive_predicates() {
        assert!(Modifiers(Modifiers::LEFT_CTRL).ctrl());
        assert!(Modifiers(Modifiers::RIGHT_CTRL).ctrl());
        assert!(!Modifiers(Modifiers::LEFT_SHIFT).ctrl());

        assert!(Modifiers(Modifiers::RIGHT_SHIFT).shift());
        assert!(Modifiers(Modifiers::LEFT_ALT).alt());
        assert!(Modifiers(Modifiers::RIGHT_META).meta());
        assert!(Modifiers::none().is_empty());
    }

    #[test]
    fn test_union_ors_bits() {
        // Arrange
        let ctrl = Modifiers(Modifiers::LEFT_CTRL);
        let shift = Modifiers(Modifiers::LEFT_SHIFT);

        // Act
        let both = ctrl.union(shift);

        // Assert
        assert_eq!(both.0, 0x03);
        assert!(both.ctrl());
        assert!(both.shift());
    }

    #[test]
    fn test_report_encodes_to_eight_bytes_with_fixed_layout() {
        // Arrange
        let report = HidReport {
            modifiers: Modifiers(Modifiers::LEFT_CTRL | Modifiers::RIGHT_ALT),
            keycode: 0x06,
        };

        // Act
        let bytes = report.to_bytes();

        // Assert
        assert_eq!(bytes.len(), HID_REPORT_SIZE);
        assert_eq!(bytes[0], 0x41, "modifier byte");
        assert_eq!(bytes[1], 0x00, "reserved byte");
        assert_eq!(bytes[2], 0x06, "usage slot");
        assert_eq!(&bytes[3..], &[0, 0, 0, 0, 0], "tail must stay zero");
    }

    #[test]
    fn test_idle_report_is_all_zero() {
        assert_eq!(HidReport::idle().to_bytes(), [0u8; 8]);
        assert!(HidReport::idle().is_idle());
        assert_eq!(HidReport::default(), HidReport::idle());
    }

    #[test]
    fn test_contribution_constructors_fill_one_field_only() {
        let modifier = HidReport::from_modifiers(Modifiers(Modifiers::LEFT_SHIFT));
        assert_eq!(modifier.to_bytes(), [0x02, 0, 0, 0, 0, 0, 0, 0]);

        let key = HidReport::from_keycode(0x04);
        assert_eq!(key.to_bytes(), [0, 0, 0x04, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_display_is_a_hex_dump() {
        let report = HidReport {
            modifiers: Modifiers(Modifiers::LEFT_CTRL),
            keycode: 0x29,
        };
        assert_eq!(report.to_string(), "01 00 29 00 00 00 00 00");
    }
}
