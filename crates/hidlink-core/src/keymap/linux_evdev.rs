//! Linux input event key code to [`LogicalKey`] translation table.
//!
//! Key codes are the `KEY_*` constants from `<linux/input-event-codes.h>`,
//! the values the kernel's evdev interface reports for keyboard events.
//!
//! # What is an evdev key code? (for beginners)
//!
//! On Linux, every input device appears as `/dev/input/eventN`.  Reading from
//! such a node yields kernel `input_event` structs whose `code` field names
//! the key.  The codes identify *physical key positions*, not characters:
//! `KEY_A` (30) is the QWERTY "A" position regardless of layout, and pressing
//! Shift does not change the code.
//!
//! # Why lowercase characters?
//!
//! Printable positions map to their *unshifted* US-layout character
//! (`KEY_A` -> `Char('a')`, `KEY_1` -> `Char('1')`).  The HID usage code is
//! identical for both shift states of a key, and the Shift key itself travels
//! as a modifier bit, so the target machine reconstructs capitals and
//! shifted symbols on its own.
//!
//! Codes without an entry (numpad, Insert, NumLock, SysRq, ...) translate to
//! `None` and are skipped at the capture boundary.

use crate::domain::key::LogicalKey;

/// Translates a Linux evdev key code to a [`LogicalKey`].
///
/// Returns `None` for codes the forwarder does not handle.
///
/// # Panics
///
/// This function never panics; all u16 inputs are handled.
pub fn key_from_code(code: u16) -> Option<LogicalKey> {
    if (code as usize) < EVDEV_TO_KEY_TABLE.len() {
        EVDEV_TO_KEY_TABLE[code as usize]
    } else {
        None
    }
}

/// Complete evdev -> [`LogicalKey`] mapping table indexed by key code (0..255).
///
/// Entries are `None` when the code has no forwarder equivalent.
/// Reference: `<linux/input-event-codes.h>`.
const EVDEV_TO_KEY_TABLE: [Option<LogicalKey>; 256] = {
    use LogicalKey::*;
    let mut t: [Option<LogicalKey>; 256] = [None; 256];

    // ── Top alphanumeric rows (KEY_1=2 … KEY_0=11, letters by QWERTY row) ────
    t[2] = Some(Char('1'));
    t[3] = Some(Char('2'));
    t[4] = Some(Char('3'));
    t[5] = Some(Char('4'));
    t[6] = Some(Char('5'));
    t[7] = Some(Char('6'));
    t[8] = Some(Char('7'));
    t[9] = Some(Char('8'));
    t[10] = Some(Char('9'));
    t[11] = Some(Char('0'));
    t[16] = Some(Char('q'));
    t[17] = Some(Char('w'));
    t[18] = Some(Char('e'));
    t[19] = Some(Char('r'));
    t[20] = Some(Char('t'));
    t[21] = Some(Char('y'));
    t[22] = Some(Char('u'));
    t[23] = Some(Char('i'));
    t[24] = Some(Char('o'));
    t[25] = Some(Char('p'));
    t[30] = Some(Char('a'));
    t[31] = Some(Char('s'));
    t[32] = Some(Char('d'));
    t[33] = Some(Char('f'));
    t[34] = Some(Char('g'));
    t[35] = Some(Char('h'));
    t[36] = Some(Char('j'));
    t[37] = Some(Char('k'));
    t[38] = Some(Char('l'));
    t[44] = Some(Char('z'));
    t[45] = Some(Char('x'));
    t[46] = Some(Char('c'));
    t[47] = Some(Char('v'));
    t[48] = Some(Char('b'));
    t[49] = Some(Char('n'));
    t[50] = Some(Char('m'));

    // ── Punctuation (unshifted US layout) ────────────────────────────────────
    t[12] = Some(Char('-'));        // KEY_MINUS
    t[13] = Some(Char('='));        // KEY_EQUAL
    t[26] = Some(Char('['));        // KEY_LEFTBRACE
    t[27] = Some(Char(']'));        // KEY_RIGHTBRACE
    t[39] = Some(Char(';'));        // KEY_SEMICOLON
    t[40] = Some(Char('\''));       // KEY_APOSTROPHE
    t[41] = Some(Char('`'));        // KEY_GRAVE
    t[43] = Some(Char('\\'));       // KEY_BACKSLASH
    t[51] = Some(Char(','));        // KEY_COMMA
    t[52] = Some(Char('.'));        // KEY_DOT
    t[53] = Some(Char('/'));        // KEY_SLASH

    // ── Modifiers ────────────────────────────────────────────────────────────
    t[29] = Some(CtrlLeft);         // KEY_LEFTCTRL
    t[42] = Some(ShiftLeft);        // KEY_LEFTSHIFT
    t[54] = Some(ShiftRight);       // KEY_RIGHTSHIFT
    t[56] = Some(AltLeft);          // KEY_LEFTALT
    t[97] = Some(CtrlRight);        // KEY_RIGHTCTRL
    t[100] = Some(AltRight);        // KEY_RIGHTALT (AltGr)
    t[125] = Some(MetaLeft);        // KEY_LEFTMETA
    t[126] = Some(MetaRight);       // KEY_RIGHTMETA

    // ── Whitespace and editing ───────────────────────────────────────────────
    t[1] = Some(Escape);            // KEY_ESC
    t[14] = Some(Backspace);        // KEY_BACKSPACE
    t[15] = Some(Tab);              // KEY_TAB
    t[28] = Some(Enter);            // KEY_ENTER
    t[57] = Some(Space);            // KEY_SPACE
    t[58] = Some(CapsLock);         // KEY_CAPSLOCK
    t[111] = Some(Delete);          // KEY_DELETE

    // ── Function row (KEY_F1=59 … KEY_F10=68, KEY_F11=87, KEY_F12=88) ────────
    t[59] = Some(F1);
    t[60] = Some(F2);
    t[61] = Some(F3);
    t[62] = Some(F4);
    t[63] = Some(F5);
    t[64] = Some(F6);
    t[65] = Some(F7);
    t[66] = Some(F8);
    t[67] = Some(F9);
    t[68] = Some(F10);
    t[87] = Some(F11);
    t[88] = Some(F12);

    // ── Navigation block and arrows ──────────────────────────────────────────
    t[102] = Some(Home);            // KEY_HOME
    t[103] = Some(ArrowUp);         // KEY_UP
    t[104] = Some(PageUp);          // KEY_PAGEUP
    t[105] = Some(ArrowLeft);       // KEY_LEFT
    t[106] = Some(ArrowRight);      // KEY_RIGHT
    t[107] = Some(End);             // KEY_END
    t[108] = Some(ArrowDown);       // KEY_DOWN
    t[109] = Some(PageDown);        // KEY_PAGEDOWN

    // ── Media keys ───────────────────────────────────────────────────────────
    t[113] = Some(MediaVolumeMute); // KEY_MUTE
    t[114] = Some(MediaVolumeDown); // KEY_VOLUMEDOWN
    t[115] = Some(MediaVolumeUp);   // KEY_VOLUMEUP
    t[163] = Some(MediaNext);       // KEY_NEXTSONG
    t[164] = Some(MediaPlayPause);  // KEY_PLAYPAUSE
    t[165] = Some(MediaPrevious);   // KEY_PREVIOUSSONG

    t
};

#[cfg(test)]
mod tests {
    use super::*;
    use LogicalKey::*;

    /// Well-known evdev codes and the keys they must produce.
    const STANDARD_MAPPINGS: &[(u16, LogicalKey)] = &[
        // Letters and digits
        (30, Char('a')),
        (48, Char('b')),
        (46, Char('c')),
        (44, Char('z')),
        (2, Char('1')),
        (11, Char('0')),
        // Punctuation
        (12, Char('-')),
        (13, Char('=')),
        (26, Char('[')),
        (27, Char(']')),
        (40, Char('\'')),
        (41, Char('`')),
        (43, Char('\\')),
        (53, Char('/')),
        // Modifiers
        (29, CtrlLeft),
        (97, CtrlRight),
        (42, ShiftLeft),
        (54, ShiftRight),
        (56, AltLeft),
        (100, AltRight),
        (125, MetaLeft),
        (126, MetaRight),
        // Whitespace / editing
        (1, Escape),
        (14, Backspace),
        (15, Tab),
        (28, Enter),
        (57, Space),
        (58, CapsLock),
        (111, Delete),
        // Function row
        (59, F1),
        (68, F10),
        (87, F11),
        (88, F12),
        // Navigation and arrows
        (102, Home),
        (103, ArrowUp),
        (104, PageUp),
        (105, ArrowLeft),
        (106, ArrowRight),
        (107, End),
        (108, ArrowDown),
        (109, PageDown),
        // Media
        (113, MediaVolumeMute),
        (115, MediaVolumeUp),
        (164, MediaPlayPause),
    ];

    #[test]
    fn test_all_standard_codes_map_to_the_expected_key() {
        for &(code, expected) in STANDARD_MAPPINGS {
            let result = key_from_code(code);
            assert_eq!(
                result,
                Some(expected),
                "key_from_code({code}) should return {expected:?}"
            );
        }
    }

    #[test]
    fn test_unhandled_codes_return_none() {
        // Numpad, lock keys, SysRq, Insert: outside the forwarder's key set.
        for code in [0u16, 55, 69, 70, 71, 83, 96, 98, 99, 110] {
            assert_eq!(
                key_from_code(code),
                None,
                "key_from_code({code}) should be None"
            );
        }
    }

    #[test]
    fn test_key_from_code_never_panics_for_any_u16() {
        for code in 0u16..=u16::MAX {
            let _ = key_from_code(code); // Must not panic
        }
    }

    #[test]
    fn test_codes_above_the_table_are_none() {
        assert_eq!(key_from_code(256), None);
        assert_eq!(key_from_code(0x2FF), None);
        assert_eq!(key_from_code(u16::MAX), None);
    }

    #[test]
    fn test_all_26_letter_positions_are_mapped() {
        let letter_codes: &[u16] = &[
            16, 17, 18, 19, 20, 21, 22, 23, 24, 25, // q..p
            30, 31, 32, 33, 34, 35, 36, 37, 38, // a..l
            44, 45, 46, 47, 48, 49, 50, // z..m
        ];
        assert_eq!(letter_codes.len(), 26);
        for &code in letter_codes {
            match key_from_code(code) {
                Some(Char(ch)) => {
                    assert!(ch.is_ascii_lowercase(), "code {code} maps to {ch:?}")
                }
                other => panic!("code {code} should map to a letter, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_modifier_codes_map_to_modifier_keys() {
        for code in [29u16, 42, 54, 56, 97, 100, 125, 126] {
            let key = key_from_code(code).unwrap_or_else(|| panic!("code {code} unmapped"));
            assert!(key.is_modifier(), "code {code} should be a modifier, got {key:?}");
        }
    }
}
