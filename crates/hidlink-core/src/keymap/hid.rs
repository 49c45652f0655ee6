//! USB HID usage tables (page 0x07, Keyboard/Keypad page) for the boot report.
//!
//! Three lookups, all static and allocation-free:
//!
//! - [`modifier_bit`] for the eight modifier keys (they live in report byte 0,
//!   not in the usage slot),
//! - [`usage_code`] for named non-modifier keys (arrows, function row,
//!   navigation block, whitespace and editing keys),
//! - [`ascii_usage_code`] for printable characters on the US layout.
//!
//! # Why two tables for non-modifiers? (for beginners)
//!
//! The capture source reports special keys by *name* (ArrowUp, F5, Escape)
//! and printable keys by *character* ('a', '!', ' ').  Named keys have one
//! fixed usage code each.  Characters first have to be folded back onto the
//! physical key that produces them: 'A' and 'a' are the same key (usage
//! 0x04), '!' and '1' are the same key (usage 0x1E).  The capital or shifted
//! variant is reconstructed on the target machine from the Shift bit in the
//! modifier byte, which the physically held Shift key contributes on its own.
//!
//! # Nonstandard codes
//!
//! The function row deliberately ships F1..F10 as 0x3B..0x44 and F11/F12 as
//! 0x57/0x58.  This is one above the standard HID F-row (and keypad codes for
//! F11/F12), but it is what paired receiver firmware expects, so the values
//! are kept verbatim.

use thiserror::Error;

use crate::domain::key::LogicalKey;
use crate::domain::report::Modifiers;

/// A printable character with no usage code on the US layout.
///
/// Raised by [`ascii_usage_code`] for anything outside printable ASCII
/// (accented letters, emoji, control characters).  The forwarder logs the
/// character and drops the keystroke; this error never aborts the event loop.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("character {0:?} has no HID usage code on the US layout")]
pub struct UnmappedCharacter(pub char);

/// Returns the modifier-byte bit for the eight modifier keys, `None` for
/// every other key.
pub fn modifier_bit(key: LogicalKey) -> Option<Modifiers> {
    let bit = match key {
        LogicalKey::CtrlLeft => Modifiers::LEFT_CTRL,
        LogicalKey::ShiftLeft => Modifiers::LEFT_SHIFT,
        LogicalKey::AltLeft => Modifiers::LEFT_ALT,
        LogicalKey::MetaLeft => Modifiers::LEFT_META,
        LogicalKey::CtrlRight => Modifiers::RIGHT_CTRL,
        LogicalKey::ShiftRight => Modifiers::RIGHT_SHIFT,
        LogicalKey::AltRight => Modifiers::RIGHT_ALT,
        LogicalKey::MetaRight => Modifiers::RIGHT_META,
        _ => return None,
    };
    Some(Modifiers(bit))
}

/// Returns the fixed usage code for named non-modifier keys.
///
/// `None` for modifiers (byte 0, not the usage slot), for [`LogicalKey::Char`]
/// (see [`ascii_usage_code`]), and for the media keys, which have no
/// boot-keyboard representation at all.
pub fn usage_code(key: LogicalKey) -> Option<u8> {
    match key {
        // ── Whitespace and editing ───────────────────────────────────────────
        LogicalKey::Enter => Some(0x28),
        LogicalKey::Escape => Some(0x29),
        LogicalKey::Backspace => Some(0x2A),
        LogicalKey::Tab => Some(0x2B),
        LogicalKey::Space => Some(0x2C),
        LogicalKey::CapsLock => Some(0x39),
        LogicalKey::Delete => Some(0x4C),

        // ── Navigation block ─────────────────────────────────────────────────
        LogicalKey::Home => Some(0x4A),
        LogicalKey::PageUp => Some(0x4B),
        LogicalKey::End => Some(0x4D),
        LogicalKey::PageDown => Some(0x4E),

        // ── Arrows ───────────────────────────────────────────────────────────
        LogicalKey::ArrowRight => Some(0x4F),
        LogicalKey::ArrowLeft => Some(0x50),
        LogicalKey::ArrowDown => Some(0x51),
        LogicalKey::ArrowUp => Some(0x52),

        // ── Function row (receiver firmware expects these exact values; see
        //    the module docs) ─────────────────────────────────────────────────
        LogicalKey::F1 => Some(0x3B),
        LogicalKey::F2 => Some(0x3C),
        LogicalKey::F3 => Some(0x3D),
        LogicalKey::F4 => Some(0x3E),
        LogicalKey::F5 => Some(0x3F),
        LogicalKey::F6 => Some(0x40),
        LogicalKey::F7 => Some(0x41),
        LogicalKey::F8 => Some(0x42),
        LogicalKey::F9 => Some(0x43),
        LogicalKey::F10 => Some(0x44),
        LogicalKey::F11 => Some(0x57),
        LogicalKey::F12 => Some(0x58),

        // Media keys have no boot-keyboard usage; pressing one changes nothing
        // on the wire.
        LogicalKey::MediaPlayPause
        | LogicalKey::MediaVolumeMute
        | LogicalKey::MediaVolumeDown
        | LogicalKey::MediaVolumeUp
        | LogicalKey::MediaPrevious
        | LogicalKey::MediaNext => None,

        // Modifiers and characters are handled by the other two tables.
        _ => None,
    }
}

/// Returns the usage code of the physical key producing `ch` on the US layout.
///
/// Both cases of a letter and both shift states of a punctuation key fold
/// onto the same code.  `'\n'` maps to Enter and `'\t'` to Tab so that text
/// sources can be replayed through the same path.
pub fn ascii_usage_code(ch: char) -> Result<u8, UnmappedCharacter> {
    let code = match ch {
        // ── Letters (0x04..0x1D) ─────────────────────────────────────────────
        'a' | 'A' => 0x04,
        'b' | 'B' => 0x05,
        'c' | 'C' => 0x06,
        'd' | 'D' => 0x07,
        'e' | 'E' => 0x08,
        'f' | 'F' => 0x09,
        'g' | 'G' => 0x0A,
        'h' | 'H' => 0x0B,
        'i' | 'I' => 0x0C,
        'j' | 'J' => 0x0D,
        'k' | 'K' => 0x0E,
        'l' | 'L' => 0x0F,
        'm' | 'M' => 0x10,
        'n' | 'N' => 0x11,
        'o' | 'O' => 0x12,
        'p' | 'P' => 0x13,
        'q' | 'Q' => 0x14,
        'r' | 'R' => 0x15,
        's' | 'S' => 0x16,
        't' | 'T' => 0x17,
        'u' | 'U' => 0x18,
        'v' | 'V' => 0x19,
        'w' | 'W' => 0x1A,
        'x' | 'X' => 0x1B,
        'y' | 'Y' => 0x1C,
        'z' | 'Z' => 0x1D,

        // ── Digit row with its shifted symbols (0x1E..0x27) ──────────────────
        '1' | '!' => 0x1E,
        '2' | '@' => 0x1F,
        '3' | '#' => 0x20,
        '4' | '$' => 0x21,
        '5' | '%' => 0x22,
        '6' | '^' => 0x23,
        '7' | '&' => 0x24,
        '8' | '*' => 0x25,
        '9' | '(' => 0x26,
        '0' | ')' => 0x27,

        // ── Whitespace ───────────────────────────────────────────────────────
        '\n' => 0x28,
        '\t' => 0x2B,
        ' ' => 0x2C,

        // ── Punctuation with its shifted symbols ─────────────────────────────
        '-' | '_' => 0x2D,
        '=' | '+' => 0x2E,
        '[' | '{' => 0x2F,
        ']' | '}' => 0x30,
        '\\' | '|' => 0x31,
        ';' | ':' => 0x33,
        '\'' | '"' => 0x34,
        '`' | '~' => 0x35,
        ',' | '<' => 0x36,
        '.' | '>' => 0x37,
        '/' | '?' => 0x38,

        _ => return Err(UnmappedCharacter(ch)),
    };
    Ok(code)
}
