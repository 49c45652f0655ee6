//! Logical key identity.
//!
//! A [`LogicalKey`] is a key event as the capture source hands it to us,
//! before any HID translation.  Named variants cover the keys the forwarder
//! understands; printable input arrives as [`LogicalKey::Char`] with the
//! character the OS already resolved (so Shift+a is delivered as `Char('A')`
//! on sources that apply the layout, or `Char('a')` plus a held Shift on
//! sources that do not; both encode to the same bytes on the wire).
//!
//! The enum is deliberately closed: keys without an entry here (Insert,
//! NumLock, the numpad, PrintScreen, ...) are filtered out at the capture
//! boundary and never reach the report engine.

/// Identity of a key as reported by the capture source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalKey {
    // ── Modifiers (exactly the eight HID boot modifiers) ─────────────────────
    CtrlLeft,
    CtrlRight,
    ShiftLeft,
    ShiftRight,
    AltLeft,
    AltRight,
    MetaLeft,
    MetaRight,

    // ── Whitespace and editing ───────────────────────────────────────────────
    Enter,
    Tab,
    Space,
    Backspace,
    Delete,
    Escape,
    CapsLock,

    // ── Arrows ───────────────────────────────────────────────────────────────
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    // ── Navigation block ─────────────────────────────────────────────────────
    Home,
    End,
    PageUp,
    PageDown,

    // ── Function row ─────────────────────────────────────────────────────────
    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    F11,
    F12,

    // ── Media keys (no boot-keyboard representation; pressing one is a no-op
    //    on the wire) ─────────────────────────────────────────────────────────
    MediaPlayPause,
    MediaVolumeMute,
    MediaVolumeDown,
    MediaVolumeUp,
    MediaPrevious,
    MediaNext,

    /// A printable character, shift state already applied by the source.
    Char(char),
}

impl LogicalKey {
    /// Returns `true` for the eight modifier variants.
    pub fn is_modifier(&self) -> bool {
        matches!(
            self,
            LogicalKey::CtrlLeft
                | LogicalKey::CtrlRight
                | LogicalKey::ShiftLeft
                | LogicalKey::ShiftRight
                | LogicalKey::AltLeft
                | LogicalKey::AltRight
                | LogicalKey::MetaLeft
                | LogicalKey::MetaRight
        )
    }

    /// Returns `true` for the media variants, which have no boot-keyboard
    /// usage code and therefore never contribute to a report.
    pub fn is_media(&self) -> bool {
        matches!(
            self,
            LogicalKey::MediaPlayPause
                | LogicalKey::MediaVolumeMute
                | LogicalKey::MediaVolumeDown
                | LogicalKey::MediaVolumeUp
                | LogicalKey::MediaPrevious
                | LogicalKey::MediaNext
        )
    }
}
