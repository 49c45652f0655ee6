//! Infrastructure layer for the host application.
//!
//! Contains OS-facing adapters: keyboard capture, the serial link to the
//! HID adapter, and file-system storage.
//!
//! **Dependency rule**: this layer may depend on `application` and
//! `hidlink_core`, but MUST NOT be imported by the `application` or domain
//! layers.

pub mod input_capture;
pub mod serial;
pub mod storage;
