//! Domain entities for hidlink.
//!
//! This module contains pure business logic with no infrastructure dependencies.
//!
//! # What is "domain" in Clean Architecture? (for beginners)
//!
//! Clean Architecture organises code into concentric layers.  The innermost
//! layer is called the **domain** (or "entities" layer).  Domain code:
//!
//! - Contains the core business rules of the application.
//! - Has **no** imports from OS APIs, serial-port libraries, or UI frameworks.
//! - Can be compiled and tested on any platform without any external setup.
//! - Defines the data types that make the system uniquely what it is: in this
//!   case, the identity of a pressed key and the 8-byte USB HID boot-keyboard
//!   report that carries the keyboard state across the wire.
//!
//! Code in outer layers (infrastructure, application, UI) depends on the domain,
//! but the domain never depends on them.  This makes the domain easy to unit-test
//! in isolation.

/// Logical key identity — the key as the capture source reports it.
///
/// See [`key::LogicalKey`] for the main type.
pub mod key;

/// HID boot-keyboard report — the 8 bytes that travel over the wire.
///
/// See [`report::HidReport`] for the main type.
pub mod report;
