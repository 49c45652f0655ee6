//! Application layer use cases for the host application.
//!
//! # What is the "application" layer? (for beginners)
//!
//! In Clean Architecture the *application* layer sits between the domain
//! (pure business rules) and the infrastructure (OS/serial/storage).
//!
//! Use cases in this layer:
//!
//! - **Orchestrate** domain objects to fulfil a user goal (e.g., "turn this
//!   key press into the next boot-keyboard report on the wire").
//! - **Depend on abstractions** (traits) rather than concrete implementations,
//!   so the infrastructure can be swapped without changing this code.
//! - **Contain no OS calls, no serial I/O, no file system access**.
//!
//! # Sub-modules
//!
//! - **`assemble_report`** – Receives raw key events, maintains the set of
//!   currently held keys, and sends the merged 8-byte report after every
//!   event.  This is the most critical use case — it runs on every keystroke.

pub mod assemble_report;
