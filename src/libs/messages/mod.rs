//! User-facing message catalog.
//!
//! Variants live in [`types`], their wording in [`display`] and the
//! output macros in [`macros`]. Commands never format user text
//! themselves; they pick a [`Message`] and hand it to a `msg_*!` macro.

pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;
