//! Event types and observers.
//!
//! Submodules:
//! - [`fork`] – a branch was chosen, a fork left the screen
//! - [`switchdebug`] – toggle the debug overlay on/off
pub mod fork;
pub mod switchdebug;
