//! Keyboard input

pub mod handler;
pub mod key;
