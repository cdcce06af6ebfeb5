//! Application layer for the range randomizer.

pub mod command_handlers;
