//! Domain model for the range randomizer.

pub mod bounds;
pub mod commands;
pub mod description;
pub mod endpoint;
pub mod outcome;
pub mod response;
