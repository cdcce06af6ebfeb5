//! Random node — range randomizer bounded context.
//!
//! Resolves one random integer per input item, inside the item's inclusive
//! `[min, max]` bounds. Degenerate ranges are answered locally; everything
//! else is fetched from the remote integer service through the injected
//! transport.

pub mod application;
pub mod domain;
