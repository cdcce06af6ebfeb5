//! Random node — HTTP host.
//!
//! Exposes the range randomizer over HTTP, standing in for the workflow
//! engine: it resolves node parameters against the posted items and hands
//! the batch to the command handler.

pub mod config;
pub mod error;
pub mod routes;
pub mod source;
pub mod state;
