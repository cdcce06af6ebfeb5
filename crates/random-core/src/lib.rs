//! Random Core — shared ports and error types.
//!
//! This crate defines the seams between the range randomizer and its
//! collaborators: the host that supplies items and parameters, and the
//! transport that reaches the remote integer service. It contains no
//! infrastructure code.

pub mod command;
pub mod error;
pub mod policy;
pub mod source;
pub mod transport;
