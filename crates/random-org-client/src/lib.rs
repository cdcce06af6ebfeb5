//! HTTP transport for the Random node.
//!
//! Implements the `Transport` port from `random-core` on top of `reqwest`.

pub mod reqwest_transport;

pub use reqwest_transport::ReqwestTransport;
