//! Shared test doubles for the Random node.

mod source;
mod transport;

pub use source::StaticItemSource;
pub use transport::{FailingTransport, RangeTransport, StubTransport};
