//! This crate is part of [Sluice],
//! a toolkit for relaying the output of RDF extractors in Rust.
//!
//! It provides [`TripleSink`](sluice_api::sink::TripleSink) adapters
//! that can be stacked between an extraction driver and the terminal sinks:
//!
//! * [`CompositeSink`] delivers every event to several sinks;
//! * [`LoggingSink`] writes one summary line per document;
//! * [`ReportingSink`] counts documents, triples and extractors over a whole session.
//!
//! [Sluice]: https://docs.rs/sluice/latest/sluice/

#![deny(missing_docs)]

pub mod composite;
pub mod logging;
pub mod reporting;

pub use composite::CompositeSink;
pub use logging::{InvalidArgument, LoggingConfig, LoggingSink, LoggingSinkBuilder};
pub use reporting::{Report, ReportingSink};

#[cfg(any(test, feature = "test_sink"))]
pub mod test;
