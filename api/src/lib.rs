//! This crate is part of [Sluice],
//! a toolkit for relaying the output of RDF extractors in Rust.
//!
//! It defines the [`TripleSink`](sink::TripleSink) contract,
//! i.e. the events that an extraction driver emits while it processes a document,
//! together with the small value types those events carry.
//!
//! [Sluice]: https://docs.rs/sluice/latest/sluice/

#![deny(missing_docs)]

pub mod context;
pub mod document;
pub mod error;
pub mod prelude;
pub mod sink;
pub mod term;

pub use error::{SinkError, SinkResult};
