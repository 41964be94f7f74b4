//! Prelude for the sink API.
pub use crate::context::ExtractionContext;
pub use crate::document::DocumentIri;
pub use crate::error::{SinkError, SinkResult};
pub use crate::sink::TripleSink;
pub use crate::term::Term;
