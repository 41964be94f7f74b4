//! Replay a small, hard-coded extraction session
//! through a reporting sink and a logging sink,
//! writing summary lines to the standard output.
//!
//! Set `RUST_LOG=debug` to see the sinks' own diagnostics on the standard error.

use std::io::{stdout, BufWriter};

use sluice::api::prelude::*;
use sluice::writer::test::{event_log, RecordingSink};
use sluice::writer::{CompositeSink, LoggingSink, ReportingSink};

const FOAF: &str = "http://xmlns.com/foaf/0.1/";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let events = event_log();
    let mut terminals = CompositeSink::new();
    terminals.add_child(RecordingSink::new("memory", events.clone()));
    let mut sink = LoggingSink::new(
        ReportingSink::new(terminals),
        BufWriter::new(stdout()),
    );

    let pages: [&[&str]; 3] = [&["html-title", "rdfa"], &[], &["rdfa"]];
    for (i, extractors) in pages.iter().enumerate() {
        let doc = DocumentIri::new(format!("http://example.org/page{}.html", i))?;
        sink.start_document(&doc)?;
        sink.set_content_length(1024 * (i as u64 + 1))?;
        for name in extractors.iter() {
            let ctx = ExtractionContext::new(*name, doc.clone());
            sink.open_context(&ctx)?;
            sink.receive_namespace("foaf", FOAF, &ctx)?;
            sink.receive_triple(
                &Term::iri(doc.as_str()),
                &Term::iri(format!("{}name", FOAF)),
                &Term::literal(format!("page {}", i)),
                &ctx,
            )?;
            sink.close_context(&ctx)?;
        }
        sink.end_document(&doc)?;
    }

    let report = sink.wrapped().report();
    sink.close()?;
    log::info!("{} events recorded", events.borrow().len());
    eprintln!("{}", report);
    Ok(())
}
