//! Handing a finished document over to a printer or to storage.

use crate::document::Document;
use crate::PrintError;
use std::io::Write;

/// What happened to a print job
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PrintOutcome {
    /// The document was written to its destination
    Printed,
    /// The confirmation step was declined; nothing was written
    Declined,
}

/// Asks whether a finished document should be sent on, the way a print dialog would.
///
/// Implemented for closures, so a GUI can pop up a dialog while tests and batch jobs
/// pass `|_| true`.
pub trait Confirm {
    fn confirm(&mut self, document: &Document) -> bool;
}

impl<F: FnMut(&Document) -> bool> Confirm for F {
    fn confirm(&mut self, document: &Document) -> bool {
        self(document)
    }
}

/// Confirms every document without asking
#[derive(Debug, Default, Copy, Clone)]
pub struct AlwaysConfirm;

impl Confirm for AlwaysConfirm {
    fn confirm(&mut self, _: &Document) -> bool {
        true
    }
}

/// Sends documents to a destination once they are confirmed
pub struct PrintJob<C: Confirm> {
    confirm: C,
}

impl<C: Confirm> PrintJob<C> {
    pub fn new(confirm: C) -> PrintJob<C> {
        PrintJob { confirm }
    }

    /// Confirm `document` and write it to `sink` as a PDF
    pub fn run<W: Write>(&mut self, document: &Document, mut sink: W) -> Result<PrintOutcome, PrintError> {
        if !self.confirm.confirm(document) {
            log::info!("print job with {} pages declined", document.page_count());
            return Ok(PrintOutcome::Declined);
        }

        document.write(&mut sink)?;
        sink.flush()?;
        log::info!("printed {} pages", document.page_count());
        Ok(PrintOutcome::Printed)
    }
}
