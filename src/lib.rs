//! Paginates plain text into fixed size printable pages with a header and footer
//! repeated on every page, and renders the pages to PDF.
//!
//! Start with a [`Paginator`]: give it the text, adjust the paper, margins, and fonts,
//! then render it onto a [`Canvas`](canvas::Canvas) or straight to a PDF [`Document`].

/// Drawing surfaces pages are rendered onto
pub mod canvas;
pub use canvas::{Canvas, DrawCommand, PdfCanvas, RecordingCanvas, RenderedPage};

mod content;

mod document;
pub use document::*;

mod error;
pub use error::*;

mod font;
pub use font::*;

mod info;
pub use info::*;

/// Margins and horizontal centering
pub mod layout;

mod manuscript;
pub use manuscript::*;

mod metrics;
pub use metrics::*;

mod page;
pub use page::*;

pub mod pagesize;

mod paginator;
pub use paginator::*;

pub mod print;
pub use print::{AlwaysConfirm, Confirm, PrintJob, PrintOutcome};

mod rect;
pub use rect::*;

pub(crate) mod refs;

mod style;
pub use style::*;

mod units;
pub use units::*;

/// Re-export PDF-writer functionality
pub use pdf_writer;
