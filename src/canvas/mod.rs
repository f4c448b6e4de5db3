//! Drawing surfaces the paginator renders onto.
//!
//! A [`Canvas`] mirrors the text operators of a PDF content stream: text is drawn
//! inside a text block, and positions are set with relative moves where each move is
//! an offset from the start of the previous line (like the `Td` operator), not from
//! the end of the text drawn last.
//!
//! Two canvases ship with the crate:
//!
//! - [`RecordingCanvas`] keeps every draw command, with absolute coordinates, grouped
//!   by page. It is handy for tests and for inspecting a layout.
//! - [`PdfCanvas`] builds a [`Document`](crate::Document) which can be written out as a
//!   PDF.

mod pdf;
mod recording;

pub use pdf::*;
pub use recording::*;

use crate::pagesize::PageSize;
use crate::style::FontFamily;
use crate::units::Pt;
use crate::PrintError;

/// A surface which accumulates text into pages
pub trait Canvas {
    /// What the canvas produces once all pages have been drawn
    type Output;

    /// Start a new page. Any previous page is complete once this is called.
    fn add_page(&mut self, size: PageSize) -> Result<(), PrintError>;

    /// Open a text block on the current page, with the cursor at the page origin
    fn begin_text(&mut self) -> Result<(), PrintError>;

    /// Move the start of the current line by (`dx`, `dy`)
    fn move_to(&mut self, dx: Pt, dy: Pt) -> Result<(), PrintError>;

    fn set_font(&mut self, family: FontFamily, size: Pt) -> Result<(), PrintError>;

    /// Draw `text` at the start of the current line
    fn draw_text(&mut self, text: &str) -> Result<(), PrintError>;

    /// Close the open text block
    fn end_text(&mut self) -> Result<(), PrintError>;

    /// Close the document and hand over what was drawn
    fn finish(self) -> Result<Self::Output, PrintError>
    where
        Self: Sized;
}

/// Where the next line of text goes, and in which font
#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) struct TextPosition {
    pub x: Pt,
    pub y: Pt,
    pub font: Option<(FontFamily, Pt)>,
}

/// Bookkeeping shared by the canvases: validates the order of canvas calls and tracks
/// the absolute position of the current line
#[derive(Debug, Default)]
pub(crate) struct TextState {
    has_page: bool,
    text: Option<TextPosition>,
}

fn misuse(message: &str) -> PrintError {
    PrintError::Canvas(message.to_string())
}

impl TextState {
    pub fn add_page(&mut self) -> Result<(), PrintError> {
        if self.text.is_some() {
            return Err(misuse("can't start a page while a text block is open"));
        }
        self.has_page = true;
        Ok(())
    }

    pub fn begin_text(&mut self) -> Result<(), PrintError> {
        if !self.has_page {
            return Err(misuse("text block started before any page"));
        }
        if self.text.is_some() {
            return Err(misuse("text blocks can't be nested"));
        }
        self.text = Some(TextPosition {
            x: Pt(0.0),
            y: Pt(0.0),
            font: None,
        });
        Ok(())
    }

    fn open(&mut self) -> Result<&mut TextPosition, PrintError> {
        self.text
            .as_mut()
            .ok_or_else(|| misuse("no text block is open"))
    }

    pub fn move_to(&mut self, dx: Pt, dy: Pt) -> Result<(), PrintError> {
        let position = self.open()?;
        position.x += dx;
        position.y += dy;
        Ok(())
    }

    pub fn set_font(&mut self, family: FontFamily, size: Pt) -> Result<(), PrintError> {
        self.open()?.font = Some((family, size));
        Ok(())
    }

    /// The position and font to draw the next run of text with
    pub fn draw(&mut self) -> Result<(Pt, Pt, FontFamily, Pt), PrintError> {
        let position = *self.open()?;
        let (family, size) = position
            .font
            .ok_or_else(|| misuse("text drawn before a font was set"))?;
        Ok((position.x, position.y, family, size))
    }

    pub fn end_text(&mut self) -> Result<(), PrintError> {
        self.text
            .take()
            .map(|_| ())
            .ok_or_else(|| misuse("no text block is open"))
    }

    pub fn is_text_open(&self) -> bool {
        self.text.is_some()
    }
}
