use super::{Canvas, TextState};
use crate::document::Document;
use crate::font::Font;
use crate::info::Info;
use crate::layout::Margins;
use crate::metrics::FontSet;
use crate::page::{Page, SpanFont, SpanLayout};
use crate::pagesize::PageSize;
use crate::style::FontFamily;
use crate::units::Pt;
use crate::PrintError;
use id_arena::Id;

/// A canvas which lays text out onto the pages of a PDF [`Document`]
pub struct PdfCanvas {
    document: Document,
    regular: Id<Font>,
    bold: Id<Font>,
    margins: Option<Margins>,
    page: Option<Page>,
    state: TextState,
}

impl PdfCanvas {
    /// Start an empty document which draws with the given fonts
    pub fn new(fonts: &FontSet) -> PdfCanvas {
        let mut document = Document::default();
        let regular = document.add_font(fonts.regular.clone());
        let bold = document.add_font(fonts.bold.clone());
        PdfCanvas {
            document,
            regular,
            bold,
            margins: None,
            page: None,
            state: TextState::default(),
        }
    }

    /// Record `margins` as the content box of every page added from now on
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = Some(margins);
        self
    }

    pub fn with_info(mut self, info: Info) -> Self {
        self.document.set_info(info);
        self
    }

    fn font_id(&self, family: FontFamily) -> Id<Font> {
        match family {
            FontFamily::Regular => self.regular,
            FontFamily::Bold => self.bold,
        }
    }

    fn flush_page(&mut self) {
        if let Some(page) = self.page.take() {
            self.document.add_page(page);
        }
    }
}

impl Canvas for PdfCanvas {
    type Output = Document;

    fn add_page(&mut self, size: PageSize) -> Result<(), PrintError> {
        self.state.add_page()?;
        self.flush_page();
        self.page = Some(Page::new(size, self.margins));
        Ok(())
    }

    fn begin_text(&mut self) -> Result<(), PrintError> {
        self.state.begin_text()
    }

    fn move_to(&mut self, dx: Pt, dy: Pt) -> Result<(), PrintError> {
        self.state.move_to(dx, dy)
    }

    fn set_font(&mut self, family: FontFamily, size: Pt) -> Result<(), PrintError> {
        self.state.set_font(family, size)
    }

    fn draw_text(&mut self, text: &str) -> Result<(), PrintError> {
        let (x, y, family, size) = self.state.draw()?;
        // blank lines still move the cursor but leave nothing in the content stream
        if text.is_empty() {
            return Ok(());
        }

        let id = self.font_id(family);
        let page = self
            .page
            .as_mut()
            .ok_or_else(|| PrintError::Canvas("text drawn before any page".to_string()))?;
        page.add_span(SpanLayout {
            text: text.to_string(),
            font: SpanFont { id, size },
            coords: (x, y),
        });
        Ok(())
    }

    fn end_text(&mut self) -> Result<(), PrintError> {
        self.state.end_text()
    }

    fn finish(mut self) -> Result<Document, PrintError> {
        if self.state.is_text_open() {
            return Err(PrintError::Canvas(
                "document finished with an open text block".to_string(),
            ));
        }
        self.flush_page();
        Ok(self.document)
    }
}
