use super::{Canvas, TextState};
use crate::pagesize::PageSize;
use crate::style::FontFamily;
use crate::units::Pt;
use crate::PrintError;

/// One run of text placed on a page. `x` and `y` are the absolute baseline start.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCommand {
    pub text: String,
    pub x: Pt,
    pub y: Pt,
    pub family: FontFamily,
    pub size: Pt,
}

/// Everything drawn on a single page, in drawing order
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedPage {
    pub size: PageSize,
    pub commands: Vec<DrawCommand>,
}

impl RenderedPage {
    /// The text of every draw command, in drawing order
    pub fn texts(&self) -> Vec<&str> {
        self.commands.iter().map(|c| c.text.as_str()).collect()
    }
}

/// A canvas that remembers what was drawn where
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    pages: Vec<RenderedPage>,
    state: TextState,
}

impl RecordingCanvas {
    pub fn new() -> RecordingCanvas {
        RecordingCanvas::default()
    }

    /// Pages recorded so far
    pub fn pages(&self) -> &[RenderedPage] {
        &self.pages
    }
}

impl Canvas for RecordingCanvas {
    type Output = Vec<RenderedPage>;

    fn add_page(&mut self, size: PageSize) -> Result<(), PrintError> {
        self.state.add_page()?;
        self.pages.push(RenderedPage {
            size,
            commands: Vec::new(),
        });
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
        let page = self
            .pages
            .last_mut()
            .ok_or_else(|| PrintError::Canvas("text drawn before any page".to_string()))?;
        page.commands.push(DrawCommand {
            text: text.to_string(),
            x,
            y,
            family,
            size,
        });
        Ok(())
    }

    fn end_text(&mut self) -> Result<(), PrintError> {
        self.state.end_text()
    }

    fn finish(self) -> Result<Vec<RenderedPage>, PrintError> {
        if self.state.is_text_open() {
            return Err(PrintError::Canvas(
                "document finished with an open text block".to_string(),
            ));
        }
        Ok(self.pages)
    }
}
