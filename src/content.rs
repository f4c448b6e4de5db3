//! Content stream generation for laid out pages.

use crate::font::Font;
use crate::page::{SpanFont, SpanLayout};
use crate::PrintError;
use id_arena::Arena;
use std::io::Write;

/// Renders text spans to a PDF content stream. Consecutive spans in the same font share
/// a single `Tf` operator; each span is positioned absolutely in its own text object.
#[allow(clippy::write_with_newline)]
pub(crate) fn render_spans(
    spans: &[SpanLayout],
    fonts: &Arena<Font>,
) -> Result<Vec<u8>, PrintError> {
    let mut content: Vec<u8> = Vec::default();
    if spans.is_empty() {
        return Ok(content);
    }

    write!(content, "q\n")?;

    let mut current_font: Option<SpanFont> = None;
    for span in spans.iter() {
        let font = fonts
            .get(span.font.id)
            .ok_or_else(|| PrintError::Canvas("span refers to an unknown font".to_string()))?;

        if current_font != Some(span.font) {
            current_font = Some(span.font);
            write!(
                content,
                "/F{} {} Tf\n",
                span.font.id.index(),
                span.font.size.0
            )?;
        }

        write!(content, "BT\n")?;
        write!(content, "{} {} Td\n", span.coords.0 .0, span.coords.1 .0)?;
        write!(content, "<")?;
        for ch in span.text.chars() {
            write!(content, "{:04x}", font.glyph_or_replacement(ch)?)?;
        }
        write!(content, "> Tj\n")?;
        write!(content, "ET\n")?;
    }

    write!(content, "Q\n")?;
    Ok(content)
}
