use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum PrintError {
    #[error(transparent)]
    /// An I/O error occurred while writing the document
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse the font
    FaceParsing(#[from] owned_ttf_parser::FaceParsingError),

    #[error("font has no glyph for {ch:?} and no replacement glyph")]
    /// Text could not be measured because a character is missing from the font
    MissingGlyph { ch: char },

    #[error("canvas error: {0}")]
    /// The canvas was driven out of order, e.g. text drawn outside of a page
    Canvas(String),

    #[error("page geometry leaves room for {capacity} body lines per page")]
    /// Margins, header, and footer leave no room for body text, so the content could
    /// never be placed
    DegenerateGeometry { capacity: i32 },

    #[error("the document page order refers to a page that does not exist")]
    /// A page referenced in the document order is missing from the page arena
    PageMissing,
}
