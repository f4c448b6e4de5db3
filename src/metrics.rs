use crate::font::Font;
use crate::style::FontFamily;
use crate::units::Pt;
use crate::PrintError;

/// Measures how wide a string will be once it's drawn. Layout only needs widths to
/// center header and footer lines.
pub trait FontMetrics {
    /// The rendered width of `text` in `family` at `size`
    fn measure_width(&self, text: &str, family: FontFamily, size: Pt) -> Result<Pt, PrintError>;
}

impl<M: FontMetrics + ?Sized> FontMetrics for &M {
    fn measure_width(&self, text: &str, family: FontFamily, size: Pt) -> Result<Pt, PrintError> {
        (**self).measure_width(text, family, size)
    }
}

/// The concrete fonts behind each [`FontFamily`]
#[derive(Clone, Debug)]
pub struct FontSet {
    pub regular: Font,
    pub bold: Font,
}

impl FontSet {
    pub fn new(regular: Font, bold: Font) -> FontSet {
        FontSet { regular, bold }
    }

    /// Load both faces from raw TrueType / OpenType bytes
    pub fn load(regular: Vec<u8>, bold: Vec<u8>) -> Result<FontSet, PrintError> {
        Ok(FontSet {
            regular: Font::load(regular)?,
            bold: Font::load(bold)?,
        })
    }

    pub fn get(&self, family: FontFamily) -> &Font {
        match family {
            FontFamily::Regular => &self.regular,
            FontFamily::Bold => &self.bold,
        }
    }
}

impl FontMetrics for FontSet {
    fn measure_width(&self, text: &str, family: FontFamily, size: Pt) -> Result<Pt, PrintError> {
        self.get(family).width_of_text(text, size)
    }
}

/// Metrics for fixed pitch text: every character advances by the same amount,
/// expressed in thousandths of the font size (as in Type1 AFM files). Bold text can be
/// given a wider advance than regular text.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MonospaceMetrics {
    pub regular_advance: f32,
    pub bold_advance: f32,
}

impl Default for MonospaceMetrics {
    /// Advance widths of Courier, which are the same for both weights
    fn default() -> Self {
        MonospaceMetrics::new(600.0)
    }
}

impl MonospaceMetrics {
    pub fn new(advance: f32) -> MonospaceMetrics {
        MonospaceMetrics {
            regular_advance: advance,
            bold_advance: advance,
        }
    }
}

impl FontMetrics for MonospaceMetrics {
    fn measure_width(&self, text: &str, family: FontFamily, size: Pt) -> Result<Pt, PrintError> {
        let advance = match family {
            FontFamily::Regular => self.regular_advance,
            FontFamily::Bold => self.bold_advance,
        };
        Ok(size * (text.chars().count() as f32 * advance / 1000.0))
    }
}
