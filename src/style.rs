use crate::units::Pt;

/// The semantic font families a print job can choose from. The concrete faces behind
/// them are supplied by a [`FontSet`](crate::FontSet) (or any other
/// [`FontMetrics`](crate::FontMetrics) implementation).
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FontFamily {
    #[default]
    Regular,
    Bold,
}

/// The three independent roles text can play on a page
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TextRole {
    Body,
    Header,
    Footer,
}

/// Font family and size used to draw one [`TextRole`]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TextStyle {
    pub family: FontFamily,
    /// Font size in whole points. Also used as the line height for the role.
    pub size_pt: u32,
}

impl TextStyle {
    pub fn new(family: FontFamily, size_pt: u32) -> TextStyle {
        TextStyle { family, size_pt }
    }

    /// The default style for the given role: 12pt regular body text, 20pt bold
    /// headers, and 10pt regular footers
    pub fn default_for(role: TextRole) -> TextStyle {
        match role {
            TextRole::Body => TextStyle::new(FontFamily::Regular, 12),
            TextRole::Header => TextStyle::new(FontFamily::Bold, 20),
            TextRole::Footer => TextStyle::new(FontFamily::Regular, 10),
        }
    }

    /// Font size (and line height) in points
    pub fn size(&self) -> Pt {
        Pt(self.size_pt as f32)
    }
}

/// One [`TextStyle`] per [`TextRole`]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Styles {
    pub body: TextStyle,
    pub header: TextStyle,
    pub footer: TextStyle,
}

impl Default for Styles {
    fn default() -> Self {
        Styles {
            body: TextStyle::default_for(TextRole::Body),
            header: TextStyle::default_for(TextRole::Header),
            footer: TextStyle::default_for(TextRole::Footer),
        }
    }
}

impl Styles {
    pub fn get(&self, role: TextRole) -> TextStyle {
        match role {
            TextRole::Body => self.body,
            TextRole::Header => self.header,
            TextRole::Footer => self.footer,
        }
    }

    pub fn get_mut(&mut self, role: TextRole) -> &mut TextStyle {
        match role {
            TextRole::Body => &mut self.body,
            TextRole::Header => &mut self.header,
            TextRole::Footer => &mut self.footer,
        }
    }
}
