use crate::units::{Mm, Pt};

/// Default size of every margin
pub const DEFAULT_MARGIN: Mm = Mm(20.0);

/// Page margins used when paginating text. Only the top, bottom, and left margins are
/// configurable; text is horizontally centered within a band that mirrors the left
/// margin on the right hand side of the page.
///
/// There is no check that the margins leave any room on the page. Margins which eat up
/// the whole page show up as a non-positive line capacity when rendering.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Margins {
    pub top: Pt,
    pub bottom: Pt,
    pub left: Pt,
}

impl Default for Margins {
    fn default() -> Self {
        Margins::all(DEFAULT_MARGIN)
    }
}

impl Margins {
    /// Create margins by specifying the top, bottom, and left components
    pub fn new<T: Into<Pt>, B: Into<Pt>, L: Into<Pt>>(top: T, bottom: B, left: L) -> Margins {
        Margins {
            top: top.into(),
            bottom: bottom.into(),
            left: left.into(),
        }
    }

    /// Create margins where all values are equal
    pub fn all<D: Into<Pt>>(value: D) -> Margins {
        let value: Pt = value.into();
        Margins {
            top: value,
            bottom: value,
            left: value,
        }
    }

    /// Create margins where all values are 0.0
    pub fn empty() -> Margins {
        Margins::all(Pt(0.0))
    }

    /// Width left over for text on a page of the given width, assuming the right margin
    /// equals the left one
    pub fn usable_width(&self, page_width: Pt) -> Pt {
        page_width - self.left * 2.0
    }

    /// Height left over between the top and bottom margins
    pub fn usable_height(&self, page_height: Pt) -> Pt {
        page_height - (self.top + self.bottom)
    }
}
