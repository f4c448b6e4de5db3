//! Pre-defined page sizes for common paper formats.
//!
//! All sizes are provided in portrait orientation (width, height) where width ≤ height,
//! except for `LEDGER` which is landscape tabloid by definition.
//! Use [`PageOrientation`] to convert between portrait and landscape, or pick a
//! [`PageFormat`] by name when configuring a [`Paginator`](crate::Paginator).
//!
//! # Example
//!
//! ```
//! use pdf_pager::pagesize::{PageFormat, PageOrientation, A4};
//!
//! let size = PageFormat::default().size();
//! assert_eq!(size, A4);
//!
//! let landscape = A4.landscape();
//! assert!(landscape.0 > landscape.1);
//! ```

use crate::units::*;

/// Page dimensions as (width, height) in points.
pub type PageSize = (Pt, Pt);

// north american sizes
pub const LETTER: PageSize = (Pt(8.5 * 72.0), Pt(11.0 * 72.0));
pub const HALF_LETTER: PageSize = (Pt(5.5 * 72.0), Pt(8.5 * 72.0));
pub const LEGAL: PageSize = (Pt(8.5 * 72.0), Pt(14.0 * 72.0));
pub const TABLOID: PageSize = (Pt(11.0 * 72.0), Pt(17.0 * 72.0));
pub const LEDGER: PageSize = (Pt(17.0 * 72.0), Pt(11.0 * 72.0));

// iso a-series (converted from mm to points)
pub const A0: PageSize = (Pt(841.0 * 72.0 / 25.4), Pt(1189.0 * 72.0 / 25.4));
pub const A1: PageSize = (Pt(594.0 * 72.0 / 25.4), Pt(841.0 * 72.0 / 25.4));
pub const A2: PageSize = (Pt(420.0 * 72.0 / 25.4), Pt(594.0 * 72.0 / 25.4));
pub const A3: PageSize = (Pt(297.0 * 72.0 / 25.4), Pt(420.0 * 72.0 / 25.4));
pub const A4: PageSize = (Pt(210.0 * 72.0 / 25.4), Pt(297.0 * 72.0 / 25.4));
pub const A5: PageSize = (Pt(148.0 * 72.0 / 25.4), Pt(210.0 * 72.0 / 25.4));
pub const A6: PageSize = (Pt(105.0 * 72.0 / 25.4), Pt(148.0 * 72.0 / 25.4));

/// Named paper formats that can be selected when configuring a print job
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub enum PageFormat {
    A0,
    A1,
    A2,
    A3,
    #[default]
    A4,
    A5,
    A6,
    Letter,
    HalfLetter,
    Legal,
    Tabloid,
    Ledger,
    /// Any other size, given directly in points
    Custom { width: Pt, height: Pt },
}

impl PageFormat {
    /// The (width, height) of the format in points
    pub fn size(self) -> PageSize {
        match self {
            PageFormat::A0 => A0,
            PageFormat::A1 => A1,
            PageFormat::A2 => A2,
            PageFormat::A3 => A3,
            PageFormat::A4 => A4,
            PageFormat::A5 => A5,
            PageFormat::A6 => A6,
            PageFormat::Letter => LETTER,
            PageFormat::HalfLetter => HALF_LETTER,
            PageFormat::Legal => LEGAL,
            PageFormat::Tabloid => TABLOID,
            PageFormat::Ledger => LEDGER,
            PageFormat::Custom { width, height } => (width, height),
        }
    }
}

/// Convert page sizes between portrait and landscape orientations.
pub trait PageOrientation {
    /// Returns the size in portrait orientation (width ≤ height).
    fn portrait(self) -> Self;
    /// Returns the size in landscape orientation (width ≥ height).
    fn landscape(self) -> Self;
}

impl PageOrientation for PageSize {
    fn portrait(self) -> Self {
        if self.0 <= self.1 {
            self
        } else {
            (self.1, self.0)
        }
    }

    fn landscape(self) -> PageSize {
        if self.0 >= self.1 {
            self
        } else {
            (self.1, self.0)
        }
    }
}

/// Which way round a page is printed
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

impl Orientation {
    /// Rotate `size` into this orientation
    pub fn apply(self, size: PageSize) -> PageSize {
        match self {
            Orientation::Portrait => size.portrait(),
            Orientation::Landscape => size.landscape(),
        }
    }
}
