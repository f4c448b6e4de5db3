//! Layout arithmetic shared by the paginator: margins and horizontal centering.
//!
//! # Example
//!
//! ```
//! use pdf_pager::layout::{center_offset, Margins};
//! use pdf_pager::{FontFamily, Mm, MonospaceMetrics, Pt};
//!
//! let margins = Margins::all(Mm(20.0));
//! let usable = margins.usable_width(Pt(595.0));
//!
//! let metrics = MonospaceMetrics::default();
//! let x = center_offset(&metrics, "Title", FontFamily::Bold, Pt(20.0), usable);
//! assert!(x > Pt(0.0));
//! ```

mod center;
mod margins;

pub use center::*;
pub use margins::*;
