use crate::metrics::FontMetrics;
use crate::style::FontFamily;
use crate::units::Pt;

/// Horizontal offset that centers `text` within `max_width`.
///
/// Text at least as wide as `max_width` gets an offset of zero: it starts at the margin
/// and runs past the right hand side, it is never clipped or shrunk. If the text can't
/// be measured the failure is logged and the text is left aligned.
pub fn center_offset<M: FontMetrics + ?Sized>(
    metrics: &M,
    text: &str,
    family: FontFamily,
    size: Pt,
    max_width: Pt,
) -> Pt {
    match metrics.measure_width(text, family, size) {
        Ok(width) if width < max_width => (max_width - width) / 2.0,
        Ok(_) => Pt(0.0),
        Err(e) => {
            log::warn!("can't measure {text:?}, left aligning it instead: {e}");
            Pt(0.0)
        }
    }
}
