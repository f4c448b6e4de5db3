use crate::canvas::{Canvas, PdfCanvas};
use crate::document::Document;
use crate::info::Info;
use crate::layout::{center_offset, Margins};
use crate::manuscript::Manuscript;
use crate::metrics::{FontMetrics, FontSet};
use crate::pagesize::{Orientation, PageFormat, PageSize};
use crate::print::{Confirm, PrintJob, PrintOutcome};
use crate::style::{FontFamily, Styles, TextRole, TextStyle};
use crate::units::{Mm, Pt};
use crate::PrintError;
use std::collections::VecDeque;
use std::io::Write;
use std::ops::{Deref, DerefMut};

/// Header lines are centered using the metrics of this role's style rather than the
/// header style itself. Kept so output matches earlier releases byte for byte.
pub const HEADER_CENTERING_ROLE: TextRole = TextRole::Body;

/// Splits text into pages with a header and footer repeated on each page.
///
/// The paginator holds the configuration of a print job: the text, the paper, the
/// margins, and a font style for each of the body, header, and footer. Every setter can
/// be called independently between renders; each render works from a snapshot
/// ([`Layout`]) taken when it starts.
///
/// ```
/// use pdf_pager::{MonospaceMetrics, Paginator, RecordingCanvas};
///
/// let mut paginator = Paginator::new("first line\nsecond line");
/// paginator.set_header("Report").set_footer("page footer");
///
/// let pages = paginator
///     .render(RecordingCanvas::new(), &MonospaceMetrics::default())
///     .expect("can paginate");
/// assert_eq!(pages.len(), 1);
/// assert_eq!(pages[0].texts(), vec!["Report", "first line", "second line", "page footer"]);
/// ```
#[derive(Debug, Default, Clone)]
pub struct Paginator {
    manuscript: Manuscript,
    format: PageFormat,
    /// `None` keeps the format's width and height as given
    orientation: Option<Orientation>,
    margins: Margins,
    styles: Styles,
    info: Option<Info>,
}

impl Paginator {
    /// Paginate `content` with default settings and no header or footer
    pub fn new<S: ToString>(content: S) -> Paginator {
        Paginator::from_manuscript(Manuscript::new(content))
    }

    pub fn from_manuscript(manuscript: Manuscript) -> Paginator {
        Paginator {
            manuscript,
            ..Paginator::default()
        }
    }

    pub fn manuscript(&self) -> &Manuscript {
        &self.manuscript
    }

    pub fn content(&self) -> Option<&str> {
        self.manuscript.content.as_deref()
    }

    pub fn set_content<S: ToString>(&mut self, content: S) -> &mut Self {
        self.manuscript.content = Some(content.to_string());
        self
    }

    pub fn header(&self) -> Option<&str> {
        self.manuscript.header.as_deref()
    }

    pub fn set_header<S: ToString>(&mut self, header: S) -> &mut Self {
        self.manuscript.header = Some(header.to_string());
        self
    }

    pub fn clear_header(&mut self) -> &mut Self {
        self.manuscript.header = None;
        self
    }

    pub fn footer(&self) -> Option<&str> {
        self.manuscript.footer.as_deref()
    }

    pub fn set_footer<S: ToString>(&mut self, footer: S) -> &mut Self {
        self.manuscript.footer = Some(footer.to_string());
        self
    }

    pub fn clear_footer(&mut self) -> &mut Self {
        self.manuscript.footer = None;
        self
    }

    pub fn page_format(&self) -> PageFormat {
        self.format
    }

    /// Paper to print on, A4 unless changed
    pub fn set_page_format(&mut self, format: PageFormat) -> &mut Self {
        self.format = format;
        self
    }

    pub fn orientation(&self) -> Option<Orientation> {
        self.orientation
    }

    /// Rotate the page format into `orientation` if it isn't already
    pub fn set_orientation(&mut self, orientation: Orientation) -> &mut Self {
        self.orientation = Some(orientation);
        self
    }

    /// Print the page format exactly as given, however it is oriented
    pub fn clear_orientation(&mut self) -> &mut Self {
        self.orientation = None;
        self
    }

    /// Size of the pages that will be produced, with the orientation applied
    pub fn page_size(&self) -> PageSize {
        let size = self.format.size();
        match self.orientation {
            Some(orientation) => orientation.apply(size),
            None => size,
        }
    }

    pub fn style(&self, role: TextRole) -> TextStyle {
        self.styles.get(role)
    }

    pub fn set_style(&mut self, role: TextRole, style: TextStyle) -> &mut Self {
        *self.styles.get_mut(role) = style;
        self
    }

    pub fn set_font_family(&mut self, role: TextRole, family: FontFamily) -> &mut Self {
        self.styles.get_mut(role).family = family;
        self
    }

    /// Set the font size of a role in points. The size doubles as the role's line height.
    pub fn set_font_size(&mut self, role: TextRole, size_pt: u32) -> &mut Self {
        self.styles.get_mut(role).size_pt = size_pt;
        self
    }

    pub fn margins(&self) -> Margins {
        self.margins
    }

    pub fn set_margins(&mut self, margins: Margins) -> &mut Self {
        self.margins = margins;
        self
    }

    pub fn margin_top_mm(&self) -> f32 {
        Mm::from(self.margins.top).0
    }

    pub fn set_margin_top_mm(&mut self, mm: f32) -> &mut Self {
        self.margins.top = Mm(mm).into();
        self
    }

    pub fn margin_bottom_mm(&self) -> f32 {
        Mm::from(self.margins.bottom).0
    }

    pub fn set_margin_bottom_mm(&mut self, mm: f32) -> &mut Self {
        self.margins.bottom = Mm(mm).into();
        self
    }

    pub fn margin_left_mm(&self) -> f32 {
        Mm::from(self.margins.left).0
    }

    pub fn set_margin_left_mm(&mut self, mm: f32) -> &mut Self {
        self.margins.left = Mm(mm).into();
        self
    }

    /// Set the top, bottom, and left margins to the same value
    pub fn set_margins_mm(&mut self, mm: f32) -> &mut Self {
        self.margins = Margins::all(Mm(mm));
        self
    }

    pub fn info(&self) -> Option<&Info> {
        self.info.as_ref()
    }

    /// Metadata to embed in generated PDFs
    pub fn set_info(&mut self, info: Info) -> &mut Self {
        self.info = Some(info);
        self
    }

    /// Take a snapshot of the current configuration
    pub fn layout(&self) -> Layout {
        Layout {
            page_size: self.page_size(),
            margins: self.margins,
            styles: self.styles,
            header: self.manuscript.header_lines(),
            footer: self.manuscript.footer_lines(),
            content: self.manuscript.content_lines(),
        }
    }

    /// How many body lines fit on each page. See [`Layout::max_body_lines`].
    pub fn max_body_lines(&self) -> i32 {
        self.layout().max_body_lines()
    }

    /// Paginate onto `canvas`, using `metrics` to center header and footer lines
    pub fn render<C, M>(&self, canvas: C, metrics: &M) -> Result<C::Output, PrintError>
    where
        C: Canvas,
        M: FontMetrics + ?Sized,
    {
        self.layout().render(canvas, metrics)
    }

    /// Paginate into a PDF document drawn with `fonts`
    pub fn render_pdf(&self, fonts: &FontSet) -> Result<Document, PrintError> {
        let mut canvas = PdfCanvas::new(fonts).with_margins(self.margins);
        if let Some(info) = &self.info {
            canvas = canvas.with_info(info.clone());
        }
        self.render(canvas, fonts)
    }

    /// Paginate into a PDF, ask `confirm` whether to go ahead, and if so write the PDF
    /// to `sink` (a file, a pipe into a print spooler, ...). Declining is not an error.
    pub fn print<F, W>(&self, fonts: &FontSet, confirm: F, sink: W) -> Result<PrintOutcome, PrintError>
    where
        F: Confirm,
        W: Write,
    {
        let document = self.render_pdf(fonts)?;
        PrintJob::new(confirm).run(&document, sink)
    }
}

/// An immutable snapshot of a [`Paginator`]'s configuration, with the text already
/// split into lines. All layout arithmetic happens here.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub page_size: PageSize,
    pub margins: Margins,
    pub styles: Styles,
    pub header: Vec<String>,
    pub footer: Vec<String>,
    pub content: Vec<String>,
}

impl Layout {
    /// Space left between the last header line and the first body line
    pub fn header_gap(&self) -> Pt {
        self.styles.header.size()
    }

    /// Space reserved above the footer. This is one body line, not one footer line.
    pub fn footer_gap(&self) -> Pt {
        self.styles.body.size()
    }

    /// Width header and footer lines are centered in
    pub fn usable_width(&self) -> Pt {
        self.margins.usable_width(self.page_size.0)
    }

    /// Baseline of the first header line, which is also where a page's text starts
    pub fn header_baseline(&self) -> Pt {
        self.page_size.1 - self.margins.top - self.styles.header.size()
    }

    /// Baseline of the first footer line. The footer block always sits on the bottom
    /// margin, however much body text the page holds.
    pub fn footer_baseline(&self) -> Pt {
        self.margins.bottom + self.styles.footer.size() * self.footer.len() as f32
    }

    /// The number of body lines that fit on one page, truncated toward zero.
    ///
    /// This is zero or negative when the margins, header, and footer take up the whole
    /// page. Such a layout can't place any content; [`Layout::render`] refuses it.
    pub fn max_body_lines(&self) -> i32 {
        let header = self.styles.header.size();
        let footer = self.styles.footer.size();
        let body = self.styles.body.size();

        let mut space = self.margins.usable_height(self.page_size.1);
        space -= header * self.header.len() as f32 + self.header_gap();
        space -= footer * self.footer.len() as f32 + self.footer_gap();
        (space / body) as i32
    }

    /// Lay every content line out onto `canvas`, starting a new page whenever the
    /// current one is full. Each page gets the header and the footer exactly once.
    ///
    /// No content means no pages at all: the canvas is finished untouched.
    pub fn render<C, M>(&self, mut canvas: C, metrics: &M) -> Result<C::Output, PrintError>
    where
        C: Canvas,
        M: FontMetrics + ?Sized,
    {
        let capacity = self.max_body_lines();
        log::debug!(
            "paginating {} lines at {capacity} lines per page",
            self.content.len()
        );
        if !self.content.is_empty() && capacity <= 0 {
            return Err(PrintError::DegenerateGeometry { capacity });
        }

        let body = self.styles.body.size();
        let mut lines: VecDeque<&str> = self.content.iter().map(String::as_str).collect();
        let mut page_count = 0usize;

        while !lines.is_empty() {
            canvas.add_page(self.page_size)?;
            page_count += 1;
            log::debug!("page {page_count}: {} lines left to place", lines.len());

            let mut text = TextBlock::begin(&mut canvas)?;
            let mut y = self.draw_header(&mut text, metrics)?;

            let mut remaining = capacity;
            while remaining > 0 {
                let Some(line) = lines.pop_front() else {
                    break;
                };
                text.draw_text(line)?;
                text.move_to(Pt(0.0), -body)?;
                y -= body;
                remaining -= 1;
            }

            self.draw_footer(&mut text, metrics, y)?;
            text.end()?;
        }

        canvas.finish()
    }

    /// Draws the header block and leaves the cursor, set to the body font, on the
    /// baseline of the first body line. Returns that baseline.
    fn draw_header<C, M>(&self, text: &mut TextBlock<'_, C>, metrics: &M) -> Result<Pt, PrintError>
    where
        C: Canvas,
        M: FontMetrics + ?Sized,
    {
        let header = self.styles.header;
        let body = self.styles.body;
        let centering = self.styles.get(HEADER_CENTERING_ROLE);
        let usable = self.usable_width();

        let mut y = self.header_baseline();
        text.move_to(self.margins.left, y)?;
        text.set_font(header.family, header.size())?;

        for line in self.header.iter() {
            let x = center_offset(metrics, line, centering.family, centering.size(), usable);
            text.move_to(x, Pt(0.0))?;
            text.draw_text(line)?;
            text.move_to(-x, -header.size())?;
            y -= header.size();
        }

        text.set_font(body.family, body.size())?;
        text.move_to(Pt(0.0), -self.header_gap())?;
        Ok(y - self.header_gap())
    }

    /// Moves from the baseline `y` down to the footer block and draws it
    fn draw_footer<C, M>(
        &self,
        text: &mut TextBlock<'_, C>,
        metrics: &M,
        y: Pt,
    ) -> Result<(), PrintError>
    where
        C: Canvas,
        M: FontMetrics + ?Sized,
    {
        let footer = self.styles.footer;
        let usable = self.usable_width();

        text.move_to(Pt(0.0), self.footer_baseline() - y)?;
        text.set_font(footer.family, footer.size())?;

        for line in self.footer.iter() {
            let x = center_offset(metrics, line, footer.family, footer.size(), usable);
            text.move_to(x, Pt(0.0))?;
            text.draw_text(line)?;
            text.move_to(-x, -footer.size())?;
        }
        Ok(())
    }
}

/// An open text block on a canvas. Dropping the block without calling
/// [`TextBlock::end`] (say, because drawing failed part way through a page) still
/// closes it.
struct TextBlock<'c, C: Canvas> {
    canvas: &'c mut C,
    open: bool,
}

impl<'c, C: Canvas> TextBlock<'c, C> {
    fn begin(canvas: &'c mut C) -> Result<Self, PrintError> {
        canvas.begin_text()?;
        Ok(TextBlock { canvas, open: true })
    }

    fn end(mut self) -> Result<(), PrintError> {
        self.open = false;
        self.canvas.end_text()
    }
}

impl<C: Canvas> Deref for TextBlock<'_, C> {
    type Target = C;

    fn deref(&self) -> &C {
        &*self.canvas
    }
}

impl<C: Canvas> DerefMut for TextBlock<'_, C> {
    fn deref_mut(&mut self) -> &mut C {
        &mut *self.canvas
    }
}

impl<C: Canvas> Drop for TextBlock<'_, C> {
    fn drop(&mut self) {
        if self.open {
            if let Err(e) = self.canvas.end_text() {
                log::warn!("failed to close text block: {e}");
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::canvas::{RecordingCanvas, RenderedPage};
    use crate::metrics::MonospaceMetrics;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn numbered_lines(count: usize) -> String {
        (1..=count)
            .map(|i| format!("line {i}"))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Every role is 10pt and there are no margins, so with a one line header and
    /// footer a 140pt tall page holds exactly ten body lines
    fn ten_line_pages(content: &str) -> Paginator {
        let mut paginator = Paginator::new(content);
        paginator
            .set_page_format(PageFormat::Custom {
                width: Pt(400.0),
                height: Pt(140.0),
            })
            .set_margins(Margins::empty())
            .set_style(TextRole::Body, TextStyle::new(FontFamily::Regular, 10))
            .set_style(TextRole::Header, TextStyle::new(FontFamily::Bold, 10))
            .set_style(TextRole::Footer, TextStyle::new(FontFamily::Regular, 10))
            .set_header("Header")
            .set_footer("Footer");
        paginator
    }

    fn render(paginator: &Paginator) -> Vec<RenderedPage> {
        paginator
            .render(RecordingCanvas::new(), &MonospaceMetrics::default())
            .expect("can paginate")
    }

    /// The body lines of a page rendered by `ten_line_pages`
    fn body_of(page: &RenderedPage) -> Vec<&str> {
        let texts = page.texts();
        assert_eq!(texts.first(), Some(&"Header"));
        assert_eq!(texts.last(), Some(&"Footer"));
        texts[1..texts.len() - 1].to_vec()
    }

    #[test]
    fn default_a4_capacity() {
        let mut paginator = Paginator::new("text");
        assert_eq!(paginator.max_body_lines(), 58);

        paginator.set_header("Header").set_footer("Footer");
        assert_eq!(paginator.max_body_lines(), 55);

        paginator.set_header("A\nB").clear_footer();
        assert_eq!(paginator.max_body_lines(), 54);
    }

    #[test]
    fn capacity_is_idempotent() {
        let paginator = ten_line_pages("x");
        assert_eq!(paginator.max_body_lines(), 10);
        assert_eq!(paginator.max_body_lines(), paginator.max_body_lines());
    }

    #[test]
    fn footer_gap_is_one_body_line() {
        let mut paginator = Paginator::new("x");
        paginator
            .set_page_format(PageFormat::Custom {
                width: Pt(100.0),
                height: Pt(100.0),
            })
            .set_margins(Margins::empty())
            .set_font_size(TextRole::Body, 10)
            .set_font_size(TextRole::Header, 10)
            .set_font_size(TextRole::Footer, 30);

        let layout = paginator.layout();
        assert_eq!(layout.header_gap(), Pt(10.0));
        assert_eq!(layout.footer_gap(), Pt(10.0));
        // 100 - 10 (header gap) - 10 (footer gap), not 100 - 10 - 30
        assert_eq!(layout.max_body_lines(), 8);
    }

    #[test]
    fn capacity_never_grows_as_things_get_bigger() {
        let base = ten_line_pages("x");
        let start = base.max_body_lines();

        let mut previous = start;
        for lines in 1..6 {
            let mut p = base.clone();
            p.set_header(numbered_lines(lines));
            let capacity = p.max_body_lines();
            assert!(capacity <= previous);
            previous = capacity;
        }

        let mut previous = start;
        for lines in 1..6 {
            let mut p = base.clone();
            p.set_footer(numbered_lines(lines));
            let capacity = p.max_body_lines();
            assert!(capacity <= previous);
            previous = capacity;
        }

        for role in [TextRole::Body, TextRole::Header, TextRole::Footer] {
            let mut previous = start;
            for size in 10..14 {
                let mut p = base.clone();
                p.set_font_size(role, size);
                let capacity = p.max_body_lines();
                assert!(capacity <= previous, "{role:?} at {size}pt");
                previous = capacity;
            }
        }

        let mut previous = i32::MAX;
        for mm in [0.0, 2.0, 4.0, 8.0] {
            let mut p = base.clone();
            p.set_margin_top_mm(mm).set_margin_bottom_mm(mm);
            let capacity = p.max_body_lines();
            assert!(capacity <= previous);
            previous = capacity;
        }
    }

    #[test]
    fn short_content_fits_on_one_page() {
        let pages = render(&ten_line_pages(&numbered_lines(3)));
        assert_eq!(pages.len(), 1);
        assert_eq!(
            pages[0].texts(),
            vec!["Header", "line 1", "line 2", "line 3", "Footer"]
        );
    }

    #[test]
    fn long_content_spreads_over_pages() {
        let pages = render(&ten_line_pages(&numbered_lines(25)));
        assert_eq!(pages.len(), 3);
        let counts: Vec<usize> = pages.iter().map(|p| body_of(p).len()).collect();
        assert_eq!(counts, vec![10, 10, 5]);
        for page in pages.iter() {
            let texts = page.texts();
            assert_eq!(texts.iter().filter(|t| **t == "Header").count(), 1);
            assert_eq!(texts.iter().filter(|t| **t == "Footer").count(), 1);
        }
    }

    #[test]
    fn every_line_is_placed_once_in_order() {
        let content = numbered_lines(57);
        let pages = render(&ten_line_pages(&content));
        assert_eq!(pages.len(), 6);

        let placed: Vec<&str> = pages.iter().flat_map(body_of).collect();
        let expected: Vec<&str> = content.lines().collect();
        assert_eq!(placed, expected);
    }

    #[test]
    fn blank_lines_take_up_a_line() {
        let pages = render(&ten_line_pages("a\n\nb\n"));
        assert_eq!(body_of(&pages[0]), vec!["a", "", "b"]);
    }

    #[test]
    fn empty_content_produces_no_pages() {
        assert!(render(&ten_line_pages("")).is_empty());

        let mut paginator = ten_line_pages("");
        paginator.set_content("\n\n");
        assert!(render(&paginator).is_empty());

        let paginator = Paginator::default();
        assert!(render(&paginator).is_empty());
    }

    #[test]
    fn one_line_pages_still_get_header_and_footer() {
        let mut paginator = ten_line_pages(&numbered_lines(3));
        paginator.set_page_format(PageFormat::Custom {
            width: Pt(400.0),
            height: Pt(50.0),
        });
        assert_eq!(paginator.max_body_lines(), 1);

        let pages = render(&paginator);
        assert_eq!(pages.len(), 3);
        for (i, page) in pages.iter().enumerate() {
            let line = format!("line {}", i + 1);
            assert_eq!(page.texts(), vec!["Header", line.as_str(), "Footer"]);
        }
    }

    #[test]
    fn missing_footer_draws_nothing_at_the_bottom_margin() {
        let mut paginator = Paginator::new("body");
        paginator.set_header("A\nB");

        let layout = paginator.layout();
        assert!(layout.footer.is_empty());
        assert_eq!(layout.footer_baseline(), paginator.margins().bottom);

        let pages = render(&paginator);
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].texts(), vec!["A", "B", "body"]);
    }

    #[test]
    fn lines_are_placed_at_exact_coordinates() {
        let mut paginator = Paginator::new("a\nb");
        paginator
            .set_page_format(PageFormat::Custom {
                width: Pt(400.0),
                height: Pt(200.0),
            })
            .set_margins(Margins::new(Pt(10.0), Pt(5.0), Pt(20.0)))
            .set_style(TextRole::Body, TextStyle::new(FontFamily::Regular, 10))
            .set_style(TextRole::Header, TextStyle::new(FontFamily::Bold, 20))
            .set_style(TextRole::Footer, TextStyle::new(FontFamily::Regular, 8))
            .set_header("Title")
            .set_footer("Foot");

        let pages = paginator
            .render(RecordingCanvas::new(), &MonospaceMetrics::new(500.0))
            .expect("can paginate");
        let commands = &pages[0].commands;
        let placed: Vec<(&str, Pt, Pt, FontFamily, Pt)> = commands
            .iter()
            .map(|c| (c.text.as_str(), c.x, c.y, c.family, c.size))
            .collect();

        assert_eq!(
            placed,
            vec![
                // usable width 360, "Title" measured in the body style is 25 wide
                ("Title", Pt(187.5), Pt(170.0), FontFamily::Bold, Pt(20.0)),
                // one header line plus a header sized gap below the header baseline
                ("a", Pt(20.0), Pt(130.0), FontFamily::Regular, Pt(10.0)),
                ("b", Pt(20.0), Pt(120.0), FontFamily::Regular, Pt(10.0)),
                // bottom margin plus one footer line
                ("Foot", Pt(192.0), Pt(13.0), FontFamily::Regular, Pt(8.0)),
            ]
        );
    }

    #[test]
    fn header_is_centered_with_body_metrics_and_footer_with_its_own() {
        let mut paginator = Paginator::new("x");
        paginator
            .set_page_format(PageFormat::Custom {
                width: Pt(400.0),
                height: Pt(200.0),
            })
            .set_margins(Margins::new(Pt(0.0), Pt(0.0), Pt(20.0)))
            .set_style(TextRole::Body, TextStyle::new(FontFamily::Regular, 10))
            .set_style(TextRole::Header, TextStyle::new(FontFamily::Bold, 20))
            .set_style(TextRole::Footer, TextStyle::new(FontFamily::Bold, 8))
            .set_header("Title")
            .set_footer("Foot");

        let metrics = MonospaceMetrics {
            regular_advance: 500.0,
            bold_advance: 1000.0,
        };
        let pages = paginator
            .render(RecordingCanvas::new(), &metrics)
            .expect("can paginate");
        let commands = &pages[0].commands;

        // measured as 5 regular 10pt chars (25pt), not 5 bold 20pt chars (100pt)
        assert_eq!(commands[0].x, Pt(20.0 + 167.5));
        // measured as 4 bold 8pt chars
        assert_eq!(commands[2].x, Pt(20.0 + 164.0));
    }

    #[test]
    fn wide_header_lines_start_at_the_margin() {
        let mut paginator = ten_line_pages("x");
        paginator.set_header("W".repeat(200));
        let pages = render(&paginator);
        assert_eq!(pages[0].commands[0].x, Pt(0.0));
    }

    #[test]
    fn degenerate_geometry_is_refused() {
        let mut paginator = Paginator::new(numbered_lines(5));
        paginator.set_margins_mm(150.0);
        assert!(paginator.max_body_lines() <= 0);

        let result = paginator.render(RecordingCanvas::new(), &MonospaceMetrics::default());
        match result {
            Err(PrintError::DegenerateGeometry { capacity }) => {
                assert_eq!(capacity, paginator.max_body_lines())
            }
            other => panic!("expected degenerate geometry, got {other:?}"),
        }

        // nothing to place, nothing to refuse
        paginator.set_content("");
        assert!(render(&paginator).is_empty());
    }

    #[test]
    fn zero_capacity_is_refused_too() {
        let mut paginator = ten_line_pages("x");
        paginator.set_page_format(PageFormat::Custom {
            width: Pt(400.0),
            height: Pt(45.0),
        });
        assert_eq!(paginator.max_body_lines(), 0);
        assert!(matches!(
            paginator.render(RecordingCanvas::new(), &MonospaceMetrics::default()),
            Err(PrintError::DegenerateGeometry { capacity: 0 })
        ));
    }

    #[test]
    fn margins_round_trip_through_millimetres() {
        let mut paginator = Paginator::default();
        assert!((paginator.margin_top_mm() - 20.0).abs() < 1e-4);

        paginator
            .set_margin_top_mm(12.0)
            .set_margin_bottom_mm(7.5)
            .set_margin_left_mm(30.0);
        assert!((paginator.margin_top_mm() - 12.0).abs() < 1e-4);
        assert!((paginator.margin_bottom_mm() - 7.5).abs() < 1e-4);
        assert!((paginator.margin_left_mm() - 30.0).abs() < 1e-4);

        paginator.set_margins_mm(5.0);
        assert_eq!(paginator.margins(), Margins::all(Mm(5.0)));
    }

    #[test]
    fn defaults_match_the_documented_styles() {
        let paginator = Paginator::default();
        assert_eq!(paginator.page_format(), PageFormat::A4);
        assert_eq!(
            paginator.style(TextRole::Body),
            TextStyle::new(FontFamily::Regular, 12)
        );
        assert_eq!(
            paginator.style(TextRole::Header),
            TextStyle::new(FontFamily::Bold, 20)
        );
        assert_eq!(
            paginator.style(TextRole::Footer),
            TextStyle::new(FontFamily::Regular, 10)
        );
    }

    #[test]
    fn landscape_pages_hold_fewer_lines() {
        let mut paginator = Paginator::new("x");
        let portrait = paginator.max_body_lines();
        paginator.set_orientation(Orientation::Landscape);
        assert!(paginator.max_body_lines() < portrait);

        let pages = render(&paginator);
        assert!(pages[0].size.0 > pages[0].size.1);
    }

    #[test]
    fn page_formats_are_used_as_given_unless_rotated() {
        let mut paginator = ten_line_pages("x");
        assert_eq!(paginator.orientation(), None);
        assert_eq!(paginator.page_size(), (Pt(400.0), Pt(140.0)));
        assert_eq!(render(&paginator)[0].size, (Pt(400.0), Pt(140.0)));

        paginator.set_orientation(Orientation::Portrait);
        assert_eq!(paginator.page_size(), (Pt(140.0), Pt(400.0)));
        assert_eq!(paginator.max_body_lines(), 36);

        paginator.clear_orientation();
        assert_eq!(paginator.max_body_lines(), 10);
    }

    #[test]
    fn body_starts_below_an_empty_header_gap() {
        let mut paginator = Paginator::new("a\nb");
        paginator
            .set_page_format(PageFormat::Custom {
                width: Pt(400.0),
                height: Pt(200.0),
            })
            .set_margins(Margins::new(Pt(10.0), Pt(0.0), Pt(0.0)))
            .set_style(TextRole::Body, TextStyle::new(FontFamily::Regular, 10))
            .set_style(TextRole::Header, TextStyle::new(FontFamily::Bold, 20));

        let pages = render(&paginator);
        let commands = &pages[0].commands;
        assert_eq!(pages[0].texts(), vec!["a", "b"]);
        // top margin, then the header baseline offset and the header gap, with no header lines
        assert_eq!((commands[0].x, commands[0].y), (Pt(0.0), Pt(200.0 - 10.0 - 20.0 - 20.0)));
        assert_eq!(commands[1].y, Pt(140.0));
    }

    #[test]
    fn snapshots_are_unaffected_by_later_changes() {
        let mut paginator = ten_line_pages(&numbered_lines(3));
        let layout = paginator.layout();
        paginator.set_content("changed").set_footer("Other");

        let pages = layout
            .render(RecordingCanvas::new(), &MonospaceMetrics::default())
            .expect("can paginate");
        assert_eq!(body_of(&pages[0]), vec!["line 1", "line 2", "line 3"]);

        let pages = render(&paginator);
        assert_eq!(pages[0].texts(), vec!["Header", "changed", "Other"]);
    }

    /// Records canvas calls and fails the nth `draw_text`
    struct FlakyCanvas {
        inner: RecordingCanvas,
        calls: Rc<RefCell<Vec<&'static str>>>,
        fail_on_draw: usize,
        draws: usize,
    }

    impl Canvas for FlakyCanvas {
        type Output = Vec<RenderedPage>;

        fn add_page(&mut self, size: PageSize) -> Result<(), PrintError> {
            self.calls.borrow_mut().push("add_page");
            self.inner.add_page(size)
        }

        fn begin_text(&mut self) -> Result<(), PrintError> {
            self.calls.borrow_mut().push("begin_text");
            self.inner.begin_text()
        }

        fn move_to(&mut self, dx: Pt, dy: Pt) -> Result<(), PrintError> {
            self.inner.move_to(dx, dy)
        }

        fn set_font(&mut self, family: FontFamily, size: Pt) -> Result<(), PrintError> {
            self.inner.set_font(family, size)
        }

        fn draw_text(&mut self, text: &str) -> Result<(), PrintError> {
            self.draws += 1;
            if self.draws == self.fail_on_draw {
                self.calls.borrow_mut().push("failed");
                return Err(PrintError::Io(std::io::Error::other("disk full")));
            }
            self.inner.draw_text(text)
        }

        fn end_text(&mut self) -> Result<(), PrintError> {
            self.calls.borrow_mut().push("end_text");
            self.inner.end_text()
        }

        fn finish(self) -> Result<Vec<RenderedPage>, PrintError> {
            self.calls.borrow_mut().push("finish");
            self.inner.finish()
        }
    }

    #[test]
    fn failures_mid_page_still_close_the_text_block() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let canvas = FlakyCanvas {
            inner: RecordingCanvas::new(),
            calls: calls.clone(),
            // header, ten lines, footer on page one; fail on the second line of page two
            fail_on_draw: 15,
            draws: 0,
        };

        let result = ten_line_pages(&numbered_lines(25)).render(canvas, &MonospaceMetrics::default());
        assert!(matches!(result, Err(PrintError::Io(_))));
        assert_eq!(
            *calls.borrow(),
            vec![
                "add_page",
                "begin_text",
                "end_text",
                "add_page",
                "begin_text",
                "failed",
                "end_text",
            ]
        );
    }
}
