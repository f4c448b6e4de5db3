/// The text to be printed: the body content plus an optional header and footer which
/// are repeated on every page.
///
/// All three are stored as the caller supplied them and split into lines on demand.
/// Lines are never wrapped; one input line becomes one printed line.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Manuscript {
    pub content: Option<String>,
    pub header: Option<String>,
    pub footer: Option<String>,
}

impl Manuscript {
    /// A manuscript with body content and no header or footer
    pub fn new<S: ToString>(content: S) -> Manuscript {
        Manuscript {
            content: Some(content.to_string()),
            header: None,
            footer: None,
        }
    }

    /// Set the header, modifying `self`
    pub fn with_header<S: ToString>(mut self, header: S) -> Self {
        self.header = Some(header.to_string());
        self
    }

    /// Set the footer, modifying `self`
    pub fn with_footer<S: ToString>(mut self, footer: S) -> Self {
        self.footer = Some(footer.to_string());
        self
    }

    pub fn content_lines(&self) -> Vec<String> {
        split_lines(self.content.as_deref())
    }

    pub fn header_lines(&self) -> Vec<String> {
        split_lines(self.header.as_deref())
    }

    pub fn footer_lines(&self) -> Vec<String> {
        split_lines(self.footer.as_deref())
    }
}

/// Split text into printable lines. `\n` separates lines (a trailing `\r` is dropped
/// from each), and trailing empty lines are discarded, so missing or empty text
/// yields no lines at all.
pub fn split_lines(text: Option<&str>) -> Vec<String> {
    let Some(text) = text else {
        return Vec::new();
    };

    let mut lines: Vec<String> = text
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
        .collect();
    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    lines
}
