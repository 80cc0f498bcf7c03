/// Classification of a single source line
///
/// Text borrows from the source; nothing outlives one conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    Blank,
    Heading {
        /// 1 to 3
        level: u8,
        text: &'a str,
    },
    ListItem {
        /// Leading whitespace characters before the marker
        indent: usize,
        text: &'a str,
    },
    /// Bracketed progress marker, rendered literally
    Status(&'a str),
    Paragraph(&'a str),
}

impl Line<'_> {
    pub fn is_list_item(&self) -> bool {
        matches!(self, Line::ListItem { .. })
    }

    /// Short name used by `--classify` output.
    pub fn kind(&self) -> &'static str {
        match self {
            Line::Blank => "blank",
            Line::Heading { level: 1, .. } => "h1",
            Line::Heading { level: 2, .. } => "h2",
            Line::Heading { .. } => "h3",
            Line::ListItem { .. } => "item",
            Line::Status(_) => "status",
            Line::Paragraph(_) => "para",
        }
    }
}
