use crate::block::Line;

type Classifier = fn(&str) -> Option<Line<'_>>;

/// Line classifiers in precedence order. The first one that matches wins;
/// a line no classifier accepts is a paragraph.
const CLASSIFIERS: &[(&str, Classifier)] = &[
    ("blank", blank),
    ("h3", heading_3),
    ("h2", heading_2),
    ("h1", heading_1),
    ("item", list_item),
    ("status", status),
];

const PARAGRAPH: &str = "para";

const LIST_MARKERS: [char; 3] = ['-', '*', '•'];

/// Split markdown into lines, stripping the `\r` of `\r\n` endings if asked.
pub fn lines(markdown: &str, normalize_line_endings: bool) -> impl Iterator<Item = &str> {
    markdown.split('\n').map(move |line| {
        if normalize_line_endings {
            line.strip_suffix('\r').unwrap_or(line)
        } else {
            line
        }
    })
}

/// Parse markdown into one classification per line
pub fn parse(markdown: &str, normalize_line_endings: bool) -> Vec<Line<'_>> {
    lines(markdown, normalize_line_endings).map(classify).collect()
}

/// Classify a single line (without its `\n`).
pub fn classify(line: &str) -> Line<'_> {
    let (name, classified) = CLASSIFIERS
        .iter()
        .find_map(|(name, classifier)| classifier(line).map(|c| (*name, c)))
        .unwrap_or_else(|| (PARAGRAPH, paragraph(line)));
    log::trace!("{name}: {line:?}");
    classified
}

/// Names of the classifiers in the order they are tried.
pub fn precedence() -> impl Iterator<Item = &'static str> {
    CLASSIFIERS
        .iter()
        .map(|(name, _)| *name)
        .chain(std::iter::once(PARAGRAPH))
}

/// Whitespace as JavaScript's `trim` and `\s` see it: unlike
/// `char::is_whitespace` this includes U+FEFF and excludes U+0085.
fn is_space(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\u{0B}' | '\u{0C}' | '\r' | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

fn trim(line: &str) -> &str {
    line.trim_matches(is_space)
}

fn blank(line: &str) -> Option<Line<'_>> {
    trim(line).is_empty().then_some(Line::Blank)
}

fn heading(line: &str, level: u8) -> Option<Line<'_>> {
    let hashes = usize::from(level);
    let text = line.strip_prefix(&"#".repeat(hashes))?.strip_prefix(' ')?;
    Some(Line::Heading { level, text })
}

fn heading_3(line: &str) -> Option<Line<'_>> {
    heading(line, 3)
}

fn heading_2(line: &str) -> Option<Line<'_>> {
    heading(line, 2)
}

fn heading_1(line: &str) -> Option<Line<'_>> {
    heading(line, 1)
}

fn list_item(line: &str) -> Option<Line<'_>> {
    let rest = line.trim_start_matches(is_space);
    let indent = line[..line.len() - rest.len()].chars().count();

    let marker = rest.chars().next().filter(|c| LIST_MARKERS.contains(c))?;
    let after = &rest[marker.len_utf8()..];
    let text = after.trim_start_matches(is_space);
    let gap = &after[..after.len() - text.len()];
    if gap.is_empty() {
        return None;
    }
    if !text.is_empty() {
        return Some(Line::ListItem { indent, text });
    }

    // Marker followed by whitespace only: the last whitespace character is
    // the item text, provided at least one remains as the separator.
    let (last, _) = gap.char_indices().last()?;
    if last == 0 {
        return None;
    }
    Some(Line::ListItem {
        indent,
        text: &gap[last..],
    })
}

fn status(line: &str) -> Option<Line<'_>> {
    let trimmed = trim(line);
    (trimmed.starts_with('[') && trimmed.ends_with(']')).then_some(Line::Status(trimmed))
}

fn paragraph(line: &str) -> Line<'_> {
    Line::Paragraph(trim(line))
}
