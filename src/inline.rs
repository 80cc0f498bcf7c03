//! Inline span formatting.
//!
//! Text is escaped first, then bold, italic and code spans are wrapped in
//! that order. Each pass runs over the output of the previous one, so tags
//! inserted by an earlier pass are never escaped or matched again.

/// Escape the characters HTML would otherwise read as markup.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Escape `text` and expand `**bold**`, `*italic*` and `` `code` `` spans.
pub fn format_inline(text: &str) -> String {
    let escaped = escape_html(text);
    let bold = wrap_delimited(&escaped, "**", "strong");
    let italic = wrap_italic(&bold);
    wrap_delimited(&italic, "`", "code")
}

/// Byte offset just past the character starting at `at`, if there is one.
fn next_char_end(text: &str, at: usize) -> Option<usize> {
    text[at..].chars().next().map(|c| at + c.len_utf8())
}

fn push_wrapped(out: &mut String, tag: &str, body: &str) {
    out.push('<');
    out.push_str(tag);
    out.push('>');
    out.push_str(body);
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

/// Replace `{delim}X{delim}` with `<tag>X</tag>`, shortest X first.
fn wrap_delimited(text: &str, delim: &str, tag: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pos = 0;

    while let Some(offset) = text[pos..].find(delim) {
        let open = pos + offset;
        let body = open + delim.len();
        let close = next_char_end(text, body)
            .and_then(|from| text[from..].find(delim).map(|i| from + i));

        // Without a closer for this opener, no later opener has one either.
        let Some(close) = close else { break };

        out.push_str(&text[pos..open]);
        push_wrapped(&mut out, tag, &text[body..close]);
        pos = close + delim.len();
    }

    out.push_str(&text[pos..]);
    out
}

/// Replace `*X*` with `<em>X</em>` where both stars stand alone.
fn wrap_italic(text: &str) -> String {
    let bytes = text.as_bytes();
    let is_lone_star = |i: usize| {
        bytes[i] == b'*' && (i == 0 || bytes[i - 1] != b'*') && bytes.get(i + 1) != Some(&b'*')
    };
    let find_lone_star = |from: usize| (from..bytes.len()).find(|&i| is_lone_star(i));

    let mut out = String::with_capacity(text.len());
    let mut pos = 0;

    while let Some(open) = find_lone_star(pos) {
        let Some(close) = next_char_end(text, open + 1).and_then(find_lone_star) else {
            break;
        };

        out.push_str(&text[pos..open]);
        push_wrapped(&mut out, "em", &text[open + 1..close]);
        pos = close + 1;
    }

    out.push_str(&text[pos..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(
            escape_html(r#"<a href="x">&</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&lt;/a&gt;"
        );
        assert_eq!(escape_html("it's"), "it's");
    }

    #[test]
    fn bold() {
        assert_eq!(format_inline("**bold**"), "<strong>bold</strong>");
        assert_eq!(
            format_inline("**a** and **b**"),
            "<strong>a</strong> and <strong>b</strong>"
        );
    }

    #[test]
    fn italic() {
        assert_eq!(format_inline("*it*"), "<em>it</em>");
        assert_eq!(format_inline("a *b* c *d*"), "a <em>b</em> c <em>d</em>");
    }

    #[test]
    fn bold_is_never_read_as_italic() {
        let html = format_inline("**bold** and *italic*");
        assert_eq!(html, "<strong>bold</strong> and <em>italic</em>");
        assert!(!html.contains("<strong><em>"));
    }

    #[test]
    fn code() {
        assert_eq!(format_inline("run `cargo`"), "run <code>cargo</code>");
    }

    #[test]
    fn escaping_happens_before_markup() {
        assert_eq!(
            format_inline("**a < b** `x && y`"),
            "<strong>a &lt; b</strong> <code>x &amp;&amp; y</code>"
        );
    }

    #[test]
    fn unmatched_delimiters_stay_literal() {
        assert_eq!(format_inline("**open"), "**open");
        assert_eq!(format_inline("2 * 3"), "2 * 3");
        assert_eq!(format_inline("a ` b"), "a ` b");
        assert_eq!(format_inline("****"), "****");
        assert_eq!(format_inline("**"), "**");
    }

    #[test]
    fn spans_need_content() {
        assert_eq!(format_inline("``"), "``");
        assert_eq!(format_inline("* *"), "<em> </em>");
    }

    #[test]
    fn shortest_span_wins() {
        assert_eq!(format_inline("`a` b `c`"), "<code>a</code> b <code>c</code>");
        assert_eq!(format_inline("**a**b**"), "<strong>a</strong>b**");
    }

    #[test]
    fn triple_stars_follow_pass_order() {
        // bold takes the first two stars of each side, italic the leftovers
        assert_eq!(format_inline("***x***"), "<strong><em>x</strong></em>");
    }

    #[test]
    fn later_passes_see_earlier_output() {
        assert_eq!(
            format_inline("`**b**`"),
            "<code><strong>b</strong></code>"
        );
    }

    #[test]
    fn multibyte_content() {
        assert_eq!(format_inline("*é*"), "<em>é</em>");
        assert_eq!(format_inline("**日本**"), "<strong>日本</strong>");
    }
}
