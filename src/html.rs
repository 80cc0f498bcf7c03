use crate::block::Line;
use crate::config::Config;
use crate::inline::{escape_html, format_inline};

/// Whether a `<ul>` is currently open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListRun {
    NoList,
    InList,
}

/// Convert classified lines to newline-joined HTML fragments
pub fn lines_to_html<'a>(lines: impl IntoIterator<Item = Line<'a>>, config: &Config) -> String {
    let mut out: Vec<String> = Vec::new();
    let mut run = ListRun::NoList;

    for line in lines {
        run = match (run, line.is_list_item()) {
            (ListRun::NoList, true) => {
                out.push("<ul>".to_string());
                ListRun::InList
            }
            (ListRun::InList, false) => {
                out.push("</ul>".to_string());
                ListRun::NoList
            }
            (state, _) => state,
        };
        if let Some(fragment) = emit_line(&line, config) {
            out.push(fragment);
        }
    }

    // End of input closes a still-open run
    if run == ListRun::InList {
        out.push("</ul>".to_string());
    }

    log::debug!("Emitted {} HTML fragments", out.len());
    out.join("\n")
}

fn emit_line(line: &Line<'_>, config: &Config) -> Option<String> {
    match *line {
        Line::Blank => None,
        Line::Heading { level, text } => {
            Some(format!("<h{level}>{}</h{level}>", format_inline(text)))
        }
        Line::ListItem { text, .. } => Some(format!("<li>{}</li>", format_inline(text))),
        Line::Status(text) => Some(format!(
            "<p style=\"{}\">{}</p>",
            escape_html(&config.status.style),
            escape_html(text)
        )),
        Line::Paragraph(text) => Some(format!("<p>{}</p>", format_inline(text))),
    }
}
