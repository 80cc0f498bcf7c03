mod block;
mod config;
mod html;
mod inline;
mod parser;

pub use block::Line;
pub use config::{Config, ConfigError};
pub use inline::{escape_html, format_inline};
pub use parser::{classify, precedence};

/// Parse markdown text into one classification per line using default config.
pub fn parse(markdown: &str) -> Vec<Line<'_>> {
    parse_with_config(markdown, Config::compiled())
}

/// Parse markdown text into one classification per line with custom config.
pub fn parse_with_config<'a>(markdown: &'a str, config: &Config) -> Vec<Line<'a>> {
    parser::parse(markdown, config.input.normalize_line_endings)
}

/// Convert markdown to HTML fragments using default config.
pub fn markdown_to_html(markdown: &str) -> String {
    markdown_to_html_with_config(markdown, Config::compiled())
}

/// Convert markdown to HTML fragments with custom config.
pub fn markdown_to_html_with_config(markdown: &str, config: &Config) -> String {
    let lines = parser::lines(markdown, config.input.normalize_line_endings).map(classify);
    html::lines_to_html(lines, config)
}

/// Convert possibly-absent markdown to HTML. Absent input yields `""`.
pub fn convert(markdown: Option<&str>) -> String {
    markdown.map(markdown_to_html).unwrap_or_default()
}
