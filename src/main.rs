use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use mdhtml::{Config, ConfigError};

const DEFAULT_CONFIG_FILE: &str = "mdhtml.toml";

#[derive(Parser)]
#[command(name = "mdhtml")]
#[command(about = "Convert streamed AI-analysis markdown to HTML fragments")]
struct Cli {
    /// Input Markdown file (reads stdin when omitted or "-")
    input: Option<PathBuf>,

    /// Output HTML file (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Config file (defaults to ./mdhtml.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Keep the carriage return of CRLF line endings
    #[arg(long)]
    keep_cr: bool,

    /// Print each line's classification instead of HTML
    #[arg(long)]
    classify: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("Error reading {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("Error reading stdin: {0}")]
    Stdin(#[source] io::Error),

    #[error("Error writing {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("Error writing stdout: {0}")]
    Stdout(#[source] io::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn run(cli: Cli) -> Result<(), CliError> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::load_or_default(Path::new(DEFAULT_CONFIG_FILE))?,
    };
    if cli.keep_cr {
        config.input.normalize_line_endings = false;
    }

    let markdown = read_input(cli.input.as_deref())?;
    log::debug!("Read {} bytes of markdown", markdown.len());

    let rendered = if cli.classify {
        classify_report(&markdown, &config)
    } else {
        mdhtml::markdown_to_html_with_config(&markdown, &config)
    };

    match cli.output {
        Some(output) => {
            fs::write(&output, format!("{rendered}\n")).map_err(|source| CliError::Write {
                path: output.clone(),
                source,
            })?;
            eprintln!("Created {}", output.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{rendered}").map_err(CliError::Stdout)?;
        }
    }

    Ok(())
}

fn read_input(input: Option<&Path>) -> Result<String, CliError> {
    match input {
        Some(path) if path != Path::new("-") => {
            fs::read_to_string(path).map_err(|source| CliError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
        _ => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .map_err(CliError::Stdin)?;
            Ok(buffer)
        }
    }
}

/// One `NUMBER KIND TEXT` row per source line.
fn classify_report(markdown: &str, config: &Config) -> String {
    mdhtml::parse_with_config(markdown, config)
        .iter()
        .enumerate()
        .map(|(i, line)| {
            let text = match line {
                mdhtml::Line::Blank => String::new(),
                mdhtml::Line::Heading { text, .. }
                | mdhtml::Line::Status(text)
                | mdhtml::Line::Paragraph(text) => format!("{text:?}"),
                mdhtml::Line::ListItem { indent, text } => format!("indent={indent} {text:?}"),
            };
            format!("{:>4} {:<6} {}", i + 1, line.kind(), text)
                .trim_end()
                .to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
