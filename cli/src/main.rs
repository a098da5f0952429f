//! markdocx CLI - Markdown to DOCX conversion tool
//!
//! A command-line front end that reads Markdown, applies a styling
//! configuration and writes a `.docx` package.

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use markdocx::model::JsonFormat;
use markdocx::style::{FriendlyStylingConfig, LinkStyle, PageSize, StylingConfig};
use markdocx::{Converter, Measurement, OoxmlPackage};
use simple_logger::SimpleLogger;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

/// Markdown to Word document conversion
#[derive(Parser)]
#[command(
    name = "markdocx",
    version,
    about = "Convert Markdown to Word documents",
    long_about = "markdocx - Markdown to Office Open XML (DOCX) conversion.\n\n\
                  Headings, paragraphs, lists, code blocks, blockquotes, tables and links \
                  are mapped onto configurable Word styles."
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a Markdown file to DOCX
    Convert {
        /// Input Markdown file, or `-` for stdin
        input: PathBuf,

        /// Output file path (default: input with a .docx extension)
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        style: StyleArgs,
    },

    /// Print the translated document model as JSON
    Model {
        /// Input Markdown file, or `-` for stdin
        input: PathBuf,

        /// Output compact JSON (no indentation)
        #[arg(long)]
        compact: bool,
    },

    /// List the parts and relationships of a DOCX package
    Inspect {
        /// Input .docx file
        input: PathBuf,
    },

    /// Show version information
    Version,
}

/// Styling options for `convert`.
#[derive(Args)]
struct StyleArgs {
    /// Styling configuration in native units (JSON)
    #[arg(long, conflicts_with = "friendly_config")]
    config: Option<PathBuf>,

    /// Styling configuration with unit-tagged measurements (JSON)
    #[arg(long)]
    friendly_config: Option<PathBuf>,

    /// Page size preset
    #[arg(long, value_parser = parse_page_size)]
    page_size: Option<PageSize>,

    /// How links are rendered
    #[arg(long)]
    link_style: Option<LinkMode>,

    /// Default font face
    #[arg(long)]
    font: Option<String>,

    /// Default font size in points
    #[arg(long)]
    font_size: Option<f64>,
}

/// Link rendering mode
#[derive(Clone, Copy, ValueEnum)]
enum LinkMode {
    /// Colored text only
    Colored,
    /// Colored, underlined text followed by the URL
    InlineUrl,
    /// Real hyperlinks
    Hyperlink,
}

impl From<LinkMode> for LinkStyle {
    fn from(mode: LinkMode) -> Self {
        match mode {
            LinkMode::Colored => LinkStyle::Colored,
            LinkMode::InlineUrl => LinkStyle::InlineUrl,
            LinkMode::Hyperlink => LinkStyle::Hyperlink,
        }
    }
}

fn parse_page_size(name: &str) -> Result<PageSize, String> {
    PageSize::from_name(name).ok_or_else(|| {
        let names: Vec<&str> = PageSize::PRESETS.iter().map(|p| p.name()).collect();
        format!("unknown page size '{}' (expected one of: {})", name, names.join(", "))
    })
}

impl StyleArgs {
    fn build(&self) -> Result<StylingConfig, Box<dyn std::error::Error>> {
        let mut config = if let Some(path) = &self.config {
            StylingConfig::from_json_file(path)?
        } else if let Some(path) = &self.friendly_config {
            FriendlyStylingConfig::from_json_file(path)?.to_styling_config()
        } else {
            StylingConfig::default()
        };

        if let Some(page_size) = self.page_size {
            config.page_size = page_size;
        }
        if let Some(mode) = self.link_style {
            config.link_style = mode.into();
        }
        if let Some(font) = &self.font {
            config.default_font.name = font.clone();
        }
        if let Some(size) = self.font_size {
            config.default_font.size = Measurement::points(size).to_half_points();
        }
        Ok(config)
    }
}

fn main() {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    if let Err(e) = SimpleLogger::new()
        .with_level(level)
        .with_colors(true)
        .without_timestamps()
        .init()
    {
        eprintln!("{}: {}", "Warning".yellow().bold(), e);
    }

    if let Err(e) = run(cli) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Convert {
            input,
            output,
            style,
        } => {
            let config = style.build()?;
            let output = output.unwrap_or_else(|| default_output(&input));

            let pb = create_spinner("Reading Markdown...");
            let markdown = read_input(&input)?;
            pb.set_message("Generating document...");

            let bytes = Converter::new(config).convert(&markdown)?;
            fs::write(&output, &bytes)?;

            pb.finish_and_clear();
            println!(
                "{} Converted to DOCX: {} ({} bytes)",
                "✓".green().bold(),
                output.display(),
                bytes.len()
            );
        }

        Commands::Model { input, compact } => {
            let markdown = read_input(&input)?;
            let elements = markdocx::parse_markdown(&markdown);
            let format = if compact {
                JsonFormat::Compact
            } else {
                JsonFormat::Pretty
            };
            let json = markdocx::model::to_json(&elements, format)?;

            let stdout = io::stdout();
            let mut handle = stdout.lock();
            writeln!(handle, "{}", json)?;
        }

        Commands::Inspect { input } => {
            let package = OoxmlPackage::open(&input)?;

            println!("{}", "Package Parts".cyan().bold());
            println!("{}", "─".repeat(40));
            for name in package.list_files() {
                let size = package.read_binary(&name)?.len();
                println!("{} {}", format!("{:>8}", size).dimmed(), name);
            }

            for part in ["", "word/document.xml"] {
                let rels = package.read_relationships(part)?;
                if rels.is_empty() {
                    continue;
                }
                let title = if part.is_empty() {
                    "Package Relationships".to_string()
                } else {
                    format!("Relationships of {}", part)
                };
                println!("\n{}", title.cyan().bold());
                println!("{}", "─".repeat(40));
                for rel in rels.iter() {
                    let kind = rel.rel_type.rsplit('/').next().unwrap_or_default();
                    let mode = if rel.external { " (external)" } else { "" };
                    println!("{}: {} -> {}{}", rel.id.bold(), kind, rel.target, mode);
                }
            }
        }

        Commands::Version => {
            print_version();
        }
    }

    Ok(())
}

fn print_version() {
    println!("{} {}", "markdocx".green().bold(), env!("CARGO_PKG_VERSION"));
    println!("Markdown to Office Open XML (DOCX) conversion");
    println!();
    println!("Page sizes: letter, legal, a4, a3, a5, executive, tabloid");
    println!("Link styles: colored, inline-url, hyperlink");
}

fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}

fn read_input(path: &Path) -> io::Result<String> {
    if is_stdin(path) {
        let mut markdown = String::new();
        io::stdin().read_to_string(&mut markdown)?;
        Ok(markdown)
    } else {
        fs::read_to_string(path)
    }
}

fn default_output(input: &Path) -> PathBuf {
    if is_stdin(input) {
        PathBuf::from("output.docx")
    } else {
        input.with_extension("docx")
    }
}

fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::default_spinner()
        .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
        .template("{spinner:.blue} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    pb.set_style(style);
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_style_flags_override_defaults() {
        let cli = Cli::parse_from([
            "markdocx",
            "convert",
            "in.md",
            "--page-size",
            "A4",
            "--link-style",
            "inline-url",
            "--font",
            "Georgia",
            "--font-size",
            "11",
        ]);
        let Commands::Convert { style, .. } = cli.command else {
            panic!("expected convert");
        };
        let config = style.build().unwrap();
        assert_eq!(config.page_size, PageSize::A4);
        assert_eq!(config.link_style, LinkStyle::InlineUrl);
        assert_eq!(config.default_font.name, "Georgia");
        assert_eq!(config.default_font.size, 22);
    }

    #[test]
    fn test_unknown_page_size() {
        assert!(parse_page_size("b5").is_err());
        assert_eq!(parse_page_size("letter"), Ok(PageSize::Letter));
    }

    #[test]
    fn test_default_output() {
        assert_eq!(default_output(Path::new("notes.md")), PathBuf::from("notes.docx"));
        assert_eq!(default_output(Path::new("-")), PathBuf::from("output.docx"));
    }

    #[test]
    fn test_verbose_is_global() {
        let cli = Cli::parse_from(["markdocx", "inspect", "a.docx", "-vv"]);
        assert_eq!(cli.verbose, 2);
    }
}
