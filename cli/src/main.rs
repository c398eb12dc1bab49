//! undocx CLI - Word document content extraction tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use undocx::{
    parse_file_with_options, ConvertOptions, ConverterRegistry, ExtractionStats, JsonFormat,
    OutputFormat, ParseOptions,
};

#[derive(Parser)]
#[command(name = "undocx")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Extract DOCX content to HTML, Markdown, text, and JSON", long_about = None)]
struct Cli {
    /// Input DOCX file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output directory
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Fail on malformed XML instead of keeping partial content
    #[arg(long, global = true)]
    strict: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert DOCX to all formats (HTML, Markdown, text, JSON)
    Convert {
        /// Input DOCX file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,
    },

    /// Convert DOCX to a standalone HTML page
    Html {
        /// Input DOCX file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Convert DOCX to Markdown
    #[command(alias = "md")]
    Markdown {
        /// Input DOCX file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Convert DOCX to plain text
    Text {
        /// Input DOCX file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Convert DOCX to JSON
    Json {
        /// Input DOCX file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show document information
    Info {
        /// Input DOCX file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Show version information
    Version,
}

type CliResult = Result<(), Box<dyn std::error::Error>>;

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let options = parse_options(cli.strict);

    let result = match cli.command {
        Some(Commands::Convert { input, output }) => cmd_convert(&input, output.as_deref(), options),
        Some(Commands::Html { input, output }) => {
            cmd_single(&input, output.as_deref(), convert_options(options, OutputFormat::Html))
        }
        Some(Commands::Markdown { input, output }) => cmd_single(
            &input,
            output.as_deref(),
            convert_options(options, OutputFormat::Markdown),
        ),
        Some(Commands::Text { input, output }) => {
            cmd_single(&input, output.as_deref(), convert_options(options, OutputFormat::Text))
        }
        Some(Commands::Json {
            input,
            output,
            compact,
        }) => {
            let format = if compact {
                JsonFormat::Compact
            } else {
                JsonFormat::Pretty
            };
            let options = convert_options(options, OutputFormat::Json).with_json_format(format);
            cmd_single(&input, output.as_deref(), options)
        }
        Some(Commands::Info { input }) => cmd_info(&input, options),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: convert if input is provided
            if let Some(input) = cli.input {
                cmd_convert(&input, cli.output.as_deref(), options)
            } else {
                println!("{}", "Usage: undocx <FILE> [OUTPUT]".yellow());
                println!("       undocx --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

/// Lenient unless `--strict` is given, so damaged documents still yield output.
fn parse_options(strict: bool) -> ParseOptions {
    if strict {
        ParseOptions::new()
    } else {
        ParseOptions::new().lenient()
    }
}

fn convert_options(options: ParseOptions, format: OutputFormat) -> ConvertOptions {
    ConvertOptions::new()
        .with_parse_options(options)
        .with_format(format)
}

fn default_output_dir(input: &Path) -> PathBuf {
    let stem = input.file_stem().unwrap_or_default().to_string_lossy();
    PathBuf::from(format!("{}_output", stem))
}

fn cmd_convert(input: &Path, output: Option<&Path>, options: ParseOptions) -> CliResult {
    let output_dir = output
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| default_output_dir(input));

    fs::create_dir_all(&output_dir)?;
    log::debug!("writing outputs to {}", output_dir.display());

    let pb = ProgressBar::new(5);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {msg}")?
            .progress_chars("#>-"),
    );

    pb.set_message("Parsing DOCX...");
    let doc = parse_file_with_options(input, options)?;
    pb.inc(1);

    pb.set_message("Generating HTML...");
    fs::write(output_dir.join("extract.html"), undocx::render::to_html(&doc))?;
    pb.inc(1);

    pb.set_message("Generating Markdown...");
    fs::write(output_dir.join("extract.md"), undocx::render::to_markdown(&doc))?;
    pb.inc(1);

    pb.set_message("Generating text...");
    fs::write(output_dir.join("extract.txt"), undocx::render::to_text(&doc))?;
    pb.inc(1);

    pb.set_message("Generating JSON...");
    let json = undocx::render::to_json(&doc, JsonFormat::Pretty)?;
    fs::write(output_dir.join("content.json"), &json)?;
    pb.inc(1);

    pb.finish_with_message("Done!");

    println!("\n{} {}", "Output files:".green().bold(), output_dir.display());
    println!("  {} extract.html", "├─".dimmed());
    println!("  {} extract.md", "├─".dimmed());
    println!("  {} extract.txt", "├─".dimmed());
    println!("  {} content.json", "└─".dimmed());

    Ok(())
}

/// Convert to a single format through the converter registry.
fn cmd_single(input: &Path, output: Option<&Path>, options: ConvertOptions) -> CliResult {
    let registry = ConverterRegistry::with_defaults();
    let result = registry.convert(input, &options)?;
    log::debug!("{} bytes of {}", result.content_len(), result.mime_type);
    let content = result.content;

    if let Some(path) = output {
        fs::write(path, &content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }

    Ok(())
}

fn cmd_info(input: &Path, options: ParseOptions) -> CliResult {
    let doc = parse_file_with_options(input, options)?;
    let stats = ExtractionStats::from_result(&doc);

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: DOCX", "Format".bold());
    println!(
        "{}: {}",
        "Body".bold(),
        if doc.is_missing_body() { "Missing" } else { "Present" }
    );

    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "Headings".bold(), stats.heading_count);
    println!("{}: {}", "Paragraphs".bold(), stats.paragraph_count);
    println!("{}: {}", "Tables".bold(), stats.table_count);
    println!("{}: {}", "Words".bold(), stats.word_count);
    println!("{}: {}", "Characters".bold(), stats.char_count);

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "undocx".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Word document content extraction tool");
    println!();
    println!("Repository: {}", "https://github.com/iyulab/undocx".dimmed());
    println!("License: MIT");
}
