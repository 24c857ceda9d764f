//! scrapedoc CLI - lenient structured extraction tool

use std::fs;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use colored::Colorize;

use scrapedoc::{Format, Scraper};

#[derive(Parser)]
#[command(name = "scrapedoc")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Scrape JSON, XML, CSV, BibTeX and Markdown files into structured output", long_about = None)]
struct Cli {
    /// Source file to extract from
    #[arg(long, value_name = "PATH")]
    file: PathBuf,

    /// Notation of the source file
    #[arg(long = "type", value_enum, value_name = "TYPE")]
    kind: FormatArg,

    /// Print tabular results as pretty JSON instead of a table
    #[arg(long)]
    json: bool,

    /// Print JSON without indentation
    #[arg(long)]
    compact: bool,

    /// Treat malformation warnings as errors
    #[arg(long)]
    strict: bool,

    /// Field delimiter for CSV input
    #[arg(long, default_value = ",", value_name = "CHAR")]
    delimiter: char,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    /// Object notation
    Json,
    /// Markup
    Xml,
    /// Comma-separated rows
    Csv,
    /// BibTeX entries
    Bib,
    /// Markdown headers and links
    Md,
}

impl From<FormatArg> for Format {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => Format::Json,
            FormatArg::Xml => Format::Xml,
            FormatArg::Csv => Format::Csv,
            FormatArg::Bib => Format::Bib,
            FormatArg::Md => Format::Md,
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let content = match fs::read_to_string(&cli.file) {
        Ok(content) => content,
        Err(e) => {
            eprintln!(
                "{}: cannot read '{}': {}",
                "Error".red().bold(),
                cli.file.display(),
                e
            );
            process::exit(1);
        }
    };

    // Extraction errors are reported but do not change the exit status.
    if let Err(e) = cmd_extract(&cli, &content) {
        eprintln!("{}: {}", "Parse error".red().bold(), e);
    }
}

fn cmd_extract(cli: &Cli, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    let format = Format::from(cli.kind);
    log::debug!("extracting {} as {}", cli.file.display(), format);

    let mut scraper = Scraper::new().with_delimiter(cli.delimiter);
    if cli.strict {
        scraper = scraper.strict();
    }
    if cli.json {
        scraper = scraper.force_json();
    }
    if cli.compact {
        scraper = scraper.compact();
    }

    let result = scraper.extract(content, format)?;

    for warning in result.warnings() {
        eprintln!("{}: {}", "Warning".yellow().bold(), warning);
    }

    let output = result.render()?;
    println!("\n{}", "Parse result:".green().bold());
    println!("{}", output);

    Ok(())
}
