use crate::config::{CliOverrides, Config};
use crate::error::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pdfdocs")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Extract page-delimited text from the PDF files in a directory")]
#[command(
    long_about = "PdfDocs reads every PDF file directly inside a directory, writes its text \
                  page by page to a sibling <name>_extracted.txt file and prints it to the console."
)]
#[command(after_help = "EXAMPLES:\n  \
    pdfdocs\n  \
    pdfdocs ./docs\n  \
    pdfdocs ./docs --no-echo --verbose\n  \
    pdfdocs ./docs --exclude '^draft_' --suffix _text\n  \
    pdfdocs ./docs --output-format json")]
pub struct Cli {
    /// Directory containing the PDF files (defaults to the directory of the executable)
    pub directory: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, help = "Path to TOML configuration file")]
    pub config: Option<PathBuf>,

    /// PDF text extraction backend
    #[arg(long, help = "Text extraction backend (default: lopdf)")]
    pub backend: Option<String>,

    /// Suffix appended to the file stem of each output file
    #[arg(long, help = "Output file suffix (default: _extracted)")]
    pub suffix: Option<String>,

    /// File name patterns to skip
    #[arg(short, long, value_delimiter = ',', help = "Regex patterns of PDF file names to skip")]
    pub exclude: Option<Vec<String>>,

    /// Do not print extracted text to the console
    #[arg(long)]
    pub no_echo: bool,

    /// Output format for results
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub output_format: OutputFormat,

    /// Verbose output level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Dry run (show what would be done without executing)
    #[arg(long, help = "List the PDF files that would be read without reading them")]
    pub dry_run: bool,

    /// Generate sample configuration file
    #[arg(long, help = "Generate a sample configuration file")]
    pub generate_config: bool,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable colored output
    Human,
    /// JSON formatted output
    Json,
    /// Plain text output
    Plain,
}

impl Cli {
    /// Without `--config`, a `pdfdocs.toml` or `.pdfdocs.toml` inside the
    /// target directory is used; the working directory is never consulted.
    pub fn load_config(&self) -> Result<Config> {
        let mut config = Config::load_with_defaults(self.config.as_ref(), &self.target_directory())?;

        let overrides = self.create_cli_overrides();
        config.merge_with_cli_args(&overrides);
        config.validate()?;

        Ok(config)
    }

    pub fn create_cli_overrides(&self) -> CliOverrides {
        CliOverrides::new()
            .with_backend(self.backend.clone())
            .with_suffix(self.suffix.clone())
            .with_exclude(self.exclude.clone())
            .with_no_echo(self.no_echo)
    }

    /// The directory to scan: the explicit argument, or the directory that
    /// holds the running executable.
    pub fn target_directory(&self) -> PathBuf {
        self.directory.clone().unwrap_or_else(default_directory)
    }

    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }
}

pub fn default_directory() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|p| p.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."))
}
