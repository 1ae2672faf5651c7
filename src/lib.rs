pub mod cli;
pub mod config;
pub mod error;
pub mod extractor;
pub mod scanner;
pub mod ui;

// Public API re-exports
pub use cli::{Cli, OutputFormat};
pub use config::{BackendConfig, CliOverrides, Config, OutputConfig, ScanConfig};
pub use error::{BackendError, PdfDocsError, Result, UserFriendlyError};

// Core functionality re-exports
pub use extractor::{
    DocumentReport, ExtractionOutcome, OutputWriter, PageText, PdfBackend, PdfPages, RunReport,
    TextExtractor,
};
pub use scanner::{DocumentFile, DocumentScanner, FileFilter};
pub use ui::{OutputFormatter, OutputMode, ProgressManager};

use std::path::Path;

/// Main library interface: scans a directory and extracts each PDF's text.
pub struct PdfDocs {
    config: Config,
    backend: Box<dyn PdfBackend>,
    output_formatter: OutputFormatter,
    progress_manager: ProgressManager,
}

impl PdfDocs {
    pub fn new(
        config: Config,
        backend: Box<dyn PdfBackend>,
        output_mode: OutputMode,
        verbose: u8,
        quiet: bool,
    ) -> Self {
        Self {
            config,
            backend,
            output_formatter: OutputFormatter::new(output_mode, verbose, quiet),
            progress_manager: ProgressManager::new(!quiet),
        }
    }

    /// Builds an instance from CLI arguments. The configured backend is
    /// resolved here, so a missing backend fails before any document is read.
    pub fn from_cli(cli_args: &Cli) -> Result<Self> {
        let config = cli_args.load_config()?;
        let backend = extractor::backend::resolve(&config.backend.name)?;
        log::info!("using PDF backend {}", backend.name());

        let output_mode = match cli_args.output_format {
            OutputFormat::Human => OutputMode::Human,
            OutputFormat::Json => OutputMode::Json,
            OutputFormat::Plain => OutputMode::Plain,
        };

        Ok(Self::new(
            config,
            backend,
            output_mode,
            cli_args.verbosity_level(),
            cli_args.quiet,
        ))
    }

    /// PDF files directly inside `directory`, in listing order.
    pub fn discover(&self, directory: &Path) -> Result<Vec<DocumentFile>> {
        DocumentScanner::new(&self.config.scan).discover(directory)
    }

    /// Reads one document. Never fails: unreadable documents yield
    /// [`ExtractionOutcome::Failed`].
    pub fn extract_text(&self, document: &DocumentFile) -> ExtractionOutcome {
        TextExtractor::new(self.backend.as_ref()).extract(document)
    }

    /// Processes every PDF in `directory`, one at a time.
    ///
    /// Unreadable documents are reported inline and do not stop the run;
    /// only scanning and output-writing failures are returned as errors.
    pub fn run(&self, directory: &Path) -> Result<RunReport> {
        let documents = self.discover(directory)?;
        let mut report = RunReport::new(directory, self.backend.name());

        if documents.is_empty() {
            self.output_formatter.print_no_documents(directory);
            report.finish();
            return Ok(report);
        }

        self.output_formatter
            .info(&format!("Found {} PDF files in {}", documents.len(), directory.display()));

        let writer = OutputWriter::new(&self.config.output);

        for document in &documents {
            self.output_formatter.print_banner(document);

            let spinner = self.progress_manager.create_document_spinner(&document.filename);
            let outcome = self.extract_text(document);
            spinner.finish_and_clear();

            if let Some(message) = outcome.error_message() {
                self.output_formatter
                    .warning(&format!("Could not read {}: {}", document.filename, message));
            }

            let text = outcome.render();
            let output_path = writer.write(document, &text)?;
            self.output_formatter
                .debug(&format!("Wrote {}", output_path.display()));

            self.output_formatter.print_document(
                document,
                &output_path,
                &outcome,
                &text,
                self.config.output.echo_text,
            );

            report.record(document, output_path, &outcome);
        }

        report.finish();
        log::info!(
            "processed {} documents ({} unreadable) in {:?}",
            report.documents_processed(),
            report.failure_count(),
            report.elapsed()
        );

        Ok(report)
    }

    /// Generate sample configuration file
    pub fn generate_sample_config<P: AsRef<Path>>(output_path: P) -> Result<()> {
        let sample_config = Config::create_sample_config();
        std::fs::write(output_path.as_ref(), sample_config)?;
        Ok(())
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }

    pub fn output_formatter(&self) -> &OutputFormatter {
        &self.output_formatter
    }

    pub fn handle_error(&self, error: &PdfDocsError) {
        self.output_formatter.print_user_friendly_error(error);
    }
}
