use crate::error::{PdfDocsError, UserFriendlyError};
use crate::extractor::{ExtractionOutcome, RunReport};
use crate::scanner::DocumentFile;
use console::{style, Emoji, Term};
use std::path::Path;
use std::time::Duration;

const BANNER_WIDTH: usize = 60;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputMode {
    Human,
    Json,
    Plain,
}

// Emojis with text fallbacks
static CHECKMARK: Emoji = Emoji("✅ ", "✓ ");
static CROSS: Emoji = Emoji("❌ ", "✗ ");
static INFO: Emoji = Emoji("ℹ️  ", "i ");
static WARNING: Emoji = Emoji("⚠️  ", "! ");
static ROCKET: Emoji = Emoji("🚀 ", "> ");

pub struct OutputFormatter {
    mode: OutputMode,
    use_colors: bool,
    verbose_level: u8,
    quiet: bool,
}

impl OutputFormatter {
    pub fn new(mode: OutputMode, verbose: u8, quiet: bool) -> Self {
        let use_colors = match mode {
            OutputMode::Human => Term::stdout().features().colors_supported() && !quiet,
            _ => false,
        };

        Self {
            mode,
            use_colors,
            verbose_level: if quiet { 0 } else { verbose },
            quiet,
        }
    }

    // Core messaging methods
    pub fn success(&self, message: &str) {
        match self.mode {
            OutputMode::Human => self.print_human_message(MessageType::Success, message),
            OutputMode::Json => self.print_json_message("success", message),
            OutputMode::Plain => println!("SUCCESS: {}", message),
        }
    }

    pub fn error(&self, message: &str) {
        match self.mode {
            OutputMode::Human => self.print_human_message(MessageType::Error, message),
            OutputMode::Json => self.print_json_message("error", message),
            OutputMode::Plain => eprintln!("ERROR: {}", message),
        }
    }

    pub fn warning(&self, message: &str) {
        if self.should_show_message(1) {
            match self.mode {
                OutputMode::Human => self.print_human_message(MessageType::Warning, message),
                OutputMode::Json => self.print_json_message("warning", message),
                OutputMode::Plain => println!("WARNING: {}", message),
            }
        }
    }

    pub fn info(&self, message: &str) {
        if self.should_show_message(1) {
            match self.mode {
                OutputMode::Human => self.print_human_message(MessageType::Info, message),
                OutputMode::Json => self.print_json_message("info", message),
                OutputMode::Plain => println!("INFO: {}", message),
            }
        }
    }

    pub fn debug(&self, message: &str) {
        if self.should_show_message(2) {
            match self.mode {
                OutputMode::Human => {
                    if self.use_colors {
                        println!("  {}", style(message).dim());
                    } else {
                        println!("  DEBUG: {}", message);
                    }
                }
                OutputMode::Json => self.print_json_message("debug", message),
                OutputMode::Plain => println!("DEBUG: {}", message),
            }
        }
    }

    pub fn start_operation(&self, operation: &str) {
        if self.should_show_message(0) {
            match self.mode {
                OutputMode::Human => {
                    if self.use_colors {
                        println!("{}{}", ROCKET, style(operation).bold());
                    } else {
                        println!("> {}", operation);
                    }
                }
                OutputMode::Json => self.print_json_message("operation_start", operation),
                OutputMode::Plain => println!("STARTING: {}", operation),
            }
        }
    }

    // User-friendly error handling
    pub fn print_user_friendly_error(&self, error: &PdfDocsError) {
        let user_message = error.user_message();
        self.error(&user_message);

        if let Some(suggestion) = error.suggestion() {
            match self.mode {
                OutputMode::Human => {
                    if self.use_colors {
                        eprintln!(
                            "{}{}",
                            INFO,
                            style(&format!("Suggestion: {}", suggestion)).cyan()
                        );
                    } else {
                        eprintln!("Suggestion: {}", suggestion);
                    }
                }
                OutputMode::Json => {
                    self.print_json_object(&serde_json::json!({
                        "type": "suggestion",
                        "message": suggestion
                    }));
                }
                OutputMode::Plain => {
                    eprintln!("SUGGESTION: {}", suggestion);
                }
            }
        }
    }

    // Per-document output. Banner and text are the product of the run, so
    // they are printed regardless of verbosity.
    pub fn print_banner(&self, document: &DocumentFile) {
        if self.mode == OutputMode::Json {
            return;
        }

        println!();
        println!("{}", "=".repeat(BANNER_WIDTH));
        println!("Reading: {}", document.filename);
        println!("{}", "=".repeat(BANNER_WIDTH));
    }

    pub fn print_document(
        &self,
        document: &DocumentFile,
        output_path: &Path,
        outcome: &ExtractionOutcome,
        text: &str,
        echo_text: bool,
    ) {
        match self.mode {
            OutputMode::Json => {
                let mut obj = serde_json::json!({
                    "type": "document",
                    "filename": document.filename,
                    "output_path": output_path.display().to_string(),
                    "pages": outcome.page_count(),
                    "error": outcome.error_message(),
                });
                if echo_text {
                    obj["text"] = serde_json::Value::String(text.to_string());
                }
                self.print_json_object(&obj);
            }
            OutputMode::Human | OutputMode::Plain => {
                println!("Text extracted to: {}", output_path.display());
                if echo_text {
                    println!("{}", text);
                }
            }
        }
    }

    pub fn print_no_documents(&self, directory: &Path) {
        let message = format!("No PDF files found in {}", directory.display());
        match self.mode {
            OutputMode::Json => self.print_json_message("info", &message),
            OutputMode::Human | OutputMode::Plain => println!("{}", message),
        }
    }

    // Summary and reporting
    pub fn print_run_summary(&self, report: &RunReport) {
        match self.mode {
            OutputMode::Json => {
                let json_output = serde_json::json!({
                    "type": "summary",
                    "report": serde_json::to_value(report).unwrap_or_default(),
                    "timestamp": chrono::Utc::now().to_rfc3339()
                });
                self.print_json_object(&json_output);
            }
            OutputMode::Human if self.should_show_message(1) => self.print_human_summary(report),
            OutputMode::Plain if self.should_show_message(1) => self.print_plain_summary(report),
            _ => {}
        }
    }

    pub fn print_separator(&self) {
        if self.quiet {
            return;
        }

        match self.mode {
            OutputMode::Human => {
                if self.use_colors {
                    println!("{}", style("─".repeat(BANNER_WIDTH)).dim());
                } else {
                    println!("{}", "-".repeat(BANNER_WIDTH));
                }
            }
            OutputMode::Plain => {
                println!("{}", "-".repeat(BANNER_WIDTH));
            }
            OutputMode::Json => {}
        }
    }

    // Private helper methods
    fn should_show_message(&self, min_verbose_level: u8) -> bool {
        !self.quiet && self.verbose_level >= min_verbose_level
    }

    fn print_human_message(&self, msg_type: MessageType, message: &str) {
        #[allow(clippy::type_complexity)]
        let (emoji, color_fn): (Emoji, Box<dyn Fn(&str) -> console::StyledObject<&str>>) =
            match msg_type {
                MessageType::Success => (CHECKMARK, Box::new(|msg| style(msg).green().bold())),
                MessageType::Error => (CROSS, Box::new(|msg| style(msg).red().bold())),
                MessageType::Warning => (WARNING, Box::new(|msg| style(msg).yellow().bold())),
                MessageType::Info => (INFO, Box::new(|msg| style(msg).cyan())),
            };

        if self.use_colors {
            match msg_type {
                MessageType::Error => eprintln!("{}{}", emoji, color_fn(message)),
                _ => println!("{}{}", emoji, color_fn(message)),
            }
        } else {
            let prefix = match msg_type {
                MessageType::Success => "✓",
                MessageType::Error => "✗",
                MessageType::Warning => "!",
                MessageType::Info => "i",
            };

            match msg_type {
                MessageType::Error => eprintln!("{} {}", prefix, message),
                _ => println!("{} {}", prefix, message),
            }
        }
    }

    fn print_json_message(&self, level: &str, message: &str) {
        self.print_json_object(&serde_json::json!({
            "type": "message",
            "level": level,
            "message": message,
            "timestamp": chrono::Utc::now().to_rfc3339()
        }));
    }

    fn print_json_object(&self, obj: &serde_json::Value) {
        println!(
            "{}",
            serde_json::to_string(obj).unwrap_or_else(|_| "{}".to_string())
        );
    }

    fn print_human_summary(&self, report: &RunReport) {
        println!();
        self.print_separator();

        let headline = format!(
            "Processed {} of {} documents",
            report.documents_processed() - report.failure_count(),
            report.documents_processed()
        );
        if self.use_colors {
            println!("{} {}", style(headline).green().bold(), CHECKMARK);
        } else {
            println!("✓ {}", headline);
        }

        println!("  Directory:   {}", report.directory.display());
        println!("  Backend:     {}", report.backend);
        println!("  Pages read:  {}", report.total_pages());
        println!("  Time taken:  {}", format_duration(report.elapsed()));

        if report.failure_count() > 0 {
            println!("  Unreadable:");
            for failure in report.failures() {
                println!(
                    "    - {}: {}",
                    failure.filename,
                    failure.error.as_deref().unwrap_or_default()
                );
            }
        }

        self.print_separator();
    }

    fn print_plain_summary(&self, report: &RunReport) {
        println!("COMPLETED: PDF text extraction");
        println!("Documents: {}", report.documents_processed());
        println!("Failures: {}", report.failure_count());
        println!("Pages: {}", report.total_pages());
        println!("Duration: {:?}", report.elapsed());
    }
}

#[derive(Debug, Clone, Copy)]
enum MessageType {
    Success,
    Error,
    Warning,
    Info,
}

fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    if secs >= 60 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else if secs > 0 {
        format!("{}s", secs)
    } else {
        format!("{}ms", duration.as_millis())
    }
}
