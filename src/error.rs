use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PdfDocsError {
    #[error("IO operation failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF backend not available: {name}")]
    BackendUnavailable { name: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Path validation failed: {path}")]
    InvalidPath { path: String },

    #[error("Failed to write {}: {source}", .path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Failure raised while reading one document. Never escapes the document
/// boundary: it is folded into that document's output text instead.
#[derive(Error, Debug)]
pub enum BackendError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Parse(String),

    #[error("page {page}: {message}")]
    Page { page: u32, message: String },
}

pub trait UserFriendlyError {
    fn user_message(&self) -> String;
    fn suggestion(&self) -> Option<String>;
}

impl UserFriendlyError for PdfDocsError {
    fn user_message(&self) -> String {
        match self {
            PdfDocsError::BackendUnavailable { name } => {
                format!("PDF text extraction backend '{}' is not available in this build", name)
            }
            PdfDocsError::Config { message } => {
                format!("Configuration error: {}", message)
            }
            PdfDocsError::InvalidPath { path } => {
                format!("Invalid directory: {}", path)
            }
            PdfDocsError::OutputWrite { path, source } => {
                format!("Could not write {}: {}", path.display(), source)
            }
            _ => self.to_string(),
        }
    }

    fn suggestion(&self) -> Option<String> {
        match self {
            PdfDocsError::BackendUnavailable { .. } => Some(format!(
                "Install a build with PDF support: cargo install pdfdocs --features lopdf \
                 (available backends in this build: {})",
                available_backends_display()
            )),
            PdfDocsError::Config { .. } => Some(
                "Check your configuration file syntax or regenerate one with --generate-config.".to_string()
            ),
            PdfDocsError::InvalidPath { .. } => Some(
                "Pass an existing directory containing PDF files, e.g. pdfdocs ./docs".to_string()
            ),
            PdfDocsError::OutputWrite { .. } => Some(
                "Ensure you have write permission for the directory that holds the PDF files.".to_string()
            ),
            _ => None,
        }
    }
}

fn available_backends_display() -> String {
    let backends = crate::extractor::backend::available_backends();
    if backends.is_empty() {
        "none".to_string()
    } else {
        backends.join(", ")
    }
}

impl From<toml::de::Error> for PdfDocsError {
    fn from(error: toml::de::Error) -> Self {
        PdfDocsError::Config {
            message: error.to_string(),
        }
    }
}

impl From<regex::Error> for PdfDocsError {
    fn from(error: regex::Error) -> Self {
        PdfDocsError::Config {
            message: format!("Invalid exclude pattern: {}", error),
        }
    }
}

pub type Result<T> = std::result::Result<T, PdfDocsError>;
