use crate::error::BackendError;
use crate::extractor::backend::PdfBackend;
use crate::scanner::DocumentFile;
use serde::Serialize;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

pub const ERROR_PREFIX: &str = "Error reading PDF: ";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageText {
    /// 1-based position in the document.
    pub number: u32,
    pub text: String,
}

/// Result of reading one document. Failures are data, not errors: they end
/// up in the output file in place of the text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ExtractionOutcome {
    Extracted { pages: Vec<PageText> },
    Failed { message: String },
}

impl ExtractionOutcome {
    /// Page-delimited text as written to disk and echoed to the console.
    pub fn render(&self) -> String {
        match self {
            ExtractionOutcome::Extracted { pages } => {
                let mut text = String::new();
                for page in pages {
                    text.push_str(&page_marker(page.number));
                    text.push_str(&page.text);
                }
                text
            }
            ExtractionOutcome::Failed { message } => format!("{}{}", ERROR_PREFIX, message),
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, ExtractionOutcome::Failed { .. })
    }

    pub fn page_count(&self) -> usize {
        match self {
            ExtractionOutcome::Extracted { pages } => pages.len(),
            ExtractionOutcome::Failed { .. } => 0,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            ExtractionOutcome::Failed { message } => Some(message),
            ExtractionOutcome::Extracted { .. } => None,
        }
    }
}

pub fn page_marker(page_number: u32) -> String {
    format!("\n--- Page {} ---\n", page_number)
}

pub struct TextExtractor<'a> {
    backend: &'a dyn PdfBackend,
    buffer_size: usize,
}

impl<'a> TextExtractor<'a> {
    pub fn new(backend: &'a dyn PdfBackend) -> Self {
        Self {
            backend,
            buffer_size: 64 * 1024,
        }
    }

    /// Reads every page of `document`. Any failure between opening the file
    /// and extracting the last page discards the pages read so far.
    pub fn extract(&self, document: &DocumentFile) -> ExtractionOutcome {
        match self.read_pages(&document.source_path) {
            Ok(pages) => {
                log::debug!("{}: extracted {} pages", document.filename, pages.len());
                ExtractionOutcome::Extracted { pages }
            }
            Err(err) => {
                log::warn!("{}: {}", document.filename, err);
                ExtractionOutcome::Failed {
                    message: err.to_string(),
                }
            }
        }
    }

    fn read_pages(&self, path: &Path) -> Result<Vec<PageText>, BackendError> {
        let bytes = self.read_document(path)?;
        let parsed = self.backend.parse(&bytes)?;

        let page_count = parsed.page_count();
        let mut pages = Vec::with_capacity(page_count as usize);

        for number in 1..=page_count {
            let text = parsed.page_text(number)?;
            pages.push(PageText { number, text });
        }

        Ok(pages)
    }

    fn read_document(&self, path: &Path) -> Result<Vec<u8>, BackendError> {
        let file = File::open(path)?;
        let mut reader = BufReader::with_capacity(self.buffer_size, file);
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Ok(bytes)
    }
}
