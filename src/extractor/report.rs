use crate::extractor::ExtractionOutcome;
use crate::scanner::DocumentFile;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Serialize)]
pub struct DocumentReport {
    pub filename: String,
    pub output_path: PathBuf,
    pub size: u64,
    pub pages: usize,
    pub error: Option<String>,
}

/// Summary of one run over a directory.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub directory: PathBuf,
    pub backend: String,
    pub documents: Vec<DocumentReport>,
    pub started_at: DateTime<Utc>,
    pub duration: Duration,
    #[serde(skip)]
    start_instant: Instant,
}

impl RunReport {
    pub fn new(directory: &Path, backend: &str) -> Self {
        Self {
            directory: directory.to_path_buf(),
            backend: backend.to_string(),
            documents: Vec::new(),
            started_at: Utc::now(),
            duration: Duration::ZERO,
            start_instant: Instant::now(),
        }
    }

    pub fn record(&mut self, document: &DocumentFile, output_path: PathBuf, outcome: &ExtractionOutcome) {
        self.documents.push(DocumentReport {
            filename: document.filename.clone(),
            output_path,
            size: document.size,
            pages: outcome.page_count(),
            error: outcome.error_message().map(str::to_string),
        });
    }

    pub fn finish(&mut self) {
        self.duration = self.start_instant.elapsed();
    }

    pub fn documents_processed(&self) -> usize {
        self.documents.len()
    }

    pub fn failures(&self) -> impl Iterator<Item = &DocumentReport> {
        self.documents.iter().filter(|d| d.error.is_some())
    }

    pub fn failure_count(&self) -> usize {
        self.failures().count()
    }

    pub fn total_pages(&self) -> usize {
        self.documents.iter().map(|d| d.pages).sum()
    }

    pub fn elapsed(&self) -> Duration {
        if self.duration.is_zero() {
            self.start_instant.elapsed()
        } else {
            self.duration
        }
    }
}
