use crate::config::OutputConfig;
use crate::error::{PdfDocsError, Result};
use crate::scanner::DocumentFile;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

/// Writes extracted text next to its source document.
pub struct OutputWriter {
    suffix: String,
    extension: String,
    buffer_size: usize,
}

impl OutputWriter {
    pub fn new(config: &OutputConfig) -> Self {
        Self {
            suffix: config.suffix.clone(),
            extension: config.extension.trim_start_matches('.').to_string(),
            buffer_size: 64 * 1024,
        }
    }

    pub fn output_path_for(&self, document: &DocumentFile) -> PathBuf {
        document
            .directory()
            .join(format!("{}{}.{}", document.stem, self.suffix, self.extension))
    }

    /// Creates or truncates the output file and writes `text` as UTF-8.
    pub fn write(&self, document: &DocumentFile, text: &str) -> Result<PathBuf> {
        let path = self.output_path_for(document);

        let write_err = |source: std::io::Error| PdfDocsError::OutputWrite {
            path: path.clone(),
            source,
        };

        let file = File::create(&path).map_err(write_err)?;
        let mut writer = BufWriter::with_capacity(self.buffer_size, file);
        writer.write_all(text.as_bytes()).map_err(write_err)?;
        writer.flush().map_err(write_err)?;

        log::debug!("wrote {} bytes to {}", text.len(), path.display());
        Ok(path)
    }
}
