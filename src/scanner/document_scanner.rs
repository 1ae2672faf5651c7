use crate::config::ScanConfig;
use crate::error::{PdfDocsError, Result};
use crate::scanner::file_filter::FileFilter;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A PDF file found by the scanner.
#[derive(Debug, Clone)]
pub struct DocumentFile {
    pub source_path: PathBuf,
    pub filename: String,
    /// File name without its extension, used to name the output file.
    pub stem: String,
    pub size: u64,
}

impl DocumentFile {
    pub fn new(source_path: PathBuf, size: u64) -> Self {
        let filename = source_path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        let stem = source_path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();

        Self {
            source_path,
            filename,
            stem,
            size,
        }
    }

    pub fn directory(&self) -> &Path {
        self.source_path.parent().unwrap_or_else(|| Path::new("."))
    }

    pub fn format_size(&self) -> String {
        format_bytes(self.size)
    }
}

pub struct DocumentScanner {
    filter: FileFilter,
}

impl DocumentScanner {
    pub fn new(config: &ScanConfig) -> Self {
        Self {
            filter: FileFilter::new(config),
        }
    }

    /// Lists the PDF files directly inside `directory`.
    ///
    /// Documents come back in directory-listing order; no sorting is applied.
    /// An empty directory yields an empty list rather than an error.
    pub fn discover<P: AsRef<Path>>(&self, directory: P) -> Result<Vec<DocumentFile>> {
        let root_path = directory.as_ref();

        if !root_path.exists() {
            return Err(PdfDocsError::InvalidPath {
                path: format!("{} does not exist", root_path.display()),
            });
        }

        if !root_path.is_dir() {
            return Err(PdfDocsError::InvalidPath {
                path: format!("{} is not a directory", root_path.display()),
            });
        }

        let mut documents = Vec::new();

        let walker = WalkDir::new(root_path)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true);

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    // A dangling link is still a document: reading it fails
                    // later and the failure lands in its output file.
                    match err
                        .path()
                        .filter(|path| is_dangling_link(path) && self.filter.is_pdf_file(path))
                    {
                        Some(path) => {
                            log::warn!("{} points to a missing file", path.display());
                            documents.push(DocumentFile::new(path.to_path_buf(), 0));
                        }
                        None => log::warn!("skipping unreadable entry: {}", err),
                    }
                    continue;
                }
            };

            if !entry.file_type().is_file() || !self.filter.is_pdf_file(entry.path()) {
                continue;
            }

            let size = match entry.metadata() {
                Ok(metadata) => metadata.len(),
                Err(err) => {
                    log::warn!("cannot stat {}: {}", entry.path().display(), err);
                    0
                }
            };

            log::debug!("discovered {}", entry.path().display());
            documents.push(DocumentFile::new(entry.path().to_path_buf(), size));
        }

        Ok(documents)
    }
}

fn is_dangling_link(path: &Path) -> bool {
    path.symlink_metadata()
        .is_ok_and(|metadata| metadata.file_type().is_symlink())
        && !path.exists()
}

fn format_bytes(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB"];
    let mut size = bytes as f64;
    let mut unit_index = 0;

    while size >= 1024.0 && unit_index < UNITS.len() - 1 {
        size /= 1024.0;
        unit_index += 1;
    }

    if unit_index == 0 {
        format!("{} {}", bytes, UNITS[unit_index])
    } else {
        format!("{:.1} {}", size, UNITS[unit_index])
    }
}
