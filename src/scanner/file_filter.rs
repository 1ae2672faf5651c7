use crate::config::ScanConfig;
use regex::Regex;
use std::path::Path;

pub struct FileFilter {
    pdf_extensions: Vec<String>,
    exclude_patterns: Vec<Regex>,
}

impl FileFilter {
    pub fn new(config: &ScanConfig) -> Self {
        let exclude_patterns = config
            .exclude_patterns
            .iter()
            .filter_map(|pattern| match Regex::new(pattern) {
                Ok(regex) => Some(regex),
                Err(err) => {
                    log::warn!("ignoring invalid exclude pattern {:?}: {}", pattern, err);
                    None
                }
            })
            .collect();

        let pdf_extensions = config
            .extensions
            .iter()
            .map(|ext| ext.trim().trim_start_matches('.').to_string())
            .filter(|ext| !ext.is_empty())
            .collect();

        Self {
            pdf_extensions,
            exclude_patterns,
        }
    }

    /// Extensions match exactly: `a.pdf` and `a.PDF` would share an output
    /// file, so only the configured spelling is read.
    pub fn is_pdf_file(&self, path: &Path) -> bool {
        let matches_extension = path
            .extension()
            .and_then(|s| s.to_str())
            .is_some_and(|ext| self.pdf_extensions.iter().any(|known| known == ext));

        if !matches_extension {
            return false;
        }

        !self.is_excluded(path)
    }

    fn is_excluded(&self, path: &Path) -> bool {
        let Some(filename) = path.file_name().and_then(|s| s.to_str()) else {
            return false;
        };

        self.exclude_patterns
            .iter()
            .any(|pattern| pattern.is_match(filename))
    }
}
