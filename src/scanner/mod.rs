pub mod document_scanner;
pub mod file_filter;

pub use document_scanner::{DocumentFile, DocumentScanner};
pub use file_filter::FileFilter;
