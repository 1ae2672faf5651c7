pub mod backend;
pub mod output_writer;
pub mod report;
pub mod text_extractor;

pub use backend::{PdfBackend, PdfPages};
pub use output_writer::OutputWriter;
pub use report::{DocumentReport, RunReport};
pub use text_extractor::{ExtractionOutcome, PageText, TextExtractor};
