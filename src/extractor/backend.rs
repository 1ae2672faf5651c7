use crate::error::{BackendError, PdfDocsError, Result};

/// Pages of a parsed PDF, addressed by 1-based page number in physical order.
pub trait PdfPages {
    fn page_count(&self) -> u32;

    /// Plain text of one page. An empty string is a valid result for pages
    /// without recoverable text.
    fn page_text(&self, page_number: u32) -> std::result::Result<String, BackendError>;
}

/// Text extraction capability supplied by a third-party PDF library.
///
/// The runner only iterates and formats; everything about the PDF object
/// model lives behind this trait.
pub trait PdfBackend {
    fn name(&self) -> &'static str;

    fn parse(&self, bytes: &[u8]) -> std::result::Result<Box<dyn PdfPages>, BackendError>;
}

/// Names of the backends compiled into this build.
pub fn available_backends() -> Vec<&'static str> {
    #[allow(unused_mut)]
    let mut backends = Vec::new();
    #[cfg(feature = "lopdf")]
    backends.push(lopdf_backend::NAME);
    backends
}

/// Looks up a backend by name. Fails when the backend is unknown or was not
/// compiled in; callers resolve once, before touching any document.
pub fn resolve(name: &str) -> Result<Box<dyn PdfBackend>> {
    match name.trim().to_lowercase().as_str() {
        #[cfg(feature = "lopdf")]
        lopdf_backend::NAME => Ok(Box::new(lopdf_backend::LopdfBackend::new())),
        other => Err(PdfDocsError::BackendUnavailable {
            name: other.to_string(),
        }),
    }
}

#[cfg(feature = "lopdf")]
pub use lopdf_backend::LopdfBackend;

#[cfg(feature = "lopdf")]
mod lopdf_backend {
    use super::{PdfBackend, PdfPages};
    use crate::error::BackendError;
    use lopdf::Document;

    pub const NAME: &str = "lopdf";

    #[derive(Debug, Default)]
    pub struct LopdfBackend;

    impl LopdfBackend {
        pub fn new() -> Self {
            Self
        }
    }

    impl PdfBackend for LopdfBackend {
        fn name(&self) -> &'static str {
            NAME
        }

        fn parse(&self, bytes: &[u8]) -> Result<Box<dyn PdfPages>, BackendError> {
            let document =
                Document::load_mem(bytes).map_err(|e| BackendError::Parse(e.to_string()))?;

            // get_pages is keyed by page number, so iteration is physical order.
            let page_numbers = document.get_pages().into_keys().collect();

            Ok(Box::new(LopdfPages {
                document,
                page_numbers,
            }))
        }
    }

    struct LopdfPages {
        document: Document,
        page_numbers: Vec<u32>,
    }

    impl PdfPages for LopdfPages {
        fn page_count(&self) -> u32 {
            self.page_numbers.len() as u32
        }

        fn page_text(&self, page_number: u32) -> Result<String, BackendError> {
            let index = page_number
                .checked_sub(1)
                .map(|i| i as usize)
                .filter(|i| *i < self.page_numbers.len())
                .ok_or_else(|| BackendError::Page {
                    page: page_number,
                    message: format!("out of range (document has {} pages)", self.page_numbers.len()),
                })?;

            self.document
                .extract_text(&[self.page_numbers[index]])
                .map_err(|e| BackendError::Page {
                    page: page_number,
                    message: e.to_string(),
                })
        }
    }
}
