//! Statement text sources: something that turns a file into pages of text

use std::fs;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

use tally_core::DocumentError;

/// Page separator in already extracted text files
pub const PAGE_BREAK: char = '\x0c';

/// Produces the raw text of each page of a statement, in page order.
pub trait TextSource {
    fn pages(&self, path: &Path) -> Result<Vec<String>, DocumentError>;
}

fn split_pages(text: &str) -> Vec<String> {
    text.split(PAGE_BREAK).map(str::to_string).collect()
}

/// Extracts text from PDF statements, one string per PDF page.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfTextSource;

impl TextSource for PdfTextSource {
    fn pages(&self, path: &Path) -> Result<Vec<String>, DocumentError> {
        let bytes = fs::read(path).map_err(|source| DocumentError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        // pdf-extract panics on some malformed files instead of returning Err
        let extracted = panic::catch_unwind(AssertUnwindSafe(|| {
            pdf_extract::extract_text_from_mem_by_pages(&bytes)
        }));

        match extracted {
            Ok(Ok(pages)) => Ok(pages),
            Ok(Err(e)) => Err(DocumentError::Extract {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }),
            Err(_) => Err(DocumentError::Extract {
                path: path.to_path_buf(),
                reason: "PDF parser panicked".to_string(),
            }),
        }
    }
}

/// Reads text that was already extracted, one statement line per line.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextSource;

impl TextSource for PlainTextSource {
    fn pages(&self, path: &Path) -> Result<Vec<String>, DocumentError> {
        let text = fs::read_to_string(path).map_err(|source| DocumentError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(split_pages(&text))
    }
}
