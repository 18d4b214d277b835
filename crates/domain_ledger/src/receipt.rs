//! Receipt documents
//!
//! A [`ReceiptRenderer`] lays a [`BillSummary`] out as numbered pages and a
//! [`ReceiptExporter`] writes the result to a temporary file. The file lives
//! only as long as the returned [`ExportedReceipt`] guard.

use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::bill::BillSummary;
use crate::error::LedgerError;

/// Title printed at the top of every page
pub const RECEIPT_TITLE: &str = "Bill Receipt";

/// Default number of body lines per page
pub const DEFAULT_LINES_PER_PAGE: usize = 40;

const PAGE_BREAK: char = '\u{000C}';

/// One page of a rendered receipt
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReceiptPage {
    /// 1-based page number
    pub number: usize,
    /// Body lines, without header and footer
    pub lines: Vec<String>,
}

impl ReceiptPage {
    pub fn header(&self) -> &'static str {
        RECEIPT_TITLE
    }

    pub fn footer(&self) -> String {
        format!("Page {}", self.number)
    }
}

/// A paginated receipt
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReceiptDocument {
    pub participant: String,
    pub pages: Vec<ReceiptPage>,
}

impl ReceiptDocument {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Renders the document as plain text, one form feed between pages
    pub fn to_text(&self) -> String {
        let pages: Vec<String> = self
            .pages
            .iter()
            .map(|page| {
                let mut out = String::new();
                out.push_str(page.header());
                out.push_str("\n\n");
                for line in &page.lines {
                    out.push_str(line);
                    out.push('\n');
                }
                out.push('\n');
                out.push_str(&page.footer());
                out.push('\n');
                out
            })
            .collect();

        pages.join(&PAGE_BREAK.to_string())
    }
}

/// Lays bills out as pages
#[derive(Debug, Clone, Copy)]
pub struct ReceiptRenderer {
    lines_per_page: usize,
}

impl Default for ReceiptRenderer {
    fn default() -> Self {
        Self {
            lines_per_page: DEFAULT_LINES_PER_PAGE,
        }
    }
}

impl ReceiptRenderer {
    /// Creates a renderer; `lines_per_page` is clamped to at least 1
    pub fn new(lines_per_page: usize) -> Self {
        Self {
            lines_per_page: lines_per_page.max(1),
        }
    }

    pub fn lines_per_page(&self) -> usize {
        self.lines_per_page
    }

    /// Produces the receipt body for a bill and splits it into pages
    pub fn render(&self, bill: &BillSummary) -> ReceiptDocument {
        let mut body = vec![
            format!("Bill for: {}", bill.participant),
            format!("Total Paid: {}", bill.total_paid.format_amount()),
            format!("Total Owed: {}", bill.total_owed.format_amount()),
            format!("Total Receivable: {}", bill.total_receivable.format_amount()),
            "Details:".to_string(),
        ];
        body.extend(bill.detail_lines.iter().map(|line| format!("- {}", line)));

        let pages = body
            .chunks(self.lines_per_page)
            .enumerate()
            .map(|(i, chunk)| ReceiptPage {
                number: i + 1,
                lines: chunk.to_vec(),
            })
            .collect();

        ReceiptDocument {
            participant: bill.participant.name().to_string(),
            pages,
        }
    }
}

/// Writes receipts to scoped temporary files
#[derive(Debug, Clone, Default)]
pub struct ReceiptExporter {
    dir: Option<PathBuf>,
}

impl ReceiptExporter {
    /// Exports into the OS temp directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Exports into `dir`
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: Some(dir.into()),
        }
    }

    /// Writes the document and returns a guard owning the file
    ///
    /// # Errors
    ///
    /// Returns `Export` if the file cannot be created or written.
    pub fn export(&self, document: &ReceiptDocument) -> Result<ExportedReceipt, LedgerError> {
        let stem = format!("{}_bill", sanitize(&document.participant));

        let mut builder = tempfile::Builder::new();
        builder.prefix(&stem).suffix(".txt");
        let mut file = match &self.dir {
            Some(dir) => builder.tempfile_in(dir)?,
            None => builder.tempfile()?,
        };

        file.write_all(document.to_text().as_bytes())?;
        file.flush()?;

        info!(
            participant = %document.participant,
            pages = document.page_count(),
            path = %file.path().display(),
            "Receipt exported"
        );

        Ok(ExportedReceipt {
            file,
            file_name: format!("{}.txt", stem),
        })
    }
}

/// A receipt on disk, deleted when this value is dropped
///
/// Deletion happens on every exit path, including when reading the contents
/// back fails.
#[derive(Debug)]
pub struct ExportedReceipt {
    file: NamedTempFile,
    file_name: String,
}

impl ExportedReceipt {
    /// Location of the temporary file
    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Suggested download name, e.g. `Alice_bill.txt`
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Reads the file contents without releasing it
    pub fn read_bytes(&self) -> Result<Vec<u8>, LedgerError> {
        Ok(std::fs::read(self.file.path())?)
    }

    /// Reads the file contents and releases it
    pub fn into_bytes(self) -> Result<Vec<u8>, LedgerError> {
        self.read_bytes()
    }
}

impl Drop for ExportedReceipt {
    fn drop(&mut self) {
        debug!(path = %self.file.path().display(), "Releasing receipt artifact");
    }
}

fn sanitize(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect()
}
