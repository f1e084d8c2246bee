//! File parsing: turns an uploaded file into raw token strings.
//!
//! The format is chosen by file extension alone, never by content sniffing.
//! Each backend returns tokens as found in the file; normalization into
//! bond numbers happens later in [`crate::matcher`].

mod pdf;
mod spreadsheet;
mod text;

use std::path::Path;

use thiserror::Error;

use crate::models::UploadedFile;

/// Errors from format detection and file parsing.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Both files are required")]
    MissingInput,

    #[error("Unsupported file type: {0}")]
    UnsupportedFileType(String),

    #[error("Spreadsheet read failed: {0}")]
    Spreadsheet(#[from] calamine::Error),

    #[error("PDF text extraction failed: {0}")]
    Pdf(#[from] pdf_extract::OutputError),
}

/// Supported input formats, keyed by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    /// Excel workbook (`.xlsx` or `.xls`). Only the first worksheet is read.
    Spreadsheet,
    /// Plain text (`.txt`), split on whitespace and commas.
    PlainText,
    /// PDF (`.pdf`), scanned for digit runs in the extracted text.
    Pdf,
}

impl FileFormat {
    /// Detect the format from a filename's extension, case-insensitively.
    ///
    /// Unknown extensions are an error carrying the offending extension with
    /// its leading dot. A filename without any extension reports the whole
    /// filename instead.
    pub fn from_filename(filename: &str) -> Result<Self, ParseError> {
        let ext = Path::new(filename)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match ext.as_deref() {
            Some("xlsx") | Some("xls") => Ok(Self::Spreadsheet),
            Some("txt") => Ok(Self::PlainText),
            Some("pdf") => Ok(Self::Pdf),
            Some(other) => Err(ParseError::UnsupportedFileType(format!(".{}", other))),
            None => Err(ParseError::UnsupportedFileType(filename.to_string())),
        }
    }
}

/// Parse a file into raw tokens according to its extension.
pub fn parse_bond_file(file: &UploadedFile) -> Result<Vec<String>, ParseError> {
    match FileFormat::from_filename(&file.filename)? {
        FileFormat::Spreadsheet => spreadsheet::extract_tokens(&file.content),
        FileFormat::PlainText => Ok(text::extract_tokens(&file.content)),
        FileFormat::Pdf => pdf::extract_tokens(&file.content),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_known_extensions() {
        assert_eq!(
            FileFormat::from_filename("bonds.xlsx").unwrap(),
            FileFormat::Spreadsheet
        );
        assert_eq!(
            FileFormat::from_filename("bonds.xls").unwrap(),
            FileFormat::Spreadsheet
        );
        assert_eq!(
            FileFormat::from_filename("bonds.txt").unwrap(),
            FileFormat::PlainText
        );
        assert_eq!(
            FileFormat::from_filename("draw.pdf").unwrap(),
            FileFormat::Pdf
        );
    }

    #[test]
    fn test_format_extension_is_case_insensitive() {
        assert_eq!(
            FileFormat::from_filename("BONDS.XLSX").unwrap(),
            FileFormat::Spreadsheet
        );
        assert_eq!(
            FileFormat::from_filename("Draw.PDF").unwrap(),
            FileFormat::Pdf
        );
    }

    #[test]
    fn test_format_unsupported_extension() {
        let err = FileFormat::from_filename("report.docx").unwrap_err();
        assert_eq!(err.to_string(), "Unsupported file type: .docx");
    }

    #[test]
    fn test_format_no_extension() {
        let err = FileFormat::from_filename("bonds").unwrap_err();
        assert_eq!(err.to_string(), "Unsupported file type: bonds");
    }

    #[test]
    fn test_parse_dispatches_on_extension() {
        let file = UploadedFile::new("list.txt", b"111111 222222".to_vec());
        let tokens = parse_bond_file(&file).unwrap();
        assert_eq!(tokens, vec!["111111", "222222"]);
    }

    #[test]
    fn test_parse_rejects_unknown_extension() {
        let file = UploadedFile::new("list.csv", b"111111".to_vec());
        let err = parse_bond_file(&file).unwrap_err();
        assert!(matches!(err, ParseError::UnsupportedFileType(_)));
        assert_eq!(err.to_string(), "Unsupported file type: .csv");
    }
}
