//! Excel workbook parsing.

use std::io::Cursor;

use calamine::{open_workbook_auto_from_rs, Reader};

use super::ParseError;

/// Flatten the first worksheet into cell tokens, row by row.
///
/// Cell values are rendered as display text and trimmed. Empty cells yield
/// empty strings which are kept here; normalization discards them later.
/// A workbook without any worksheet is treated like an unreadable file.
pub(crate) fn extract_tokens(content: &[u8]) -> Result<Vec<String>, ParseError> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(content))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or(ParseError::Spreadsheet(calamine::Error::Msg(
            "workbook contains no worksheets",
        )))??;

    let (rows, cols) = range.get_size();
    let mut tokens = Vec::with_capacity(rows * cols);
    for row in range.rows() {
        for cell in row {
            tokens.push(cell.to_string().trim().to_string());
        }
    }
    Ok(tokens)
}
