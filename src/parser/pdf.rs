//! PDF parsing.

use std::sync::LazyLock;

use regex::Regex;

use super::ParseError;

static DIGIT_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]+").unwrap());

/// Accepted digit run lengths. Draw PDFs mix bond numbers with years, page
/// numbers and serial ids, so the scan is wider than the six digit bond
/// format and the matcher narrows it down afterwards.
const MIN_RUN: usize = 4;
const MAX_RUN: usize = 10;

/// Extract candidate number tokens from a PDF.
///
/// Every maximal digit run of 4 to 10 digits in the extracted text becomes
/// one token. Layout and non-numeric text are ignored.
pub(crate) fn extract_tokens(content: &[u8]) -> Result<Vec<String>, ParseError> {
    let text = pdf_extract::extract_text_from_mem(content)?;
    Ok(DIGIT_RUNS
        .find_iter(&text)
        .filter(|m| (MIN_RUN..=MAX_RUN).contains(&m.as_str().len()))
        .map(|m| m.as_str().to_string())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Build a one page PDF with the given text, enough for the extractor
    /// to find. Text must not contain parentheses or backslashes.
    fn minimal_pdf(text: &str) -> Vec<u8> {
        let content = format!("BT /F1 12 Tf 72 720 Td ({}) Tj ET", text);
        let objects = [
            "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
            "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
             /Resources << /Font << /F1 4 0 R >> >> /Contents 5 0 R >>"
                .to_string(),
            "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>".to_string(),
            format!(
                "<< /Length {} >>\nstream\n{}\nendstream",
                content.len(),
                content
            ),
        ];

        let mut pdf = String::from("%PDF-1.4\n");
        let mut offsets = Vec::new();
        for (i, obj) in objects.iter().enumerate() {
            offsets.push(pdf.len());
            pdf.push_str(&format!("{} 0 obj\n{}\nendobj\n", i + 1, obj));
        }
        let xref_at = pdf.len();
        pdf.push_str(&format!("xref\n0 {}\n", objects.len() + 1));
        pdf.push_str("0000000000 65535 f \n");
        for off in &offsets {
            pdf.push_str(&format!("{:010} 00000 n \n", off));
        }
        pdf.push_str(&format!(
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
            objects.len() + 1,
            xref_at
        ));
        pdf.into_bytes()
    }

    #[test]
    fn test_extracts_digit_runs_within_bounds() {
        let bytes = minimal_pdf("Draw 1101 of 2024 winners 123456 and 7890123456");
        let tokens = extract_tokens(&bytes).unwrap();
        assert!(tokens.contains(&"1101".to_string()));
        assert!(tokens.contains(&"2024".to_string()));
        assert!(tokens.contains(&"123456".to_string()));
        assert!(tokens.contains(&"7890123456".to_string()));
    }

    #[test]
    fn test_runs_outside_bounds_are_dropped() {
        let bytes = minimal_pdf("ref 123 serial 12345678901 end");
        let tokens = extract_tokens(&bytes).unwrap();
        assert!(tokens.is_empty());
    }

    #[test]
    fn test_runs_embedded_in_words_are_found() {
        let bytes = minimal_pdf("ticket S123456X sold");
        let tokens = extract_tokens(&bytes).unwrap();
        assert_eq!(tokens, vec!["123456"]);
    }

    #[test]
    fn test_corrupt_content_is_an_error() {
        let err = extract_tokens(b"not a pdf at all").unwrap_err();
        assert!(matches!(err, ParseError::Pdf(_)));
    }
}
