//! Format sniffing and per-format text extraction

use once_cell::sync::Lazy;
use regex::Regex;

use contract_analyzer_core::SourceFormat;

use crate::ExtractionError;

/// Hard cap on accepted uploads, independent of the server's body limit
const MAX_DOCUMENT_BYTES: usize = 50 * 1024 * 1024;

/// Joins "word-\n continuation" splits left behind by PDF line wrapping.
/// Lowercase continuation only, so real compounds like "non-compete" survive.
static INLINE_HYPHEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\w+)-\s*[\r\n]+\s*([a-z]\w*)").unwrap());

/// Text extracted from an upload, with the format it was decoded as
#[derive(Debug, Clone)]
pub struct ExtractedDocument {
    pub text: String,
    pub format: SourceFormat,
}

/// Determine the source format of an upload
///
/// The client-supplied MIME tag wins when it names a supported format;
/// otherwise magic bytes decide (`%PDF`, ZIP `PK` for DOCX), and anything
/// else that decodes as UTF-8 is treated as plain text.
pub fn sniff_format(bytes: &[u8], mime: Option<&str>) -> Result<SourceFormat, ExtractionError> {
    if let Some(format) = mime.and_then(SourceFormat::from_mime) {
        return Ok(format);
    }

    if bytes.starts_with(b"%PDF") {
        return Ok(SourceFormat::Pdf);
    }

    if bytes.starts_with(b"PK") {
        return Ok(SourceFormat::Docx);
    }

    if std::str::from_utf8(bytes).is_ok() {
        return Ok(SourceFormat::Txt);
    }

    Err(ExtractionError::UnsupportedFormat)
}

/// Extract text from uploaded bytes, sniffing the format first
pub fn extract(bytes: &[u8], mime: Option<&str>) -> Result<ExtractedDocument, ExtractionError> {
    if bytes.is_empty() {
        return Err(ExtractionError::EmptyUpload);
    }

    if bytes.len() > MAX_DOCUMENT_BYTES {
        return Err(ExtractionError::TooLarge {
            size: bytes.len(),
            max: MAX_DOCUMENT_BYTES,
        });
    }

    let format = sniff_format(bytes, mime)?;
    let text = extract_text(bytes, format)?;

    tracing::debug!(
        format = %format,
        bytes = bytes.len(),
        chars = text.chars().count(),
        "Extracted document text"
    );

    Ok(ExtractedDocument { text, format })
}

/// Extract text from bytes already known to be the given format
pub fn extract_text(bytes: &[u8], format: SourceFormat) -> Result<String, ExtractionError> {
    match format {
        SourceFormat::Pdf => extract_pdf(bytes),
        SourceFormat::Docx => extract_docx(bytes),
        SourceFormat::Txt => extract_txt(bytes),
    }
}

fn extract_pdf(bytes: &[u8]) -> Result<String, ExtractionError> {
    let pages = pdf_extract::extract_text_from_mem_by_pages(bytes)
        .map_err(|e| ExtractionError::Pdf(format!("{:?}", e)))?;

    let mut text = String::new();
    for page in &pages {
        let page = strip_trailing_page_number(page);
        let page = page.trim();
        if page.is_empty() {
            continue;
        }
        if !text.is_empty() {
            text.push('\n');
        }
        text.push_str(page);
    }

    Ok(INLINE_HYPHEN.replace_all(&text, "$1$2").into_owned())
}

fn extract_docx(bytes: &[u8]) -> Result<String, ExtractionError> {
    docx_lite::extract_text_from_bytes(bytes).map_err(|e| ExtractionError::Docx(e.to_string()))
}

fn extract_txt(bytes: &[u8]) -> Result<String, ExtractionError> {
    std::str::from_utf8(bytes)
        .map(str::to_string)
        .map_err(|e| ExtractionError::Encoding(e.to_string()))
}

/// Drop a page-footer line that is nothing but a number
fn strip_trailing_page_number(page: &str) -> String {
    let mut lines: Vec<&str> = page.lines().collect();
    while matches!(lines.last(), Some(l) if l.trim().is_empty()) {
        lines.pop();
    }
    if let Some(last) = lines.last() {
        let trimmed = last.trim();
        if !trimmed.is_empty() && trimmed.chars().all(|c| c.is_ascii_digit()) {
            lines.pop();
        }
    }
    lines.join("\n")
}
