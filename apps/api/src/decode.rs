//! Document decoding — turns uploaded PDF bytes into a linear text stream.
//!
//! This is the boundary with the text-extraction collaborator: failure here
//! means the bytes could not be decoded at all. An empty text stream is NOT a
//! failure — scanned image-only PDFs decode successfully to nothing and the
//! pipeline degrades to an all-empty result downstream.

use crate::errors::AppError;

/// Extracts the text layer from a PDF. No re-decoding strategies are
/// attempted; a corrupt or unsupported document is surfaced as a single
/// `Decode` failure.
pub fn decode_pdf(bytes: &[u8]) -> Result<String, AppError> {
    pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| AppError::Decode(format!("could not extract text from PDF: {e}")))
}
