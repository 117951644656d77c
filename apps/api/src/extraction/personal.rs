//! Personal-Info Extractor — name, contact details, and links.

use crate::errors::AppError;
use crate::extraction::models::PersonalInfo;
use crate::extraction::patterns::{EMAIL_RE, LINKEDIN_RE, PHONE_RE, URL_RE};
use crate::ner::{EntityKind, EntityRecognizer};

/// Name and location are only searched in the document prologue. Body text is
/// full of company names and office locations; the owner's details sit at the
/// top.
const PROLOGUE_CHARS: usize = 1000;

/// Extracts personal information from the document text.
///
/// Name and location come from the entity recognizer over the prologue window;
/// the first span of each kind wins and is never overwritten. Email, phone,
/// LinkedIn handle, and website are first-match regex scans over the entire
/// document. Every field independently defaults to empty — no match is not an
/// error.
pub fn extract_personal_info(
    text: &str,
    recognizer: &dyn EntityRecognizer,
) -> Result<PersonalInfo, AppError> {
    let mut info = PersonalInfo::default();

    for span in recognizer.recognize(prologue(text))? {
        match span.kind {
            EntityKind::PersonName if info.name.is_empty() => info.name = span.text,
            EntityKind::Location if info.location.is_empty() => info.location = span.text,
            _ => {}
        }
    }

    if let Some(m) = EMAIL_RE.find(text) {
        info.email = m.as_str().to_string();
    }

    if let Some(m) = PHONE_RE.find(text) {
        info.phone = m.as_str().to_string();
    }

    if let Some(m) = LINKEDIN_RE.find(text) {
        info.linkedin = m.as_str().to_string();
    }

    // First URL-shaped match that is not the LinkedIn profile.
    if let Some(m) = URL_RE
        .find_iter(text)
        .find(|m| !m.as_str().to_lowercase().contains("linkedin"))
    {
        info.website = m.as_str().to_string();
    }

    Ok(info)
}

/// First `PROLOGUE_CHARS` characters of the text, on a char boundary.
fn prologue(text: &str) -> &str {
    match text.char_indices().nth(PROLOGUE_CHARS) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
