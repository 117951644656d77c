//! Entity Recognition — pluggable, trait-based recognizer for person names
//! and locations.
//!
//! Default: `LexicalRecognizer` (pure-Rust, fast, deterministic, fully
//! testable). Any equivalent NLP backend can be swapped in behind the trait
//! without touching extraction logic.
//!
//! `AppState` holds an `Arc<dyn EntityRecognizer>`, constructed once at
//! startup. Implementations must be safe to call concurrently: inference
//! only, no interior mutation.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::AppError;

/// Entity categories the extraction pipeline consumes. Recognizer backends
/// that produce richer taxonomies map down to these two and drop the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    PersonName,
    Location,
}

/// A substring of the input labeled with a semantic category.
#[derive(Debug, Clone, PartialEq)]
pub struct EntitySpan {
    pub text: String,
    pub kind: EntityKind,
}

/// The entity recognizer trait. Implement this to swap NLP backends without
/// touching the extractors.
///
/// Spans must be returned in document order — consumers take the first span
/// of each kind.
pub trait EntityRecognizer: Send + Sync {
    fn recognize(&self, text: &str) -> Result<Vec<EntitySpan>, AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// LexicalRecognizer — default backend
// ────────────────────────────────────────────────────────────────────────────

/// A run of 2–4 capitalized words, the usual shape of a name at the top of
/// a resume.
static NAME_RUN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Z][a-z]+(?:\s+[A-Z][a-z]+){1,3}\b").expect("name pattern must compile")
});

/// "City, ST" with a two-letter state/region code.
static CITY_REGION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b([A-Z][a-zA-Z]+(?:\s[A-Z][a-zA-Z]+)*),\s*([A-Z]{2})\b")
        .expect("location pattern must compile")
});

/// Well-known city names recognized even without a region suffix.
static CITY_GAZETTEER: &[&str] = &[
    "New York",
    "San Francisco",
    "Los Angeles",
    "Seattle",
    "Austin",
    "Boston",
    "Chicago",
    "Denver",
    "Atlanta",
    "Toronto",
    "Vancouver",
    "London",
    "Dublin",
    "Berlin",
    "Munich",
    "Paris",
    "Amsterdam",
    "Zurich",
    "Bangalore",
    "Singapore",
    "Sydney",
    "Tokyo",
];

/// Deterministic lexical recognizer. Walks the window line by line, emitting
/// capitalized-run name candidates (skipping lines that carry digits or an
/// email, which are contact lines, not names) and location candidates from
/// the "City, ST" shape or the city gazetteer.
pub struct LexicalRecognizer;

impl EntityRecognizer for LexicalRecognizer {
    fn recognize(&self, text: &str) -> Result<Vec<EntitySpan>, AppError> {
        let mut spans = Vec::new();

        for line in text.lines() {
            let contact_line = line.contains('@') || line.chars().any(|c| c.is_ascii_digit());
            if !contact_line {
                for m in NAME_RUN_RE.find_iter(line) {
                    spans.push(EntitySpan {
                        text: m.as_str().to_string(),
                        kind: EntityKind::PersonName,
                    });
                }
            }

            if let Some(caps) = CITY_REGION_RE.captures(line) {
                if let Some(city) = caps.get(1) {
                    spans.push(EntitySpan {
                        text: city.as_str().to_string(),
                        kind: EntityKind::Location,
                    });
                }
            } else if let Some(city) = CITY_GAZETTEER.iter().find(|c| line.contains(*c)) {
                spans.push(EntitySpan {
                    text: (*city).to_string(),
                    kind: EntityKind::Location,
                });
            }
        }

        Ok(spans)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Test support
// ────────────────────────────────────────────────────────────────────────────

/// Recognizer returning a fixed span list, for exercising extractors in
/// isolation from the lexical heuristics.
#[cfg(test)]
pub struct StaticRecognizer(pub Vec<EntitySpan>);

#[cfg(test)]
impl EntityRecognizer for StaticRecognizer {
    fn recognize(&self, _text: &str) -> Result<Vec<EntitySpan>, AppError> {
        Ok(self.0.clone())
    }
}
