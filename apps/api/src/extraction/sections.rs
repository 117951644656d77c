//! Section Segmenter — partitions a resume's lines into labeled ranges.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::extraction::patterns::SECTION_PATTERNS;

/// The resume sections the segmenter can label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionLabel {
    Summary,
    Experience,
    Education,
    Skills,
    Projects,
}

impl SectionLabel {
    /// Canonical lowercase name. Also the tie-break key when several labels
    /// match the same line.
    pub fn name(self) -> &'static str {
        match self {
            SectionLabel::Summary => "summary",
            SectionLabel::Experience => "experience",
            SectionLabel::Education => "education",
            SectionLabel::Skills => "skills",
            SectionLabel::Projects => "projects",
        }
    }
}

/// Maps each detected label to its half-open line range `[start, end)`.
/// A label with no matching heading is simply absent.
pub type SectionMap = HashMap<SectionLabel, (usize, usize)>;

/// Scans every line against every section-heading pattern and derives line
/// ranges from the sorted heading occurrences: each occurrence owns the lines
/// up to the next occurrence, the last one owns the rest of the document.
///
/// When a label's pattern matches more than once, each occurrence still claims
/// an interval during range construction, and the final write for that label
/// wins. Labels matching the same line are ordered by label name, so the
/// alphabetically earlier ones collapse to empty ranges and the last owns the
/// shared line's interval (a heading like "Summary of Qualifications" hits
/// both the summary and education patterns; the summary keeps the text). See
/// DESIGN.md before changing either tie-break.
pub fn identify_sections(lines: &[&str]) -> SectionMap {
    let mut occurrences: Vec<(usize, SectionLabel)> = Vec::new();

    for (i, line) in lines.iter().enumerate() {
        for (label, pattern) in SECTION_PATTERNS.iter() {
            if pattern.is_match(line) {
                occurrences.push((i, *label));
            }
        }
    }

    occurrences.sort_by_key(|&(i, label)| (i, label.name()));

    let mut sections = SectionMap::new();
    for (pos, (start, label)) in occurrences.iter().enumerate() {
        let end = occurrences
            .get(pos + 1)
            .map(|(next_start, _)| *next_start)
            .unwrap_or(lines.len());
        sections.insert(*label, (*start, end));
    }

    sections
}
