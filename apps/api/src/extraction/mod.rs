//! Resume-document extraction pipeline.
//!
//! Takes the decoded linear text of an uploaded resume and reconstructs a
//! structured record: personal details, summary, skills, work history,
//! education, projects. Layered heuristics — entity recognition, compiled
//! patterns, positional rules — over free-form text with no schema to rely
//! on. Best-effort by contract: ambiguous input degrades to empty or partial
//! fields, and only unexpected internal faults surface as errors.
//!
//! The pipeline is pure with respect to its input: no I/O, no shared mutable
//! state, safe to run concurrently for independent documents.

pub mod entries;
pub mod models;
pub mod patterns;
pub mod personal;
pub mod sections;
pub mod skills;

use crate::errors::AppError;
use crate::ner::EntityRecognizer;

use entries::{parse_education, parse_projects, parse_work_experience};
use models::ResumeExtraction;
use sections::{identify_sections, SectionLabel, SectionMap};

/// Runs the full extraction over one document's decoded text.
///
/// Empty or whitespace-only text is a valid degenerate input (an image-only
/// scan with no text layer) and yields the all-empty aggregate, not an error.
/// Inner extractor faults propagate as a single pipeline-level failure —
/// extraction is all-or-nothing at this boundary.
pub fn extract_resume(
    text: &str,
    recognizer: &dyn EntityRecognizer,
) -> Result<ResumeExtraction, AppError> {
    if text.trim().is_empty() {
        return Ok(ResumeExtraction::default());
    }

    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    let sections = identify_sections(&lines);

    let personal_info = personal::extract_personal_info(text, recognizer)?;
    let summary = extract_summary(&lines, &sections);
    let skills = skills::extract_skills(&lines, &sections);

    let work_experience = sections
        .get(&SectionLabel::Experience)
        .map(|range| parse_work_experience(&lines, *range))
        .unwrap_or_default();

    let education = sections
        .get(&SectionLabel::Education)
        .map(|range| parse_education(&lines, *range))
        .unwrap_or_default();

    let projects = sections
        .get(&SectionLabel::Projects)
        .map(|range| parse_projects(&lines, *range))
        .unwrap_or_default();

    Ok(ResumeExtraction {
        personal_info,
        summary,
        skills,
        work_experience,
        education,
        projects,
    })
}

/// Joins the summary section's lines and strips the heading keyword itself.
fn extract_summary(lines: &[&str], sections: &SectionMap) -> String {
    match sections.get(&SectionLabel::Summary) {
        Some(&(start, end)) => {
            let joined = lines[start..end].join(" ");
            patterns::section_pattern(SectionLabel::Summary)
                .replace_all(&joined, "")
                .trim()
                .to_string()
        }
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ner::LexicalRecognizer;

    const SAMPLE: &str = "John Smith\njohn.smith@example.com\n555-123-4567\n\nEXPERIENCE\nAcme Corp, Senior Engineer 2019 - Present\nBuilt the thing.\n\nEDUCATION\nState University, BS Computer Science 2015 - 2019\n";

    #[test]
    fn test_empty_input_yields_default_aggregate() {
        let result = extract_resume("", &LexicalRecognizer).unwrap();
        assert_eq!(result, ResumeExtraction::default());
    }

    #[test]
    fn test_whitespace_only_input_is_degenerate_not_an_error() {
        let result = extract_resume("  \n\t \n", &LexicalRecognizer).unwrap();
        assert_eq!(result, ResumeExtraction::default());
    }

    #[test]
    fn test_sample_resume_end_to_end() {
        let result = extract_resume(SAMPLE, &LexicalRecognizer).unwrap();

        assert_eq!(result.personal_info.name, "John Smith");
        assert_eq!(result.personal_info.email, "john.smith@example.com");
        assert_eq!(result.personal_info.phone, "555-123-4567");

        assert_eq!(result.work_experience.len(), 1);
        let job = &result.work_experience[0];
        assert_eq!(job.company, "Acme Corp");
        assert_eq!(job.position, "Senior Engineer");
        assert_eq!(job.start_date, "2019");
        assert_eq!(job.end_date, "Present");
        assert_eq!(job.description, "Built the thing.");

        assert_eq!(result.education.len(), 1);
        let school = &result.education[0];
        assert_eq!(school.institution, "State University");
        assert_eq!(school.start_date, "2015");
        assert_eq!(school.end_date, "2019");

        assert!(result.projects.is_empty());
        assert!(result.summary.is_empty());
    }

    #[test]
    fn test_extraction_is_deterministic() {
        let first = extract_resume(SAMPLE, &LexicalRecognizer).unwrap();
        let second = extract_resume(SAMPLE, &LexicalRecognizer).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_document_without_headings_has_empty_section_results() {
        let text = "Alice Wonderland\nalice@example.org";
        let result = extract_resume(text, &LexicalRecognizer).unwrap();
        assert!(result.work_experience.is_empty());
        assert!(result.education.is_empty());
        assert!(result.projects.is_empty());
        assert!(result.summary.is_empty());
        assert_eq!(result.personal_info.email, "alice@example.org");
    }

    #[test]
    fn test_dual_keyword_heading_still_yields_summary_text() {
        // "Summary of Qualifications" also matches the education pattern;
        // the summary must still own the section body.
        let text = "Summary of Qualifications\nSeasoned operations leader with a decade of results\n";
        let result = extract_resume(text, &LexicalRecognizer).unwrap();
        assert!(result.summary.contains("Seasoned operations leader"));
        assert!(result.education.is_empty());
    }

    #[test]
    fn test_summary_joined_and_heading_stripped() {
        let text = "SUMMARY\nSeasoned engineer who ships reliable systems.\n\nEXPERIENCE\nAcme Corp, Engineer 2019 - 2021\n";
        let result = extract_resume(text, &LexicalRecognizer).unwrap();
        assert_eq!(result.summary, "Seasoned engineer who ships reliable systems.");
    }
}
