//! Structured result types produced by the extraction pipeline.
//!
//! Every field defaults to empty. Absence of a value is never an error —
//! callers must distinguish "nothing found" (empty fields, success) from
//! "something broke" (an `AppError` from the pipeline).

use serde::{Deserialize, Serialize};

/// Contact and identity details recovered from the document prologue.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin: String,
    pub website: String,
}

/// One role in the work history.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkExperienceEntry {
    pub company: String,
    pub position: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    /// Non-header lines of the entry, joined by single spaces.
    pub description: String,
}

/// One degree or program.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub institution: String,
    pub degree: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
}

/// One named project.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub name: String,
    pub date: String,
    pub description: String,
}

/// The aggregate extraction result for one uploaded document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResumeExtraction {
    pub personal_info: PersonalInfo,
    pub summary: String,
    /// Deduplicated, capped at 30; order follows the lexicon scan order.
    pub skills: Vec<String>,
    pub work_experience: Vec<WorkExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub projects: Vec<ProjectEntry>,
}
