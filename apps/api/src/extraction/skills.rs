//! Skill Extractor — lexicon matching over the skills section, with a
//! whole-document fallback.

use crate::extraction::patterns::{MAX_SKILLS, SKILL_MATCHERS};
use crate::extraction::sections::{SectionLabel, SectionMap};

/// Matches lexicon entries against the skills section if one exists; when that
/// yields nothing (including when no skills heading was found), rescans the
/// entire document. Many resumes omit an explicit skills heading or only
/// mention skills inline in experience bullets, hence the two tiers.
///
/// Each lexicon entry appears at most once, in lexicon order, capped at
/// `MAX_SKILLS`.
pub fn extract_skills(lines: &[&str], sections: &SectionMap) -> Vec<String> {
    let mut skills = Vec::new();

    if let Some(&(start, end)) = sections.get(&SectionLabel::Skills) {
        let section_text = lines[start..end].join("\n");
        skills = scan(&section_text);
    }

    if skills.is_empty() {
        let full_text = lines.join("\n");
        skills = scan(&full_text);
    }

    skills.truncate(MAX_SKILLS);
    skills
}

fn scan(text: &str) -> Vec<String> {
    SKILL_MATCHERS
        .iter()
        .filter(|(_, re)| re.is_match(text))
        .map(|(skill, _)| (*skill).to_string())
        .collect()
}
