//! Entry-List Parsers — work experience, education, and projects.
//!
//! All three share one segmentation loop: walk the section body line by line,
//! holding at most one open entry and its description buffer. A line that
//! passes the section's header predicate closes the open entry and starts a
//! new one; any other line accumulates into the open entry's buffer. Lines
//! seen before the first header belong to no entry and are dropped.

use crate::extraction::models::{EducationEntry, ProjectEntry, WorkExperienceEntry};
use crate::extraction::patterns::{
    DATE_RANGE_RE, DATE_SEPARATOR_RE, DEGREE_FIELD_RE, DEGREE_RE, EDUCATION_PART_RE,
    HEADER_MAX_CHARS, HEADER_PART_RE, PROJECT_HEADER_MAX_CHARS, YEAR_RE,
};

// ────────────────────────────────────────────────────────────────────────────
// Shared segmentation loop
// ────────────────────────────────────────────────────────────────────────────

/// Splits a section body into entries. `is_header` decides whether a line
/// starts a new entry, `parse_header` turns a header line into the entry's
/// structured fields, and `finish` receives the accumulated description when
/// the entry closes.
fn collect_entries<T>(
    body: &[&str],
    is_header: impl Fn(&str) -> bool,
    parse_header: impl Fn(&str) -> T,
    finish: impl Fn(&mut T, String),
) -> Vec<T> {
    let mut entries = Vec::new();
    let mut open: Option<(T, Vec<String>)> = None;

    for line in body {
        if is_header(line) {
            if let Some((mut entry, buffer)) = open.take() {
                finish(&mut entry, buffer.join(" "));
                entries.push(entry);
            }
            open = Some((parse_header(line), Vec::new()));
        } else if let Some((_, buffer)) = open.as_mut() {
            buffer.push((*line).to_string());
        }
    }

    if let Some((mut entry, buffer)) = open {
        finish(&mut entry, buffer.join(" "));
        entries.push(entry);
    }

    entries
}

/// The section body: everything strictly inside the range except its first
/// line, which is the heading itself.
fn section_body<'a>(lines: &'a [&'a str], range: (usize, usize)) -> &'a [&'a str] {
    let (start, end) = range;
    lines.get(start + 1..end).unwrap_or(&[])
}

// ────────────────────────────────────────────────────────────────────────────
// Work experience
// ────────────────────────────────────────────────────────────────────────────

/// Parses the experience section into per-role entries. A header is a line
/// carrying a 4-digit year and shorter than `HEADER_MAX_CHARS` — the length
/// bound keeps long sentences that merely mention a year inside descriptions.
pub fn parse_work_experience(lines: &[&str], range: (usize, usize)) -> Vec<WorkExperienceEntry> {
    collect_entries(
        section_body(lines, range),
        |line| YEAR_RE.is_match(line) && line.chars().count() < HEADER_MAX_CHARS,
        parse_experience_header,
        |entry, description| entry.description = description,
    )
}

fn parse_experience_header(line: &str) -> WorkExperienceEntry {
    let mut entry = WorkExperienceEntry::default();

    let remainder = match DATE_RANGE_RE.find(line) {
        Some(m) => {
            let date_str = m.as_str();
            let halves: Vec<&str> = DATE_SEPARATOR_RE
                .split(date_str)
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .collect();
            if halves.len() >= 2 {
                entry.start_date = halves[0].to_string();
                entry.end_date = halves[halves.len() - 1].to_string();
            }
            line.replace(date_str, "")
        }
        None => line.to_string(),
    };

    let parts: Vec<&str> = HEADER_PART_RE
        .split(&remainder)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect();

    match parts.as_slice() {
        [company, position, ..] => {
            entry.company = (*company).to_string();
            entry.position = (*position).to_string();
        }
        [company] => {
            entry.company = (*company).to_string();
        }
        [] => {}
    }

    entry
}

// ────────────────────────────────────────────────────────────────────────────
// Education
// ────────────────────────────────────────────────────────────────────────────

/// Parses the education section. Headers carry a year or a degree keyword and
/// stay under the same length bound as experience headers.
pub fn parse_education(lines: &[&str], range: (usize, usize)) -> Vec<EducationEntry> {
    collect_entries(
        section_body(lines, range),
        |line| {
            (YEAR_RE.is_match(line) || DEGREE_RE.is_match(line))
                && line.chars().count() < HEADER_MAX_CHARS
        },
        parse_education_header,
        |entry, description| entry.description = description,
    )
}

fn parse_education_header(line: &str) -> EducationEntry {
    let mut entry = EducationEntry::default();

    let years: Vec<&str> = YEAR_RE.find_iter(line).map(|m| m.as_str()).collect();
    match years.as_slice() {
        [start, end, ..] => {
            entry.start_date = (*start).to_string();
            entry.end_date = (*end).to_string();
        }
        // A single year is read as a graduation year.
        [end] => {
            entry.end_date = (*end).to_string();
        }
        [] => {}
    }

    let degree = DEGREE_FIELD_RE.find(line).map(|m| m.as_str().trim());
    if let Some(degree) = degree {
        entry.degree = degree.to_string();
    }

    let parts: Vec<&str> = EDUCATION_PART_RE
        .split(line)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect();

    if let Some(first) = parts.first() {
        let degree_in_first = degree.map(|d| first.contains(d)).unwrap_or(false);
        if degree_in_first {
            if let Some(second) = parts.get(1) {
                entry.institution = (*second).to_string();
            }
        } else {
            entry.institution = (*first).to_string();
        }
    }

    entry
}

// ────────────────────────────────────────────────────────────────────────────
// Projects
// ────────────────────────────────────────────────────────────────────────────

/// Parses the projects section. Any short, non-indented line starts a new
/// project; the line itself is the project name, with an embedded year pulled
/// out into the date field.
pub fn parse_projects(lines: &[&str], range: (usize, usize)) -> Vec<ProjectEntry> {
    collect_entries(
        section_body(lines, range),
        |line| {
            line.chars().count() < PROJECT_HEADER_MAX_CHARS
                && !line.starts_with(' ')
                && !line.starts_with('\t')
        },
        parse_project_header,
        |entry, description| entry.description = description,
    )
}

fn parse_project_header(line: &str) -> ProjectEntry {
    let mut entry = ProjectEntry {
        name: line.trim().to_string(),
        ..ProjectEntry::default()
    };

    if let Some(m) = YEAR_RE.find(line) {
        entry.date = m.as_str().to_string();
        entry.name = line.replace(m.as_str(), "").trim().to_string();
    }

    entry
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── work experience ─────────────────────────────────────────────────────

    #[test]
    fn test_experience_header_with_year_range_and_two_parts() {
        let lines = vec![
            "EXPERIENCE",
            "Acme Corp, Senior Engineer 2019 - Present",
            "Built the thing.",
        ];
        let entries = parse_work_experience(&lines, (0, 3));
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].company, "Acme Corp");
        assert_eq!(entries[0].position, "Senior Engineer");
        assert_eq!(entries[0].start_date, "2019");
        assert_eq!(entries[0].end_date, "Present");
        assert_eq!(entries[0].description, "Built the thing.");
    }

    #[test]
    fn test_experience_month_led_date_range() {
        let lines = vec!["EXPERIENCE", "Beta LLC, Analyst Jan 2017 - Mar 2019"];
        let entries = parse_work_experience(&lines, (0, 2));
        assert_eq!(entries[0].start_date, "Jan 2017");
        assert_eq!(entries[0].end_date, "Mar 2019");
        assert_eq!(entries[0].company, "Beta LLC");
        assert_eq!(entries[0].position, "Analyst");
    }

    #[test]
    fn test_experience_single_part_is_company_only() {
        let lines = vec!["EXPERIENCE", "Acme Corp 2019 - 2021"];
        let entries = parse_work_experience(&lines, (0, 2));
        assert_eq!(entries[0].company, "Acme Corp");
        assert_eq!(entries[0].position, "");
    }

    #[test]
    fn test_long_line_with_year_is_description_not_header() {
        let long_line = format!(
            "During 2020 the whole platform was rewritten {} and shipped to every customer",
            "word ".repeat(20)
        );
        assert!(long_line.chars().count() >= 100);
        let lines = vec![
            "EXPERIENCE",
            "Acme Corp, Senior Engineer 2019 - Present",
            long_line.as_str(),
        ];
        let entries = parse_work_experience(&lines, (0, 3));
        assert_eq!(entries.len(), 1, "long line must not open a second entry");
        assert_eq!(entries[0].description, long_line);
    }

    #[test]
    fn test_lines_before_first_header_are_dropped() {
        let lines = vec![
            "EXPERIENCE",
            "stray prose with no year",
            "Acme Corp, Engineer 2019 - 2020",
        ];
        let entries = parse_work_experience(&lines, (0, 3));
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].description, "");
    }

    #[test]
    fn test_multiple_experience_entries_split_on_headers() {
        let lines = vec![
            "EXPERIENCE",
            "Acme Corp, Senior Engineer 2019 - Present",
            "Shipped the flagship product.",
            "Beta LLC, Engineer 2015 - 2019",
            "Maintained the legacy stack.",
        ];
        let entries = parse_work_experience(&lines, (0, 5));
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].company, "Acme Corp");
        assert_eq!(entries[0].description, "Shipped the flagship product.");
        assert_eq!(entries[1].company, "Beta LLC");
        assert_eq!(entries[1].description, "Maintained the legacy stack.");
    }

    #[test]
    fn test_ambiguous_header_yields_entry_with_empty_fields() {
        // A bare year is a header but carries no company or dates range.
        let lines = vec!["EXPERIENCE", "2019", "did various things"];
        let entries = parse_work_experience(&lines, (0, 3));
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].company, "2019");
        assert_eq!(entries[0].start_date, "");
        assert_eq!(entries[0].description, "did various things");
    }

    #[test]
    fn test_empty_body_yields_no_entries() {
        let lines = vec!["EXPERIENCE"];
        let entries = parse_work_experience(&lines, (0, 1));
        assert!(entries.is_empty());
    }

    // ── education ───────────────────────────────────────────────────────────

    #[test]
    fn test_education_two_years_become_start_and_end() {
        let lines = vec![
            "EDUCATION",
            "State University, BS Computer Science 2015 - 2019",
        ];
        let entries = parse_education(&lines, (0, 2));
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].institution, "State University");
        assert_eq!(entries[0].degree, "BS Computer Science");
        assert_eq!(entries[0].start_date, "2015");
        assert_eq!(entries[0].end_date, "2019");
    }

    #[test]
    fn test_education_single_year_is_end_date() {
        let lines = vec!["EDUCATION", "Tech Institute, MBA 2012"];
        let entries = parse_education(&lines, (0, 2));
        assert_eq!(entries[0].start_date, "");
        assert_eq!(entries[0].end_date, "2012");
        assert_eq!(entries[0].degree, "MBA");
    }

    #[test]
    fn test_education_degree_first_moves_institution_to_second_part() {
        let lines = vec!["EDUCATION", "Master of Science, Tech Institute 2014"];
        let entries = parse_education(&lines, (0, 2));
        assert_eq!(entries[0].degree, "Master of Science");
        assert_eq!(entries[0].institution, "Tech Institute 2014");
    }

    #[test]
    fn test_education_degree_keyword_alone_starts_entry() {
        // No year at all — the degree keyword is enough to open an entry.
        let lines = vec!["EDUCATION", "Bachelor of Arts, Liberal College", "Dean's list."];
        let entries = parse_education(&lines, (0, 3));
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].degree, "Bachelor of Arts");
        assert_eq!(entries[0].institution, "Liberal College");
        assert_eq!(entries[0].description, "Dean's list.");
    }

    // ── projects ────────────────────────────────────────────────────────────

    #[test]
    fn test_project_short_line_starts_entry_and_year_is_stripped() {
        let lines = vec![
            "PROJECTS",
            "Weather Dashboard 2021",
            "A realtime weather charting application with hourly and daily forecast panels.",
        ];
        let entries = parse_projects(&lines, (0, 3));
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "Weather Dashboard");
        assert_eq!(entries[0].date, "2021");
        assert_eq!(
            entries[0].description,
            "A realtime weather charting application with hourly and daily forecast panels."
        );
    }

    #[test]
    fn test_project_without_year_keeps_full_name() {
        let lines = vec!["PROJECTS", "Chess Engine"];
        let entries = parse_projects(&lines, (0, 2));
        assert_eq!(entries[0].name, "Chess Engine");
        assert_eq!(entries[0].date, "");
    }

    #[test]
    fn test_project_long_line_is_description() {
        let long = "a description line that is definitely longer than fifty characters in total";
        let lines = vec!["PROJECTS", "Chess Engine", long];
        let entries = parse_projects(&lines, (0, 3));
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].description, long);
    }
}
