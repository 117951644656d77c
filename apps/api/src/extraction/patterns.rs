//! Pattern Library — compiled recognition patterns and the skill lexicon.
//!
//! Everything in this module is read-only, process-wide configuration:
//! compiled once on first use via `Lazy` and never mutated. All extractors
//! share these statics, which makes every extraction pass deterministic.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::extraction::sections::SectionLabel;

/// Maximum number of skills returned by the skill extractor.
pub const MAX_SKILLS: usize = 30;

/// Header lines longer than this are treated as description text, not headers.
/// Guards against long sentences that happen to contain a year or degree token.
pub const HEADER_MAX_CHARS: usize = 100;

/// Project headers are expected to be short titles.
pub const PROJECT_HEADER_MAX_CHARS: usize = 50;

/// Section-heading recognition patterns, one per label. A line matching a
/// pattern is a candidate heading occurrence for that label. The match is a
/// plain case-insensitive keyword search, so prose that mentions a keyword
/// produces a false heading — an accepted limitation of the heuristic.
pub static SECTION_PATTERNS: Lazy<Vec<(SectionLabel, Regex)>> = Lazy::new(|| {
    vec![
        (
            SectionLabel::Summary,
            compile(r"(?i)(summary|profile|objective|about me)"),
        ),
        (
            SectionLabel::Experience,
            compile(r"(?i)(experience|work|employment|career|professional background)"),
        ),
        (
            SectionLabel::Education,
            compile(r"(?i)(education|academic|degree|qualification)"),
        ),
        (
            SectionLabel::Skills,
            compile(r"(?i)(skills|expertise|technical skills|competencies|proficiencies)"),
        ),
        (
            SectionLabel::Projects,
            compile(r"(?i)(projects|personal projects|portfolio|case studies)"),
        ),
    ]
});

/// Returns the heading pattern for one section label.
pub fn section_pattern(label: SectionLabel) -> &'static Regex {
    SECTION_PATTERNS
        .iter()
        .find(|(l, _)| *l == label)
        .map(|(_, re)| re)
        .expect("every section label has a compiled pattern")
}

/// A 4-digit year, 1900–2099.
pub static YEAR_RE: Lazy<Regex> = Lazy::new(|| compile(r"\b(19|20)\d{2}\b"));

/// Standard local-part@domain email shape.
pub static EMAIL_RE: Lazy<Regex> = Lazy::new(|| compile(r"[\w.+-]+@[\w-]+\.[\w.-]+"));

/// Phone number: optional country code, optional parenthesized area code,
/// groups separated by `-`, `.` or spaces.
pub static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| compile(r"(?:\+\d{1,3}[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}"));

/// LinkedIn profile URL, handle or legacy id form.
pub static LINKEDIN_RE: Lazy<Regex> =
    Lazy::new(|| compile(r"(?:linkedin\.com/in/|linkedin\.com/profile/view\?id=)[\w-]+"));

/// Generic URL shape. Deliberately loose; the personal-info extractor filters
/// out LinkedIn matches before using it for the website field.
pub static URL_RE: Lazy<Regex> =
    Lazy::new(|| compile(r"(?:https?://)?(?:www\.)?[\w.-]+\.[a-zA-Z]{2,}(?:/\S*)?"));

const MONTH: &str = r"Jan(?:uary)?|Feb(?:ruary)?|Mar(?:ch)?|Apr(?:il)?|May|Jun(?:e)?|Jul(?:y)?|Aug(?:ust)?|Sep(?:tember)?|Oct(?:ober)?|Nov(?:ember)?|Dec(?:ember)?";

/// Employment date range: either month-led ("Jan 2019 - Mar 2021",
/// "May 2020 to Present") or year-led ("2019 - Present", "2015-2019").
/// The terminal token may be a year or Present/Current/Now.
pub static DATE_RANGE_RE: Lazy<Regex> = Lazy::new(|| {
    compile(&format!(
        r"(?i)\b(?:{MONTH})(?:\s+\d{{4}})?\s*(?:-|–|\bto\b)\s*(?:(?:{MONTH})(?:\s+\d{{4}})?|\d{{4}}|Present|Current|Now)\b|\b(?:19|20)\d{{2}}\s*(?:-|–|\bto\b)\s*(?:(?:19|20)\d{{2}}|Present|Current|Now)\b"
    ))
});

/// Splits a matched date range into its start and end halves.
pub static DATE_SEPARATOR_RE: Lazy<Regex> = Lazy::new(|| compile(r"\s*(?:-|–|\bto\b)\s*"));

/// Splits an entry header into company/position (or similar) parts.
pub static HEADER_PART_RE: Lazy<Regex> = Lazy::new(|| compile(r"\s*[,|]\s*"));

/// Splits an education header into institution/degree/date parts.
pub static EDUCATION_PART_RE: Lazy<Regex> = Lazy::new(|| compile(r"[,|-]"));

/// Degree abbreviations and keywords, dotted variants included.
pub static DEGREE_RE: Lazy<Regex> = Lazy::new(|| {
    compile(r"(?i)\b(?:bachelor|master|phd|doctorate|mba|b\.?s\.?|b\.?a\.?|m\.?s\.?|m\.?a\.?)\b")
});

/// Degree keyword with optional "of"/"in" connector and field of study.
/// Multi-word fields come first so the leftmost-first alternation prefers them.
pub static DEGREE_FIELD_RE: Lazy<Regex> = Lazy::new(|| {
    compile(
        r"(?i)\b(?:Bachelor|Master|PhD|Doctorate|MBA|B\.?S\.?|B\.?A\.?|M\.?S\.?|M\.?A\.?)(?:\s+(?:of|in))?(?:\s+(?:Computer Science|Information Technology|Information Systems|Fine Arts|Public Health|Public Administration|Social Work|Criminal Justice|Human Resources|International Relations|Liberal Arts|General Studies|Applied Science|Political Science|Science|Arts|Business|Engineering|Education|Mathematics|Physics|Chemistry|Biology|Psychology|Sociology|Economics|Finance|Marketing|Management|Communications|Journalism|Law|Medicine|Nursing|Philosophy|History|English|Literature|Languages|Architecture|Design|Music|Theater|Film|Health|Technology))?",
    )
});

/// Known skill tokens matched against resume text. Scan order is list order,
/// which fixes the order of the extracted skill list.
pub static COMMON_SKILLS: &[&str] = &[
    // Programming languages
    "Python",
    "Java",
    "JavaScript",
    "C++",
    "C#",
    "Ruby",
    "PHP",
    "Swift",
    "Kotlin",
    "Go",
    "Rust",
    "TypeScript",
    "Scala",
    "Perl",
    "R",
    "MATLAB",
    "SQL",
    "HTML",
    "CSS",
    "Shell",
    "Bash",
    // Frameworks and libraries
    "React",
    "Angular",
    "Vue.js",
    "Django",
    "Flask",
    "Spring",
    "Express.js",
    "Node.js",
    "Ruby on Rails",
    "ASP.NET",
    "Laravel",
    "TensorFlow",
    "PyTorch",
    "Keras",
    "Pandas",
    "NumPy",
    "Scikit-learn",
    "jQuery",
    "Bootstrap",
    "Tailwind CSS",
    "Redux",
    "Next.js",
    "FastAPI",
    // Databases
    "MySQL",
    "PostgreSQL",
    "MongoDB",
    "Oracle",
    "SQL Server",
    "SQLite",
    "Redis",
    "Cassandra",
    "DynamoDB",
    "Firebase",
    "Neo4j",
    "MariaDB",
    "Elasticsearch",
    // Cloud and DevOps
    "AWS",
    "Azure",
    "Google Cloud",
    "Docker",
    "Kubernetes",
    "Jenkins",
    "GitLab CI",
    "GitHub Actions",
    "Terraform",
    "Ansible",
    "Puppet",
    "Chef",
    "Nginx",
    "Apache",
    "Serverless",
    "CloudFormation",
    // Data science and AI
    "Machine Learning",
    "Deep Learning",
    "NLP",
    "Computer Vision",
    "Data Analysis",
    "Data Visualization",
    "Big Data",
    "Hadoop",
    "Spark",
    "Data Mining",
    "Statistical Analysis",
    "Reinforcement Learning",
    // Design and UI/UX
    "Figma",
    "Adobe XD",
    "Sketch",
    "Photoshop",
    "Illustrator",
    "InDesign",
    "UI Design",
    "UX Design",
    "Wireframing",
    "Prototyping",
    "User Research",
    "A/B Testing",
    // Project management and methodologies
    "Agile",
    "Scrum",
    "Kanban",
    "Jira",
    "Trello",
    "Confluence",
    "Asana",
    "Project Management",
    "SDLC",
    "Waterfall",
    "Lean",
    "Six Sigma",
    // Testing and QA
    "Unit Testing",
    "Integration Testing",
    "End-to-End Testing",
    "Test Automation",
    "Selenium",
    "JUnit",
    "Jest",
    "Cypress",
    "Mocha",
    "Chai",
    "TestNG",
    "Quality Assurance",
    // Marketing
    "SEO",
    "SEM",
    "Social Media Marketing",
    "Content Marketing",
    "Email Marketing",
    "Google Analytics",
    "Facebook Ads",
    "Google Ads",
    "Marketing Automation",
    "CRM",
    "Salesforce",
    "HubSpot",
    // Finance and business
    "Financial Analysis",
    "Budgeting",
    "Forecasting",
    "Excel",
    "PowerPoint",
    "Data Entry",
    "Accounting",
    "QuickBooks",
    "SAP",
    "ERP",
    "Business Intelligence",
    "Tableau",
    "Power BI",
];

/// Whole-word, case-insensitive matchers for every lexicon entry, in lexicon
/// order. Compiled once alongside the lexicon itself.
pub static SKILL_MATCHERS: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    COMMON_SKILLS
        .iter()
        .map(|skill| {
            let pattern = format!(r"(?i)\b{}\b", regex::escape(skill));
            (*skill, compile(&pattern))
        })
        .collect()
});

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("pattern library regex must compile")
}
