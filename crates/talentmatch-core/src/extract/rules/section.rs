//! Section boundary detection.
//!
//! A section starts at a header line ("Skills:", "WORK EXPERIENCE") and runs
//! until the next line that is itself a known header, or the end of text.

use tracing::trace;

/// Headers that end a section in a resume.
pub const RESUME_HEADERS: &[&str] = &[
    "skills",
    "skill",
    "technical skills",
    "key skills",
    "education",
    "academic background",
    "qualifications",
    "qualification",
    "experience",
    "work experience",
    "professional experience",
    "employment history",
    "work",
    "professional",
    "employment",
    "certifications",
    "certification",
    "projects",
    "project",
    "awards",
    "award",
    "references",
    "reference",
    "summary",
    "objective",
];

/// Headers that end a section in a job posting, in addition to [`RESUME_HEADERS`].
pub const JOB_POSTING_HEADERS: &[&str] = &[
    "job title",
    "position",
    "role",
    "responsibilities",
    "duties",
    "about",
    "description",
    "required skills",
    "requirements",
    "requirement",
];

/// Locates labeled sections in a document.
#[derive(Debug, Clone)]
pub struct SectionExtractor {
    terminators: Vec<&'static str>,
    inline_headers: bool,
}

impl SectionExtractor {
    /// Section extractor for resumes: headers must stand on their own line.
    pub fn resume() -> Self {
        Self {
            terminators: RESUME_HEADERS.to_vec(),
            inline_headers: false,
        }
    }

    /// Section extractor for job postings: also accepts "Skills: a, b" where
    /// the body starts on the header line.
    pub fn job_posting() -> Self {
        let mut terminators = RESUME_HEADERS.to_vec();
        terminators.extend_from_slice(JOB_POSTING_HEADERS);
        Self {
            terminators,
            inline_headers: true,
        }
    }

    /// Return the trimmed body of the first section whose header matches one
    /// of `labels` (case-insensitive), or an empty string.
    pub fn extract(&self, text: &str, labels: &[&str]) -> String {
        let Some(body_start) = self.find_body_start(text, labels) else {
            return String::new();
        };
        // The first body line never ends the section.
        let body_start = skip_whitespace(text, body_start);

        let body_end = lines_with_offsets(text)
            .filter(|(start, _)| *start > body_start)
            .find(|(_, line)| self.is_terminator(line))
            .map(|(start, _)| start)
            .unwrap_or(text.len());

        trace!(body_start, body_end, "section located");
        text[body_start..body_end].trim().to_string()
    }

    fn find_body_start(&self, text: &str, labels: &[&str]) -> Option<usize> {
        for (start, line) in lines_with_offsets(text) {
            let line_end = start + line.len();

            if matches_label(&normalize_header(line), labels) {
                return Some(line_end);
            }

            if self.inline_headers {
                if let Some(sep) = line.find([':', ';']) {
                    let rest = &line[sep + 1..];
                    if !rest.trim().is_empty() && matches_label(&normalize_header(&line[..sep]), labels)
                    {
                        return Some(start + sep + 1);
                    }
                }
            }
        }
        None
    }

    fn is_terminator(&self, line: &str) -> bool {
        let normalized = normalize_header(line);
        !normalized.is_empty() && self.terminators.iter().any(|t| *t == normalized)
    }
}

/// Return the body of the section labeled by one of `labels`, ending at the
/// next line equal to one of `terminators`.
pub fn extract_section(text: &str, labels: &[&str], terminators: &[&'static str]) -> String {
    SectionExtractor {
        terminators: terminators.to_vec(),
        inline_headers: false,
    }
    .extract(text, labels)
}

/// Lower-case, trim, drop a trailing ':' or ';' and collapse inner whitespace.
fn normalize_header(line: &str) -> String {
    let trimmed = line.trim();
    let trimmed = trimmed
        .strip_suffix(':')
        .or_else(|| trimmed.strip_suffix(';'))
        .unwrap_or(trimmed);
    trimmed
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

fn matches_label(normalized: &str, labels: &[&str]) -> bool {
    !normalized.is_empty() && labels.iter().any(|l| l.eq_ignore_ascii_case(normalized))
}

/// Lines with the byte offset where each starts; line breaks are excluded.
fn lines_with_offsets(text: &str) -> impl Iterator<Item = (usize, &str)> {
    let mut offset = 0;
    text.split_inclusive('\n').map(move |raw| {
        let start = offset;
        offset += raw.len();
        let line = raw.strip_suffix('\n').unwrap_or(raw);
        let line = line.strip_suffix('\r').unwrap_or(line);
        (start, line)
    })
}

fn skip_whitespace(text: &str, pos: usize) -> usize {
    let rest = &text[pos..];
    pos + (rest.len() - rest.trim_start().len())
}
