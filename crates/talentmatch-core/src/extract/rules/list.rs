//! Delimited-list tokenization for skill sections.

use super::patterns::{NUMERIC_TOKEN, SKILL_LABEL_PREFIX};

const RESUME_SEPARATORS: &[char] = &[',', ';', '•', '◦', '▪', '▫', '–', '\n'];
const JOB_POSTING_SEPARATORS: &[char] = &[',', ';', '•', '◦', '▪', '▫', '–', '\n', '|'];

const STOPWORDS: &[&str] = &["and", "or", "the", "with", "for", "in", "on", "at"];

/// Splits a section body into list entries.
#[derive(Debug, Clone, Copy)]
pub struct ListTokenizer {
    separators: &'static [char],
    job_posting: bool,
}

impl ListTokenizer {
    /// Tokenizer for resume skill lists.
    pub fn resume() -> Self {
        Self {
            separators: RESUME_SEPARATORS,
            job_posting: false,
        }
    }

    /// Tokenizer for job posting skill lists: also splits on '|', strips
    /// leading "Skills:"-style labels and drops bare stopwords.
    pub fn job_posting() -> Self {
        Self {
            separators: JOB_POSTING_SEPARATORS,
            job_posting: true,
        }
    }

    pub fn tokenize(&self, body: &str) -> Vec<String> {
        body.split(self.separators)
            .filter_map(|raw| {
                let token = raw.trim();
                let token = if self.job_posting {
                    SKILL_LABEL_PREFIX.replace(token, "").trim().to_string()
                } else {
                    token.to_string()
                };
                self.keep(&token).then_some(token)
            })
            .collect()
    }

    fn keep(&self, token: &str) -> bool {
        if token.chars().count() <= 1 || NUMERIC_TOKEN.is_match(token) {
            return false;
        }
        if self.job_posting {
            let lower = token.to_lowercase();
            return !STOPWORDS.contains(&lower.as_str());
        }
        true
    }
}

/// Split a resume list section into entries.
pub fn split_list(body: &str) -> Vec<String> {
    ListTokenizer::resume().tokenize(body)
}

/// Split a job posting skill section into entries.
pub fn split_job_skills(body: &str) -> Vec<String> {
    ListTokenizer::job_posting().tokenize(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_split_resume_list() {
        let body = "Python, Java; SQL\n• Docker\n◦ Kubernetes – Terraform\n▪ Go ▫ C";
        assert_eq!(
            split_list(body),
            vec!["Python", "Java", "SQL", "Docker", "Kubernetes", "Terraform", "Go"]
        );
    }

    #[test]
    fn test_drops_numeric_and_short_tokens() {
        let body = "Rust, 2020, 1.5, 3-5, x, , R2";
        assert_eq!(split_list(body), vec!["Rust", "R2"]);
    }

    #[test]
    fn test_resume_keeps_pipes_and_stopwords() {
        assert_eq!(split_list("Rust | Go, and"), vec!["Rust | Go", "and"]);
    }

    #[test]
    fn test_split_job_skills() {
        let body = "Required Skills: Rust | Go\nand\nPostgreSQL, the, Kafka";
        assert_eq!(split_job_skills(body), vec!["Rust", "Go", "PostgreSQL", "Kafka"]);
    }

    #[test]
    fn test_job_stopwords_case_insensitive() {
        assert_eq!(split_job_skills("AND, With, Rust"), vec!["Rust"]);
    }

    #[test]
    fn test_empty_body() {
        assert!(split_list("").is_empty());
        assert!(split_job_skills("   \n ").is_empty());
    }
}
