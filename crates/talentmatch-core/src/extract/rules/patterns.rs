//! Common regex patterns for resume and job posting extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Contact details
    pub static ref EMAIL: Regex = Regex::new(
        r"(?i)[a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,}"
    ).unwrap();

    pub static ref PHONE: Regex = Regex::new(
        r"(?:\+\d{1,3}[-.\s]?)?(?:\(\d{3}\)|\d{3})[-.\s]?\d{3}[-.\s]?\d{4}"
    ).unwrap();

    // Years of experience, in priority order
    pub static ref YEARS_OF_EXPERIENCE: Regex = Regex::new(
        r"(?i)(\d+)\+?\s*(?:to|-)?\s*\d*\s*years?\s+(?:of\s+)?experience"
    ).unwrap();

    pub static ref EXPERIENCE_YEARS_LABELED: Regex = Regex::new(
        r"(?i)experience\s*[:;]\s*(\d+)\+?\s*years?"
    ).unwrap();

    pub static ref YEARS_BARE: Regex = Regex::new(
        r"(?i)(\d+)\+?\s*years?"
    ).unwrap();

    // Name heuristics
    pub static ref PHONE_LIKE_GROUPING: Regex = Regex::new(
        r"\d{3}.*\d{3}.*\d{4}"
    ).unwrap();

    pub static ref NAME_TOKEN: Regex = Regex::new(
        r"^[A-Za-z][A-Za-z'-]*\.?$"
    ).unwrap();

    // Education and experience line filters
    pub static ref YEAR_RUN: Regex = Regex::new(
        r"\d{4}"
    ).unwrap();

    pub static ref DEGREE_KEYWORD: Regex = Regex::new(
        r"(?i)bachelor|master|phd|degree|university|college|diploma"
    ).unwrap();

    // Job postings
    pub static ref JOB_TITLE_LABEL: Regex = Regex::new(
        r"(?i)(?:job\s+title|position|role)\s*[:;]\s*(.+)"
    ).unwrap();

    pub static ref SKILL_LABEL_PREFIX: Regex = Regex::new(
        r"(?i)^(?:(?:(?:required|technical)\s+)?skills?|requirements?)\s*(?:[:;]\s*|$)"
    ).unwrap();

    // List token filters
    pub static ref NUMERIC_TOKEN: Regex = Regex::new(
        r"^[\d.\-]+$"
    ).unwrap();

    pub static ref BULLET_PREFIX: Regex = Regex::new(
        r"^[•◦▪▫–\-*+]+\s*"
    ).unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_case_insensitive() {
        let m = EMAIL.find("Contact: John.Doe+jobs@Example.COM today").unwrap();
        assert_eq!(m.as_str(), "John.Doe+jobs@Example.COM");
    }

    #[test]
    fn test_phone_formats() {
        for phone in ["(555) 123-4567", "555-123-4567", "555.123.4567", "+1 555 123 4567"] {
            assert_eq!(PHONE.find(phone).map(|m| m.as_str()), Some(phone), "{}", phone);
        }
    }

    #[test]
    fn test_name_token() {
        assert!(NAME_TOKEN.is_match("O'Brien"));
        assert!(NAME_TOKEN.is_match("Smith-Jones"));
        assert!(NAME_TOKEN.is_match("A."));
        assert!(!NAME_TOKEN.is_match("-Smith"));
        assert!(!NAME_TOKEN.is_match("R2D2"));
        assert!(!NAME_TOKEN.is_match("Resume:"));
    }

    #[test]
    fn test_skill_label_prefix() {
        assert_eq!(SKILL_LABEL_PREFIX.replace("Required Skills: Rust", ""), "Rust");
        assert_eq!(SKILL_LABEL_PREFIX.replace("requirements", ""), "");
        assert_eq!(SKILL_LABEL_PREFIX.replace("Skillful negotiation", ""), "Skillful negotiation");
    }
}
