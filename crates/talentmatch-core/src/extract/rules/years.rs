//! Years-of-experience extraction.

use regex::Regex;
use tracing::debug;

use super::patterns::{EXPERIENCE_YEARS_LABELED, YEARS_BARE, YEARS_OF_EXPERIENCE};
use super::{ExtractionMatch, FieldExtractor};

/// Years-of-experience extractor.
///
/// Patterns are tried in priority order: "N+ years of experience",
/// "experience: N years", then a bare "N years". Only the first match of a
/// pattern is considered; for ranges such as "3-5 years" the lower bound wins.
#[derive(Debug, Default, Clone, Copy)]
pub struct YearsExtractor;

impl YearsExtractor {
    fn patterns() -> [(&'static Regex, f32); 3] {
        [
            (&*YEARS_OF_EXPERIENCE, 0.95),
            (&*EXPERIENCE_YEARS_LABELED, 0.9),
            (&*YEARS_BARE, 0.5),
        ]
    }
}

impl FieldExtractor for YearsExtractor {
    type Output = ExtractionMatch<u32>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        for (pattern, confidence) in Self::patterns() {
            let Some(caps) = pattern.captures(text) else {
                continue;
            };
            // An unparseable capture (overflow) falls through to the next pattern.
            if let Ok(years) = caps[1].parse::<u32>() {
                let full_match = caps.get(0).unwrap();
                return Some(
                    ExtractionMatch::new(years, confidence, full_match.as_str())
                        .with_position(full_match.start(), full_match.end()),
                );
            }
        }
        None
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let mut results: Vec<Self::Output> = Vec::new();

        for (pattern, confidence) in Self::patterns() {
            for caps in pattern.captures_iter(text) {
                let full_match = caps.get(0).unwrap();
                let Ok(years) = caps[1].parse::<u32>() else {
                    continue;
                };

                // Lower-priority patterns re-match the same span
                let overlaps = results.iter().any(|r| {
                    r.position
                        .is_some_and(|(s, e)| full_match.start() < e && s < full_match.end())
                });
                if overlaps {
                    continue;
                }

                results.push(
                    ExtractionMatch::new(years, confidence, full_match.as_str())
                        .with_position(full_match.start(), full_match.end()),
                );
            }
        }

        results
    }
}

/// Extract the required years of experience, or 0 when none is stated.
pub fn extract_years_of_experience(text: &str) -> u32 {
    match YearsExtractor.extract(text) {
        Some(found) => {
            debug!(
                "Years of experience {} from '{}' (confidence {:.2})",
                found.value, found.source, found.confidence
            );
            found.value
        }
        None => {
            debug!("No years of experience stated");
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_years_with_plus() {
        assert_eq!(extract_years_of_experience("3+ years of experience required"), 3);
    }

    #[test]
    fn test_years_range_takes_lower_bound() {
        assert_eq!(extract_years_of_experience("We want 3-5 years experience in Go"), 3);
        assert_eq!(extract_years_of_experience("2 to 4 years of experience"), 2);
    }

    #[test]
    fn test_years_labeled() {
        assert_eq!(extract_years_of_experience("Experience: 7+ years"), 7);
    }

    #[test]
    fn test_years_priority() {
        // The bare pattern would find "10 years" first, but the
        // experience phrase has priority.
        let text = "Founded 10 years ago.\nRequires 4 years of experience.";
        assert_eq!(extract_years_of_experience(text), 4);
    }

    #[test]
    fn test_confidence_follows_pattern_priority() {
        let cases = [
            ("4 years of experience", 4, 0.95),
            ("Experience: 7 years", 7, 0.9),
            ("Founded 10 years ago", 10, 0.5),
        ];
        for (text, years, confidence) in cases {
            let found = YearsExtractor.extract(text).unwrap();
            assert_eq!(found.value, years);
            assert_eq!(found.confidence, confidence, "{}", text);
        }
    }

    #[test]
    fn test_years_bare() {
        assert_eq!(extract_years_of_experience("At least 5 yrs, ideally 6 years"), 6);
    }

    #[test]
    fn test_years_absent() {
        assert_eq!(extract_years_of_experience("Senior Rust Engineer, remote"), 0);
        assert_eq!(extract_years_of_experience(""), 0);
    }

    #[test]
    fn test_years_overflow_falls_through() {
        let text = "99999999999 years of experience, experience: 2 years";
        assert_eq!(extract_years_of_experience(text), 2);
    }

    #[test]
    fn test_extract_all_deduplicates_spans() {
        let all = YearsExtractor.extract_all("5 years of experience; 2 years in management");
        let values: Vec<u32> = all.iter().map(|m| m.value).collect();
        assert_eq!(values, vec![5, 2]);
        assert_eq!(all[0].confidence, 0.95);
        assert_eq!(all[1].confidence, 0.5);
    }
}
