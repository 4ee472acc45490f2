//! Skill equivalence with separator-insensitive comparison and synonyms.

/// Groups of normalized spellings that name the same skill.
const SYNONYM_GROUPS: &[&[&str]] = &[
    &["js", "javascript"],
    &["ts", "typescript"],
    &["py", "python"],
    &["cpp", "c++"],
    &["cs", "csharp", "c#"],
    &["sql", "database", "databases"],
    &["ml", "machinelearning"],
    &["ai", "artificialintelligence"],
    &["rest", "restful", "restapi"],
    &["ui", "userinterface"],
    &["ux", "userexperience"],
];

/// Lower-case and drop `.`, `-`, `_`, `/` and whitespace.
pub fn normalize(skill: &str) -> String {
    skill
        .chars()
        .filter(|c| !matches!(c, '.' | '-' | '_' | '/') && !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Whether two skill names refer to the same skill.
///
/// Symmetric. Matches on equal normalized forms, containment in either
/// direction, or membership in a shared synonym group. A skill that
/// normalizes to nothing matches nothing.
pub fn are_equivalent(a: &str, b: &str) -> bool {
    let a = normalize(a);
    let b = normalize(b);

    if a.is_empty() || b.is_empty() {
        return false;
    }

    if a == b || a.contains(&b) || b.contains(&a) {
        return true;
    }

    SYNONYM_GROUPS
        .iter()
        .any(|group| in_group(&a, group) && in_group(&b, group))
}

fn in_group(skill: &str, group: &[&str]) -> bool {
    group
        .iter()
        .any(|member| skill.contains(member) || member.contains(skill))
}
