use memchr::memmem;

use super::component::Complexity;

/// Patterns longer than this add to the aggregate score on top of the
/// length suggestion emitted by diagnostics.
pub(crate) const LONG_PATTERN_ESCALATION: usize = 100;

const LOOKAROUND_OPENERS: [&str; 4] = ["(?=", "(?!", "(?<=", "(?<!"];

/// Construct-presence heuristic over the raw pattern text. Baseline 1.
pub fn aggregate_score(pattern: &str) -> u32 {
    let mut score = 1;

    if pattern.contains('*') || pattern.contains('+') {
        score += 2;
    }
    if pattern.contains('?') {
        score += 1;
    }
    if has_lookaround(pattern) {
        score += 3;
    }
    if memmem::find(pattern.as_bytes(), b"\\b").is_some() {
        score += 1;
    }
    if pattern.contains('[') {
        score += 1;
    }
    if pattern.contains('|') {
        score += 2;
    }
    if pattern.chars().count() > LONG_PATTERN_ESCALATION {
        score += 2;
    }

    score
}

/// Fixed thresholds mapping the aggregate score onto the ordinal scale.
pub fn level_for_score(score: u32) -> Complexity {
    match score {
        0..=3 => Complexity::Simple,
        4..=6 => Complexity::Moderate,
        7..=10 => Complexity::Complex,
        _ => Complexity::VeryComplex,
    }
}

pub fn has_lookaround(pattern: &str) -> bool {
    LOOKAROUND_OPENERS
        .iter()
        .any(|opener| memmem::find(pattern.as_bytes(), opener.as_bytes()).is_some())
}
