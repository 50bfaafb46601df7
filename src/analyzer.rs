use crate::AnalyzerOptions;
use crate::flags::RegexFlags;
use crate::pattern::{
    AnalyzeError, Complexity, PatternAnalysis, PatternComponent, RuleContext, aggregate_score,
    classify_all, evaluate, level_for_score, scan,
};

/// Analyzes a pattern with default limits and no flags. Never panics and
/// never returns an error; every failure mode becomes result data.
pub fn analyze_pattern(pattern: &str) -> PatternAnalysis {
    analyze_pattern_with_flags(pattern, RegexFlags::empty())
}

pub fn analyze_pattern_with_flags(pattern: &str, flags: RegexFlags) -> PatternAnalysis {
    analyze_with(pattern, flags, &AnalyzerOptions::default())
}

#[tracing::instrument(level = "trace", skip(flags, options), fields(pattern = %pattern))]
pub(crate) fn analyze_with(
    pattern: &str,
    flags: RegexFlags,
    options: &AnalyzerOptions,
) -> PatternAnalysis {
    if pattern.is_empty() {
        return empty_analysis();
    }

    let char_count = pattern.chars().count();
    if char_count > options.max_pattern_length {
        return limit_analysis(
            pattern,
            AnalyzeError::PatternTooLong {
                length: char_count,
                limit: options.max_pattern_length,
            },
        );
    }

    let chars: Vec<char> = pattern.chars().collect();
    match scan(&chars, options.max_group_depth) {
        Ok(spans) => {
            let (components, streaming) = classify_all(&chars, &spans);

            // Top-level spans must cover the input exactly; anything else
            // means the scan went inconsistent and the result cannot be
            // trusted beyond the minimal fallback.
            let covered: usize = components
                .iter()
                .map(|component| component.position.end - component.position.start)
                .sum();
            if covered != char_count {
                return fallback_analysis(pattern);
            }

            let aggregate = level_for_score(aggregate_score(pattern));
            let complexity = streaming.max(aggregate);

            let (warnings, suggestions) = evaluate(&RuleContext {
                pattern,
                components: &components,
                flags,
            });

            PatternAnalysis {
                pattern: pattern.to_string(),
                summary: build_summary(&components),
                components,
                complexity,
                warnings,
                suggestions,
            }
        }
        Err(err) => limit_analysis(pattern, err),
    }
}

fn empty_analysis() -> PatternAnalysis {
    PatternAnalysis {
        pattern: String::new(),
        components: Vec::new(),
        summary: "Empty pattern".to_string(),
        complexity: Complexity::Simple,
        warnings: Vec::new(),
        suggestions: vec!["Enter a pattern to analyze".to_string()],
    }
}

/// Defensive-limit breaches degrade to a diagnosable result instead of an
/// error; the typed message becomes the warning.
fn limit_analysis(pattern: &str, err: AnalyzeError) -> PatternAnalysis {
    let suggestion = match &err {
        AnalyzeError::PatternTooLong { .. } => "Shorten the pattern before analyzing it",
        AnalyzeError::TooDeeplyNested { .. } => "Flatten deeply nested groups",
    };

    PatternAnalysis {
        pattern: pattern.to_string(),
        components: Vec::new(),
        summary: "Pattern could not be analyzed".to_string(),
        complexity: Complexity::VeryComplex,
        warnings: vec![err.to_string()],
        suggestions: vec![suggestion.to_string()],
    }
}

/// Minimal fallback per the public contract: used only if analysis ever
/// fails in a way the typed errors do not cover.
fn fallback_analysis(pattern: &str) -> PatternAnalysis {
    PatternAnalysis {
        pattern: pattern.to_string(),
        components: Vec::new(),
        summary: "Pattern could not be analyzed".to_string(),
        complexity: Complexity::Simple,
        warnings: vec!["Invalid regex pattern".to_string()],
        suggestions: vec!["Check your regex syntax".to_string()],
    }
}

const SUMMARY_COMPONENT_CAP: usize = 8;

fn build_summary(components: &[PatternComponent]) -> String {
    match components {
        [] => "Empty pattern".to_string(),
        [only] => only.description.clone(),
        _ => {
            let mut parts: Vec<&str> = components
                .iter()
                .take(SUMMARY_COMPONENT_CAP)
                .map(|component| component.description.as_str())
                .collect();
            if components.len() > SUMMARY_COMPONENT_CAP {
                parts.push("…");
            }
            format!(
                "Pattern with {} top-level components: {}",
                components.len(),
                parts.join("; ")
            )
        }
    }
}
