use memchr::memmem;
use smallvec::SmallVec;

use super::component::{ComponentKind, PatternComponent};
use super::span::GroupKind;
use crate::flags::RegexFlags;

/// Patterns longer than this get a decomposition suggestion.
pub(crate) const LONG_PATTERN_SUGGESTION: usize = 50;

pub struct RuleContext<'a> {
    pub pattern: &'a str,
    pub components: &'a [PatternComponent],
    pub flags: RegexFlags,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    Warning(String),
    Suggestion(String),
}

type Rule = fn(&RuleContext) -> Option<Diagnostic>;

/// Every rule is a pure predicate over the context; none depends on the
/// order the others run in.
const RULES: &[Rule] = &[
    consecutive_quantifiers,
    chained_wildcard_backtracking,
    chained_wildcard_style,
    missing_anchors,
    excessive_length,
    capturing_with_global_flag,
];

pub fn evaluate(ctx: &RuleContext) -> (Vec<String>, Vec<String>) {
    let mut warnings = Vec::new();
    let mut suggestions = Vec::new();

    for rule in RULES {
        match rule(ctx) {
            Some(Diagnostic::Warning(message)) => warnings.push(message),
            Some(Diagnostic::Suggestion(message)) => suggestions.push(message),
            None => {}
        }
    }

    (warnings, suggestions)
}

/// Fires only for quantifier tokens that are truly adjacent within one
/// sibling list, not merely for multiple quantifiers in the pattern.
fn consecutive_quantifiers(ctx: &RuleContext) -> Option<Diagnostic> {
    let mut worklist: SmallVec<[&[PatternComponent]; 8]> = SmallVec::new();
    worklist.push(ctx.components);

    while let Some(siblings) = worklist.pop() {
        for pair in siblings.windows(2) {
            if pair[0].kind == ComponentKind::Quantifier
                && pair[1].kind == ComponentKind::Quantifier
            {
                return Some(Diagnostic::Warning(
                    "Consecutive quantifiers detected; this can cause catastrophic backtracking"
                        .to_string(),
                ));
            }
        }
        for component in siblings {
            if !component.children.is_empty() {
                worklist.push(&component.children);
            }
        }
    }

    None
}

fn chained_wildcard_backtracking(ctx: &RuleContext) -> Option<Diagnostic> {
    memmem::find(ctx.pattern.as_bytes(), b".*.*").map(|_| {
        Diagnostic::Warning(
            "Chained greedy wildcards (.*.*) can cause catastrophic backtracking".to_string(),
        )
    })
}

fn chained_wildcard_style(ctx: &RuleContext) -> Option<Diagnostic> {
    memmem::find(ctx.pattern.as_bytes(), b".*.*").map(|_| {
        Diagnostic::Suggestion(
            "Avoid chaining greedy wildcards; prefer a single bounded expression".to_string(),
        )
    })
}

fn missing_anchors(ctx: &RuleContext) -> Option<Diagnostic> {
    if ctx.pattern.is_empty() || ctx.pattern.contains('^') || ctx.pattern.contains('$') {
        return None;
    }
    Some(Diagnostic::Suggestion(
        "Pattern is unanchored; consider adding ^ or $ to limit where matches may start"
            .to_string(),
    ))
}

fn excessive_length(ctx: &RuleContext) -> Option<Diagnostic> {
    if ctx.pattern.chars().count() <= LONG_PATTERN_SUGGESTION {
        return None;
    }
    Some(Diagnostic::Suggestion(format!(
        "Pattern is longer than {LONG_PATTERN_SUGGESTION} characters; consider splitting it into smaller pieces"
    )))
}

/// The one rule that consults data from outside the pattern string. With
/// no flags supplied it never fires.
fn capturing_with_global_flag(ctx: &RuleContext) -> Option<Diagnostic> {
    if !ctx.flags.contains(RegexFlags::GLOBAL) {
        return None;
    }
    if !has_capturing_group(ctx.components) {
        return None;
    }
    Some(Diagnostic::Suggestion(
        "Capturing groups with the global flag add overhead; consider non-capturing groups (?:...)"
            .to_string(),
    ))
}

fn has_capturing_group(components: &[PatternComponent]) -> bool {
    let mut worklist: SmallVec<[&[PatternComponent]; 8]> = SmallVec::new();
    worklist.push(components);

    while let Some(siblings) = worklist.pop() {
        for component in siblings {
            if component.group_kind == Some(GroupKind::Capturing) {
                return true;
            }
            if !component.children.is_empty() {
                worklist.push(&component.children);
            }
        }
    }

    false
}
