use super::component::{Complexity, ComponentKind, PatternComponent, Position};
use super::constructs;
use super::span::{GroupKind, RawSpan, SpanKind};

/// Classifies every span into a typed component and derives the running,
/// stream-based complexity. Classification only ever raises the level.
pub fn classify_all(chars: &[char], spans: &[RawSpan]) -> (Vec<PatternComponent>, Complexity) {
    let mut complexity = Complexity::Simple;
    let components = classify_siblings(chars, spans, &mut complexity);
    (components, complexity)
}

fn classify_siblings(
    chars: &[char],
    spans: &[RawSpan],
    complexity: &mut Complexity,
) -> Vec<PatternComponent> {
    let mut out: Vec<PatternComponent> = Vec::with_capacity(spans.len());

    for span in spans {
        let component = classify(chars, span, complexity);

        if component.kind == ComponentKind::Quantifier {
            match out.last_mut() {
                Some(prev) if prev.kind == ComponentKind::Quantifier => {
                    // Adjacent quantifiers are the classic backtracking trap.
                    raise(complexity, Complexity::VeryComplex);
                }
                Some(prev) => attach_quantifier(prev, &component.value),
                None => {}
            }
        }

        out.push(component);
    }

    out
}

fn classify(chars: &[char], span: &RawSpan, complexity: &mut Complexity) -> PatternComponent {
    let value: String = chars[span.start..span.end].iter().collect();
    let position = Position::new(span.start, span.end);

    match &span.kind {
        SpanKind::Escape => classify_escape(value, position, complexity),
        SpanKind::Class { negated } => {
            raise(complexity, Complexity::Moderate);
            let description = describe_class(&value, *negated);
            PatternComponent::new(ComponentKind::CharacterClass, value, description, position)
        }
        SpanKind::Group { kind, children } => {
            if kind.is_lookaround() {
                raise(complexity, Complexity::Complex);
            }
            let mut component = PatternComponent::new(
                ComponentKind::Group,
                value,
                describe_group(*kind).to_string(),
                position,
            );
            component.group_kind = Some(*kind);
            component.children = classify_siblings(chars, children, complexity);
            component
        }
        SpanKind::Quantifier => {
            let description = describe_quantifier(&value);
            PatternComponent::new(ComponentKind::Quantifier, value, description, position)
        }
        SpanKind::Anchor => {
            let description = constructs::lookup(&value)
                .map(str::to_string)
                .unwrap_or_else(|| format!("Anchor: {value}"));
            PatternComponent::new(ComponentKind::Anchor, value, description, position)
        }
        SpanKind::Dot => {
            raise(complexity, Complexity::Moderate);
            let description = constructs::lookup(".").unwrap_or_default().to_string();
            PatternComponent::new(ComponentKind::CharacterClass, value, description, position)
        }
        SpanKind::Literal => {
            let description = format!("Matches '{value}' literally");
            PatternComponent::new(ComponentKind::Literal, value, description, position)
        }
    }
}

fn classify_escape(
    value: String,
    position: Position,
    complexity: &mut Complexity,
) -> PatternComponent {
    let escaped = value.chars().nth(1);

    let kind = match escaped {
        Some('d' | 'D' | 'w' | 'W' | 's' | 'S') => {
            raise(complexity, Complexity::Moderate);
            ComponentKind::CharacterClass
        }
        Some('b' | 'B') => ComponentKind::Assertion,
        Some('1'..='9') => ComponentKind::Backreference,
        _ => ComponentKind::Escape,
    };

    let description = match kind {
        ComponentKind::Backreference => {
            format!("Backreference to capturing group {}", escaped.unwrap_or('?'))
        }
        _ => constructs::lookup(&value)
            .map(str::to_string)
            .unwrap_or_else(|| format!("Escaped character: {}", escaped.unwrap_or('\\'))),
    };

    PatternComponent::new(kind, value, description, position)
}

fn describe_class(value: &str, negated: bool) -> String {
    let inner = value.strip_prefix('[').unwrap_or(value);
    let inner = inner.strip_suffix(']').unwrap_or(inner);
    let inner = if negated {
        inner.strip_prefix('^').unwrap_or(inner)
    } else {
        inner
    };

    if negated {
        format!("Any single character not in \"{inner}\"")
    } else {
        format!("Any single character in \"{inner}\"")
    }
}

fn describe_group(kind: GroupKind) -> &'static str {
    match kind {
        GroupKind::Capturing => "Capturing group",
        GroupKind::NonCapturing => "Non-capturing group",
        GroupKind::Lookahead { negative: false } => {
            "Positive lookahead: asserts the following matches ahead"
        }
        GroupKind::Lookahead { negative: true } => {
            "Negative lookahead: asserts the following does not match ahead"
        }
        GroupKind::Lookbehind { negative: false } => {
            "Positive lookbehind: asserts the preceding matches behind"
        }
        GroupKind::Lookbehind { negative: true } => {
            "Negative lookbehind: asserts the preceding does not match behind"
        }
    }
}

fn describe_quantifier(value: &str) -> String {
    if let Some(description) = constructs::lookup(value) {
        return description.to_string();
    }

    match parse_brace_bounds(value) {
        Some(bounds) => {
            let base = match bounds.max {
                Some(max) if max == bounds.min => format!("Repeats exactly {} times", bounds.min),
                Some(max) => format!("Repeats between {} and {} times", bounds.min, max),
                None => format!("Repeats {} or more times", bounds.min),
            };
            if bounds.lazy {
                format!("{base} (lazy)")
            } else {
                base
            }
        }
        None => format!("Repetition: {value}"),
    }
}

struct BraceBounds {
    min: u64,
    max: Option<u64>,
    lazy: bool,
}

fn parse_brace_bounds(value: &str) -> Option<BraceBounds> {
    let (body, lazy) = match value.strip_suffix('?') {
        Some(body) => (body, true),
        None => (value, false),
    };
    let body = body.strip_prefix('{')?.strip_suffix('}')?;

    match body.split_once(',') {
        None => {
            let n: u64 = body.trim().parse().ok()?;
            Some(BraceBounds { min: n, max: Some(n), lazy })
        }
        Some((min, "")) => {
            let min: u64 = min.trim().parse().ok()?;
            Some(BraceBounds { min, max: None, lazy })
        }
        Some((min, max)) => {
            let min: u64 = min.trim().parse().ok()?;
            let max: u64 = max.trim().parse().ok()?;
            Some(BraceBounds { min, max: Some(max), lazy })
        }
    }
}

/// Sets the repetition flags on the component a quantifier attaches to.
/// The quantifier still remains its own component in the stream.
fn attach_quantifier(target: &mut PatternComponent, quantifier: &str) {
    match quantifier.chars().next() {
        Some('*') => {
            target.is_repeating = true;
            target.is_optional = true;
        }
        Some('+') => {
            target.is_repeating = true;
        }
        Some('?') => {
            target.is_optional = true;
        }
        Some('{') => {
            target.is_repeating = true;
            if let Some(bounds) = parse_brace_bounds(quantifier)
                && bounds.min == 0
            {
                target.is_optional = true;
            }
        }
        _ => {}
    }
}

fn raise(current: &mut Complexity, at_least: Complexity) {
    if *current < at_least {
        *current = at_least;
    }
}
