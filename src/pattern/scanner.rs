use super::error::{AnalyzeError, AnalyzeResult};
use super::span::{GroupKind, RawSpan, SpanKind};

/// Tokenizes the pattern into raw spans. Positions are absolute indexes
/// into `chars`, so nested spans can be sliced without translation.
#[tracing::instrument(level = "trace", skip(chars), fields(len = chars.len()))]
pub fn scan(chars: &[char], max_depth: usize) -> AnalyzeResult<Vec<RawSpan>> {
    scan_range(chars, 0, chars.len(), 0, max_depth)
}

fn scan_range(
    chars: &[char],
    start: usize,
    end: usize,
    depth: usize,
    max_depth: usize,
) -> AnalyzeResult<Vec<RawSpan>> {
    if depth > max_depth {
        return Err(AnalyzeError::TooDeeplyNested { limit: max_depth });
    }

    let mut spans = Vec::new();
    let mut i = start;

    // `i` strictly increases every iteration; unmatched delimiters extend
    // their span to `end` instead of failing.
    while i < end {
        let span = match chars[i] {
            '\\' => {
                if i + 1 < end {
                    RawSpan::new(i, i + 2, SpanKind::Escape)
                } else {
                    // Trailing lone backslash degrades to a literal.
                    RawSpan::new(i, i + 1, SpanKind::Literal)
                }
            }
            '[' => {
                let close = matching_bracket(chars, i, end);
                let negated = i + 1 < end && chars[i + 1] == '^';
                RawSpan::new(i, close, SpanKind::Class { negated })
            }
            '(' => scan_group(chars, i, end, depth, max_depth)?,
            '*' | '+' | '?' => {
                // `*?`, `+?` and `??` are single lazy-quantifier tokens.
                let qend = if i + 1 < end && chars[i + 1] == '?' {
                    i + 2
                } else {
                    i + 1
                };
                RawSpan::new(i, qend, SpanKind::Quantifier)
            }
            '{' => match find_closing_brace(chars, i, end) {
                Some(brace_end) => {
                    let qend = if brace_end < end && chars[brace_end] == '?' {
                        brace_end + 1
                    } else {
                        brace_end
                    };
                    RawSpan::new(i, qend, SpanKind::Quantifier)
                }
                // `{` with no matching `}` is an ordinary character.
                None => RawSpan::new(i, i + 1, SpanKind::Literal),
            },
            '^' | '$' => RawSpan::new(i, i + 1, SpanKind::Anchor),
            '.' => RawSpan::new(i, i + 1, SpanKind::Dot),
            _ => RawSpan::new(i, i + 1, SpanKind::Literal),
        };

        debug_assert!(span.end > i);
        i = span.end;
        spans.push(span);
    }

    Ok(spans)
}

fn scan_group(
    chars: &[char],
    open: usize,
    end: usize,
    depth: usize,
    max_depth: usize,
) -> AnalyzeResult<RawSpan> {
    let (close, closed) = matching_paren(chars, open, end);
    let kind = sniff_group_kind(chars, open, close);

    let inner_start = (open + 1 + kind.prefix_len()).min(close);
    let inner_end = if closed { close - 1 } else { close };

    let children = if inner_start < inner_end {
        scan_range(chars, inner_start, inner_end, depth + 1, max_depth)?
    } else {
        Vec::new()
    };

    Ok(RawSpan::new(open, close, SpanKind::Group { kind, children }))
}

fn sniff_group_kind(chars: &[char], open: usize, close: usize) -> GroupKind {
    let peek = |offset: usize| -> Option<char> {
        let idx = open + 1 + offset;
        if idx < close { Some(chars[idx]) } else { None }
    };

    if peek(0) != Some('?') {
        return GroupKind::Capturing;
    }
    match peek(1) {
        Some(':') => GroupKind::NonCapturing,
        Some('=') => GroupKind::Lookahead { negative: false },
        Some('!') => GroupKind::Lookahead { negative: true },
        Some('<') => match peek(2) {
            Some('=') => GroupKind::Lookbehind { negative: false },
            Some('!') => GroupKind::Lookbehind { negative: true },
            // Named groups ( ?<name>... ) capture their match.
            _ => GroupKind::Capturing,
        },
        _ => GroupKind::Capturing,
    }
}

/// Returns the index one past the `]` closing the bracket at `open`, or
/// `end` when the class is never closed. Only `[`/`]` affect depth;
/// escaped characters are skipped so `[\]]` stays a single class.
fn matching_bracket(chars: &[char], open: usize, end: usize) -> usize {
    let mut depth = 1usize;
    let mut j = open + 1;

    while j < end {
        match chars[j] {
            '\\' => {
                j += 2;
                continue;
            }
            '[' => depth += 1,
            ']' => {
                depth -= 1;
                if depth == 0 {
                    return j + 1;
                }
            }
            _ => {}
        }
        j += 1;
    }

    end
}

/// Returns `(index one past the matching ')', true)` or `(end, false)`
/// when the group is never closed.
fn matching_paren(chars: &[char], open: usize, end: usize) -> (usize, bool) {
    let mut depth = 1usize;
    let mut j = open + 1;

    while j < end {
        match chars[j] {
            '\\' => {
                j += 2;
                continue;
            }
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return (j + 1, true);
                }
            }
            _ => {}
        }
        j += 1;
    }

    (end, false)
}

fn find_closing_brace(chars: &[char], open: usize, end: usize) -> Option<usize> {
    (open + 1..end).find(|&j| chars[j] == '}').map(|j| j + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars_of(pattern: &str) -> Vec<char> {
        pattern.chars().collect()
    }

    #[test]
    fn spans_cover_the_input_without_gaps() {
        let chars = chars_of("^a[bc]+(?:d|e)$");
        let spans = scan(&chars, 64).expect("pattern should scan");

        let mut cursor = 0;
        for span in &spans {
            assert_eq!(span.start, cursor);
            cursor = span.end;
        }
        assert_eq!(cursor, chars.len());
    }

    #[test]
    fn unclosed_class_extends_to_end() {
        let chars = chars_of("[abc");
        let spans = scan(&chars, 64).expect("pattern should scan");

        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].end, chars.len());
        assert!(matches!(spans[0].kind, SpanKind::Class { negated: false }));
    }

    #[test]
    fn lazy_quantifier_is_one_span() {
        let chars = chars_of("a+?");
        let spans = scan(&chars, 64).expect("pattern should scan");

        assert_eq!(spans.len(), 2);
        assert_eq!((spans[1].start, spans[1].end), (1, 3));
        assert!(matches!(spans[1].kind, SpanKind::Quantifier));
    }

    #[test]
    fn brace_without_close_degrades_to_literal() {
        let chars = chars_of("a{2");
        let spans = scan(&chars, 64).expect("pattern should scan");

        assert_eq!(spans.len(), 3);
        assert!(matches!(spans[1].kind, SpanKind::Literal));
    }

    #[test]
    fn depth_cap_is_enforced() {
        let pattern = "(".repeat(10);
        let chars = chars_of(&pattern);

        let err = scan(&chars, 4).expect_err("nesting should exceed the cap");
        assert_eq!(err, AnalyzeError::TooDeeplyNested { limit: 4 });
    }
}
