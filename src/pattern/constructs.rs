use hashbrown::HashMap as FastHashMap;
use std::sync::LazyLock;

/// Descriptions for well-known constructs, initialized once per process.
/// Anything absent here falls back to a generated description.
static REGEX_CONSTRUCTS: LazyLock<FastHashMap<&'static str, &'static str>> = LazyLock::new(|| {
    FastHashMap::from_iter([
        ("\\d", "Any digit (0-9)"),
        ("\\D", "Any non-digit"),
        ("\\w", "Any word character (letter, digit or underscore)"),
        ("\\W", "Any non-word character"),
        ("\\s", "Any whitespace character"),
        ("\\S", "Any non-whitespace character"),
        ("\\b", "Word boundary"),
        ("\\B", "Non-word boundary"),
        ("\\.", "A literal dot"),
        ("\\\\", "A literal backslash"),
        ("\\n", "Newline"),
        ("\\t", "Tab"),
        ("\\r", "Carriage return"),
        ("\\f", "Form feed"),
        ("\\v", "Vertical tab"),
        ("\\0", "Null character"),
        ("^", "Start of the input"),
        ("$", "End of the input"),
        (".", "Any character except newline"),
        ("*", "Repeats zero or more times (greedy)"),
        ("+", "Repeats one or more times (greedy)"),
        ("?", "Optional: matches zero or one time"),
        ("*?", "Repeats zero or more times (lazy)"),
        ("+?", "Repeats one or more times (lazy)"),
        ("??", "Optional: matches zero or one time (lazy)"),
    ])
});

pub fn lookup(construct: &str) -> Option<&'static str> {
    REGEX_CONSTRUCTS.get(construct).copied()
}
