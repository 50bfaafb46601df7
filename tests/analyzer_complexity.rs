use regex_analyzer::{Complexity, analyze_pattern};

#[test]
fn ordinal_scale_orders_as_documented() {
    assert!(Complexity::Simple < Complexity::Moderate);
    assert!(Complexity::Moderate < Complexity::Complex);
    assert!(Complexity::Complex < Complexity::VeryComplex);
}

#[test]
fn plain_literals_are_simple() {
    assert_eq!(analyze_pattern("abc").complexity, Complexity::Simple);
}

#[test]
fn character_class_is_at_least_moderate() {
    assert!(analyze_pattern("[a-z]").complexity >= Complexity::Moderate);
}

#[test]
fn dot_is_at_least_moderate() {
    assert!(analyze_pattern("a.c").complexity >= Complexity::Moderate);
}

#[test]
fn lookaround_is_at_least_complex() {
    assert!(analyze_pattern("(?=a)b").complexity >= Complexity::Complex);
    assert!(analyze_pattern("(?<!x)y").complexity >= Complexity::Complex);
}

#[test]
fn adjacent_quantifiers_are_very_complex() {
    assert_eq!(analyze_pattern("a**").complexity, Complexity::VeryComplex);
}

#[test]
fn nested_lookaround_raises_the_whole_pattern() {
    assert!(analyze_pattern("a((?=b)c)").complexity >= Complexity::Complex);
}

#[test]
fn appending_lookahead_never_lowers_complexity() {
    let patterns = ["", "abc", "a*", "[a-z]+", "(?=x)a", "a|b", "x{2,3}"];

    for pattern in patterns {
        let before = analyze_pattern(pattern).complexity;
        let after = analyze_pattern(&format!("{pattern}(?=x)")).complexity;
        assert!(after >= before, "pattern {pattern}");
    }
}

#[test]
fn heavily_stacked_constructs_reach_very_complex() {
    let analysis = analyze_pattern("^(?=a)[b-z]+c*d?e|f\\b(?<!g)$");
    assert_eq!(analysis.complexity, Complexity::VeryComplex);
}
