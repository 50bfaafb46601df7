use regex_analyzer::{
    Analyzer, AnalyzerConfigError, AnalyzerOptions, Complexity, analyze_pattern,
};

#[test]
fn oversized_pattern_short_circuits() {
    let pattern = "a".repeat(10_001);
    let analysis = analyze_pattern(&pattern);

    assert!(analysis.components.is_empty());
    assert_eq!(analysis.complexity, Complexity::VeryComplex);
    assert!(
        analysis
            .warnings
            .iter()
            .any(|warning| warning.contains("exceeds the limit"))
    );
}

#[test]
fn pattern_at_the_cap_still_analyzes() {
    let pattern = "a".repeat(10_000);
    let analysis = analyze_pattern(&pattern);

    assert_eq!(analysis.components.len(), 10_000);
}

#[test]
fn deep_nesting_degrades_to_a_diagnosable_result() {
    let pattern = "(".repeat(80);
    let analysis = analyze_pattern(&pattern);

    assert!(analysis.components.is_empty());
    assert!(
        analysis
            .warnings
            .iter()
            .any(|warning| warning.contains("nesting"))
    );
    assert!(
        analysis
            .suggestions
            .iter()
            .any(|suggestion| suggestion.contains("Flatten"))
    );
}

#[test]
fn nesting_below_the_cap_analyzes() {
    let pattern = format!("{}a{}", "(".repeat(32), ")".repeat(32));
    let analysis = analyze_pattern(&pattern);

    assert_eq!(analysis.components.len(), 1);
    assert!(analysis.warnings.is_empty());
}

#[test]
fn custom_length_limit_is_honored() {
    let options = AnalyzerOptions::builder()
        .max_pattern_length(10)
        .build()
        .expect("options should build");
    let analyzer = Analyzer::new(Some(options));

    let analysis = analyzer.analyze("aaaaaaaaaaaa");
    assert!(
        analysis
            .warnings
            .iter()
            .any(|warning| warning.contains("exceeds the limit of 10"))
    );
}

#[test]
fn custom_depth_limit_is_honored() {
    let options = AnalyzerOptions::builder()
        .max_group_depth(2)
        .build()
        .expect("options should build");
    let analyzer = Analyzer::new(Some(options));

    let analysis = analyzer.analyze("(((a)))");
    assert!(
        analysis
            .warnings
            .iter()
            .any(|warning| warning.contains("depth of 2"))
    );
}

#[test]
fn builder_rejects_zero_limits() {
    let err = AnalyzerOptions::builder()
        .max_pattern_length(0)
        .build()
        .expect_err("zero limit should be rejected");
    assert_eq!(
        err,
        AnalyzerConfigError::ZeroLimit {
            field: "max_pattern_length"
        }
    );
}

#[test]
fn repeated_lookups_of_the_same_pattern_return() {
    let analyzer = Analyzer::default();

    // Every call after the first is a cache hit and must come back
    // without blocking on the analyzer's own locks.
    let first = analyzer.analyze("a*");
    for _ in 0..3 {
        let hit = analyzer.analyze("a*");
        assert_eq!(*hit, *first);
    }
}

#[test]
fn cached_analysis_matches_the_uncached_path() {
    let analyzer = Analyzer::default();

    let first = analyzer.analyze("^a(b|c)*d$");
    let second = analyzer.analyze("^a(b|c)*d$");
    let uncached = analyze_pattern("^a(b|c)*d$");

    assert_eq!(*first, *second);
    assert_eq!(*first, uncached);
}
