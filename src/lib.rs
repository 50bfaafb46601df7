mod analyzer;
mod cache;
pub mod flags;
mod layout;
pub mod pattern;

use std::sync::Arc;

use parking_lot::RwLock;
use thiserror::Error;

use cache::{AnalysisCache, AnalysisCacheKey, DEFAULT_CACHE_CAPACITY};

pub use analyzer::{analyze_pattern, analyze_pattern_with_flags};
pub use flags::RegexFlags;
pub use layout::{LayoutNode, color_for, tokenize_for_layout};
pub use pattern::{
    AnalyzeError, Complexity, ComponentKind, GroupKind, PatternAnalysis, PatternComponent,
    Position,
};

pub const DEFAULT_MAX_PATTERN_LENGTH: usize = 10_000;
pub const DEFAULT_MAX_GROUP_DEPTH: usize = 64;

/// Handle owning the defensive limits and a read-through result cache.
/// The free functions cover one-shot use; interactive callers re-analyzing
/// on every keystroke go through this.
#[derive(Debug)]
pub struct Analyzer {
    options: AnalyzerOptions,
    cache: RwLock<AnalysisCache>,
}

impl Analyzer {
    pub fn new(options: Option<AnalyzerOptions>) -> Self {
        let options = options.unwrap_or_default();
        let cache = RwLock::new(AnalysisCache::new(options.cache_capacity));
        Self { options, cache }
    }

    pub fn analyze(&self, pattern: &str) -> Arc<PatternAnalysis> {
        self.analyze_with_flags(pattern, RegexFlags::empty())
    }

    pub fn analyze_with_flags(&self, pattern: &str, flags: RegexFlags) -> Arc<PatternAnalysis> {
        let key = AnalysisCacheKey::new(pattern.to_string(), flags);

        // The read guard must drop before touch() takes the write lock;
        // binding the peek result in its own statement guarantees that.
        let hit = self.cache.read().peek(&key);
        if let Some(hit) = hit {
            self.cache.write().touch(&key);
            return hit;
        }

        let analysis = Arc::new(analyzer::analyze_with(pattern, flags, &self.options));
        self.cache.write().insert(key, analysis.clone());
        analysis
    }

    pub fn options(&self) -> &AnalyzerOptions {
        &self.options
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new(None)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalyzerOptions {
    pub max_pattern_length: usize,
    pub max_group_depth: usize,
    pub cache_capacity: usize,
}

impl Default for AnalyzerOptions {
    fn default() -> Self {
        Self {
            max_pattern_length: DEFAULT_MAX_PATTERN_LENGTH,
            max_group_depth: DEFAULT_MAX_GROUP_DEPTH,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}

impl AnalyzerOptions {
    pub fn builder() -> AnalyzerOptionsBuilder {
        AnalyzerOptionsBuilder::default()
    }

    pub fn validate(&self) -> Result<(), AnalyzerConfigError> {
        if self.max_pattern_length == 0 {
            return Err(AnalyzerConfigError::ZeroLimit {
                field: "max_pattern_length",
            });
        }
        if self.max_group_depth == 0 {
            return Err(AnalyzerConfigError::ZeroLimit {
                field: "max_group_depth",
            });
        }
        Ok(())
    }
}

#[derive(Debug, Default, Clone)]
pub struct AnalyzerOptionsBuilder {
    options: AnalyzerOptions,
}

impl AnalyzerOptionsBuilder {
    pub fn max_pattern_length(mut self, value: usize) -> Self {
        self.options.max_pattern_length = value;
        self
    }

    pub fn max_group_depth(mut self, value: usize) -> Self {
        self.options.max_group_depth = value;
        self
    }

    pub fn cache_capacity(mut self, value: usize) -> Self {
        self.options.cache_capacity = value;
        self
    }

    pub fn build(self) -> Result<AnalyzerOptions, AnalyzerConfigError> {
        self.options.validate()?;
        Ok(self.options)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalyzerConfigError {
    #[error("{field} must be greater than zero")]
    ZeroLimit { field: &'static str },
}
