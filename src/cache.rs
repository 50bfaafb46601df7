use hashbrown::HashMap as FastHashMap;
use std::collections::VecDeque;
use std::sync::Arc;

use crate::flags::RegexFlags;
use crate::pattern::PatternAnalysis;

pub const DEFAULT_CACHE_CAPACITY: usize = 256;

/// LRU cache of finished analyses keyed by `(pattern, flags)`. Purely a
/// responsiveness optimization for interactive callers; analysis itself is
/// a pure function and never depends on this.
#[derive(Debug)]
pub struct AnalysisCache {
    capacity: usize,
    map: FastHashMap<AnalysisCacheKey, Arc<PatternAnalysis>>,
    order: VecDeque<AnalysisCacheKey>,
}

impl AnalysisCache {
    pub fn new(capacity: usize) -> Self {
        let cap = capacity.max(1);
        Self {
            capacity: cap,
            map: FastHashMap::with_capacity(cap),
            order: VecDeque::with_capacity(cap),
        }
    }

    pub fn peek(&self, key: &AnalysisCacheKey) -> Option<Arc<PatternAnalysis>> {
        self.map.get(key).cloned()
    }

    pub fn touch(&mut self, key: &AnalysisCacheKey) {
        if self.map.contains_key(key) {
            self.promote(key);
        }
    }

    pub fn insert(&mut self, key: AnalysisCacheKey, analysis: Arc<PatternAnalysis>) {
        if self.map.contains_key(&key) {
            self.map.insert(key.clone(), analysis);
            self.promote(&key);
            return;
        }

        if self.order.len() == self.capacity
            && let Some(oldest) = self.order.pop_back()
        {
            self.map.remove(&oldest);
        }

        self.order.push_front(key.clone());
        self.map.insert(key, analysis);
    }

    fn promote(&mut self, key: &AnalysisCacheKey) {
        if let Some(pos) = self.order.iter().position(|existing| existing == key) {
            self.order.remove(pos);
        }
        self.order.push_front(key.clone());
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AnalysisCacheKey {
    pattern: String,
    flags: RegexFlags,
}

impl AnalysisCacheKey {
    pub fn new(pattern: String, flags: RegexFlags) -> Self {
        Self { pattern, flags }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::analyze_pattern;

    fn sample_analysis(pattern: &str) -> Arc<PatternAnalysis> {
        Arc::new(analyze_pattern(pattern))
    }

    fn key(pattern: &str) -> AnalysisCacheKey {
        AnalysisCacheKey::new(pattern.to_string(), RegexFlags::empty())
    }

    #[test]
    fn peek_returns_value_without_changing_order() {
        let mut cache = AnalysisCache::new(4);
        cache.insert(key("a*"), sample_analysis("a*"));

        let front_before = cache.order.front().cloned();
        let hit = cache.peek(&key("a*"));
        let front_after = cache.order.front().cloned();

        assert!(hit.is_some());
        assert_eq!(front_before, front_after);
    }

    #[test]
    fn oldest_entry_is_evicted_at_capacity() {
        let mut cache = AnalysisCache::new(2);
        cache.insert(key("a"), sample_analysis("a"));
        cache.insert(key("b"), sample_analysis("b"));
        cache.insert(key("c"), sample_analysis("c"));

        assert!(cache.peek(&key("a")).is_none());
        assert!(cache.peek(&key("b")).is_some());
        assert!(cache.peek(&key("c")).is_some());
    }

    #[test]
    fn touch_promotes_entry_to_front() {
        let mut cache = AnalysisCache::new(4);
        cache.insert(key("first"), sample_analysis("first"));
        cache.insert(key("second"), sample_analysis("second"));

        assert_eq!(cache.order.front(), Some(&key("second")));
        cache.touch(&key("first"));
        assert_eq!(cache.order.front(), Some(&key("first")));
    }

    #[test]
    fn keys_distinguish_flags() {
        let mut cache = AnalysisCache::new(4);
        cache.insert(key("(a)"), sample_analysis("(a)"));

        let global = AnalysisCacheKey::new("(a)".to_string(), RegexFlags::GLOBAL);
        assert!(cache.peek(&global).is_none());
    }
}
