use thiserror::Error;

pub type AnalyzeResult<T> = Result<T, AnalyzeError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalyzeError {
    #[error("pattern is {length} characters long, which exceeds the limit of {limit}")]
    PatternTooLong { length: usize, limit: usize },
    #[error("group nesting exceeds the maximum supported depth of {limit}")]
    TooDeeplyNested { limit: usize },
}
