mod classifier;
mod complexity;
mod component;
mod constructs;
mod diagnostics;
mod error;
mod scanner;
mod span;

pub use complexity::{aggregate_score, has_lookaround, level_for_score};
pub use component::{Complexity, ComponentKind, PatternAnalysis, PatternComponent, Position};
pub use error::{AnalyzeError, AnalyzeResult};
pub use span::GroupKind;

pub(crate) use classifier::classify_all;
pub(crate) use diagnostics::{RuleContext, evaluate};
pub(crate) use scanner::scan;
