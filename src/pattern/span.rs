#[derive(Debug, Clone, PartialEq)]
pub struct RawSpan {
    pub start: usize,
    pub end: usize,
    pub kind: SpanKind,
}

impl RawSpan {
    pub fn new(start: usize, end: usize, kind: SpanKind) -> Self {
        Self { start, end, kind }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SpanKind {
    Escape,
    Class { negated: bool },
    Group { kind: GroupKind, children: Vec<RawSpan> },
    Quantifier,
    Anchor,
    Dot,
    Literal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GroupKind {
    Capturing,
    NonCapturing,
    Lookahead { negative: bool },
    Lookbehind { negative: bool },
}

impl GroupKind {
    /// Characters occupied by the subtype marker after the opening `(`.
    pub fn prefix_len(&self) -> usize {
        match self {
            Self::Capturing => 0,
            Self::NonCapturing | Self::Lookahead { .. } => 2,
            Self::Lookbehind { .. } => 3,
        }
    }

    pub fn is_lookaround(&self) -> bool {
        matches!(self, Self::Lookahead { .. } | Self::Lookbehind { .. })
    }
}
