use bitflags::bitflags;

bitflags! {
    /// Execution-flag codes handed over by the host editor layer. Their
    /// semantics belong to the execution engine; the analyzer only
    /// consults `GLOBAL` for one diagnostic rule.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct RegexFlags: u8 {
        const GLOBAL = 1 << 0;
        const IGNORE_CASE = 1 << 1;
        const MULTILINE = 1 << 2;
        const DOT_ALL = 1 << 3;
        const UNICODE = 1 << 4;
        const STICKY = 1 << 5;
    }
}

impl RegexFlags {
    /// Parses single-character flag codes. Unknown codes are ignored so a
    /// host dialect with extra flags still analyzes cleanly.
    pub fn from_codes(codes: &str) -> Self {
        let mut flags = Self::empty();
        for code in codes.chars() {
            match code {
                'g' => flags |= Self::GLOBAL,
                'i' => flags |= Self::IGNORE_CASE,
                'm' => flags |= Self::MULTILINE,
                's' => flags |= Self::DOT_ALL,
                'u' => flags |= Self::UNICODE,
                'y' => flags |= Self::STICKY,
                _ => {}
            }
        }
        flags
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_codes_and_ignores_the_rest() {
        let flags = RegexFlags::from_codes("gix");
        assert!(flags.contains(RegexFlags::GLOBAL));
        assert!(flags.contains(RegexFlags::IGNORE_CASE));
        assert!(!flags.contains(RegexFlags::MULTILINE));
    }

    #[test]
    fn empty_codes_yield_empty_flags() {
        assert_eq!(RegexFlags::from_codes(""), RegexFlags::empty());
    }
}
