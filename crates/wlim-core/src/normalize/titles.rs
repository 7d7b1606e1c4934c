/// Shared-prefix length that must be exceeded for a whole-prefix match
pub const DEFAULT_TITLE_PREFIX_MIN: usize = 10;

/// Common leading run that alone is enough to call two titles the same window
pub const DEFAULT_TITLE_COMMON_MIN: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TitleRules {
    pub prefix_min: usize,
    pub common_min: usize,
}

impl Default for TitleRules {
    fn default() -> Self {
        Self {
            prefix_min: DEFAULT_TITLE_PREFIX_MIN,
            common_min: DEFAULT_TITLE_COMMON_MIN,
        }
    }
}

/// Decide whether a compositor title and an accessible window name refer to
/// the same window.
///
/// Browsers and media apps decorate titles with suffixes such as
/// " — Audio playing", so an exact comparison is too strict. Two titles match
/// when either contains the other, when the shorter one is a prefix of the
/// other and longer than `prefix_min` characters, or when they share a
/// leading run of at least `common_min` characters. Empty titles never match.
pub fn titles_match(a: &str, b: &str, rules: &TitleRules) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }
    if a.contains(b) || b.contains(a) {
        return true;
    }

    let shorter = a.chars().count().min(b.chars().count());
    let common = a
        .chars()
        .zip(b.chars())
        .take_while(|(x, y)| x == y)
        .count();

    if shorter > rules.prefix_min && common >= shorter {
        return true;
    }
    common >= rules.common_min
}
