use std::{cmp::Ordering, convert::Infallible, fmt::Display, str::FromStr, sync::LazyLock};

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::trace;

static NUMBER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("hardcoded regex must compile"));

/// Platform version whose behaviour a configuration emulates, `8.<minor>.<version>`.
///
/// Ordered by minor part, then by version.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct CompatibilityMode {
    minor: u32,
    version: u32,
}

impl CompatibilityMode {
    pub const MAJOR: u32 = 8;

    #[must_use]
    pub const fn new(minor: u32, version: u32) -> Self {
        Self { minor, version }
    }

    /// Parses the platform's enumeration value, such as `Version_8_3_10` or `Version8_1`.
    ///
    /// Anything without at least the major and minor numbers, `DontUse` included, gives the
    /// default mode.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let numbers = NUMBER_PATTERN
            .find_iter(text)
            .map(|found| found.as_str().parse::<u32>())
            .collect::<Result<Vec<_>, _>>();
        match numbers.as_deref() {
            Ok([_, minor, rest @ ..]) => Self::new(*minor, rest.first().copied().unwrap_or(0)),
            _ => {
                trace!(text, "compatibility mode falls back to default");
                Self::default()
            }
        }
    }

    #[must_use]
    pub const fn minor(&self) -> u32 {
        self.minor
    }

    #[must_use]
    pub const fn version(&self) -> u32 {
        self.version
    }

    /// How `second` relates to `first`: `Greater` when `second` is the newer one.
    #[must_use]
    pub fn compare(first: &Self, second: &Self) -> Ordering {
        second.cmp(first)
    }

    #[must_use]
    pub fn is_at_least(&self, other: &Self) -> bool {
        self >= other
    }
}

impl Default for CompatibilityMode {
    /// `8.3.99`, newer than any real release.
    fn default() -> Self {
        Self::new(3, 99)
    }
}

impl From<&str> for CompatibilityMode {
    fn from(text: &str) -> Self {
        Self::parse(text)
    }
}

impl FromStr for CompatibilityMode {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl Display for CompatibilityMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", Self::MAJOR, self.minor, self.version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Version_8_3_10", 3, 10)]
    #[case("Version8_1", 1, 0)]
    #[case("Version8_2_16", 2, 16)]
    #[case("DontUse", 3, 99)]
    #[case("Version8", 3, 99)]
    #[case("", 3, 99)]
    #[case("Version_8_99999999999999999999", 3, 99)]
    fn test_parse(#[case] text: &str, #[case] minor: u32, #[case] version: u32) {
        let mode = CompatibilityMode::parse(text);
        assert_eq!(mode.minor(), minor);
        assert_eq!(mode.version(), version);
    }

    #[test]
    fn test_default() {
        let mode = CompatibilityMode::default();
        assert_eq!(CompatibilityMode::MAJOR, 8);
        assert_eq!(mode, CompatibilityMode::new(3, 99));
        assert_eq!(mode.to_string(), "8.3.99");
    }

    #[rstest]
    #[case(CompatibilityMode::new(3, 10), CompatibilityMode::new(3, 11), Ordering::Greater)]
    #[case(CompatibilityMode::new(3, 11), CompatibilityMode::new(3, 10), Ordering::Less)]
    #[case(CompatibilityMode::new(3, 10), CompatibilityMode::new(3, 10), Ordering::Equal)]
    #[case(CompatibilityMode::new(3, 10), CompatibilityMode::from("Version_8_3_10"), Ordering::Equal)]
    #[case(CompatibilityMode::new(3, 11), CompatibilityMode::new(2, 19), Ordering::Less)]
    #[case(CompatibilityMode::new(3, 10), CompatibilityMode::new(2, 19), Ordering::Less)]
    fn test_compare(
        #[case] first: CompatibilityMode,
        #[case] second: CompatibilityMode,
        #[case] expected: Ordering,
    ) {
        assert_eq!(CompatibilityMode::compare(&first, &second), expected);
    }

    #[test]
    fn test_is_at_least() {
        let mode: CompatibilityMode = "Version_8_3_14".parse().unwrap();
        assert!(mode.is_at_least(&CompatibilityMode::new(3, 10)));
        assert!(mode.is_at_least(&CompatibilityMode::new(3, 14)));
        assert!(!mode.is_at_least(&CompatibilityMode::new(3, 20)));
        assert!(!CompatibilityMode::new(2, 19).is_at_least(&mode));
    }
}
