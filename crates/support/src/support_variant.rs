use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// How strongly an object of a configuration is bound to its vendor's version.
///
/// A lower priority number means stronger support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SupportVariant {
    NotEditable,
    EditableSupportEnabled,
    NotSupported,
    None,
}

impl SupportVariant {
    pub const ALL: &'static [Self] = &[
        Self::NotEditable,
        Self::EditableSupportEnabled,
        Self::NotSupported,
        Self::None,
    ];

    #[must_use]
    pub const fn priority(&self) -> i32 {
        match self {
            Self::NotEditable => 0,
            Self::EditableSupportEnabled => 1,
            Self::NotSupported => 2,
            Self::None => 99,
        }
    }

    /// Strongest variant among the given ones, `None` when there are none.
    pub fn max_of(variants: impl IntoIterator<Item = Self>) -> Self {
        variants
            .into_iter()
            .min_by_key(Self::priority)
            .unwrap_or(Self::None)
    }

    /// Stronger of the two variants; `first` wins a tie.
    #[must_use]
    pub const fn max(first: Self, second: Self) -> Self {
        if first.priority() <= second.priority() {
            first
        } else {
            second
        }
    }

    /// Variant with the given priority, `None` for unknown numbers.
    #[must_use]
    pub fn from_priority(priority: i32) -> Self {
        Self::ALL
            .iter()
            .find(|variant| variant.priority() == priority)
            .copied()
            .unwrap_or(Self::None)
    }
}

impl Display for SupportVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::NotEditable => "NOT_EDITABLE",
            Self::EditableSupportEnabled => "EDITABLE_SUPPORT_ENABLED",
            Self::NotSupported => "NOT_SUPPORTED",
            Self::None => "NONE",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(&[SupportVariant::EditableSupportEnabled, SupportVariant::NotSupported], SupportVariant::EditableSupportEnabled)]
    #[case(&[SupportVariant::EditableSupportEnabled, SupportVariant::NotEditable], SupportVariant::NotEditable)]
    #[case(&[SupportVariant::None, SupportVariant::NotSupported], SupportVariant::NotSupported)]
    #[case(&[], SupportVariant::None)]
    fn test_max_of(#[case] variants: &[SupportVariant], #[case] expected: SupportVariant) {
        assert_eq!(SupportVariant::max_of(variants.iter().copied()), expected);
    }

    #[rstest]
    #[case(SupportVariant::NotEditable, SupportVariant::NotSupported, SupportVariant::NotEditable)]
    #[case(SupportVariant::NotEditable, SupportVariant::None, SupportVariant::NotEditable)]
    #[case(SupportVariant::NotEditable, SupportVariant::EditableSupportEnabled, SupportVariant::NotEditable)]
    #[case(SupportVariant::NotEditable, SupportVariant::NotEditable, SupportVariant::NotEditable)]
    #[case(SupportVariant::NotSupported, SupportVariant::None, SupportVariant::NotSupported)]
    #[case(SupportVariant::EditableSupportEnabled, SupportVariant::NotSupported, SupportVariant::EditableSupportEnabled)]
    #[case(SupportVariant::EditableSupportEnabled, SupportVariant::None, SupportVariant::EditableSupportEnabled)]
    #[case(SupportVariant::None, SupportVariant::NotSupported, SupportVariant::NotSupported)]
    #[case(SupportVariant::None, SupportVariant::None, SupportVariant::None)]
    #[case(SupportVariant::NotSupported, SupportVariant::EditableSupportEnabled, SupportVariant::EditableSupportEnabled)]
    fn test_max(
        #[case] first: SupportVariant,
        #[case] second: SupportVariant,
        #[case] expected: SupportVariant,
    ) {
        assert_eq!(SupportVariant::max(first, second), expected);
    }

    #[rstest]
    #[case(0, SupportVariant::NotEditable)]
    #[case(1, SupportVariant::EditableSupportEnabled)]
    #[case(2, SupportVariant::NotSupported)]
    #[case(99, SupportVariant::None)]
    #[case(-1, SupportVariant::None)]
    #[case(3, SupportVariant::None)]
    fn test_from_priority(#[case] priority: i32, #[case] expected: SupportVariant) {
        assert_eq!(SupportVariant::from_priority(priority), expected);
    }

    #[test]
    fn test_serde() {
        let json = serde_json::to_string(&SupportVariant::EditableSupportEnabled).unwrap();
        assert_eq!(json, r#""EDITABLE_SUPPORT_ENABLED""#);
        assert_eq!(SupportVariant::NotEditable.to_string(), "NOT_EDITABLE");
    }
}
