use serde::{Deserialize, Serialize};

use crate::{enum_with_name::EnumWithName, multi_name::MultiName};

use super::AllowedLength;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StringQualifiers {
    length: u32,
    allowed_length: AllowedLength,
}

impl StringQualifiers {
    /// Qualifier of a variable-length string; zero length means unlimited.
    #[must_use]
    pub fn new(length: u32) -> Self {
        Self::with_allowed_length(length, AllowedLength::Variable)
    }

    #[must_use]
    pub fn with_allowed_length(length: u32, allowed_length: AllowedLength) -> Self {
        Self {
            length,
            allowed_length,
        }
    }

    #[must_use]
    pub fn length(&self) -> u32 {
        self.length
    }

    #[must_use]
    pub fn allowed_length(&self) -> AllowedLength {
        self.allowed_length
    }

    #[must_use]
    pub fn description(&self) -> MultiName {
        MultiName::new(
            &format!(
                "StringQualifiers ({}, {})",
                self.length,
                self.allowed_length.name_en()
            ),
            &format!(
                "КвалификаторыСтроки ({}, {})",
                self.length,
                self.allowed_length.name_ru()
            ),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create() {
        let qualifiers = StringQualifiers::new(10);
        assert_eq!(qualifiers.length(), 10);
        assert_eq!(qualifiers.allowed_length(), AllowedLength::Variable);
        assert_eq!(qualifiers.description().en(), "StringQualifiers (10, Variable)");
        assert_eq!(qualifiers.description().ru(), "КвалификаторыСтроки (10, Переменная)");

        let fixed = StringQualifiers::with_allowed_length(3, AllowedLength::Fixed);
        assert_eq!(fixed.allowed_length(), AllowedLength::Fixed);
        assert_eq!(fixed.description().en(), "StringQualifiers (3, Fixed)");
    }
}
