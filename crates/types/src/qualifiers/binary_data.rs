use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::{enum_with_name::EnumWithName, multi_name::MultiName};

use super::AllowedLength;

/// Binary data qualifiers; the length is counted in base64 characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BinaryDataQualifiers {
    length: u32,
    allowed_length: AllowedLength,
}

impl BinaryDataQualifiers {
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
                "BinaryDataQualifiers ({}, {})",
                self.length,
                self.allowed_length.name_en()
            ),
            &format!(
                "КвалификаторыДвоичныхДанных ({}, {})",
                self.length,
                self.allowed_length.name_ru()
            ),
        )
    }
}

impl PartialOrd for BinaryDataQualifiers {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BinaryDataQualifiers {
    fn cmp(&self, other: &Self) -> Ordering {
        self.allowed_length
            .full_name()
            .cmp(&other.allowed_length.full_name())
            .then_with(|| self.length.cmp(&other.length))
    }
}
