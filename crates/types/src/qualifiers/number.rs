use serde::{Deserialize, Serialize};

use crate::multi_name::MultiName;

/// Number qualifiers. Ordered by precision, then scale, then non-negativity.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub struct NumberQualifiers {
    precision: u32,
    scale: u32,
    non_negative: bool,
}

impl NumberQualifiers {
    #[must_use]
    pub fn new(precision: u32) -> Self {
        Self::full(precision, 0, false)
    }

    #[must_use]
    pub fn with_scale(precision: u32, scale: u32) -> Self {
        Self::full(precision, scale, false)
    }

    #[must_use]
    pub fn full(precision: u32, scale: u32, non_negative: bool) -> Self {
        Self {
            precision,
            scale,
            non_negative,
        }
    }

    #[must_use]
    pub fn precision(&self) -> u32 {
        self.precision
    }

    #[must_use]
    pub fn scale(&self) -> u32 {
        self.scale
    }

    #[must_use]
    pub fn is_non_negative(&self) -> bool {
        self.non_negative
    }

    #[must_use]
    pub fn description(&self) -> MultiName {
        let (suffix_en, suffix_ru) = if self.non_negative {
            (" nonneg", " неотр")
        } else {
            ("", "")
        };
        MultiName::new(
            &format!(
                "NumberQualifiers ({}.{}{suffix_en})",
                self.precision, self.scale
            ),
            &format!(
                "КвалификаторыЧисла ({}.{}{suffix_ru})",
                self.precision, self.scale
            ),
        )
    }
}
