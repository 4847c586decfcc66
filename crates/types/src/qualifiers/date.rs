use serde::{Deserialize, Serialize};

use crate::{enum_with_name::EnumWithName, multi_name::MultiName};

use super::DateFractions;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateQualifiers {
    date_fractions: DateFractions,
}

impl DateQualifiers {
    /// Qualifier keeping both the date and the time.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_fractions(date_fractions: DateFractions) -> Self {
        Self { date_fractions }
    }

    #[must_use]
    pub fn date_fractions(&self) -> DateFractions {
        self.date_fractions
    }

    #[must_use]
    pub fn description(&self) -> MultiName {
        MultiName::new(
            &format!("DateQualifiers ({})", self.date_fractions.name_en()),
            &format!("КвалификаторыДаты ({})", self.date_fractions.name_ru()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create() {
        let qualifiers = DateQualifiers::new();
        assert_eq!(qualifiers.date_fractions(), DateFractions::DateTime);
        assert_eq!(qualifiers.description().en(), "DateQualifiers (DateTime)");
        assert_eq!(qualifiers.description().ru(), "КвалификаторыДаты (ДатаВремя)");

        let qualifiers = DateQualifiers::with_fractions(DateFractions::Date);
        assert_eq!(qualifiers.date_fractions(), DateFractions::Date);
    }
}
