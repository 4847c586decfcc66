use std::{collections::HashMap, fmt::Display, sync::LazyLock};

use serde::{Deserialize, Serialize};

use crate::enum_with_name::{EnumWithName, compute_keys};

static KEYS: LazyLock<HashMap<String, PrimitiveValueType>> = LazyLock::new(compute_keys);

/// Primitive types of the language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PrimitiveValueType {
    String,
    Date,
    Number,
    Boolean,
    Null,
}

impl PrimitiveValueType {
    #[must_use]
    pub fn value_by_name(name: &str) -> Option<Self> {
        KEYS.get(&name.to_lowercase()).copied()
    }
}

impl EnumWithName for PrimitiveValueType {
    fn values() -> &'static [Self] {
        &[
            Self::String,
            Self::Date,
            Self::Number,
            Self::Boolean,
            Self::Null,
        ]
    }

    fn name_en(&self) -> &'static str {
        match self {
            Self::String => "String",
            Self::Date => "Date",
            Self::Number => "Number",
            Self::Boolean => "Boolean",
            Self::Null => "Null",
        }
    }

    fn name_ru(&self) -> &'static str {
        match self {
            Self::String => "Строка",
            Self::Date => "Дата",
            Self::Number => "Число",
            Self::Boolean => "Булево",
            Self::Null => "Null",
        }
    }
}

impl Display for PrimitiveValueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name_en())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("string", Some(PrimitiveValueType::String))]
    #[case("ЧИСЛО", Some(PrimitiveValueType::Number))]
    #[case("булево", Some(PrimitiveValueType::Boolean))]
    #[case("NULL", Some(PrimitiveValueType::Null))]
    #[case("Тип", None)]
    fn test_value_by_name(#[case] name: &str, #[case] expected: Option<PrimitiveValueType>) {
        assert_eq!(PrimitiveValueType::value_by_name(name), expected);
    }

    #[test]
    fn test_null_has_the_same_spelling() {
        let null = PrimitiveValueType::Null.full_name();
        assert_eq!(null.en(), "Null");
        assert_eq!(null.ru(), "Null");
    }
}
