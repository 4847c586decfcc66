use std::{collections::HashMap, fmt::Display, sync::LazyLock};

use serde::{Deserialize, Serialize};

use crate::enum_with_name::{EnumWithName, compute_keys};

static KEYS: LazyLock<HashMap<String, DateFractions>> = LazyLock::new(compute_keys);

/// Parts of a date a value keeps.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum DateFractions {
    Date,
    #[default]
    DateTime,
    Time,
}

impl DateFractions {
    /// Looks the value up by name in either language, falling back to `DateTime`.
    #[must_use]
    pub fn value_by_name(name: &str) -> Self {
        KEYS.get(&name.to_lowercase()).copied().unwrap_or_default()
    }
}

impl EnumWithName for DateFractions {
    fn values() -> &'static [Self] {
        &[Self::Date, Self::DateTime, Self::Time]
    }

    fn name_en(&self) -> &'static str {
        match self {
            Self::Date => "Date",
            Self::DateTime => "DateTime",
            Self::Time => "Time",
        }
    }

    fn name_ru(&self) -> &'static str {
        match self {
            Self::Date => "Дата",
            Self::DateTime => "ДатаВремя",
            Self::Time => "Время",
        }
    }
}

impl Display for DateFractions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name_en())
    }
}
