use std::{collections::HashMap, fmt::Display, sync::LazyLock};

use serde::{Deserialize, Serialize};

use crate::enum_with_name::{EnumWithName, compute_keys};

static KEYS: LazyLock<HashMap<String, AllowedLength>> = LazyLock::new(compute_keys);

/// Whether a string or binary value always has the declared length.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum AllowedLength {
    Fixed,
    #[default]
    Variable,
}

impl AllowedLength {
    /// Looks the value up by name in either language, falling back to `Variable`.
    #[must_use]
    pub fn value_by_name(name: &str) -> Self {
        KEYS.get(&name.to_lowercase()).copied().unwrap_or_default()
    }
}

impl EnumWithName for AllowedLength {
    fn values() -> &'static [Self] {
        &[Self::Fixed, Self::Variable]
    }

    fn name_en(&self) -> &'static str {
        match self {
            Self::Fixed => "Fixed",
            Self::Variable => "Variable",
        }
    }

    fn name_ru(&self) -> &'static str {
        match self {
            Self::Fixed => "Фиксированная",
            Self::Variable => "Переменная",
        }
    }
}

impl Display for AllowedLength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name_en())
    }
}
