use std::{collections::HashMap, fmt::Display, sync::LazyLock};

use serde::{Deserialize, Serialize};

use crate::enum_with_name::{EnumWithName, compute_keys};

static KEYS: LazyLock<HashMap<String, ScriptVariant>> = LazyLock::new(|| {
    let mut keys = compute_keys::<ScriptVariant>();
    for variant in ScriptVariant::values().iter().filter(|v| !v.is_unknown()) {
        keys.insert(variant.short_name().to_lowercase(), *variant);
    }
    keys
});

/// Language the code of a configuration is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ScriptVariant {
    English,
    Russian,
    Unknown,
}

impl ScriptVariant {
    #[must_use]
    pub const fn short_name(&self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Russian => "ru",
            Self::Unknown => "--",
        }
    }

    /// Finds a variant by its Russian, English or short name, ignoring case.
    ///
    /// Falls back to `Russian` for anything unrecognised.
    #[must_use]
    pub fn value_by_name(name: &str) -> Self {
        KEYS.get(&name.to_lowercase())
            .copied()
            .unwrap_or(Self::Russian)
    }
}

impl EnumWithName for ScriptVariant {
    fn values() -> &'static [Self] {
        &[Self::English, Self::Russian, Self::Unknown]
    }

    fn name_en(&self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Russian => "Russian",
            Self::Unknown => "unknown",
        }
    }

    fn name_ru(&self) -> &'static str {
        match self {
            Self::English => "Английский",
            Self::Russian => "Русский",
            Self::Unknown => "неизвестный",
        }
    }

    fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }
}

impl Display for ScriptVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name_en())
    }
}
