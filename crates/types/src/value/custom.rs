use std::{
    collections::HashMap,
    fmt::Display,
    sync::{LazyLock, PoisonError, RwLock},
};

use crate::multi_name::MultiName;

static CUSTOM_TYPES: LazyLock<RwLock<HashMap<String, CustomValueType>>> =
    LazyLock::new(|| RwLock::new(HashMap::new()));

/// Type known only by its name, e.g. a type provided by an external component.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CustomValueType {
    full_name: MultiName,
}

impl CustomValueType {
    /// Returns the type with this name, creating it on first use. Names are compared without case.
    #[must_use]
    pub fn create(name: &str) -> Self {
        let key = name.to_lowercase();
        if let Some(found) = Self::value_by_name(&key) {
            return found;
        }
        CUSTOM_TYPES
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(key)
            .or_insert_with(|| Self {
                full_name: MultiName::from(name),
            })
            .clone()
    }

    /// A type created earlier under this name.
    #[must_use]
    pub fn value_by_name(name: &str) -> Option<Self> {
        CUSTOM_TYPES
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&name.to_lowercase())
            .cloned()
    }

    #[must_use]
    pub fn full_name(&self) -> &MultiName {
        &self.full_name
    }
}

impl Display for CustomValueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.full_name.get())
    }
}
