use std::{
    collections::HashMap,
    sync::{LazyLock, PoisonError, RwLock},
};

use tracing::{debug, trace};

use crate::enum_with_name::EnumWithName;

use super::{CustomValueType, MetadataValueType, PrimitiveValueType, V8ValueType, ValueType};

static TYPES: LazyLock<RwLock<HashMap<String, ValueType>>> = LazyLock::new(|| {
    let mut types = HashMap::new();
    let builtins = PrimitiveValueType::values()
        .iter()
        .map(|value| ValueType::from(*value))
        .chain(V8ValueType::values().iter().map(|value| ValueType::from(*value)))
        .chain(
            MetadataValueType::builtin_types()
                .iter()
                .cloned()
                .map(ValueType::from),
        );
    for value_type in builtins {
        register(&mut types, &value_type);
    }
    RwLock::new(types)
});

/// Process-wide lookup of value types by name.
pub struct ValueTypes;

impl ValueTypes {
    /// Known type with this name in either language, compared without case.
    #[must_use]
    pub fn get(name: &str) -> Option<ValueType> {
        let found = TYPES
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&name.to_lowercase())
            .cloned();
        if found.is_some() {
            trace!(name, "value type found");
        }
        found
    }

    /// Known type with this name, or a new one computed from it.
    ///
    /// Names of the `Prefix.ObjectName` form become metadata types, anything else becomes a
    /// custom type. The result is remembered under both spellings.
    #[must_use]
    pub fn get_or_compute(name: &str) -> ValueType {
        if let Some(found) = Self::get(name) {
            return found;
        }

        let computed = MetadataValueType::from_string(name).map_or_else(
            || ValueType::from(CustomValueType::create(name)),
            ValueType::from,
        );

        let mut types = TYPES.write().unwrap_or_else(PoisonError::into_inner);
        let value_type = types
            .entry(name.to_lowercase())
            .or_insert_with(|| computed.clone())
            .clone();
        register(&mut types, &value_type);
        debug!(
            name = value_type.name(),
            variant = ?value_type.variant(),
            "value type computed"
        );
        value_type
    }
}

fn register(types: &mut HashMap<String, ValueType>, value_type: &ValueType) {
    for name in [value_type.name_en(), value_type.name_ru()] {
        if !name.is_empty() {
            types
                .entry(name.to_lowercase())
                .or_insert_with(|| value_type.clone());
        }
    }
}
