use std::collections::HashMap;

use crate::multi_name::MultiName;

/// Enumeration whose values carry a bilingual name they can be looked up by.
pub trait EnumWithName: Copy + Sized + 'static {
    /// Every value of the enumeration, in declaration order.
    fn values() -> &'static [Self];

    fn name_en(&self) -> &'static str;

    fn name_ru(&self) -> &'static str;

    fn full_name(&self) -> MultiName {
        MultiName::new(self.name_en(), self.name_ru())
    }

    /// Default spelling: Russian when present, English otherwise.
    fn name(&self) -> &'static str {
        let ru = self.name_ru();
        if ru.is_empty() { self.name_en() } else { ru }
    }

    /// Marks the value standing in for anything unrecognised.
    fn is_unknown(&self) -> bool {
        false
    }
}

/// Builds a lookup table from lowercased Russian and English names to enumeration values.
///
/// Unknown values and empty spellings are left out. When two values share a spelling the
/// first one declared wins.
#[must_use]
pub fn compute_keys<T: EnumWithName>() -> HashMap<String, T> {
    let mut keys = HashMap::new();
    for value in T::values().iter().filter(|value| !value.is_unknown()) {
        for name in [value.name_en(), value.name_ru()] {
            if !name.is_empty() {
                keys.entry(name.to_lowercase()).or_insert(*value);
            }
        }
    }
    keys
}
