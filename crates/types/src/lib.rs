//! # bsl-common-types
//!
//! Shared vocabulary of 1C:Enterprise (BSL) tooling.
//!
//! Provides bilingual names, metadata kinds, module kinds, references to metadata objects,
//! value types with their qualifiers and value type descriptions. Every lookup by name is
//! case-insensitive and accepts both the Russian and the English spelling. Names, references
//! and computed value types are interned process-wide.

pub mod enum_with_name;
pub mod error;
mod intern;
pub mod mdo_reference;
pub mod mdo_type;
pub mod module_type;
pub mod multi_language_string;
pub mod multi_name;
pub mod qualifiers;
pub mod script_variant;
pub mod value;
pub mod value_type_description;

pub use enum_with_name::{EnumWithName, compute_keys};
pub use error::{BslError, Result};
pub use mdo_reference::MdoReference;
pub use mdo_type::MdoType;
pub use module_type::ModuleType;
pub use multi_language_string::MultiLanguageString;
pub use multi_name::MultiName;
pub use qualifiers::{AllowedLength, DateFractions, Qualifier};
pub use script_variant::ScriptVariant;
pub use value::{ValueType, ValueTypeVariant, ValueTypes};
pub use value_type_description::ValueTypeDescription;
