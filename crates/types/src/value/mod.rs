//! Types a value of the language can have.

pub mod custom;
pub mod metadata;
pub mod primitive;
mod registry;
pub mod v8;

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::{enum_with_name::EnumWithName, mdo_type::MdoType, multi_name::MultiName};

pub use custom::CustomValueType;
pub use metadata::MetadataValueType;
pub use primitive::PrimitiveValueType;
pub use registry::ValueTypes;
pub use v8::V8ValueType;

/// Family a value type belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueTypeVariant {
    Primitive,
    V8,
    Metadata,
    Form,
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ValueType {
    Primitive(PrimitiveValueType),
    V8(V8ValueType),
    Metadata(MetadataValueType),
    Custom(CustomValueType),
}

impl ValueType {
    #[must_use]
    pub fn full_name(&self) -> MultiName {
        match self {
            Self::Primitive(value) => value.full_name(),
            Self::V8(value) => value.full_name(),
            Self::Metadata(value) => value.full_name().clone(),
            Self::Custom(value) => value.full_name().clone(),
        }
    }

    /// Russian name when there is one, English otherwise.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Primitive(value) => value.name(),
            Self::V8(value) => value.name(),
            Self::Metadata(value) => value.full_name().get(),
            Self::Custom(value) => value.full_name().get(),
        }
    }

    #[must_use]
    pub fn name_en(&self) -> &str {
        match self {
            Self::Primitive(value) => value.name_en(),
            Self::V8(value) => value.name_en(),
            Self::Metadata(value) => value.full_name().en(),
            Self::Custom(value) => value.full_name().en(),
        }
    }

    #[must_use]
    pub fn name_ru(&self) -> &str {
        match self {
            Self::Primitive(value) => value.name_ru(),
            Self::V8(value) => value.name_ru(),
            Self::Metadata(value) => value.full_name().ru(),
            Self::Custom(value) => value.full_name().ru(),
        }
    }

    #[must_use]
    pub fn variant(&self) -> ValueTypeVariant {
        match self {
            Self::Primitive(_) => ValueTypeVariant::Primitive,
            Self::V8(_) => ValueTypeVariant::V8,
            Self::Metadata(_) => ValueTypeVariant::Metadata,
            Self::Custom(_) => ValueTypeVariant::Unknown,
        }
    }

    /// Metadata kind the type is derived from, `Unknown` for everything but metadata types.
    #[must_use]
    pub fn kind(&self) -> MdoType {
        match self {
            Self::Metadata(value) => value.kind(),
            _ => MdoType::Unknown,
        }
    }

    #[must_use]
    pub fn is_composite(&self) -> bool {
        match self {
            Self::Metadata(value) => value.is_composite(),
            _ => false,
        }
    }
}

impl From<PrimitiveValueType> for ValueType {
    fn from(value: PrimitiveValueType) -> Self {
        Self::Primitive(value)
    }
}

impl From<V8ValueType> for ValueType {
    fn from(value: V8ValueType) -> Self {
        Self::V8(value)
    }
}

impl From<MetadataValueType> for ValueType {
    fn from(value: MetadataValueType) -> Self {
        Self::Metadata(value)
    }
}

impl From<CustomValueType> for ValueType {
    fn from(value: CustomValueType) -> Self {
        Self::Custom(value)
    }
}

impl Display for ValueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
