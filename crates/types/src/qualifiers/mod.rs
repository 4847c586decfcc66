//! Constraints attached to primitive types: string length, number precision and so on.

mod allowed_length;
mod binary_data;
mod date;
mod date_fractions;
mod number;
mod string;

use crate::multi_name::MultiName;

pub use allowed_length::AllowedLength;
pub use binary_data::BinaryDataQualifiers;
pub use date::DateQualifiers;
pub use date_fractions::DateFractions;
pub use number::NumberQualifiers;
pub use string::StringQualifiers;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Qualifier {
    Empty,
    String(StringQualifiers),
    Number(NumberQualifiers),
    Date(DateQualifiers),
    BinaryData(BinaryDataQualifiers),
}

impl Qualifier {
    /// Human readable form in both languages, empty for `Empty`.
    #[must_use]
    pub fn description(&self) -> MultiName {
        match self {
            Self::Empty => MultiName::empty(),
            Self::String(qualifiers) => qualifiers.description(),
            Self::Number(qualifiers) => qualifiers.description(),
            Self::Date(qualifiers) => qualifiers.description(),
            Self::BinaryData(qualifiers) => qualifiers.description(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl From<StringQualifiers> for Qualifier {
    fn from(qualifiers: StringQualifiers) -> Self {
        Self::String(qualifiers)
    }
}

impl From<NumberQualifiers> for Qualifier {
    fn from(qualifiers: NumberQualifiers) -> Self {
        Self::Number(qualifiers)
    }
}

impl From<DateQualifiers> for Qualifier {
    fn from(qualifiers: DateQualifiers) -> Self {
        Self::Date(qualifiers)
    }
}

impl From<BinaryDataQualifiers> for Qualifier {
    fn from(qualifiers: BinaryDataQualifiers) -> Self {
        Self::BinaryData(qualifiers)
    }
}
