use std::{
    collections::HashSet,
    sync::{Arc, LazyLock},
};

use crate::{
    enum_with_name::EnumWithName,
    mdo_reference::MdoReference,
    mdo_type::MdoType,
    qualifiers::{AllowedLength, NumberQualifiers, Qualifier, StringQualifiers},
    value::{PrimitiveValueType, ValueType, ValueTypes},
};

static EMPTY: LazyLock<ValueTypeDescription> = LazyLock::new(|| ValueTypeDescription {
    inner: Arc::new(Inner {
        types: Vec::new(),
        qualifiers: Vec::new(),
        composite: false,
    }),
});

/// Set of types an attribute or a parameter accepts, together with their qualifiers.
///
/// Types are kept sorted by English name and qualifiers by description, both without
/// duplicates, so descriptions listing the same types compare equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueTypeDescription {
    inner: Arc<Inner>,
}

#[derive(Debug, PartialEq, Eq)]
struct Inner {
    types: Vec<ValueType>,
    qualifiers: Vec<Qualifier>,
    composite: bool,
}

impl ValueTypeDescription {
    #[must_use]
    pub fn empty() -> Self {
        EMPTY.clone()
    }

    /// Composite when it lists several types or its only type is itself composite, like `AnyRef`.
    #[must_use]
    pub fn new(types: Vec<ValueType>, qualifiers: Vec<Qualifier>) -> Self {
        if types.is_empty() {
            return Self::empty();
        }
        let types = normalize_types(types);
        let composite = match types.as_slice() {
            [single] => single.is_composite(),
            _ => true,
        };
        Self::build(types, qualifiers, composite)
    }

    #[must_use]
    pub fn with_composite(
        types: Vec<ValueType>,
        qualifiers: Vec<Qualifier>,
        composite: bool,
    ) -> Self {
        if types.is_empty() {
            return Self::empty();
        }
        Self::build(normalize_types(types), qualifiers, composite)
    }

    #[must_use]
    pub fn single(value_type: impl Into<ValueType>) -> Self {
        Self::new(vec![value_type.into()], Vec::new())
    }

    #[must_use]
    pub fn single_qualified(value_type: impl Into<ValueType>, qualifier: impl Into<Qualifier>) -> Self {
        Self::new(vec![value_type.into()], vec![qualifier.into()])
    }

    /// `String` of a variable length; zero means unlimited.
    #[must_use]
    pub fn string(length: u32) -> Self {
        Self::single_qualified(PrimitiveValueType::String, StringQualifiers::new(length))
    }

    #[must_use]
    pub fn string_with(length: u32, allowed_length: AllowedLength) -> Self {
        Self::single_qualified(
            PrimitiveValueType::String,
            StringQualifiers::with_allowed_length(length, allowed_length),
        )
    }

    #[must_use]
    pub fn number(length: u32) -> Self {
        Self::single_qualified(PrimitiveValueType::Number, NumberQualifiers::new(length))
    }

    /// Reference to an object of the given kind, e.g. `CatalogRef.Goods`.
    #[must_use]
    pub fn reference(mdo_type: MdoType, name: &str) -> Self {
        Self::single(ValueTypes::get_or_compute(&format!(
            "{}Ref.{name}",
            mdo_type.name_en()
        )))
    }

    /// Reference type of the object the reference points to.
    #[must_use]
    pub fn from_reference(mdo_reference: &MdoReference) -> Self {
        if mdo_reference.is_empty() {
            return Self::empty();
        }
        Self::single(reference_type(mdo_reference))
    }

    /// Reference types of several objects; empty references are skipped.
    #[must_use]
    pub fn from_references(mdo_references: &[MdoReference]) -> Self {
        let types = mdo_references
            .iter()
            .filter(|mdo_reference| !mdo_reference.is_empty())
            .map(reference_type)
            .collect();
        Self::new(types, Vec::new())
    }

    #[must_use]
    pub fn contains(&self, value_type: &ValueType) -> bool {
        self.inner.types.contains(value_type)
    }

    #[must_use]
    pub fn types(&self) -> &[ValueType] {
        &self.inner.types
    }

    #[must_use]
    pub fn qualifiers(&self) -> &[Qualifier] {
        &self.inner.qualifiers
    }

    #[must_use]
    pub fn is_composite(&self) -> bool {
        self.inner.composite
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        Arc::ptr_eq(&self.inner, &EMPTY.inner)
    }

    fn build(types: Vec<ValueType>, qualifiers: Vec<Qualifier>, composite: bool) -> Self {
        Self {
            inner: Arc::new(Inner {
                types,
                qualifiers: normalize_qualifiers(qualifiers),
                composite,
            }),
        }
    }
}

fn normalize_types(mut types: Vec<ValueType>) -> Vec<ValueType> {
    types.sort_by(|a, b| a.name_en().cmp(b.name_en()));
    let mut seen = HashSet::new();
    types.retain(|value_type| seen.insert(value_type.clone()));
    types
}

fn normalize_qualifiers(qualifiers: Vec<Qualifier>) -> Vec<Qualifier> {
    let mut described = qualifiers
        .into_iter()
        .filter(|qualifier| !qualifier.is_empty())
        .map(|qualifier| (qualifier.description(), qualifier))
        .collect::<Vec<_>>();
    described.sort_by(|(a, _), (b, _)| a.cmp(b));
    let mut seen = HashSet::new();
    described
        .into_iter()
        .filter(|(_, qualifier)| seen.insert(*qualifier))
        .map(|(_, qualifier)| qualifier)
        .collect()
}

/// `Catalog.Goods` becomes `CatalogRef.Goods`.
fn reference_type(mdo_reference: &MdoReference) -> ValueType {
    let name = match mdo_reference.mdo_ref().split_once('.') {
        Some((kind, rest)) => format!("{kind}Ref.{rest}"),
        None => format!("{}Ref", mdo_reference.mdo_ref()),
    };
    ValueTypes::get_or_compute(&name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        multi_name::MultiName,
        qualifiers::DateQualifiers,
        value::{MetadataValueType, V8ValueType},
    };

    #[test]
    fn test_empty() {
        let empty = ValueTypeDescription::empty();
        assert!(empty.is_empty());
        assert!(!empty.is_composite());
        assert!(empty.types().is_empty());
        assert!(empty.qualifiers().is_empty());

        assert!(ValueTypeDescription::new(Vec::new(), Vec::new()).is_empty());
        assert!(ValueTypeDescription::with_composite(Vec::new(), Vec::new(), true).is_empty());
    }

    #[test]
    fn test_types() {
        let description = ValueTypeDescription::new(
            vec![
                PrimitiveValueType::String.into(),
                PrimitiveValueType::Null.into(),
                V8ValueType::ValueStorage.into(),
            ],
            Vec::new(),
        );
        assert!(!description.is_empty());
        assert_eq!(description.types().len(), 3);
        assert!(description.is_composite());
        assert!(description.qualifiers().is_empty());
        assert!(description.contains(&V8ValueType::ValueStorage.into()));
        assert!(!description.contains(&PrimitiveValueType::Date.into()));

        let names = description
            .types()
            .iter()
            .map(ValueType::name_en)
            .collect::<Vec<_>>();
        assert_eq!(names, ["Null", "String", "ValueStorage"]);
    }

    #[test]
    fn test_duplicate_types() {
        let description = ValueTypeDescription::new(
            vec![
                PrimitiveValueType::Number.into(),
                PrimitiveValueType::Number.into(),
            ],
            Vec::new(),
        );
        assert_eq!(description.types().len(), 1);
        assert!(!description.is_composite());
    }

    #[test]
    fn test_single() {
        let description = ValueTypeDescription::single(MetadataValueType::any_ref());
        assert_eq!(description.types().len(), 1);
        assert!(description.is_composite());

        let description = ValueTypeDescription::single(V8ValueType::ValueStorage);
        assert!(!description.is_composite());
        assert!(description.qualifiers().is_empty());

        let description =
            ValueTypeDescription::single_qualified(V8ValueType::ValueStorage, Qualifier::Empty);
        assert!(description.qualifiers().is_empty());
    }

    #[test]
    fn test_qualifiers() {
        let qualifier = Qualifier::from(DateQualifiers::new());

        let description = ValueTypeDescription::single_qualified(V8ValueType::ValueStorage, qualifier);
        assert!(!description.is_composite());
        assert_eq!(description.qualifiers(), &[qualifier]);

        let description = ValueTypeDescription::new(
            vec![
                V8ValueType::ValueStorage.into(),
                V8ValueType::FixedArray.into(),
            ],
            vec![qualifier, Qualifier::Empty, qualifier],
        );
        assert!(description.is_composite());
        assert_eq!(description.types().len(), 2);
        assert_eq!(description.qualifiers(), &[qualifier]);
    }

    #[test]
    fn test_qualifiers_sorted_by_description() {
        let description = ValueTypeDescription::new(
            vec![
                PrimitiveValueType::String.into(),
                PrimitiveValueType::Number.into(),
            ],
            vec![
                StringQualifiers::new(10).into(),
                NumberQualifiers::new(5).into(),
            ],
        );
        let descriptions = description
            .qualifiers()
            .iter()
            .map(|qualifier| qualifier.description().en().to_owned())
            .collect::<Vec<_>>();
        assert_eq!(
            descriptions,
            ["StringQualifiers (10, Variable)", "NumberQualifiers (5.0)"]
        );
    }

    #[test]
    fn test_explicit_composite() {
        let description = ValueTypeDescription::with_composite(
            vec![PrimitiveValueType::Boolean.into()],
            Vec::new(),
            true,
        );
        assert!(description.is_composite());
    }

    #[test]
    fn test_string() {
        let description = ValueTypeDescription::string(1);
        assert!(description.contains(&PrimitiveValueType::String.into()));
        assert!(!description.is_composite());
        assert_eq!(
            description.qualifiers()[0].description().to_string(),
            "MultiName (ru: КвалификаторыСтроки (1, Переменная), en: StringQualifiers (1, Variable))"
        );

        let description = ValueTypeDescription::string_with(1, AllowedLength::Fixed);
        assert_eq!(
            description.qualifiers()[0].description().to_string(),
            "MultiName (ru: КвалификаторыСтроки (1, Фиксированная), en: StringQualifiers (1, Fixed))"
        );
    }

    #[test]
    fn test_number() {
        let description = ValueTypeDescription::number(1);
        assert!(description.contains(&PrimitiveValueType::Number.into()));
        assert!(!description.is_composite());
        assert_eq!(
            description.qualifiers()[0].description(),
            MultiName::new("NumberQualifiers (1.0)", "КвалификаторыЧисла (1.0)")
        );
    }

    #[test]
    fn test_reference() {
        let description = ValueTypeDescription::reference(MdoType::Catalog, "Номенклатура");
        let value_type = &description.types()[0];
        assert_eq!(value_type.name_en(), "CatalogRef.Номенклатура");
        assert_eq!(value_type.name_ru(), "СправочникСсылка.Номенклатура");
        assert_eq!(value_type.kind(), MdoType::Catalog);
        assert!(!description.is_composite());
    }

    #[test]
    fn test_from_reference() {
        let reference = MdoReference::create(MdoType::Document, "Заказ");
        let description = ValueTypeDescription::from_reference(&reference);
        assert_eq!(description.types()[0].name_en(), "DocumentRef.Заказ");
        assert_eq!(description.types()[0].kind(), MdoType::Document);

        assert!(ValueTypeDescription::from_reference(&MdoReference::empty()).is_empty());
    }

    #[test]
    fn test_from_references() {
        let references = [
            MdoReference::create(MdoType::Catalog, "Товары"),
            MdoReference::empty(),
            MdoReference::create(MdoType::Document, "Заказ"),
        ];
        let description = ValueTypeDescription::from_references(&references);
        assert_eq!(description.types().len(), 2);
        assert!(description.is_composite());

        assert!(ValueTypeDescription::from_references(&[]).is_empty());
        assert!(ValueTypeDescription::from_references(&[MdoReference::empty()]).is_empty());
    }
}
