use std::{
    collections::HashMap,
    fmt::Display,
    sync::{LazyLock, PoisonError, RwLock},
};

use tracing::debug;

use crate::{enum_with_name::EnumWithName, mdo_type::MdoType, multi_name::MultiName};

const REGISTERS: &[MdoType] = &[
    MdoType::AccountingRegister,
    MdoType::AccumulationRegister,
    MdoType::CalculationRegister,
    MdoType::InformationRegister,
];

const REFERENCES: &[MdoType] = &[
    MdoType::BusinessProcess,
    MdoType::Catalog,
    MdoType::ChartOfAccounts,
    MdoType::ChartOfCalculationTypes,
    MdoType::ChartOfCharacteristicTypes,
    MdoType::Document,
    MdoType::ExchangePlan,
    MdoType::Task,
];

const REPORTS_AND_DATA_PROCESSORS: &[MdoType] = &[MdoType::DataProcessor, MdoType::Report];

static BUILTIN_TYPES: LazyLock<Vec<MetadataValueType>> = LazyLock::new(compute_builtin_types);

/// Prefixes that may be followed by `.ObjectName`, keyed by both lowercased spellings.
static VARIANTS: LazyLock<HashMap<String, Variant>> = LazyLock::new(compute_variants);

/// Built-in types and every type computed from a prefix so far.
static PROVIDED_TYPES: LazyLock<RwLock<HashMap<String, MetadataValueType>>> =
    LazyLock::new(|| {
        let mut types = HashMap::new();
        for value_type in BUILTIN_TYPES.iter() {
            types.insert(value_type.full_name.en().to_lowercase(), value_type.clone());
            types.insert(value_type.full_name.ru().to_lowercase(), value_type.clone());
        }
        RwLock::new(types)
    });

/// Type derived from the configuration's metadata, e.g. `CatalogRef` or `CatalogRef.Goods`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MetadataValueType {
    kind: MdoType,
    full_name: MultiName,
    composite: bool,
}

#[derive(Debug, Clone)]
struct Variant {
    name_en: String,
    name_ru: String,
    kind: MdoType,
}

impl MetadataValueType {
    fn new(kind: MdoType, name_en: &str, name_ru: &str, composite: bool) -> Self {
        Self {
            kind,
            full_name: MultiName::new(name_en, name_ru),
            composite,
        }
    }

    /// `AnyRef`, a reference to any object of the configuration.
    #[must_use]
    pub fn any_ref() -> Self {
        BUILTIN_TYPES[0].clone()
    }

    /// Types that exist in every configuration, such as `CatalogRef` or `ConstantsSet`.
    #[must_use]
    pub fn builtin_types() -> &'static [Self] {
        &BUILTIN_TYPES
    }

    /// Resolves a type by name, ignoring case.
    ///
    /// Besides the built-in types, accepts `Prefix.ObjectName` where the prefix is a built-in
    /// type or another kind of metadata type (`DefinedType`, `Characteristic`, ...) written in
    /// either language. Such types are created on first use and remembered.
    #[must_use]
    pub fn from_string(name: &str) -> Option<Self> {
        let key = name.to_lowercase();
        if let Some(found) = PROVIDED_TYPES
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
        {
            return Some(found.clone());
        }

        let (prefix, object_name) = name.split_once('.')?;
        if prefix.is_empty() {
            return None;
        }
        let variant = VARIANTS.get(&prefix.to_lowercase())?;
        let created = Self::new(
            variant.kind,
            &format!("{}.{object_name}", variant.name_en),
            &format!("{}.{object_name}", variant.name_ru),
            false,
        );

        let mut types = PROVIDED_TYPES
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let value_type = types.entry(key).or_insert_with(|| created.clone()).clone();
        types
            .entry(value_type.full_name.en().to_lowercase())
            .or_insert_with(|| value_type.clone());
        types
            .entry(value_type.full_name.ru().to_lowercase())
            .or_insert_with(|| value_type.clone());
        debug!(name = value_type.full_name.en(), kind = %value_type.kind, "metadata value type computed");
        Some(value_type)
    }

    #[must_use]
    pub fn kind(&self) -> MdoType {
        self.kind
    }

    #[must_use]
    pub fn full_name(&self) -> &MultiName {
        &self.full_name
    }

    /// Whether the type stands for a whole family, e.g. `DocumentRef` rather than
    /// `DocumentRef.Invoice`.
    #[must_use]
    pub fn is_composite(&self) -> bool {
        self.composite
    }
}

impl Display for MetadataValueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.full_name.get())
    }
}

fn suffixed(kind: MdoType, suffix_en: &str, suffix_ru: &str) -> MetadataValueType {
    MetadataValueType::new(
        kind,
        &format!("{}{suffix_en}", kind.name_en()),
        &format!("{}{suffix_ru}", kind.name_ru()),
        true,
    )
}

fn compute_builtin_types() -> Vec<MetadataValueType> {
    let mut types = vec![MetadataValueType::new(
        MdoType::Configuration,
        "AnyRef",
        "ЛюбаяСсылка",
        true,
    )];

    for kind in REGISTERS {
        types.push(suffixed(*kind, "RecordManager", "МенеджерЗаписи"));
        types.push(suffixed(*kind, "RecordSet", "НаборЗаписей"));
    }

    for kind in REFERENCES {
        types.push(suffixed(*kind, "Manager", "Менеджер"));
        types.push(suffixed(*kind, "Object", "Объект"));
        types.push(suffixed(*kind, "Ref", "Ссылка"));
    }

    for kind in REPORTS_AND_DATA_PROCESSORS {
        types.push(suffixed(*kind, "Manager", "Менеджер"));
        types.push(suffixed(*kind, "Object", "Объект"));
    }

    types.push(suffixed(MdoType::DocumentJournal, "Manager", "Менеджер"));
    types.push(suffixed(MdoType::Enum, "Ref", "Ссылка"));
    types.push(suffixed(MdoType::ExternalDataProcessor, "Object", "Объект"));
    types.push(suffixed(MdoType::ExternalReport, "Object", "Объект"));
    types.push(suffixed(MdoType::Recalculation, "RecordManager", "МенеджерЗаписи"));
    types.push(suffixed(MdoType::Sequence, "RecordManager", "МенеджерЗаписи"));
    types.push(suffixed(MdoType::Constant, "ValueManager", "МенеджерЗначения"));
    types.push(MetadataValueType::new(
        MdoType::Constant,
        &format!("{}Set", MdoType::Constant.group_name()),
        &format!("{}Набор", MdoType::Constant.group_name_ru()),
        true,
    ));
    types.push(MetadataValueType::new(
        MdoType::BusinessProcess,
        &format!("{}RoutePointRef", MdoType::BusinessProcess.name_en()),
        "ТочкаМаршрутаБизнесПроцессаСсылка",
        true,
    ));

    types
}

fn compute_variants() -> HashMap<String, Variant> {
    let mut variants = HashMap::new();
    let mut add = |kind: MdoType, name_en: String, name_ru: String| {
        let variant = Variant {
            name_en,
            name_ru,
            kind,
        };
        variants.insert(variant.name_ru.to_lowercase(), variant.clone());
        variants.insert(variant.name_en.to_lowercase(), variant);
    };

    for value_type in BUILTIN_TYPES.iter() {
        add(
            value_type.kind,
            value_type.full_name.en().to_owned(),
            value_type.full_name.ru().to_owned(),
        );
    }

    add(
        MdoType::DefinedType,
        MdoType::DefinedType.name_en().to_owned(),
        MdoType::DefinedType.name_ru().to_owned(),
    );
    add(
        MdoType::ChartOfCharacteristicTypes,
        "Characteristic".to_owned(),
        "Характеристика".to_owned(),
    );

    let suffixes = [
        (MdoType::InformationRegister, "List", "Список"),
        (MdoType::Enum, "List", "Список"),
        (MdoType::ExternalDataSource, "TableRef", "ТаблицаСсылка"),
        (MdoType::ExternalDataSource, "TableObject", "ТаблицаОбъект"),
        (MdoType::ExternalDataSource, "TableRecordManager", "ТаблицаМенеджерЗаписи"),
        (MdoType::ExternalDataSource, "CubeDimensionTableRef", "КубТаблицаИзмеренийСсылка"),
        (MdoType::ExternalDataSource, "CubeDimensionTableObject", "КубТаблицаИзмеренийОбъект"),
    ];
    for (kind, suffix_en, suffix_ru) in suffixes {
        add(
            kind,
            format!("{}{suffix_en}", kind.name_en()),
            format!("{}{suffix_ru}", kind.name_ru()),
        );
    }

    variants
}
