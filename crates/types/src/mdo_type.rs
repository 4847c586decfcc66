use std::{collections::HashMap, fmt::Display, str::FromStr, sync::LazyLock};

use serde::{Deserialize, Serialize};

use crate::{
    enum_with_name::{EnumWithName, compute_keys},
    error::BslError,
    multi_name::MultiName,
};

macro_rules! mdo_types {
    ($($variant:ident => ($en:literal, $group_en:literal, $ru:literal, $group_ru:literal)),+ $(,)?) => {
        /// Kinds of 1C:Enterprise metadata objects.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum MdoType {
            $($variant),+
        }

        impl MdoType {
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// English name, English group name, Russian name, Russian group name.
            const fn spellings(self) -> [&'static str; 4] {
                match self {
                    $(Self::$variant => [$en, $group_en, $ru, $group_ru]),+
                }
            }
        }
    };
}

mdo_types! {
    AccountingFlag => ("AccountingFlag", "AccountingFlags", "ПризнакУчета", "ПризнакиУчета"),
    AccountingRegister => ("AccountingRegister", "AccountingRegisters", "РегистрБухгалтерии", "РегистрыБухгалтерии"),
    AccumulationRegister => ("AccumulationRegister", "AccumulationRegisters", "РегистрНакопления", "РегистрыНакопления"),
    Attribute => ("Attribute", "Attributes", "Реквизит", "Реквизиты"),
    Bot => ("Bot", "Bots", "Бот", "Боты"),
    BusinessProcess => ("BusinessProcess", "BusinessProcesses", "БизнесПроцесс", "БизнесПроцессы"),
    CalculationRegister => ("CalculationRegister", "CalculationRegisters", "РегистрРасчета", "РегистрыРасчета"),
    Catalog => ("Catalog", "Catalogs", "Справочник", "Справочники"),
    ChartOfAccounts => ("ChartOfAccounts", "ChartsOfAccounts", "ПланСчетов", "ПланыСчетов"),
    ChartOfCalculationTypes => ("ChartOfCalculationTypes", "ChartsOfCalculationTypes", "ПланВидовРасчета", "ПланыВидовРасчета"),
    ChartOfCharacteristicTypes => ("ChartOfCharacteristicTypes", "ChartsOfCharacteristicTypes", "ПланВидовХарактеристик", "ПланыВидовХарактеристик"),
    Column => ("Column", "Columns", "Колонка", "Колонки"),
    Command => ("Command", "Commands", "Команда", "Команды"),
    CommandGroup => ("CommandGroup", "CommandGroups", "ГруппаКоманд", "ГруппыКоманд"),
    CommonAttribute => ("CommonAttribute", "CommonAttributes", "ОбщийРеквизит", "ОбщиеРеквизиты"),
    CommonCommand => ("CommonCommand", "CommonCommands", "ОбщаяКоманда", "ОбщиеКоманды"),
    CommonForm => ("CommonForm", "CommonForms", "ОбщаяФорма", "ОбщиеФормы"),
    CommonModule => ("CommonModule", "CommonModules", "ОбщийМодуль", "ОбщиеМодули"),
    CommonPicture => ("CommonPicture", "CommonPictures", "ОбщаяКартинка", "ОбщиеКартинки"),
    CommonTemplate => ("CommonTemplate", "CommonTemplates", "ОбщийМакет", "ОбщиеМакеты"),
    Configuration => ("Configuration", "", "Конфигурация", ""),
    Constant => ("Constant", "Constants", "Константа", "Константы"),
    DataProcessor => ("DataProcessor", "DataProcessors", "Обработка", "Обработки"),
    DefinedType => ("DefinedType", "DefinedTypes", "ОпределяемыйТип", "ОпределяемыеТипы"),
    Dimension => ("Dimension", "Dimensions", "Измерение", "Измерения"),
    Document => ("Document", "Documents", "Документ", "Документы"),
    DocumentJournal => ("DocumentJournal", "DocumentJournals", "ЖурналДокументов", "ЖурналыДокументов"),
    DocumentNumerator => ("DocumentNumerator", "DocumentNumerators", "НумераторДокументов", "НумераторыДокументов"),
    Enum => ("Enum", "Enums", "Перечисление", "Перечисления"),
    EnumValue => ("EnumValue", "EnumValues", "ЗначениеПеречисления", "ЗначенияПеречисления"),
    EventSubscription => ("EventSubscription", "EventSubscriptions", "ПодпискаНаСобытие", "ПодпискиНаСобытия"),
    ExchangePlan => ("ExchangePlan", "ExchangePlans", "ПланОбмена", "ПланыОбмена"),
    ExternalDataProcessor => ("ExternalDataProcessor", "ExternalDataProcessors", "ВнешняяОбработка", "ВнешниеОбработки"),
    ExternalDataSource => ("ExternalDataSource", "ExternalDataSources", "ВнешнийИсточникДанных", "ВнешниеИсточникиДанных"),
    ExternalDataSourceTable => ("Table", "Tables", "Таблица", "Таблицы"),
    ExternalDataSourceTableField => ("Field", "Fields", "Поле", "Поля"),
    ExternalReport => ("ExternalReport", "ExternalReports", "ВнешнийОтчет", "ВнешниеОтчеты"),
    ExtDimensionAccountingFlag => ("ExtDimensionAccountingFlag", "ExtDimensionAccountingFlags", "ПризнакУчетаСубконто", "ПризнакиУчетаСубконто"),
    FilterCriterion => ("FilterCriterion", "FilterCriteria", "КритерийОтбора", "КритерииОтбора"),
    Form => ("Form", "Forms", "Форма", "Формы"),
    FunctionalOption => ("FunctionalOption", "FunctionalOptions", "ФункциональнаяОпция", "ФункциональныеОпции"),
    FunctionalOptionsParameter => ("FunctionalOptionsParameter", "FunctionalOptionsParameters", "ПараметрФункциональныхОпций", "ПараметрыФункциональныхОпций"),
    HttpService => ("HTTPService", "HTTPServices", "HTTPСервис", "HTTPСервисы"),
    HttpServiceMethod => ("Method", "Methods", "Метод", "Методы"),
    HttpServiceUrlTemplate => ("URLTemplate", "URLTemplates", "ШаблонURL", "ШаблоныURL"),
    InformationRegister => ("InformationRegister", "InformationRegisters", "РегистрСведений", "РегистрыСведений"),
    IntegrationService => ("IntegrationService", "IntegrationServices", "СервисИнтеграции", "СервисыИнтеграции"),
    IntegrationServiceChannel => ("IntegrationServiceChannel", "IntegrationServiceChannels", "КаналСервисаИнтеграции", "Каналы"),
    Interface => ("Interface", "Interfaces", "Интерфейс", "Интерфейсы"),
    Language => ("Language", "Languages", "Язык", "Языки"),
    PaletteColor => ("PaletteColor", "PaletteColors", "ЦветПалитры", "ЦветаПалитры"),
    Recalculation => ("Recalculation", "Recalculations", "Перерасчет", "Перерасчеты"),
    Report => ("Report", "Reports", "Отчет", "Отчеты"),
    Resource => ("Resource", "Resources", "Ресурс", "Ресурсы"),
    Role => ("Role", "Roles", "Роль", "Роли"),
    ScheduledJob => ("ScheduledJob", "ScheduledJobs", "РегламентноеЗадание", "РегламентныеЗадания"),
    Sequence => ("Sequence", "Sequences", "Последовательность", "Последовательности"),
    SessionParameter => ("SessionParameter", "SessionParameters", "ПараметрСеанса", "ПараметрыСеанса"),
    SettingsStorage => ("SettingsStorage", "SettingsStorages", "ХранилищеНастроек", "ХранилищаНастроек"),
    StandardAttribute => ("StandardAttribute", "StandardAttributes", "СтандартныйРеквизит", "СтандартныеРеквизиты"),
    StandardTabularSection => ("StandardTabularSection", "StandardTabularSections", "СтандартнаяТабличнаяЧасть", "СтандартныеТабличныеЧасти"),
    Style => ("Style", "Styles", "Стиль", "Стили"),
    StyleItem => ("StyleItem", "StyleItems", "ЭлементСтиля", "ЭлементыСтиля"),
    Subsystem => ("Subsystem", "Subsystems", "Подсистема", "Подсистемы"),
    TabularSection => ("TabularSection", "TabularSections", "ТабличнаяЧасть", "ТабличныеЧасти"),
    Task => ("Task", "Tasks", "Задача", "Задачи"),
    TaskAddressingAttribute => ("AddressingAttribute", "AddressingAttributes", "РеквизитАдресации", "Реквизиты адресации"),
    Template => ("Template", "Templates", "Макет", "Макеты"),
    Unknown => ("", "", "", ""),
    WebService => ("WebService", "WebServices", "WebСервис", "WebСервисы"),
    WebSocketClient => ("WebSocketClient", "WebSocketClients", "WebSocketКлиент", "WebSocketКлиенты"),
    WsOperation => ("Operation", "Operations", "Операция", "Операции"),
    WsOperationParameter => ("Parameter", "Parameters", "Параметр", "Параметры"),
    WsReference => ("WSReference", "WSReferences", "WSСсылка", "WSСсылки"),
    XdtoPackage => ("XDTOPackage", "XDTOPackages", "ПакетXDTO", "ПакетыXDTO"),
}

/// Kinds that only exist inside an owning object.
const CHILD_TYPES: &[MdoType] = &[
    MdoType::Form,
    MdoType::Command,
    MdoType::Template,
    MdoType::Attribute,
    MdoType::TabularSection,
    MdoType::Recalculation,
    MdoType::WsOperation,
    MdoType::WsOperationParameter,
    MdoType::HttpServiceUrlTemplate,
    MdoType::HttpServiceMethod,
    MdoType::IntegrationServiceChannel,
    MdoType::TaskAddressingAttribute,
    MdoType::Dimension,
    MdoType::Resource,
    MdoType::EnumValue,
    MdoType::Column,
    MdoType::AccountingFlag,
    MdoType::ExtDimensionAccountingFlag,
    MdoType::StandardAttribute,
    MdoType::StandardTabularSection,
    MdoType::ExternalDataSourceTable,
    MdoType::ExternalDataSourceTableField,
];

static KEYS: LazyLock<HashMap<String, MdoType>> = LazyLock::new(|| {
    let mut keys = compute_keys::<MdoType>();
    for mdo_type in MdoType::ALL.iter().filter(|t| !t.is_unknown()) {
        for name in [mdo_type.group_name(), mdo_type.group_name_ru()] {
            if !name.is_empty() {
                keys.entry(name.to_lowercase()).or_insert(*mdo_type);
            }
        }
    }
    keys
});

impl MdoType {
    /// English name of the kind's group, e.g. `Catalogs`.
    #[must_use]
    pub const fn group_name(&self) -> &'static str {
        self.spellings()[1]
    }

    #[must_use]
    pub const fn group_name_ru(&self) -> &'static str {
        self.spellings()[3]
    }

    #[must_use]
    pub fn full_group_name(&self) -> MultiName {
        MultiName::new(self.group_name(), self.group_name_ru())
    }

    #[must_use]
    pub fn is_child(&self) -> bool {
        CHILD_TYPES.contains(self)
    }

    /// Every kind except the child kinds and `Unknown`.
    #[must_use]
    pub fn values_without_children() -> Vec<Self> {
        Self::ALL
            .iter()
            .filter(|mdo_type| !mdo_type.is_child() && !mdo_type.is_unknown())
            .copied()
            .collect()
    }

    /// Finds a kind by its singular or group name in either language, ignoring case.
    #[must_use]
    pub fn from_value(name: &str) -> Option<Self> {
        KEYS.get(&name.to_lowercase()).copied()
    }

    /// Same lookup as [`MdoType::from_value`], falling back to `Unknown`.
    #[must_use]
    pub fn value_by_name(name: &str) -> Self {
        Self::from_value(name).unwrap_or(Self::Unknown)
    }
}

impl EnumWithName for MdoType {
    fn values() -> &'static [Self] {
        Self::ALL
    }

    fn name_en(&self) -> &'static str {
        self.spellings()[0]
    }

    fn name_ru(&self) -> &'static str {
        self.spellings()[2]
    }

    fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }
}

impl FromStr for MdoType {
    type Err = BslError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_value(s).ok_or_else(|| BslError::UnknownMdoType(s.to_owned()))
    }
}

impl Display for MdoType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name_en())
    }
}
