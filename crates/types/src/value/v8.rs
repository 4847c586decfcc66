use std::{collections::HashMap, fmt::Display, sync::LazyLock};

use serde::{Deserialize, Serialize};

use crate::enum_with_name::{EnumWithName, compute_keys};

macro_rules! v8_value_types {
    ($($variant:ident => ($en:literal, $ru:literal)),+ $(,)?) => {
        /// Types provided by the 1C:Enterprise 8 platform.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum V8ValueType {
            $($variant),+
        }

        impl EnumWithName for V8ValueType {
            fn values() -> &'static [Self] {
                &[$(Self::$variant),+]
            }

            fn name_en(&self) -> &'static str {
                match self {
                    $(Self::$variant => $en),+
                }
            }

            fn name_ru(&self) -> &'static str {
                match self {
                    $(Self::$variant => $ru),+
                }
            }
        }
    };
}

v8_value_types! {
    AccountingRecordType => ("AccountingRecordType", "ВидДвиженияБухгалтерии"),
    AccumulationRecordType => ("AccumulationRecordType", "ВидДвиженияНакопления"),
    Chart => ("Chart", "Диаграмма"),
    Color => ("Color", "Цвет"),
    ComparisonType => ("ComparisonType", "ВидСравнения"),
    DataAnalysisTimeIntervalUnitType => ("DataAnalysisTimeIntervalUnitType", "ТипЕдиницыИнтервалаВремениАнализаДанных"),
    DataCompositionSettingsComposer => ("DataCompositionSettingsComposer", "КомпоновщикНастроекКомпоновкиДанных"),
    DynamicList => ("DynamicList", "ДинамическийСписок"),
    Filter => ("Filter", "Отбор"),
    FixedArray => ("FixedArray", "ФиксированныйМассив"),
    FixedMap => ("FixedMap", "ФиксированноеСоответствие"),
    FixedStructure => ("FixedStructure", "ФиксированнаяСтруктура"),
    Font => ("Font", "Шрифт"),
    FormattedDocument => ("FormattedDocument", "ФорматированныйДокумент"),
    FormattedString => ("FormattedString", "ФорматированнаяСтрока"),
    GanttChart => ("GanttChart", "ДиаграммаГанта"),
    GeographicalSchema => ("GeographicalSchema", "ГеографическаяСхема"),
    GraphicalSchema => ("GraphicalSchema", "ГрафическаяСхема"),
    Order => ("Order", "Порядок"),
    PdfDocument => ("PDFDocument", "PDFДокумент"),
    Picture => ("Picture", "Картинка"),
    Planner => ("Planner", "Планировщик"),
    ReportBuilder => ("ReportBuilder", "ПостроительОтчета"),
    SettingsComposer => ("SettingsComposer", "НастройкиКомпоновщика"),
    SizeChangeMode => ("SizeChangeMode", "РежимИзмененияРазмера"),
    SpreadsheetDocument => ("SpreadsheetDocument", "ТабличныйДокумент"),
    StandardBeginningDate => ("StandardBeginningDate", "СтандартнаяДатаНачала"),
    StandardPeriod => ("StandardPeriod", "СтандартныйПериод"),
    TextDocument => ("TextDocument", "ТекстовыйДокумент"),
    TypeDescription => ("TypeDescription", "ОписаниеТипа"),
    Uuid => ("UUID", "УникальныйИдентификатор"),
    ValueList => ("ValueList", "СписокЗначений"),
    ValueStorage => ("ValueStorage", "ХранилищеЗначений"),
    ValueTable => ("ValueTable", "ТаблицаЗначений"),
    ValueTree => ("ValueTree", "ДеревоЗначений"),
    VerticalAlign => ("VerticalAlign", "ВертикальноеПоложение"),
}

static KEYS: LazyLock<HashMap<String, V8ValueType>> = LazyLock::new(compute_keys);

impl V8ValueType {
    #[must_use]
    pub fn value_by_name(name: &str) -> Option<Self> {
        KEYS.get(&name.to_lowercase()).copied()
    }
}

impl Display for V8ValueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name_en())
    }
}
