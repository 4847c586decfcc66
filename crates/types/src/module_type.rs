use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::mdo_type::MdoType;

/// Kinds of source modules an object can own.
///
/// BSL modules live in `.bsl` files next to the object's metadata, OneScript modules are
/// standalone `.os` files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ModuleType {
    BotModule,
    IntegrationServiceModule,
    CommandModule,
    CommonModule,
    ObjectModule,
    ManagerModule,
    FormModule,
    RecordSetModule,
    ValueManagerModule,
    ApplicationModule,
    ManagedApplicationModule,
    SessionModule,
    ExternalConnectionModule,
    OrdinaryApplicationModule,
    HttpServiceModule,
    WebServiceModule,
    RecalculationModule,
    OScriptClass,
    OScriptModule,
    Unknown,
}

const OSCRIPT_MODULE_TYPES: &[ModuleType] = &[ModuleType::OScriptClass, ModuleType::OScriptModule];

impl ModuleType {
    pub const ALL: &'static [Self] = &[
        Self::BotModule,
        Self::IntegrationServiceModule,
        Self::CommandModule,
        Self::CommonModule,
        Self::ObjectModule,
        Self::ManagerModule,
        Self::FormModule,
        Self::RecordSetModule,
        Self::ValueManagerModule,
        Self::ApplicationModule,
        Self::ManagedApplicationModule,
        Self::SessionModule,
        Self::ExternalConnectionModule,
        Self::OrdinaryApplicationModule,
        Self::HttpServiceModule,
        Self::WebServiceModule,
        Self::RecalculationModule,
        Self::OScriptClass,
        Self::OScriptModule,
        Self::Unknown,
    ];

    /// Name of the file the module is stored in; empty for `Unknown`.
    #[must_use]
    pub const fn file_name(&self) -> &'static str {
        match self {
            Self::BotModule
            | Self::IntegrationServiceModule
            | Self::CommonModule
            | Self::FormModule
            | Self::HttpServiceModule
            | Self::WebServiceModule => "Module.bsl",
            Self::CommandModule => "CommandModule.bsl",
            Self::ObjectModule => "ObjectModule.bsl",
            Self::ManagerModule => "ManagerModule.bsl",
            Self::RecordSetModule | Self::RecalculationModule => "RecordSetModule.bsl",
            Self::ValueManagerModule => "ValueManagerModule.bsl",
            Self::ApplicationModule => "ApplicationModule.bsl",
            Self::ManagedApplicationModule => "ManagedApplicationModule.bsl",
            Self::SessionModule => "SessionModule.bsl",
            Self::ExternalConnectionModule => "ExternalConnectionModule.bsl",
            Self::OrdinaryApplicationModule => "OrdinaryApplicationModule.bsl",
            Self::OScriptClass => "Class.os",
            Self::OScriptModule => "Module.os",
            Self::Unknown => "",
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::BotModule => "BotModule",
            Self::IntegrationServiceModule => "IntegrationServiceModule",
            Self::CommandModule => "CommandModule",
            Self::CommonModule => "CommonModule",
            Self::ObjectModule => "ObjectModule",
            Self::ManagerModule => "ManagerModule",
            Self::FormModule => "FormModule",
            Self::RecordSetModule => "RecordSetModule",
            Self::ValueManagerModule => "ValueManagerModule",
            Self::ApplicationModule => "ApplicationModule",
            Self::ManagedApplicationModule => "ManagedApplicationModule",
            Self::SessionModule => "SessionModule",
            Self::ExternalConnectionModule => "ExternalConnectionModule",
            Self::OrdinaryApplicationModule => "OrdinaryApplicationModule",
            Self::HttpServiceModule => "HTTPServiceModule",
            Self::WebServiceModule => "WEBServiceModule",
            Self::RecalculationModule => "RecalculationModule",
            Self::OScriptClass => "OScriptClass",
            Self::OScriptModule => "OScriptModule",
            Self::Unknown => "UNKNOWN",
        }
    }

    /// Module kinds an object of the given metadata kind can own.
    #[must_use]
    pub const fn by_mdo_type(mdo_type: MdoType) -> &'static [Self] {
        match mdo_type {
            MdoType::IntegrationService => &[Self::IntegrationServiceModule],
            MdoType::Bot => &[Self::BotModule],
            MdoType::AccountingRegister
            | MdoType::AccumulationRegister
            | MdoType::CalculationRegister
            | MdoType::InformationRegister
            | MdoType::ExternalDataSourceTable => &[Self::ManagerModule, Self::RecordSetModule],
            MdoType::BusinessProcess
            | MdoType::Catalog
            | MdoType::ChartOfAccounts
            | MdoType::ChartOfCalculationTypes
            | MdoType::ChartOfCharacteristicTypes
            | MdoType::DataProcessor
            | MdoType::Document
            | MdoType::ExchangePlan
            | MdoType::Report
            | MdoType::Task => &[Self::ManagerModule, Self::ObjectModule],
            MdoType::CommonCommand | MdoType::Command => &[Self::CommandModule],
            MdoType::CommonForm | MdoType::Form => &[Self::FormModule],
            MdoType::CommonModule => &[Self::CommonModule],
            MdoType::Configuration => &[
                Self::ApplicationModule,
                Self::SessionModule,
                Self::ExternalConnectionModule,
                Self::ManagedApplicationModule,
                Self::OrdinaryApplicationModule,
            ],
            MdoType::Constant => &[Self::ValueManagerModule, Self::ManagerModule],
            MdoType::DocumentJournal
            | MdoType::Enum
            | MdoType::FilterCriterion
            | MdoType::SettingsStorage => &[Self::ManagerModule],
            MdoType::HttpService => &[Self::HttpServiceModule],
            MdoType::Sequence => &[Self::RecordSetModule],
            MdoType::WebService => &[Self::WebServiceModule],
            MdoType::Recalculation => &[Self::RecalculationModule],
            MdoType::ExternalDataProcessor | MdoType::ExternalReport => &[Self::ObjectModule],
            _ => &[],
        }
    }

    #[must_use]
    pub const fn oscript_module_types() -> &'static [Self] {
        OSCRIPT_MODULE_TYPES
    }

    /// Module kinds stored under the given file name, compared without case.
    #[must_use]
    pub fn from_file_name(file_name: &str) -> Vec<Self> {
        Self::ALL
            .iter()
            .filter(|module_type| {
                !module_type.file_name().is_empty()
                    && module_type.file_name().eq_ignore_ascii_case(file_name)
            })
            .copied()
            .collect()
    }
}

impl Display for ModuleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(MdoType::Form, &[ModuleType::FormModule])]
    #[case(MdoType::Recalculation, &[ModuleType::RecalculationModule])]
    #[case(MdoType::AccountingRegister, &[ModuleType::ManagerModule, ModuleType::RecordSetModule])]
    #[case(MdoType::Catalog, &[ModuleType::ManagerModule, ModuleType::ObjectModule])]
    #[case(MdoType::Constant, &[ModuleType::ValueManagerModule, ModuleType::ManagerModule])]
    #[case(MdoType::ExternalReport, &[ModuleType::ObjectModule])]
    #[case(MdoType::Attribute, &[])]
    #[case(MdoType::Template, &[])]
    #[case(MdoType::Unknown, &[])]
    fn test_by_mdo_type(#[case] mdo_type: MdoType, #[case] expected: &[ModuleType]) {
        assert_eq!(ModuleType::by_mdo_type(mdo_type), expected);
    }

    #[test]
    fn test_configuration_modules() {
        let modules = ModuleType::by_mdo_type(MdoType::Configuration);
        assert_eq!(modules.len(), 5);
        assert!(modules.contains(&ModuleType::SessionModule));
        assert!(modules.contains(&ModuleType::OrdinaryApplicationModule));
    }

    #[test]
    fn test_oscript_module_types() {
        assert_eq!(
            ModuleType::oscript_module_types(),
            &[ModuleType::OScriptClass, ModuleType::OScriptModule]
        );
    }

    #[rstest]
    #[case(ModuleType::RecalculationModule, "RecordSetModule.bsl")]
    #[case(ModuleType::HttpServiceModule, "Module.bsl")]
    #[case(ModuleType::OScriptClass, "Class.os")]
    #[case(ModuleType::Unknown, "")]
    fn test_file_name(#[case] module_type: ModuleType, #[case] expected: &str) {
        assert_eq!(module_type.file_name(), expected);
    }

    #[test]
    fn test_from_file_name() {
        assert_eq!(
            ModuleType::from_file_name("objectmodule.bsl"),
            vec![ModuleType::ObjectModule]
        );
        assert_eq!(
            ModuleType::from_file_name("RecordSetModule.bsl"),
            vec![ModuleType::RecordSetModule, ModuleType::RecalculationModule]
        );
        assert_eq!(ModuleType::from_file_name("Module.bsl").len(), 6);
        assert!(ModuleType::from_file_name("").is_empty());
    }

    #[test]
    fn test_display() {
        assert_eq!(ModuleType::HttpServiceModule.to_string(), "HTTPServiceModule");
    }
}
