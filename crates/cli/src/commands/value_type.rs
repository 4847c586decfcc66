use anyhow::Result;
use bsl_common_types::{MdoType, ValueType, ValueTypeVariant, ValueTypes};
use clap::Args;
use colored::Colorize;
use serde::Serialize;

use crate::context::CommandContext;

#[derive(Args, Debug)]
#[command(about = "Resolve a value type by name")]
pub struct TypeArgs {
    /// Type name in either language, e.g. `Число` or `CatalogRef.Goods`
    name: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TypeReport {
    pub name_en: String,
    pub name_ru: String,
    pub variant: ValueTypeVariant,
    pub kind: MdoType,
    pub composite: bool,
}

impl From<&ValueType> for TypeReport {
    fn from(value_type: &ValueType) -> Self {
        Self {
            name_en: value_type.name_en().to_string(),
            name_ru: value_type.name_ru().to_string(),
            variant: value_type.variant(),
            kind: value_type.kind(),
            composite: value_type.is_composite(),
        }
    }
}

/// Resolve a value type and print its names, family and metadata kind
///
/// # Errors
/// Returns error if printing the report fails.
pub async fn handle_type(args: &TypeArgs, context: &CommandContext) -> Result<()> {
    let value_type = ValueTypes::get_or_compute(&args.name);
    let report = TypeReport::from(&value_type);
    let text = format!(
        "{} {} {} {}",
        context.spelling(&value_type.full_name()).bright_white().bold(),
        format!("({} / {})", report.name_en, report.name_ru).bright_black(),
        format!("[{:?}]", report.variant).bright_blue().bold(),
        report.kind.to_string().bright_green(),
    );
    context.print(&text, &report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("число", "Number", ValueTypeVariant::Primitive, MdoType::Unknown, false)]
    #[case("ЛюбаяСсылка", "AnyRef", ValueTypeVariant::Metadata, MdoType::Configuration, true)]
    #[case("CatalogRef.Goods", "CatalogRef.Goods", ValueTypeVariant::Metadata, MdoType::Catalog, false)]
    #[case("SomethingElse", "SomethingElse", ValueTypeVariant::Unknown, MdoType::Unknown, false)]
    fn test_type_report(
        #[case] name: &str,
        #[case] name_en: &str,
        #[case] variant: ValueTypeVariant,
        #[case] kind: MdoType,
        #[case] composite: bool,
    ) {
        let report = TypeReport::from(&ValueTypes::get_or_compute(name));
        assert_eq!(report.name_en, name_en);
        assert_eq!(report.variant, variant);
        assert_eq!(report.kind, kind);
        assert_eq!(report.composite, composite);
    }

    #[test]
    fn test_type_report_json() {
        let report = TypeReport::from(&ValueTypes::get_or_compute("Строка"));
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["nameEn"], "String");
        assert_eq!(json["nameRu"], "Строка");
        assert_eq!(json["variant"], "Primitive");
        assert_eq!(json["kind"], "Unknown");
    }
}
