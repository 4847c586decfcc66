use anyhow::Result;
use bsl_common_types::{EnumWithName, MdoType, ModuleType};
use clap::Args;
use colored::Colorize;
use serde::Serialize;

use crate::context::CommandContext;

#[derive(Args, Debug)]
#[command(about = "List module kinds a metadata kind can own")]
pub struct ModulesArgs {
    /// Metadata kind in either language, singular or plural, e.g. `Catalog` or `Документы`
    kind: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ModuleReport {
    pub module_type: String,
    pub file_name: String,
}

/// Module kinds and file names of a metadata kind given by name.
///
/// # Errors
/// Returns error if the metadata kind is unknown.
pub fn modules_report(kind: &str) -> Result<(MdoType, Vec<ModuleReport>)> {
    let mdo_type = kind.parse::<MdoType>()?;
    let modules = ModuleType::by_mdo_type(mdo_type)
        .iter()
        .map(|module_type| ModuleReport {
            module_type: module_type.to_string(),
            file_name: module_type.file_name().to_string(),
        })
        .collect();
    Ok((mdo_type, modules))
}

/// List the modules of a metadata kind
///
/// # Errors
/// Returns error if the metadata kind is unknown.
pub async fn handle_modules(args: &ModulesArgs, context: &CommandContext) -> Result<()> {
    let (mdo_type, modules) = modules_report(&args.kind)?;
    let mut text = format!(
        "{} {}",
        context.spelling(&mdo_type.full_name()).bright_white().bold(),
        format!("({} modules)", modules.len()).bright_black(),
    );
    for module in &modules {
        text.push_str(&format!(
            "\n  {} {} {}",
            module.module_type.bright_green(),
            "→".bright_cyan(),
            module.file_name.bright_black()
        ));
    }
    context.print(&text, &modules)
}
