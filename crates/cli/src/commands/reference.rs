use anyhow::{Context, Result};
use bsl_common_types::{MdoReference, MdoType, ModuleType};
use clap::Args;
use colored::Colorize;
use serde::Serialize;

use crate::context::CommandContext;

#[derive(Args, Debug)]
#[command(about = "Parse a reference to a metadata object")]
pub struct RefArgs {
    /// Full name such as `Catalog.Goods` or `Справочник.Товары.Реквизит.Код`
    full_name: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RefReport {
    pub mdo_ref: String,
    pub mdo_ref_ru: String,
    pub kind: MdoType,
    pub modules: Vec<String>,
}

impl From<&MdoReference> for RefReport {
    fn from(reference: &MdoReference) -> Self {
        Self {
            mdo_ref: reference.mdo_ref().to_string(),
            mdo_ref_ru: reference.mdo_ref_ru().to_string(),
            kind: reference.mdo_type(),
            modules: ModuleType::by_mdo_type(reference.mdo_type())
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }
}

/// Parse a metadata reference and print both spellings and the modules it can own
///
/// # Errors
/// Returns error if the full name is not a valid reference.
pub async fn handle_ref(args: &RefArgs, context: &CommandContext) -> Result<()> {
    let reference = MdoReference::parse(&args.full_name)
        .with_context(|| format!("Failed to parse reference '{}'", args.full_name))?;
    let report = RefReport::from(&reference);
    let mut text = format!(
        "{} {} {}",
        reference.mdo_ref_for(context.script_variant).bright_white().bold(),
        format!("[{}]", report.kind).bright_blue().bold(),
        format!("({} / {})", report.mdo_ref, report.mdo_ref_ru).bright_black(),
    );
    for module in &report.modules {
        text.push_str(&format!("\n  {} {}", "→".bright_cyan(), module.bright_green()));
    }
    context.print(&text, &report)
}
