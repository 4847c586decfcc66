use anyhow::Result;
use bsl_common_support::SupportVariant;
use clap::Args;
use colored::Colorize;
use serde::Serialize;

use crate::context::CommandContext;

#[derive(Args, Debug)]
#[command(about = "Find the strongest vendor support among priorities")]
pub struct SupportArgs {
    /// Support priorities: 0 not editable, 1 editable with support, 2 not supported, 99 none
    #[arg(allow_negative_numbers = true)]
    priorities: Vec<i32>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SupportReport {
    pub variant: SupportVariant,
    pub priority: i32,
}

#[must_use]
pub fn support_report(priorities: &[i32]) -> SupportReport {
    let variant = SupportVariant::max_of(
        priorities
            .iter()
            .map(|priority| SupportVariant::from_priority(*priority)),
    );
    SupportReport {
        variant,
        priority: variant.priority(),
    }
}

/// Print the strongest support variant among the given priorities
///
/// # Errors
/// Returns error if printing the report fails.
pub async fn handle_support(args: &SupportArgs, context: &CommandContext) -> Result<()> {
    let report = support_report(&args.priorities);
    let text = format!(
        "{} {}",
        report.variant.to_string().bright_white().bold(),
        format!("(priority {})", report.priority).bright_black(),
    );
    context.print(&text, &report)
}
