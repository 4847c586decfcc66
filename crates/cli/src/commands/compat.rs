use std::cmp::Ordering;

use anyhow::Result;
use bsl_common_support::CompatibilityMode;
use clap::Args;
use colored::Colorize;
use serde::Serialize;

use crate::context::CommandContext;

#[derive(Args, Debug)]
#[command(about = "Compare two platform compatibility modes")]
pub struct CompatArgs {
    /// First mode, e.g. `Version_8_3_10`
    first: String,
    /// Second mode, e.g. `Version8_2_16`
    second: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CompatReport {
    pub first: String,
    pub second: String,
    /// How the second mode relates to the first: `newer`, `older` or `same`
    pub second_is: &'static str,
}

#[must_use]
pub fn compat_report(first: &str, second: &str) -> CompatReport {
    let first = CompatibilityMode::parse(first);
    let second = CompatibilityMode::parse(second);
    let second_is = match CompatibilityMode::compare(&first, &second) {
        Ordering::Greater => "newer",
        Ordering::Less => "older",
        Ordering::Equal => "same",
    };
    CompatReport {
        first: first.to_string(),
        second: second.to_string(),
        second_is,
    }
}

/// Compare two compatibility modes
///
/// # Errors
/// Returns error if printing the report fails.
pub async fn handle_compat(args: &CompatArgs, context: &CommandContext) -> Result<()> {
    let report = compat_report(&args.first, &args.second);
    let text = if report.second_is == "same" {
        format!(
            "{} {} {}",
            report.first.bright_white().bold(),
            "=".bright_cyan(),
            report.second.bright_white().bold()
        )
    } else {
        format!(
            "{} is {} than {}",
            report.second.bright_white().bold(),
            report.second_is.bright_green(),
            report.first.bright_white().bold(),
        )
    };
    context.print(&text, &report)
}
