use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::{
    commands::{
        CompatArgs, ConfigArgs, ModulesArgs, RefArgs, SupportArgs, TypeArgs, handle_compat,
        handle_config, handle_modules, handle_ref, handle_support, handle_type,
    },
    context::CommandContext,
    options::FormatOptions,
};
pub mod commands;
pub mod config;
pub mod context;
mod logger;
pub mod options;

#[derive(Parser, Debug)]
#[command(
    name = "bsl-common",
    author,
    version,
    about = "Look up 1C:Enterprise metadata kinds, references, value types and compatibility modes",
    help_template = "{name} {version}\n{about}\n\n{usage-heading} {usage}\n\n{all-args}"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long, global = true)]
    format: Option<FormatOptions>,

    #[arg(short, long, global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Type(TypeArgs),
    Ref(RefArgs),
    Modules(ModulesArgs),
    Compat(CompatArgs),
    Support(SupportArgs),
    Config(ConfigArgs),
}

pub async fn main(args: &[String]) -> Result<()> {
    let cli = Cli::parse_from(args);
    logger::init_logger(cli.verbose);
    let context = CommandContext::new(cli.format).await?;
    match cli.command {
        Commands::Type(args) => handle_type(&args, &context).await?,
        Commands::Ref(args) => handle_ref(&args, &context).await?,
        Commands::Modules(args) => handle_modules(&args, &context).await?,
        Commands::Compat(args) => handle_compat(&args, &context).await?,
        Commands::Support(args) => handle_support(&args, &context).await?,
        Commands::Config(args) => handle_config(&args, &context).await?,
    }
    Ok(())
}
