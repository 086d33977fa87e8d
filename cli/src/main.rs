mod commands;
mod terminal;

use commands::{CommandLine, Commands, check, generate};
use rostr_common::config::Config;
use terminal::logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init(commands.verbose);

    let cfg = Config {
        quiet: commands.quiet,
        no_validate: commands.no_validate,
    };

    match commands.command {
        Commands::Generate { snapshot, output } => {
            generate::generate(&snapshot, &output, &cfg).await
        }
        Commands::Check { report, snapshot } => check::check(&report, &snapshot).await,
    }
}
