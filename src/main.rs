mod logging;

use anyhow::Result;
use clap::Parser;
use tmdb_list_sync::cli::{run, Cli};
use tmdb_list_sync::prompt::TerminalPrompter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose, cli.quiet);

    run(&cli, &mut TerminalPrompter)
}
