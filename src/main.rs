use anyhow::Result;
use gidl::cli::{self, Commands};
use gidl::commands;

fn main() -> Result<()> {
    let cli = cli::parse_args();
    cli::init_logging(cli.verbosity);

    match cli.command {
        Commands::Extract(args) => commands::handle_extract(args),
        Commands::Init { force } => commands::init_config(force),
    }
}
