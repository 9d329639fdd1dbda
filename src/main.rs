use clap::Parser;
use doto_icons::cli::{Cli, Commands};
use doto_icons::output::Printer;
use miette::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Compose(args) => {
            doto_icons::cli::compose::run(args, &printer)?;
        }
        Commands::Resize(args) => {
            doto_icons::cli::resize::run(args, &printer)?;
        }
        Commands::Manifest(args) => doto_icons::cli::manifest::run(args, &printer)?,
    }

    Ok(())
}
