use anyhow::Result;
use constructable::cli::{self, Command};
use constructable::runner;

fn main() -> Result<()> {
    env_logger::init();
    let args = cli::parse_command_line_args();
    match args.command {
        Command::Demo => runner::demo()?,
        Command::New { name } => runner::construct(&name)?,
        Command::List => runner::list()?,
    }
    Ok(())
}
