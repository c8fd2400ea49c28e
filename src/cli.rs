use clap::{Parser, Subcommand};

#[derive(clap::Parser, Debug)]
#[clap(name = "constructable", author, version, about)]
pub struct Arguments {
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Construct each demo class through every factory path
    Demo,
    /// Construct a registered class by name and invoke its signal
    New { name: String },
    /// List the registered class descriptors as JSON
    List,
}

pub fn parse_command_line_args() -> Arguments {
    Arguments::parse()
}
