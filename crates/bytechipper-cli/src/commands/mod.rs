use crate::commands::{cat::CatArgs, inspect::InspectArgs};

pub mod cat;
pub mod inspect;

/// Subcommands for bytechipper-cli
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Act as a streaming tokenizer.
    Cat(CatArgs),

    /// Describe a tokenizer.
    Inspect(InspectArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Cat(cmd) => cmd.run(),
            Commands::Inspect(cmd) => cmd.run(),
        }
    }
}
