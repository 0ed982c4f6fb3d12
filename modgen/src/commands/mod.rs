mod generate;

use clap::Parser;
use eyre::Result;
use generate::GenerateCommand;

/// Extension trait for exiting on core errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for modgen_core::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "modgen")]
#[command(version)]
#[command(about = "Generate a modulefile for an installed package")]
#[command(
    long_about = "Generate a modulefile for an installed package.\n\n\
    Sets up PATH and the library search paths for the install directory, \
    along with optional extra environment variables and prerequisites, \
    in TCL (Environment Modules) or Lua (Lmod) syntax."
)]
pub(crate) struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(flatten)]
    generate: GenerateCommand,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        self.generate.run()
    }
}
