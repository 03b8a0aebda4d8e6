//! The logic for the Hostfn CLI tool.

use anyhow::Result;
use clap::Parser;

use crate::commands::{Types, Validate};
use crate::logging;

#[derive(Parser)]
#[clap(
    name = "hostfn",
    about = "Validate host function signatures.",
    version,
    author
)]
/// The options for the hostfn Command Line Interface
enum HostfnCLIOptions {
    /// Wrap a target with a function type descriptor and print the signature
    #[clap(name = "validate")]
    Validate(Validate),

    /// List the recognized value type names
    #[clap(name = "types")]
    Types(Types),
}

impl HostfnCLIOptions {
    fn execute(&self) -> Result<()> {
        match self {
            Self::Validate(options) => options.execute(),
            Self::Types(options) => options.execute(),
        }
    }
}

/// The main function for the Hostfn CLI tool.
pub fn hostfn_main() {
    logging::set_up_logging();

    let options = HostfnCLIOptions::parse();
    if let Err(e) = options.execute() {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
