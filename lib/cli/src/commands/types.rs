use anyhow::Result;
use clap::Parser;
use hostfn::Type;

use crate::common::WasmFeatures;

#[derive(Debug, Parser)]
/// The options for the `hostfn types` subcommand
pub struct Types {
    #[clap(flatten)]
    features: WasmFeatures,
}

impl Types {
    /// Runs logic for the `types` subcommand
    pub fn execute(&self) -> Result<()> {
        let features = self.features.features();
        for ty in Type::ALL {
            let status = if features.supports(ty) {
                "enabled"
            } else {
                "disabled"
            };
            match ty {
                Type::FuncRef => println!("{:<10} {status} (alias: anyfunc)", ty.token()),
                _ => println!("{:<10} {status}", ty.token()),
            }
        }
        Ok(())
    }
}
