use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use hostfn::{Function, HostValue};

use crate::common::{TargetKind, WasmFeatures};

#[derive(Debug, Parser)]
/// The options for the `hostfn validate` subcommand
pub struct Validate {
    /// The function type descriptor, as JSON
    /// (e.g. `{"parameters": ["i32"], "results": []}`)
    #[clap(
        long,
        value_name = "JSON",
        conflicts_with = "descriptor_file",
        required_unless_present = "descriptor_file"
    )]
    descriptor: Option<String>,

    /// Read the function type descriptor from a JSON file
    #[clap(long, value_name = "PATH")]
    descriptor_file: Option<PathBuf>,

    /// The kind of value to wrap
    #[clap(long, value_enum, default_value_t)]
    target: TargetKind,

    #[clap(flatten)]
    features: WasmFeatures,
}

impl Validate {
    /// Runs logic for the `validate` subcommand
    pub fn execute(&self) -> Result<()> {
        let descriptor = self.read_descriptor()?;
        let features = self.features.features();
        tracing::debug!(?features, target = ?self.target, "constructing function");

        let function =
            Function::new_with_features(&features, &descriptor, &self.target.host_value())
                .context("failed to construct function")?;
        println!("{}", function.ty());
        Ok(())
    }

    fn read_descriptor(&self) -> Result<HostValue> {
        let json = match (&self.descriptor, &self.descriptor_file) {
            (Some(json), _) => json.clone(),
            (None, Some(path)) => std::fs::read_to_string(path)
                .with_context(|| format!("failed to read `{}`", path.display()))?,
            (None, None) => anyhow::bail!("a descriptor is required"),
        };
        let value: serde_json::Value =
            serde_json::from_str(&json).context("the descriptor is not valid JSON")?;
        Ok(value.into())
    }
}
