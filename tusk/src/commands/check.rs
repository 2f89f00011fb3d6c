use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use tuskgen_print::print_schema;

use super::UnwrapOrExit;
use crate::inputs::{load_config, load_schema};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to the schema snapshot JSON
    #[arg(short, long, default_value = "schema.json")]
    pub schema: PathBuf,

    /// Path to tusk.toml (missing file means default options)
    #[arg(short, long, default_value = "tusk.toml")]
    pub config: PathBuf,
}

impl CheckCommand {
    /// Run the check command: a full print with the output discarded, so
    /// every configuration and schema error surfaces.
    pub fn run(&self) -> Result<()> {
        let schema = load_schema(&self.schema)?;
        let options = load_config(&self.config)?.into_options().unwrap_or_exit();
        let files = print_schema(&schema, &options).unwrap_or_exit();

        println!(
            "ok: {} relations, {} files",
            schema.relations.len(),
            files.len()
        );
        Ok(())
    }
}
