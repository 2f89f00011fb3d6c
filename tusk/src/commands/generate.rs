use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use tuskgen_print::{FileSet, print_schema, write_files};

use super::UnwrapOrExit;
use crate::inputs::{load_config, load_schema};

/// Banner prepended to every generated TypeScript file; also guards stale
/// files against deletion.
const GENERATED_STATEMENT: &str = "Generated by: tusk";

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to the schema snapshot JSON
    #[arg(short, long, default_value = "schema.json")]
    pub schema: PathBuf,

    /// Path to tusk.toml (missing file means default options)
    #[arg(short, long, default_value = "tusk.toml")]
    pub config: PathBuf,

    /// Output directory
    #[arg(short, long, default_value = "src/__generated__")]
    pub output: PathBuf,

    /// Preview generated files without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let schema = load_schema(&self.schema)?;
        let options = load_config(&self.config)?.into_options().unwrap_or_exit();
        let files = print_schema(&schema, &options).unwrap_or_exit();

        if self.dry_run {
            self.run_preview(&files)
        } else {
            self.run_generation(&files)
        }
    }

    fn run_generation(&self, files: &FileSet) -> Result<()> {
        let report = write_files(&self.output, files, GENERATED_STATEMENT)
            .wrap_err("Failed to write generated files")?;

        println!("Generated: {}/", self.output.display());
        for filename in &report.written {
            println!("  + {}", filename);
        }

        if !report.deleted.is_empty() {
            println!();
            println!("Removed stale files:");
            for filename in &report.deleted {
                println!("  - {}", filename);
            }
        }

        Ok(())
    }

    fn run_preview(&self, files: &FileSet) -> Result<()> {
        for file in files.sorted() {
            println!("── {} ──", file.filename);
            println!("{}", file.content);
        }

        println!("── Summary ──");
        println!("{} files would be generated", files.len());

        Ok(())
    }
}
