//! The output sink: persists a finished file set into a directory.
//!
//! Writes every generated file (prepending a generated-by banner to `.ts`
//! files), then removes leftovers from previous runs. A leftover is only
//! deleted when its first line carries the banner, so hand-written files in
//! the same directory are never touched.

use std::{
    fs,
    path::Path,
};

use eyre::{Context, Result};

use crate::file_set::FileSet;

/// What a sync actually did, for CLI reporting.
#[derive(Debug, Default)]
pub struct WriteReport {
    /// Files written (new or overwritten), sorted.
    pub written: Vec<String>,
    /// Stale generated files deleted, sorted.
    pub deleted: Vec<String>,
}

/// Prepend the banner to files that can carry a line comment.
fn with_banner(filename: &str, content: &str, generated_statement: &str) -> String {
    if filename.ends_with(".ts") {
        format!("// {}\n\n{}", generated_statement, content)
    } else {
        // JSON has no comment syntax; the snapshot is written as-is.
        content.to_string()
    }
}

/// Sync a file set into `directory`.
pub fn write_files(directory: &Path, files: &FileSet, generated_statement: &str) -> Result<WriteReport> {
    fs::create_dir_all(directory)
        .wrap_err_with(|| format!("failed to create output directory '{}'", directory.display()))?;

    let mut report = WriteReport::default();

    for file in files.sorted() {
        let path = directory.join(&file.filename);
        let content = with_banner(&file.filename, &file.content, generated_statement);
        fs::write(&path, content)
            .wrap_err_with(|| format!("failed to write '{}'", path.display()))?;
        report.written.push(file.filename);
    }

    for entry in fs::read_dir(directory)
        .wrap_err_with(|| format!("failed to read output directory '{}'", directory.display()))?
    {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if files.contains(&name) {
            continue;
        }
        let content = fs::read_to_string(entry.path())
            .wrap_err_with(|| format!("failed to read '{}'", entry.path().display()))?;
        let generated = content
            .lines()
            .next()
            .is_some_and(|line| line.contains(generated_statement));
        if generated {
            fs::remove_file(entry.path())
                .wrap_err_with(|| format!("failed to delete '{}'", entry.path().display()))?;
            report.deleted.push(name);
        }
    }

    report.deleted.sort();
    Ok(report)
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    const STATEMENT: &str = "Generated by: tusk";

    fn file_set(entries: &[(&str, &str)]) -> FileSet {
        let mut files = FileSet::new();
        for (filename, content) in entries {
            files.insert(filename.to_string(), content.to_string(), filename).unwrap();
        }
        files
    }

    #[test]
    fn test_writes_banner_on_ts_files_only() {
        let temp = TempDir::new().unwrap();
        let files = file_set(&[("users.ts", "interface User {}\n"), ("schema.json", "[]\n")]);

        let report = write_files(temp.path(), &files, STATEMENT).unwrap();
        assert_eq!(report.written, vec!["schema.json", "users.ts"]);

        let ts = fs::read_to_string(temp.path().join("users.ts")).unwrap();
        assert_eq!(ts, "// Generated by: tusk\n\ninterface User {}\n");

        let json = fs::read_to_string(temp.path().join("schema.json")).unwrap();
        assert_eq!(json, "[]\n");
    }

    #[test]
    fn test_deletes_stale_generated_files() {
        let temp = TempDir::new().unwrap();
        write_files(
            temp.path(),
            &file_set(&[("users.ts", ""), ("photos.ts", "")]),
            STATEMENT,
        )
        .unwrap();

        let report = write_files(temp.path(), &file_set(&[("users.ts", "")]), STATEMENT).unwrap();
        assert_eq!(report.deleted, vec!["photos.ts"]);
        assert!(!temp.path().join("photos.ts").exists());
        assert!(temp.path().join("users.ts").exists());
    }

    #[test]
    fn test_never_deletes_hand_written_files() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("helpers.ts"), "export const x = 1;\n").unwrap();

        let report = write_files(temp.path(), &file_set(&[("users.ts", "")]), STATEMENT).unwrap();
        assert!(report.deleted.is_empty());
        assert!(temp.path().join("helpers.ts").exists());
    }

    #[test]
    fn test_creates_missing_directory() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("generated").join("db");

        write_files(&nested, &file_set(&[("users.ts", "")]), STATEMENT).unwrap();
        assert!(nested.join("users.ts").exists());
    }
}
