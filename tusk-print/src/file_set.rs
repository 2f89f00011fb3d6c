//! The finished output set: filename → content, with uniqueness enforced.

use indexmap::IndexMap;

use crate::error::{Error, Result};

/// One generated file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Filename, unique within the output set.
    pub filename: String,
    /// Complete file content.
    pub content: String,
}

/// The output set built during a print run.
///
/// Filenames must be unique: two relations resolving to the same file is a
/// configuration error, surfaced on insert so the offending pair is named.
#[derive(Debug, Clone, Default)]
pub struct FileSet {
    files: IndexMap<String, String>,
    owners: IndexMap<String, String>,
}

impl FileSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a file, failing if the filename is taken.
    ///
    /// `owner` names the relation (or artifact) the file belongs to, for
    /// error reporting.
    pub fn insert(&mut self, filename: String, content: String, owner: &str) -> Result<()> {
        if let Some(first) = self.owners.get(&filename) {
            return Err(Box::new(Error::DuplicateFilename {
                filename,
                first: first.clone(),
                second: owner.to_string(),
            }));
        }
        self.owners.insert(filename.clone(), owner.to_string());
        self.files.insert(filename, content);
        Ok(())
    }

    /// Get a file's content by name.
    pub fn get(&self, filename: &str) -> Option<&str> {
        self.files.get(filename).map(String::as_str)
    }

    /// Iterate files in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = GeneratedFile> + '_ {
        self.files.iter().map(|(filename, content)| GeneratedFile {
            filename: filename.clone(),
            content: content.clone(),
        })
    }

    /// Files sorted by filename, for stable reporting and snapshots.
    pub fn sorted(&self) -> Vec<GeneratedFile> {
        let mut files: Vec<GeneratedFile> = self.iter().collect();
        files.sort_by(|a, b| a.filename.cmp(&b.filename));
        files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Whether a filename is present.
    pub fn contains(&self, filename: &str) -> bool {
        self.files.contains_key(filename)
    }
}
