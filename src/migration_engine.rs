use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::content_rewrite::ContentRewriter;
use crate::file_mapping::MappingEntry;
use crate::relocation_plan::RelocationPlan;
use crate::reporter::{MigrationReport, MigrationReporter};

/// The four tree roots a relocation runs against, derived from the project
/// root and the plan's package names.
#[derive(Debug, Clone)]
pub struct MigrationLayout {
    pub old_src_root: PathBuf,
    pub new_src_root: PathBuf,
    pub old_test_root: PathBuf,
    pub new_test_root: PathBuf,
}

impl MigrationLayout {
    /// Standard Gradle/Maven layout: `src/main/java` and `src/test/java`
    /// under the project root, followed by the package directories.
    pub fn for_project_root(project_root: &Path, plan: &RelocationPlan) -> Self {
        let old_pkg_dir: PathBuf = plan.old_package.segments().collect();
        let new_pkg_dir: PathBuf = plan.new_package.segments().collect();

        let main_java = project_root.join("src").join("main").join("java");
        let test_java = project_root.join("src").join("test").join("java");

        Self {
            old_src_root: main_java.join(&old_pkg_dir),
            new_src_root: main_java.join(&new_pkg_dir),
            old_test_root: test_java.join(&old_pkg_dir),
            new_test_root: test_java.join(&new_pkg_dir),
        }
    }
}

/// Outcome of processing one mapping entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FileOutcome {
    /// File was read, rewritten and written to its new location.
    Migrated,
    /// Old path did not exist. Soft warning, reported separately; expected
    /// for alternate historical locations of the same destination.
    NotFound,
    /// Read, transform or write failed; the message is preserved.
    Failed(String),
}

/// Record of one processed mapping entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileRecord {
    pub source: String,
    pub destination: String,
    pub outcome: FileOutcome,
}

/// Errors that can occur while migrating a single file. Always contained
/// within the per-file processing step; never aborts the run.
#[derive(Debug, Error)]
pub enum MigrationError {
    #[error("Failed to read {path}: {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("Failed to create directory {path}: {source}")]
    CreateDir { path: PathBuf, source: io::Error },

    #[error("Failed to write {path}: {source}")]
    Write { path: PathBuf, source: io::Error },
}

/// Sequential, single-threaded relocation run over the plan's mapping table.
///
/// The relocator copies: originals at the old locations are left untouched.
/// Destination files are overwritten if already present, so re-running is
/// idempotent per file.
pub struct PackageRelocator {
    layout: MigrationLayout,
    plan: RelocationPlan,
    rewriter: ContentRewriter,
}

impl PackageRelocator {
    pub fn new(layout: MigrationLayout, plan: RelocationPlan) -> Self {
        let rewriter = plan.rewriter();
        Self {
            layout,
            plan,
            rewriter,
        }
    }

    /// Process every mapping entry, then the entry-point test class. Per-file
    /// failures are recorded and never stop the run.
    pub fn run(&self) -> MigrationReport {
        let mut records = Vec::new();

        for entry in &self.plan.mappings {
            let record = self.process_entry(entry, &self.layout.old_src_root, &self.layout.new_src_root);
            records.push(record);
        }

        for entry in &self.plan.test_mappings {
            let record = self.process_entry(entry, &self.layout.old_test_root, &self.layout.new_test_root);
            records.push(record);
        }

        MigrationReporter::new().generate_report(records)
    }

    fn process_entry(&self, entry: &MappingEntry, old_root: &Path, new_root: &Path) -> FileRecord {
        let old_file = old_root.join(&entry.old_path);
        let new_file = new_root.join(&entry.new_path);

        if !old_file.exists() {
            println!("  ⚠ File not found: {}", entry.old_path);
            return FileRecord {
                source: entry.old_path.clone(),
                destination: entry.new_path.clone(),
                outcome: FileOutcome::NotFound,
            };
        }

        let outcome = match self.migrate_file(&old_file, &new_file) {
            Ok(()) => {
                println!("  ✓ Migrated: {} -> {}", entry.old_path, entry.new_path);
                FileOutcome::Migrated
            }
            Err(e) => {
                println!("  ✗ Failed to migrate {}: {}", entry.old_path, e);
                FileOutcome::Failed(e.to_string())
            }
        };

        FileRecord {
            source: entry.old_path.clone(),
            destination: entry.new_path.clone(),
            outcome,
        }
    }

    /// Read, rewrite and write one file. Reads as UTF-8 text, so an encoding
    /// error surfaces as a read failure.
    fn migrate_file(&self, old_file: &Path, new_file: &Path) -> Result<(), MigrationError> {
        let content = fs::read_to_string(old_file).map_err(|source| MigrationError::Read {
            path: old_file.to_path_buf(),
            source,
        })?;

        let rewritten = self.rewriter.rewrite(&content);

        if let Some(parent) = new_file.parent() {
            fs::create_dir_all(parent).map_err(|source| MigrationError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        fs::write(new_file, rewritten).map_err(|source| MigrationError::Write {
            path: new_file.to_path_buf(),
            source,
        })?;

        Ok(())
    }
}
