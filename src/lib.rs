// Java package relocation for the Sell-the-old-Car backend
pub mod content_rewrite;
pub mod file_mapping;
pub mod migration_engine;
pub mod package_name;
pub mod relocation_plan;
pub mod reporter;

// Re-export core types for convenience
pub use content_rewrite::{ContentRewriter, RewriteRule};
pub use file_mapping::{MappingEntry, MappingError, MappingTable};
pub use migration_engine::{
    FileOutcome, FileRecord, MigrationError, MigrationLayout, PackageRelocator,
};
pub use package_name::PackageName;
pub use relocation_plan::RelocationPlan;
pub use reporter::{MigrationReport, MigrationReporter, MigrationSummary, ReportFormat};
