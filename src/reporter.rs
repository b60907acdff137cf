use serde::{Deserialize, Serialize};

use crate::migration_engine::{FileOutcome, FileRecord};

/// Reporter for generating migration run summaries in various formats.
pub struct MigrationReporter {
    output_format: ReportFormat,
}

/// Available output formats for migration reports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ReportFormat {
    Console,
    Json,
    Yaml,
}

/// Run summary: per-file records, aggregate counters and the fixed follow-up
/// instructions. Printed, not persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MigrationReport {
    pub records: Vec<FileRecord>,
    pub summary: MigrationSummary,
    pub next_steps: Vec<String>,
}

/// Aggregate counters accumulated across the run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MigrationSummary {
    pub migrated: usize,
    pub failed: usize,
    pub not_found: usize,
}

impl MigrationSummary {
    pub fn from_records(records: &[FileRecord]) -> Self {
        let mut summary = MigrationSummary {
            migrated: 0,
            failed: 0,
            not_found: 0,
        };

        for record in records {
            match record.outcome {
                FileOutcome::Migrated => summary.migrated += 1,
                FileOutcome::NotFound => summary.not_found += 1,
                FileOutcome::Failed(_) => summary.failed += 1,
            }
        }

        summary
    }
}

impl MigrationReporter {
    pub fn new() -> Self {
        Self {
            output_format: ReportFormat::Console,
        }
    }

    pub fn with_format(mut self, format: ReportFormat) -> Self {
        self.output_format = format;
        self
    }

    /// Build the report from the run's per-file records.
    pub fn generate_report(&self, records: Vec<FileRecord>) -> MigrationReport {
        let summary = MigrationSummary::from_records(&records);

        MigrationReport {
            records,
            summary,
            next_steps: next_steps(),
        }
    }

    /// Format the report according to the configured output format.
    pub fn format_report(&self, report: &MigrationReport) -> Result<String, ReportError> {
        match self.output_format {
            ReportFormat::Console => self.format_console_report(report),
            ReportFormat::Json => self.format_json_report(report),
            ReportFormat::Yaml => self.format_yaml_report(report),
        }
    }

    fn format_console_report(&self, report: &MigrationReport) -> Result<String, ReportError> {
        let mut output = String::new();

        output.push_str("=== Migration Report ===\n\n");
        output.push_str(&format!("Files migrated: {}\n", report.summary.migrated));
        output.push_str(&format!("Files not found: {}\n", report.summary.not_found));
        output.push_str(&format!("Files failed: {}\n", report.summary.failed));

        if report.summary.failed > 0 {
            output.push_str("\nFailures:\n");
            for record in &report.records {
                if let FileOutcome::Failed(ref message) = record.outcome {
                    output.push_str(&format!("  ✗ {}: {}\n", record.source, message));
                }
            }
        }

        if !report.next_steps.is_empty() {
            output.push_str("\nNext steps:\n");
            for step in &report.next_steps {
                output.push_str(&format!("  • {}\n", step));
            }
        }

        Ok(output)
    }

    fn format_json_report(&self, report: &MigrationReport) -> Result<String, ReportError> {
        serde_json::to_string_pretty(report)
            .map_err(|e| ReportError::SerializationError(e.to_string()))
    }

    fn format_yaml_report(&self, report: &MigrationReport) -> Result<String, ReportError> {
        serde_yaml::to_string(report).map_err(|e| ReportError::SerializationError(e.to_string()))
    }
}

impl Default for MigrationReporter {
    fn default() -> Self {
        Self::new()
    }
}

/// Follow-up instructions printed after the run; never executed by the tool.
fn next_steps() -> Vec<String> {
    vec![
        "Update build.gradle: change group from 'com.CarSelling' to 'com.carselling'".to_string(),
        "Update application.properties if needed".to_string(),
        "Run: ./gradlew clean build".to_string(),
        "Delete the old package structure after verification".to_string(),
    ]
}

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Serialization error: {0}")]
    SerializationError(String),
}
