use clap::Parser;
use std::path::Path;
use std::process;

use oldcar_package_migrate::{
    MigrationLayout, MigrationReporter, PackageRelocator, RelocationPlan, ReportFormat,
};

#[derive(Parser, Debug)]
#[command(name = "oldcar-package-migrate")]
#[command(about = "Relocate the legacy com.CarSelling.Sell.the.old.Car package tree to com.carselling.oldcar")]
struct Args {
    /// Path to the project root containing the src/main/java tree
    project_root: String,

    /// Report output format: console, json or yaml
    #[arg(long, value_name = "FORMAT", default_value = "console")]
    report: String,
}

fn main() {
    let args = Args::parse();

    let format = match args.report.as_str() {
        "console" => ReportFormat::Console,
        "json" => ReportFormat::Json,
        "yaml" => ReportFormat::Yaml,
        other => {
            eprintln!("Unknown report format '{}'. Expected: console, json or yaml", other);
            process::exit(2);
        }
    };

    let plan = RelocationPlan::oldcar();
    let layout = MigrationLayout::for_project_root(Path::new(&args.project_root), &plan);

    println!("============================================================");
    println!("Starting Java package migration...");
    println!("============================================================");

    let relocator = PackageRelocator::new(layout, plan);
    let report = relocator.run();

    let reporter = MigrationReporter::new().with_format(format);
    match reporter.format_report(&report) {
        Ok(formatted) => println!("\n{}", formatted),
        Err(e) => eprintln!("Failed to format report: {}", e),
    }

    // Per-file failures never abort the run and carry no exit-code contract;
    // the summary above is the only signal.
}
