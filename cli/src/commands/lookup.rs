use colored::*;
use netkit_core::enrichment::{EnrichReport, EnrichmentService, Progress};
use netkit_core::vendors::MacVendorsApi;

use crate::commands::LookupArgs;
use crate::terminal::{colors, print};

const KEY_WIDTH: usize = 11;

pub async fn lookup(args: LookupArgs) -> anyhow::Result<EnrichReport> {
    print::header("MAC Address Manufacturer Lookup Tool");

    let cfg = args.enrich_config();
    let output: String = match &cfg.output {
        Some(path) => path.display().to_string(),
        None => String::from("Auto-generated"),
    };
    print::aligned_line("Input file", cfg.input.display(), KEY_WIDTH);
    print::aligned_line("MAC column", &cfg.mac_column, KEY_WIDTH);
    print::aligned_line("Output file", output, KEY_WIDTH);
    print::aligned_line("API delay", format!("{} seconds", args.delay_seconds), KEY_WIDTH);
    print::blank();
    if cfg.delay.is_zero() {
        print::warning("No pause between lookups, the API may start answering HTTP 429");
    }

    let api = MacVendorsApi::new(&args.lookup_config())?;
    let service = EnrichmentService::new(Box::new(api));
    let report = service.run(&cfg, &report_progress).await?;

    print::blank();
    print::success(&format!("Processed {} records", report.rows));
    print::success(&format!(
        "Completed! Results saved to: {}",
        report.output.display()
    ));

    print::blank();
    print::header("Manufacturer summary");
    let pairs: Vec<(String, usize)> = report
        .summary
        .iter()
        .map(|(manufacturer, count)| (manufacturer.to_string(), count))
        .collect();
    print::as_tree_one_level(&pairs);
    print::end_of_program();

    Ok(report)
}

fn report_progress(progress: Progress<'_>) {
    match progress {
        Progress::Reading { path } => {
            print::print_status(format!("Reading CSV file: {}", path.display()));
        }
        Progress::ColumnSelected { column } => {
            print::print_status(format!("Using MAC address column: '{column}'"));
        }
        Progress::Started { total } => {
            print::print_status(format!("Processing {total} records..."));
        }
        Progress::Row { index, total, mac } => {
            let counter: ColoredString = format!("{}/{}", index + 1, total).color(colors::ACCENT);
            print::print_status(format!("Processing {counter}: {}", mac.color(colors::PRIMARY)));
        }
        Progress::Written { path } => {
            tracing::debug!("wrote {}", path.display());
        }
    }
}
