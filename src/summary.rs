use chrono::Local;
use colored::Colorize;

use crate::metrics::{format_growth, SummaryRow};
use crate::types::{IndustryLevel, Metric};

/// Prints the summary table to stdout for the `--summary` mode.
pub fn print_summary(rows: &[SummaryRow], level: IndustryLevel, metric: Metric) {
    let heading = format!(
        "{} by industry, {} (generated {})",
        metric.label(),
        level.label(),
        Local::now().format("%Y-%m-%d %H:%M")
    );
    println!("{}", heading.bold());

    let header = format!(
        "{:<28} {:>6} {:>18} {:>10} {:>10}",
        "Industry",
        "Year",
        metric.label(),
        "Companies",
        "Growth"
    );
    println!("{}", header.bold());

    for row in rows {
        // pad before coloring so ANSI codes don't break the columns
        let growth = format!("{:>10}", format_growth(row.growth_pct));
        let growth = if row.growth_pct < 0.0 {
            growth.red()
        } else {
            growth.green()
        };
        println!(
            "{:<28} {:>6} {:>18.2} {:>10} {}",
            row.industry, row.year, row.total, row.companies, growth
        );
    }
}
