//! Display functions for command results

use super::formatters::{percent, size_list};
use crate::commands::{Comparison, PagesResult};
use crate::data::SMT_COLUMN;
use colored::Colorize;

/// Print what was loaded and how much survived the join
pub fn print_comparison_summary(comparison: &Comparison) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        " {} {} {} ",
        comparison.method.legend().bright_yellow().bold(),
        "vs".cyan(),
        "SMT".bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    let joined = comparison.joined_rows();
    println!(
        "   {:<18} {}",
        format!("{}:", comparison.method.column()),
        comparison.method_rows
    );
    println!("   {:<18} {}", format!("{SMT_COLUMN}:"), comparison.smt_rows);
    println!(
        "   {:<18} {} ({} of {} rows matched)",
        "Joined:",
        format!("{joined}").bright_yellow().bold(),
        percent(comparison.method_matched(), comparison.method_rows),
        comparison.method.legend().to_lowercase()
    );
    if comparison.method_unmatched > 0 || comparison.smt_unmatched > 0 {
        println!(
            "   {:<18} {} {}, {} {}",
            "Dropped:",
            format!("{}", comparison.method_unmatched).yellow(),
            comparison.method.column(),
            format!("{}", comparison.smt_unmatched).yellow(),
            SMT_COLUMN
        );
    }

    let sizes = comparison.board_sizes();
    if sizes.is_empty() {
        println!(
            "\n{}",
            "⚠ No benchmark instance appears in both files".yellow().bold()
        );
    } else {
        println!(
            "   {:<18} {} [{}]",
            "Board sizes:",
            sizes.len(),
            size_list(&sizes, 8)
        );
    }
}

/// Print the files written by the pages command
pub fn print_pages_result(result: &PagesResult) {
    if result.files.is_empty() {
        println!("\n{}", "No pages written".yellow());
        return;
    }

    println!(
        "\n📊 {} {} board sizes across {} files",
        "Saved".green().bold(),
        result.board_sizes,
        result.files.len()
    );
    for path in &result.files {
        println!("   {}", path.display().to_string().bright_green());
    }
}
