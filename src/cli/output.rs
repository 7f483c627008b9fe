use colored::Colorize;

use crate::config::Config;
use crate::core::services::SummaryService;
use crate::domain::{Displayable, Ledger};

/// Renders the running totals and the per-date breakdown.
pub fn render(ledger: &Ledger, config: &Config) {
    let totals = SummaryService::totals(ledger);
    println!();
    println!("{}", "Daily Expense Tracker".bold());
    println!(
        "{}  {}  {}",
        format!("Total Income: {:.2}", totals.income).green(),
        format!("Total Expenses: {:.2}", totals.expenses).red(),
        format!("Balance: {:.2}", totals.balance).bold(),
    );

    for (date, entries) in SummaryService::group_by_date(ledger) {
        println!("{}", date.to_string().underline());
        for txn in entries {
            println!("  {}", txn.display_label());
        }
    }

    if SummaryService::is_low_balance(totals.balance, config.low_balance_threshold) {
        println!(
            "{}",
            format!(
                "Warning: your balance is below {:.2}. Current balance: {:.2}.",
                config.low_balance_threshold, totals.balance
            )
            .yellow()
            .bold()
        );
    }
}

pub fn success(message: &str) {
    println!("{}", message.green());
}

pub fn failure(message: &str) {
    eprintln!("{}", message.red());
}
