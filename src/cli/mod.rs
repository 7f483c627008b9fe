//! Thin interactive shell over the ledger core.
//!
//! The shell owns no ledger state: every action goes through the services and
//! re-renders from the store afterwards. "Today" is read from the system
//! clock here, at the boundary, and passed down explicitly.

mod output;

use chrono::{Datelike, Local, NaiveDate};
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};
use thiserror::Error;
use uuid::Uuid;

use crate::config::ConfigManager;
use crate::core::services::{SalaryReminder, TransactionService};
use crate::core::{paths, LedgerStore, TransactionDraft};
use crate::domain::{Displayable, TransactionKind};
use crate::errors::LedgerError;
use crate::storage::JsonStorage;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error("Prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
}

const MENU_ITEMS: [&str; 6] = [
    "Add transaction",
    "Edit transaction",
    "Delete transaction",
    "Delete all transactions",
    "Refresh view",
    "Quit",
];

/// Entry point for the interactive shell.
pub fn run() -> Result<(), CliError> {
    crate::init();

    let config = ConfigManager::new()?.load().unwrap_or_default();
    let storage = JsonStorage::new(paths::ledger_file());
    let mut store = LedgerStore::open(Box::new(storage))?;

    let today = Local::now().date_naive();
    run_salary_reminder(&mut store, today)?;

    loop {
        output::render(store.ledger(), &config);
        match main_menu()? {
            0 => report(add_flow(&mut store)),
            1 => report(edit_flow(&mut store)),
            2 => report(delete_flow(&mut store)),
            3 => report(delete_all_flow(&mut store)),
            4 => {}
            _ => break,
        }
    }
    Ok(())
}

/// Runs the salary reminder exactly once, before the first render.
fn run_salary_reminder(store: &mut LedgerStore, today: NaiveDate) -> Result<(), CliError> {
    let mut reminder = SalaryReminder::new();
    if !reminder.check(store.ledger(), today) {
        return Ok(());
    }
    let wants_entry = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(format!(
            "Today is the {}th. Do you want to add your salary income?",
            today.day()
        ))
        .default(true)
        .interact()?;
    if !wants_entry {
        return Ok(());
    }
    let amount: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Enter your salary amount")
        .interact_text()?;
    match amount.trim().parse::<f64>() {
        Ok(value) => match SalaryReminder::accept(store, today, value) {
            Ok(_) => output::success("Salary added!"),
            Err(err) => output::failure(&err.to_string()),
        },
        Err(_) => output::failure("Salary amount must be a positive number."),
    }
    Ok(())
}

fn main_menu() -> Result<usize, CliError> {
    let choice = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("What next?")
        .items(&MENU_ITEMS)
        .default(0)
        .interact()?;
    Ok(choice)
}

fn add_flow(store: &mut LedgerStore) -> Result<(), CliError> {
    let today = Local::now().date_naive();
    let draft = prompt_draft(None, today)?;
    TransactionService::add(store, &draft, today)?;
    output::success("Transaction added!");
    Ok(())
}

fn edit_flow(store: &mut LedgerStore) -> Result<(), CliError> {
    let Some(id) = pick_transaction(store, "Edit which transaction?")? else {
        return Ok(());
    };
    let today = Local::now().date_naive();
    let current = store
        .ledger()
        .transaction(id)
        .ok_or(LedgerError::TransactionNotFound(id))?
        .clone();
    let draft = prompt_draft(Some(&current), today)?;
    TransactionService::update(store, id, &draft, today)?;
    output::success("Transaction updated!");
    Ok(())
}

fn delete_flow(store: &mut LedgerStore) -> Result<(), CliError> {
    let Some(id) = pick_transaction(store, "Delete which transaction?")? else {
        return Ok(());
    };
    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt("Are you sure you want to delete this transaction?")
        .default(false)
        .interact()?;
    if confirmed {
        TransactionService::remove(store, id)?;
        output::success("Transaction deleted!");
    }
    Ok(())
}

fn delete_all_flow(store: &mut LedgerStore) -> Result<(), CliError> {
    if store.ledger().is_empty() {
        output::failure("There are no transactions to delete.");
        return Ok(());
    }
    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt("Delete ALL transactions? This action cannot be undone.")
        .default(false)
        .interact()?;
    if confirmed {
        TransactionService::clear(store)?;
        output::success("All transactions deleted!");
    }
    Ok(())
}

/// Collects the four transaction fields, pre-filling from `current` on edits.
fn prompt_draft(
    current: Option<&crate::domain::Transaction>,
    today: NaiveDate,
) -> Result<TransactionDraft, CliError> {
    let theme = ColorfulTheme::default();
    let kinds = [TransactionKind::Expense, TransactionKind::Income];
    let kind_labels: Vec<&str> = kinds.iter().map(|kind| kind.label()).collect();
    let default_kind = match current.map(|txn| txn.kind) {
        Some(TransactionKind::Income) => 1,
        _ => 0,
    };
    let kind_index = Select::with_theme(&theme)
        .with_prompt("Transaction type")
        .items(&kind_labels)
        .default(default_kind)
        .interact()?;

    let date_default = current
        .map(|txn| txn.date.to_string())
        .unwrap_or_else(|| today.to_string());
    let date: String = Input::with_theme(&theme)
        .with_prompt("Date (YYYY-MM-DD)")
        .default(date_default)
        .interact_text()?;

    let mut amount_prompt = Input::<String>::with_theme(&theme).with_prompt("Amount");
    if let Some(txn) = current {
        amount_prompt = amount_prompt.default(format!("{:.2}", txn.amount));
    }
    let amount = amount_prompt.interact_text()?;

    let description: String = Input::with_theme(&theme)
        .with_prompt("Item")
        .default(current.map(|txn| txn.description.clone()).unwrap_or_default())
        .allow_empty(true)
        .interact_text()?;

    Ok(TransactionDraft::new(
        kinds[kind_index].label().to_ascii_lowercase(),
        date,
        amount,
        description,
    ))
}

/// Lets the user pick an entry by label; None when the ledger is empty.
fn pick_transaction(store: &LedgerStore, prompt: &str) -> Result<Option<Uuid>, CliError> {
    let transactions = store.ledger().transactions();
    if transactions.is_empty() {
        output::failure("No transactions recorded yet.");
        return Ok(None);
    }
    let labels: Vec<String> = transactions
        .iter()
        .map(|txn| format!("{} {}", txn.date, txn.display_label()))
        .collect();
    let index = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(Some(transactions[index].id))
}

/// Validation problems are reported verbatim; anything else is unexpected
/// and also goes to the log.
fn report(outcome: Result<(), CliError>) {
    match outcome {
        Ok(()) => {}
        Err(CliError::Ledger(err)) if err.is_validation() => {
            output::failure(&err.to_string());
        }
        Err(other) => {
            tracing::error!(error = %other, "operation failed");
            output::failure(&format!("Operation failed: {}", other));
        }
    }
}
