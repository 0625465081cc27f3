use chrono::{DateTime, NaiveDateTime, Utc};
use colored::Colorize;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::ledger::{LedgerStore, Record, RecordDraft, RecordKind, RecordPatch};

use super::io::{self, CliMode};
use super::CliError;

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn run(store: &mut LedgerStore, mode: CliMode) -> Result<(), CliError> {
    loop {
        io::clear_screen(mode)?;
        println!("Ledger: {}", store.path().display());
        let options = ["Show balance", "List records", "Add record", "Quit"];
        match io::choose(mode, "Main menu", &options)? {
            Some(0) => balance_view(store, mode)?,
            Some(1) => records_view(store, mode)?,
            Some(2) => add_view(store, mode)?,
            _ => break,
        }
    }
    Ok(())
}

fn balance_view(store: &LedgerStore, mode: CliMode) -> Result<(), CliError> {
    println!("{}", balance_line(store.balance(None)));
    io::pause(mode)
}

fn records_view(store: &mut LedgerStore, mode: CliMode) -> Result<(), CliError> {
    loop {
        io::clear_screen(mode)?;
        let mut records: Vec<Record> = store.list(None).cloned().collect();
        records.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

        println!(
            "Records ({}) — {}",
            records.len(),
            balance_line(store.balance(None))
        );
        for (idx, record) in records.iter().enumerate() {
            println!("{}. {}", idx + 1, record_line(record));
        }

        let options = ["Open record", "Add record", "Back"];
        match io::choose(mode, "Records", &options)? {
            Some(0) => {
                if records.is_empty() {
                    io::warning("No records yet");
                    continue;
                }
                let Some(answer) = io::input_text(mode, "Record number")? else {
                    break;
                };
                match answer.trim().parse::<usize>() {
                    Ok(n) if (1..=records.len()).contains(&n) => {
                        detail_view(store, mode, records[n - 1].id)?;
                    }
                    _ => io::warning("Invalid record number"),
                }
            }
            Some(1) => add_view(store, mode)?,
            _ => break,
        }
    }
    Ok(())
}

fn detail_view(store: &mut LedgerStore, mode: CliMode, id: Uuid) -> Result<(), CliError> {
    loop {
        let Some(record) = store.get(id) else {
            break;
        };
        io::clear_screen(mode)?;
        println!("Record {}", record.id);
        println!("  Date:        {}", record.timestamp.format(DATE_FORMAT));
        println!("  Amount:      {}", amount_line(&record));
        println!("  Category:    {}", record.category);
        println!(
            "  Description: {}",
            record.description.as_deref().unwrap_or("-")
        );

        let options = [
            "Edit amount",
            "Edit category",
            "Edit description",
            "Edit date",
            "Delete",
            "Back",
        ];
        match io::choose(mode, "Record actions", &options)? {
            Some(0) => {
                let Some(answer) = io::input_text(mode, "Amount (negative for expense)")? else {
                    break;
                };
                match parse_signed_amount(&answer) {
                    Some((kind, amount)) => {
                        apply_patch(store, id, RecordPatch::new().kind(kind).amount(amount))
                    }
                    None => io::warning("Enter a non-zero number"),
                }
            }
            Some(1) => {
                let Some(answer) = io::input_text(mode, "Category")? else {
                    break;
                };
                apply_patch(store, id, RecordPatch::new().category(answer.trim()));
            }
            Some(2) => {
                let Some(answer) = io::input_text(mode, "Description (blank to clear)")? else {
                    break;
                };
                let patch = if answer.trim().is_empty() {
                    RecordPatch::new().clear_description()
                } else {
                    RecordPatch::new().description(answer.trim())
                };
                apply_patch(store, id, patch);
            }
            Some(3) => {
                let Some(answer) =
                    io::input_text(mode, "Date YYYY-MM-DD HH:MM:SS (blank for now)")?
                else {
                    break;
                };
                match parse_date(&answer) {
                    Some(timestamp) => {
                        apply_patch(store, id, RecordPatch::new().timestamp(timestamp))
                    }
                    None => io::warning("Invalid date"),
                }
            }
            Some(4) => {
                if io::confirm(mode, "Delete this record?")? == Some(true) {
                    match store.delete(id) {
                        Ok(()) => io::success("Record deleted"),
                        Err(err) => io::error(err),
                    }
                    break;
                }
            }
            _ => break,
        }
    }
    Ok(())
}

fn add_view(store: &mut LedgerStore, mode: CliMode) -> Result<(), CliError> {
    io::clear_screen(mode)?;
    io::info("Add record");

    let (kind, amount) = loop {
        let Some(answer) = io::input_text(mode, "Amount (negative for expense)")? else {
            return Ok(());
        };
        match parse_signed_amount(&answer) {
            Some(parsed) => break parsed,
            None => io::warning("Enter a non-zero number"),
        }
    };

    let timestamp = loop {
        let Some(answer) = io::input_text(mode, "Date YYYY-MM-DD HH:MM:SS (blank for now)")? else {
            return Ok(());
        };
        match parse_date(&answer) {
            Some(timestamp) => break timestamp,
            None => io::warning("Invalid date"),
        }
    };

    let category = loop {
        let Some(answer) = io::input_text(mode, "Category")? else {
            return Ok(());
        };
        if answer.trim().is_empty() {
            io::warning("Category must not be empty");
            continue;
        }
        break answer.trim().to_string();
    };

    let Some(description) = io::input_text(mode, "Description (optional)")? else {
        return Ok(());
    };

    if io::confirm(mode, "Create this record?")? == Some(true) {
        let mut draft = RecordDraft::new(kind, amount, category).with_timestamp(timestamp);
        if !description.trim().is_empty() {
            draft = draft.with_description(description.trim());
        }
        match store.add(draft) {
            Ok(record) => io::success(format!("Added record {}", record.id)),
            Err(err) => io::error(err),
        }
    } else {
        io::info("Cancelled");
    }
    io::pause(mode)
}

fn apply_patch(store: &mut LedgerStore, id: Uuid, patch: RecordPatch) {
    match store.edit(id, patch) {
        Ok(_) => io::success("Record updated"),
        Err(err) => io::error(err),
    }
}

/// Sign selects the kind; the stored amount is always positive.
fn parse_signed_amount(raw: &str) -> Option<(RecordKind, Decimal)> {
    let value = raw.trim().parse::<Decimal>().ok()?;
    if value.is_zero() {
        return None;
    }
    let kind = if value < Decimal::ZERO {
        RecordKind::Expense
    } else {
        RecordKind::Income
    };
    Some((kind, value.abs()))
}

fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Some(Utc::now());
    }
    NaiveDateTime::parse_from_str(raw, DATE_FORMAT)
        .ok()
        .map(|naive| DateTime::from_naive_utc_and_offset(naive, Utc))
}

fn balance_line(balance: Decimal) -> String {
    let text = format!("Balance: {balance}");
    if balance < Decimal::ZERO {
        text.bright_red().to_string()
    } else {
        text.bright_green().to_string()
    }
}

fn amount_line(record: &Record) -> String {
    match record.kind {
        RecordKind::Income => format!("+{}", record.amount).bright_green().to_string(),
        RecordKind::Expense => format!("-{}", record.amount).bright_red().to_string(),
    }
}

fn record_line(record: &Record) -> String {
    let sign = match record.kind {
        RecordKind::Income => "+",
        RecordKind::Expense => "-",
    };
    let line = format!(
        "[{}] {}{} {}{}",
        record.timestamp.format(DATE_FORMAT),
        sign,
        record.amount,
        record.category,
        record
            .description
            .as_deref()
            .map(|d| format!(" ({d})"))
            .unwrap_or_default(),
    );
    match record.kind {
        RecordKind::Income => line.bright_green().to_string(),
        RecordKind::Expense => line.bright_red().to_string(),
    }
}
