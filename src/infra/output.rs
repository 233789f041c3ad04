//! Rendering of command results in the selected output format.
use anyhow::{Context, Result};
use serde::Serialize;
use tabled::{Table, Tabled};

use crate::cli::{AppContext, OutputFormat};

/// Print one record: `text` verbatim, the record as JSON, or a one-row table
pub fn print_record<T>(
    ctx: &AppContext,
    record: &T,
    text: &str,
) -> Result<()>
where
    T: Serialize + Tabled,
{
    match ctx.format
    {
        OutputFormat::Text => println!("{text}"),
        OutputFormat::Json =>
        {
            let json = serde_json::to_string_pretty(record).context("Failed to serialize output")?;
            println!("{json}");
        }
        OutputFormat::Table => println!("{}", Table::new(std::iter::once(record))),
    }
    Ok(())
}

/// Print many records as a JSON array or a table; text falls back to one JSON line each
pub fn print_records<T>(
    ctx: &AppContext,
    records: &[T],
) -> Result<()>
where
    T: Serialize + Tabled,
{
    match ctx.format
    {
        OutputFormat::Text =>
        {
            for r in records
            {
                println!("{}", serde_json::to_string(r).context("Failed to serialize output")?);
            }
        }
        OutputFormat::Json =>
        {
            let json = serde_json::to_string_pretty(records).context("Failed to serialize output")?;
            println!("{json}");
        }
        OutputFormat::Table => println!("{}", Table::new(records)),
    }
    Ok(())
}
