//! The six user-facing operations, composing the catalog, the selectors,
//! the backing file and the sales ledger.
//!
//! Selection cancellations degrade every operation to a clean no-op. File
//! errors propagate to the dispatch loop, which reports them and keeps the
//! in-memory catalog as the authoritative copy.

use crate::catalog::Catalog;
use crate::error::{StockError, StockResult};
use crate::formatters::format_record;
use crate::io::{append_record, rewrite_catalog};
use crate::ledger;
use crate::models::GameRecord;
use crate::selector::{choose_platform, choose_record, prompt_u32, read_line};
use std::io::{BufRead, Write};
use std::path::Path;

/// Prints and returns the records of one platform, catalog order preserved.
fn list_platform_records<W: Write>(
    catalog: &Catalog,
    platform: &str,
    output: &mut W,
) -> StockResult<Vec<GameRecord>> {
    let records: Vec<GameRecord> = catalog
        .by_platform(platform)
        .into_iter()
        .cloned()
        .collect();
    for record in &records {
        writeln!(output, "{}", format_record(record))?;
    }
    Ok(records)
}

/// The shared selection flow: platform, then the filtered listing, then one
/// record out of it. `None` at any step aborts.
fn select_game<R: BufRead, W: Write>(
    catalog: &Catalog,
    input: &mut R,
    output: &mut W,
) -> StockResult<Option<GameRecord>> {
    let Some(platform) = choose_platform(catalog, input, output)? else {
        return Ok(None);
    };
    let candidates = list_platform_records(catalog, &platform, output)?;
    let Some(pos) = choose_record(&candidates, input, output)? else {
        return Ok(None);
    };
    Ok(Some(candidates[pos].clone()))
}

/// Prints every record. No mutation.
pub fn list_all<W: Write>(catalog: &Catalog, output: &mut W) -> StockResult<()> {
    for record in catalog.records() {
        writeln!(output, "{}", format_record(record))?;
    }
    Ok(())
}

/// Platform selection followed by the filtered listing. No mutation.
pub fn list_by_platform<R: BufRead, W: Write>(
    catalog: &Catalog,
    input: &mut R,
    output: &mut W,
) -> StockResult<()> {
    let Some(platform) = choose_platform(catalog, input, output)? else {
        return Ok(());
    };
    list_platform_records(catalog, &platform, output)?;
    Ok(())
}

/// Sells a quantity of one chosen record.
///
/// The sale succeeds only when `0 < quantity < stock`; on success the
/// event is appended to the ledger and the catalog file is rewritten. On a
/// policy failure nothing is mutated and no ledger entry is written.
pub fn sell<R: BufRead, W: Write>(
    catalog: &mut Catalog,
    catalog_path: &Path,
    ledger_path: &Path,
    input: &mut R,
    output: &mut W,
) -> StockResult<()> {
    let Some(chosen) = select_game(catalog, input, output)? else {
        return Ok(());
    };
    let Some(quantity) = prompt_u32("Enter the quantity to sell: ", input, output)? else {
        return Ok(());
    };

    match catalog.sell_first(&chosen, quantity) {
        Ok(sale) => {
            ledger::append_sale(ledger_path, &sale)?;
            rewrite_catalog(catalog_path, catalog)?;
            writeln!(output, "Sale saved to the ledger.")?;
            writeln!(output, "Sale completed.")?;
            Ok(())
        }
        Err(StockError::InsufficientStock { .. }) => {
            writeln!(output, "Insufficient stock.")?;
            Ok(())
        }
        Err(e) => Err(e),
    }
}

/// Adds a new record under a chosen platform.
///
/// A cancelled platform selection aborts before any field prompt. The new
/// record is appended to the backing file as a single line, the one
/// mutation that skips the full rewrite.
pub fn add<R: BufRead, W: Write>(
    catalog: &mut Catalog,
    catalog_path: &Path,
    input: &mut R,
    output: &mut W,
) -> StockResult<()> {
    let Some(platform) = choose_platform(catalog, input, output)? else {
        return Ok(());
    };

    write!(output, "Enter title: ")?;
    output.flush()?;
    let Some(title) = read_line(input)? else {
        return Ok(());
    };
    let title = title.trim().to_string();

    let Some(stock) = prompt_u32("Enter stock: ", input, output)? else {
        return Ok(());
    };
    let Some(price) = prompt_u32("Enter price (USD): ", input, output)? else {
        return Ok(());
    };

    let record = GameRecord {
        platform,
        title,
        stock,
        price,
    };
    append_record(catalog_path, &record)?;
    writeln!(output, "Game ({}) added to the catalog.", record.title)?;
    catalog.push(record);
    Ok(())
}

/// Removes one chosen record (first structural match) and rewrites the
/// backing file.
pub fn remove<R: BufRead, W: Write>(
    catalog: &mut Catalog,
    catalog_path: &Path,
    input: &mut R,
    output: &mut W,
) -> StockResult<()> {
    let Some(chosen) = select_game(catalog, input, output)? else {
        return Ok(());
    };

    let removed = catalog
        .remove_first(&chosen)
        .ok_or_else(|| StockError::RecordVanished(chosen.title.clone()))?;
    rewrite_catalog(catalog_path, catalog)?;
    writeln!(output, "Game ({}) removed from the catalog.", removed.title)?;
    Ok(())
}

/// Replaces stock and price on one chosen record and rewrites the backing
/// file.
pub fn modify<R: BufRead, W: Write>(
    catalog: &mut Catalog,
    catalog_path: &Path,
    input: &mut R,
    output: &mut W,
) -> StockResult<()> {
    let Some(chosen) = select_game(catalog, input, output)? else {
        return Ok(());
    };

    writeln!(output, "\nCurrent game data:")?;
    writeln!(output, "Title: {}", chosen.title)?;
    writeln!(output, "Stock: {}", chosen.stock)?;
    writeln!(output, "Price: {}", chosen.price)?;

    let Some(stock) = prompt_u32("Enter the new stock: ", input, output)? else {
        return Ok(());
    };
    let Some(price) = prompt_u32("Enter the new price (USD): ", input, output)? else {
        return Ok(());
    };

    if !catalog.update_first(&chosen, stock, price) {
        return Err(StockError::RecordVanished(chosen.title.clone()));
    }
    rewrite_catalog(catalog_path, catalog)?;
    writeln!(output, "Game ({}) modified.", chosen.title)?;
    Ok(())
}
