//! Reading and writing the catalog file.
//!
//! The backing store is a semicolon-delimited UTF-8 text file: one header
//! line (`Plataforma;Titulo;Stock;Precio`) followed by one line per record.
//! Mutations rewrite the whole file; only the add-game path appends a
//! single line instead.

use crate::catalog::Catalog;
use crate::error::StockResult;
use crate::models::GameRecord;
use std::fs::{File, OpenOptions};
use std::path::Path;

/// Column headers of the catalog file, in field order.
pub const CATALOG_HEADER: [&str; 4] = ["Plataforma", "Titulo", "Stock", "Precio"];

/// Loads the whole catalog from `path`, preserving file order.
///
/// Fails on a missing or unreadable file and on any malformed row (wrong
/// column count, non-numeric stock or price, invalid encoding).
pub fn load_catalog(path: &Path) -> StockResult<Catalog> {
    // Open separately so a missing file surfaces as an I/O error, not a
    // catalog data error.
    let file = File::open(path)?;
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(b';')
        .trim(csv::Trim::All)
        .from_reader(file);

    let mut records = Vec::new();
    for result in rdr.deserialize() {
        let record: GameRecord = result?;
        records.push(record);
    }

    log::info!("Loaded {} records from {}", records.len(), path.display());
    Ok(Catalog::new(records))
}

/// Truncates `path` and rewrites it from the in-memory catalog: header
/// line first, then one line per record.
///
/// On an I/O fault the file is left wherever the write stream reached;
/// the caller reports the error and keeps the in-memory catalog as the
/// only surviving copy.
pub fn rewrite_catalog(path: &Path, catalog: &Catalog) -> StockResult<()> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .from_writer(file);

    wtr.write_record(CATALOG_HEADER)?;
    for record in catalog.records() {
        wtr.serialize(record)?;
    }
    wtr.flush()?;

    log::debug!("Rewrote {} with {} records", path.display(), catalog.len());
    Ok(())
}

/// Appends exactly one record line to `path`, no header.
pub fn append_record(path: &Path, record: &GameRecord) -> StockResult<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .from_writer(file);

    wtr.serialize(record)?;
    wtr.flush()?;

    log::debug!("Appended {} to {}", record.title, path.display());
    Ok(())
}
