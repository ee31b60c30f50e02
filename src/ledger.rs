//! The append-only sales ledger.
//!
//! Write-only from this program's perspective. The ledger format repeats
//! its header line before every appended sale and separates entries with a
//! blank line; both quirks are part of the reference file format and are
//! kept as-is.

use crate::error::StockResult;
use crate::models::SaleEvent;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// Column headers written before every ledger entry.
pub const LEDGER_HEADER: [&str; 4] = ["Plataforma", "Titulo", "Cantidad", "Precio Final(USD)"];

/// Appends one sale to the ledger at `path`: header line, sale line,
/// blank separator line.
pub fn append_sale(path: &Path, sale: &SaleEvent) -> StockResult<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;

    {
        let mut wtr = csv::WriterBuilder::new()
            .delimiter(b';')
            .has_headers(false)
            .from_writer(&mut file);
        wtr.write_record(LEDGER_HEADER)?;
        wtr.write_record(&[
            sale.platform.as_str(),
            sale.title.as_str(),
            &sale.quantity.to_string(),
            &sale.total_price.to_string(),
        ])?;
        wtr.flush()?;
    }
    file.write_all(b"\n")?;

    log::info!(
        "Recorded sale: {} x {} ({}) for {} USD",
        sale.quantity,
        sale.title,
        sale.platform,
        sale.total_price
    );
    Ok(())
}
