//! Menu presentation and option dispatch.

use crate::catalog::Catalog;
use crate::error::StockResult;
use crate::formatters::format_menu;
use crate::ops;
use crate::selector::read_line;
use std::io::{BufRead, Write};
use std::path::Path;

/// Runs the interactive menu loop until the operator exits or input ends.
///
/// Operation errors are reported on the console and the loop continues;
/// the in-memory catalog stays authoritative if a rewrite failed.
pub fn run_loop<R: BufRead, W: Write>(
    catalog: &mut Catalog,
    catalog_path: &Path,
    ledger_path: &Path,
    input: &mut R,
    output: &mut W,
) -> StockResult<()> {
    loop {
        writeln!(output, "{}", format_menu())?;
        write!(output, "Enter an option: ")?;
        output.flush()?;

        let Some(line) = read_line(input)? else {
            break;
        };

        let result = match line.trim() {
            "1" => ops::list_all(catalog, output),
            "2" => ops::list_by_platform(catalog, input, output),
            "3" => ops::sell(catalog, catalog_path, ledger_path, input, output),
            "4" => ops::add(catalog, catalog_path, input, output),
            "5" => ops::remove(catalog, catalog_path, input, output),
            "6" => ops::modify(catalog, catalog_path, input, output),
            "0" => {
                writeln!(output, "\nExiting...")?;
                break;
            }
            _ => Ok(()),
        };

        if let Err(e) = result {
            log::error!("Operation failed: {e}");
            writeln!(output, "Error: {e}")?;
        }
        writeln!(output)?;
    }
    Ok(())
}
