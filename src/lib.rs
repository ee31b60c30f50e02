pub mod catalog;
pub mod error;
pub mod formatters;
pub mod io;
pub mod ledger;
pub mod models;
pub mod ops;
pub mod selector;
pub mod ui;

// Re-export commonly used items
pub use catalog::Catalog;
pub use error::{StockError, StockResult};
pub use io::{append_record, load_catalog, rewrite_catalog, CATALOG_HEADER};
pub use ledger::{append_sale, LEDGER_HEADER};
pub use models::{GameRecord, SaleEvent};
pub use selector::{choose_platform, choose_record};
