use serde::{Deserialize, Serialize};

/// One catalog entry: a title carried by the shop on a given platform.
///
/// Field renames map to the column headers of the backing file. Stock and
/// price are unsigned so a negative value can never enter the catalog;
/// price is whole USD units.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GameRecord {
    #[serde(rename = "Plataforma")]
    pub platform: String,
    #[serde(rename = "Titulo")]
    pub title: String,
    #[serde(rename = "Stock")]
    pub stock: u32,
    #[serde(rename = "Precio")]
    pub price: u32,
}

impl GameRecord {
    pub fn new(platform: &str, title: &str, stock: u32, price: u32) -> Self {
        Self {
            platform: platform.to_string(),
            title: title.to_string(),
            stock,
            price,
        }
    }

    /// Total price for `quantity` copies, widened so it cannot overflow.
    pub fn total_for(&self, quantity: u32) -> u64 {
        u64::from(self.price) * u64::from(quantity)
    }
}

/// A completed sale, as appended to the ledger. Never read back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaleEvent {
    pub platform: String,
    pub title: String,
    pub quantity: u32,
    pub total_price: u64,
}
