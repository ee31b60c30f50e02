use crate::error::{StockError, StockResult};
use crate::models::{GameRecord, SaleEvent};
use std::collections::BTreeSet;

/// The in-memory catalog: an ordered sequence of records loaded wholesale
/// from the backing file and exclusively owned for the program run.
///
/// Records have no identifier beyond structural equality; duplicates are
/// accepted and every lookup resolves to the first match in file order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Catalog {
    records: Vec<GameRecord>,
}

impl Catalog {
    pub fn new(records: Vec<GameRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[GameRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct platform names, sorted lexicographically.
    pub fn platforms(&self) -> Vec<String> {
        let set: BTreeSet<&str> = self.records.iter().map(|r| r.platform.as_str()).collect();
        set.into_iter().map(str::to_string).collect()
    }

    /// Exactly the records whose platform equals `platform`, catalog order
    /// preserved.
    pub fn by_platform(&self, platform: &str) -> Vec<&GameRecord> {
        self.records
            .iter()
            .filter(|r| r.platform == platform)
            .collect()
    }

    pub fn push(&mut self, record: GameRecord) {
        self.records.push(record);
    }

    /// Removes and returns the first record structurally equal to `target`.
    pub fn remove_first(&mut self, target: &GameRecord) -> Option<GameRecord> {
        let pos = self.records.iter().position(|r| r == target)?;
        Some(self.records.remove(pos))
    }

    /// Sets stock and price on the first record structurally equal to
    /// `target`. Returns false if no such record exists.
    pub fn update_first(&mut self, target: &GameRecord, stock: u32, price: u32) -> bool {
        match self.records.iter_mut().find(|r| *r == target) {
            Some(record) => {
                record.stock = stock;
                record.price = price;
                true
            }
            None => false,
        }
    }

    /// Applies the sale policy to the first record structurally equal to
    /// `target`.
    ///
    /// A sale succeeds only when `0 < quantity < stock`; under the strict
    /// less-than, selling the entire remaining stock is always rejected.
    /// On success the stock is decremented and the resulting event carries
    /// `price * quantity` as its total; on rejection nothing is mutated.
    pub fn sell_first(&mut self, target: &GameRecord, quantity: u32) -> StockResult<SaleEvent> {
        let record = self
            .records
            .iter_mut()
            .find(|r| *r == target)
            .ok_or_else(|| StockError::RecordVanished(target.title.clone()))?;

        if quantity == 0 || quantity >= record.stock {
            return Err(StockError::InsufficientStock {
                requested: quantity,
                available: record.stock,
            });
        }

        record.stock -= quantity;
        log::debug!(
            "Sold {} x {} ({}), stock now {}",
            quantity,
            record.title,
            record.platform,
            record.stock
        );
        Ok(SaleEvent {
            platform: record.platform.clone(),
            title: record.title.clone(),
            quantity,
            total_price: u64::from(record.price) * u64::from(quantity),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(platform: &str, title: &str, stock: u32, price: u32) -> GameRecord {
        GameRecord::new(platform, title, stock, price)
    }

    fn sample_catalog() -> Catalog {
        Catalog::new(vec![
            record("Xbox", "Halo", 7, 50),
            record("PS5", "Game A", 10, 60),
            record("PS5", "Game B", 3, 40),
            record("Switch", "Zelda", 5, 70),
        ])
    }

    #[test]
    fn platforms_are_distinct_and_sorted() {
        let catalog = sample_catalog();
        assert_eq!(catalog.platforms(), vec!["PS5", "Switch", "Xbox"]);
    }

    #[test]
    fn platforms_of_empty_catalog_is_empty() {
        assert!(Catalog::default().platforms().is_empty());
    }

    #[test]
    fn by_platform_returns_matching_subsequence_in_order() {
        let catalog = sample_catalog();
        let ps5 = catalog.by_platform("PS5");
        assert_eq!(ps5.len(), 2);
        assert_eq!(ps5[0].title, "Game A");
        assert_eq!(ps5[1].title, "Game B");
    }

    #[test]
    fn by_platform_unknown_platform_is_empty() {
        assert!(sample_catalog().by_platform("PC").is_empty());
    }

    #[test]
    fn sell_within_stock_decrements_and_totals() {
        let mut catalog = sample_catalog();
        let target = record("PS5", "Game A", 10, 60);
        let sale = catalog.sell_first(&target, 5).unwrap();

        assert_eq!(sale.platform, "PS5");
        assert_eq!(sale.title, "Game A");
        assert_eq!(sale.quantity, 5);
        assert_eq!(sale.total_price, 300);
        assert_eq!(catalog.by_platform("PS5")[0].stock, 5);
    }

    #[test]
    fn sell_entire_stock_is_rejected() {
        // quantity == stock fails the strict less-than policy
        let mut catalog = sample_catalog();
        let target = record("PS5", "Game A", 10, 60);
        let err = catalog.sell_first(&target, 10).unwrap_err();

        assert!(matches!(
            err,
            StockError::InsufficientStock {
                requested: 10,
                available: 10
            }
        ));
        assert_eq!(catalog.by_platform("PS5")[0].stock, 10, "stock untouched");
    }

    #[test]
    fn sell_more_than_stock_is_rejected() {
        let mut catalog = sample_catalog();
        let target = record("PS5", "Game B", 3, 40);
        assert!(catalog.sell_first(&target, 4).is_err());
        assert_eq!(catalog.by_platform("PS5")[1].stock, 3);
    }

    #[test]
    fn sell_zero_is_rejected() {
        let mut catalog = sample_catalog();
        let target = record("Xbox", "Halo", 7, 50);
        assert!(catalog.sell_first(&target, 0).is_err());
    }

    #[test]
    fn sell_one_below_stock_succeeds() {
        let mut catalog = sample_catalog();
        let target = record("Xbox", "Halo", 7, 50);
        let sale = catalog.sell_first(&target, 6).unwrap();
        assert_eq!(sale.total_price, 300);
        assert_eq!(catalog.by_platform("Xbox")[0].stock, 1);
    }

    #[test]
    fn sell_unknown_record_reports_vanished() {
        let mut catalog = sample_catalog();
        let target = record("PC", "Doom", 5, 10);
        assert!(matches!(
            catalog.sell_first(&target, 1),
            Err(StockError::RecordVanished(_))
        ));
    }

    #[test]
    fn remove_first_removes_only_first_match() {
        let mut catalog = Catalog::new(vec![
            record("PS5", "Game A", 10, 60),
            record("PS5", "Game A", 10, 60),
        ]);
        let target = record("PS5", "Game A", 10, 60);

        let removed = catalog.remove_first(&target).unwrap();
        assert_eq!(removed.title, "Game A");
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn remove_first_missing_record_is_none() {
        let mut catalog = sample_catalog();
        assert!(catalog.remove_first(&record("PC", "Doom", 1, 1)).is_none());
        assert_eq!(catalog.len(), 4);
    }

    #[test]
    fn update_first_sets_stock_and_price() {
        let mut catalog = sample_catalog();
        let target = record("Switch", "Zelda", 5, 70);

        assert!(catalog.update_first(&target, 12, 65));
        let updated = catalog.by_platform("Switch")[0];
        assert_eq!(updated.stock, 12);
        assert_eq!(updated.price, 65);
    }

    #[test]
    fn update_first_missing_record_is_false() {
        let mut catalog = sample_catalog();
        assert!(!catalog.update_first(&record("PC", "Doom", 1, 1), 2, 2));
    }

    #[test]
    fn push_appends_in_order() {
        let mut catalog = sample_catalog();
        catalog.push(record("PS5", "Game C", 1, 30));
        assert_eq!(catalog.records().last().unwrap().title, "Game C");
    }
}
