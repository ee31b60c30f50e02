//! Pure string formatting for console output.

use crate::models::GameRecord;

/// One catalog record as a pipe-separated display line.
pub fn format_record(record: &GameRecord) -> String {
    format!(
        "| {} | {} | {} | {} |",
        record.platform, record.title, record.stock, record.price
    )
}

/// The numbered platform list on a single line, e.g. `1- PS5|2- Xbox`.
pub fn format_platform_menu(platforms: &[String]) -> String {
    platforms
        .iter()
        .enumerate()
        .map(|(i, platform)| format!("{}- {}", i + 1, platform))
        .collect::<Vec<_>>()
        .join("|")
}

/// One selectable candidate, numbered from 1.
pub fn format_candidate(number: usize, record: &GameRecord) -> String {
    format!(
        "{}. {} | Stock: {} | Price: {}",
        number, record.title, record.stock, record.price
    )
}

/// The main menu text.
pub fn format_menu() -> String {
    [
        "1- Show all games",
        "2- Show games by platform",
        "3- Sell",
        "4- Add game",
        "5- Remove game",
        "6- Modify game",
        "0- Exit",
    ]
    .join("\n")
}
