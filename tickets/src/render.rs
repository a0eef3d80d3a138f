//! Terminal output: the result table and the station list.

use comfy_table::Table;
use comfy_table::presets::UTF8_FULL;
use crossterm::style::Stylize;

use crate::query::{SeatClass, TrainEntry};
use crate::stations::StationDirectory;

/// Column headers. Seat columns follow [`SeatClass::ALL`].
pub const HEADERS: [&str; 11] = [
    "车次", "车站", "时间", "历时", "一等座", "二等座", "软卧", "硬卧", "软座", "硬座", "无座",
];

/// Renders decoded trains as a table.
///
/// Station and time cells hold two lines: departure on top, arrival below.
/// With color on, the departure line is green and the arrival line red.
#[derive(Debug, Clone, Copy)]
pub struct ResultPresenter {
    color: bool,
}

impl ResultPresenter {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Build the table for a list of trains.
    pub fn table(&self, entries: &[TrainEntry]) -> Table {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL).set_header(HEADERS);

        for entry in entries {
            table.add_row(self.row(entry));
        }

        table
    }

    /// Render the table to a string.
    pub fn render(&self, entries: &[TrainEntry]) -> String {
        self.table(entries).to_string()
    }

    fn row(&self, entry: &TrainEntry) -> Vec<String> {
        let mut row = Vec::with_capacity(HEADERS.len());
        row.push(entry.code.clone());
        row.push(self.pair(&entry.stations.origin, &entry.stations.destination));
        row.push(self.pair(&entry.times.depart, &entry.times.arrive));
        row.push(entry.duration.to_string());
        row.extend(
            SeatClass::ALL
                .iter()
                .map(|class| entry.seats.get(*class).to_string()),
        );
        row
    }

    fn pair(&self, depart: &str, arrive: &str) -> String {
        if self.color {
            format!("{}\n{}", depart.green(), arrive.red())
        } else {
            format!("{}\n{}", depart, arrive)
        }
    }
}

/// One `name telecode` line per station, ordered by name.
pub fn station_list(directory: &StationDirectory) -> String {
    directory
        .stations()
        .iter()
        .map(|s| format!("{} {}\n", s.name, s.telecode))
        .collect()
}
