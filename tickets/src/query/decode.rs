//! Decoding raw train records into typed entries.
//!
//! The query endpoint returns each train as one `|`-delimited string whose
//! field positions are fixed by the remote service. Those positions live in
//! [`RawTrainRecord::split`] and nowhere else.

use crate::domain::{CategoryFilter, TrainCategory, TravelDuration};
use crate::stations::StationDirectory;

use super::error::DecodeError;

/// Minimum number of fields in a well-formed record.
pub const MIN_FIELDS: usize = 34;

/// Shown for a seat class with no availability information.
pub const NO_AVAILABILITY: &str = "--";

/// A record split into its named fields, still as raw text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTrainRecord<'a> {
    pub code: &'a str,
    pub origin: &'a str,
    pub destination: &'a str,
    pub depart: &'a str,
    pub arrive: &'a str,
    pub duration: &'a str,
    pub soft_sleeper: &'a str,
    pub soft_seat: &'a str,
    pub hard_sleeper: &'a str,
    pub hard_seat: &'a str,
    pub second_class: &'a str,
    pub first_class: &'a str,
    pub no_seat: &'a str,
}

impl<'a> RawTrainRecord<'a> {
    /// Split a raw record line into named fields.
    pub fn split(line: &'a str) -> Result<Self, DecodeError> {
        let fields: Vec<&str> = line.split('|').collect();
        if fields.len() < MIN_FIELDS {
            return Err(DecodeError::MalformedRecord {
                fields: fields.len(),
                expected: MIN_FIELDS,
            });
        }

        Ok(Self {
            code: fields[3],
            origin: fields[6],
            destination: fields[7],
            depart: fields[8],
            arrive: fields[9],
            duration: fields[10],
            soft_sleeper: fields[23],
            soft_seat: fields[24],
            hard_sleeper: fields[28],
            hard_seat: fields[29],
            second_class: fields[30],
            first_class: fields[31],
            no_seat: fields[33],
        })
    }
}

/// Seat classes, in table column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeatClass {
    FirstClass,
    SecondClass,
    SoftSleeper,
    HardSleeper,
    SoftSeat,
    HardSeat,
    NoSeat,
}

impl SeatClass {
    pub const ALL: [SeatClass; 7] = [
        SeatClass::FirstClass,
        SeatClass::SecondClass,
        SeatClass::SoftSleeper,
        SeatClass::HardSleeper,
        SeatClass::SoftSeat,
        SeatClass::HardSeat,
        SeatClass::NoSeat,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SeatClass::FirstClass => "一等座",
            SeatClass::SecondClass => "二等座",
            SeatClass::SoftSleeper => "软卧",
            SeatClass::HardSleeper => "硬卧",
            SeatClass::SoftSeat => "软座",
            SeatClass::HardSeat => "硬座",
            SeatClass::NoSeat => "无座",
        }
    }
}

/// Remaining tickets per seat class: a count, "有"/"无", or `"--"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatAvailability {
    pub first_class: String,
    pub second_class: String,
    pub soft_sleeper: String,
    pub hard_sleeper: String,
    pub soft_seat: String,
    pub hard_seat: String,
    pub no_seat: String,
}

impl SeatAvailability {
    fn from_record(record: &RawTrainRecord<'_>) -> Self {
        Self {
            first_class: seat_value(record.first_class),
            second_class: seat_value(record.second_class),
            soft_sleeper: seat_value(record.soft_sleeper),
            hard_sleeper: seat_value(record.hard_sleeper),
            soft_seat: seat_value(record.soft_seat),
            hard_seat: seat_value(record.hard_seat),
            no_seat: seat_value(record.no_seat),
        }
    }

    pub fn get(&self, class: SeatClass) -> &str {
        match class {
            SeatClass::FirstClass => &self.first_class,
            SeatClass::SecondClass => &self.second_class,
            SeatClass::SoftSleeper => &self.soft_sleeper,
            SeatClass::HardSleeper => &self.hard_sleeper,
            SeatClass::SoftSeat => &self.soft_seat,
            SeatClass::HardSeat => &self.hard_seat,
            SeatClass::NoSeat => &self.no_seat,
        }
    }
}

fn seat_value(raw: &str) -> String {
    if raw.is_empty() {
        NO_AVAILABILITY.to_string()
    } else {
        raw.to_string()
    }
}

/// Boarding and alighting station names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationPair {
    pub origin: String,
    pub destination: String,
}

/// Departure and arrival times, as sent ("HH:MM").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimePair {
    pub depart: String,
    pub arrive: String,
}

/// One train in the query result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainEntry {
    pub code: String,
    pub category: Option<TrainCategory>,
    pub stations: StationPair,
    pub times: TimePair,
    pub duration: TravelDuration,
    pub seats: SeatAvailability,
}

/// A record that was skipped during batch decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRecord {
    /// Position of the record in the response.
    pub index: usize,
    pub error: DecodeError,
}

/// Result of decoding a batch of records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodeOutcome {
    pub entries: Vec<TrainEntry>,
    pub skipped: Vec<SkippedRecord>,
}

/// Turns raw records into [`TrainEntry`] values.
///
/// Station names come from the directory; trains outside the category
/// filter are dropped.
#[derive(Debug, Clone, Copy)]
pub struct TrainRecordDecoder<'a> {
    directory: &'a StationDirectory,
    filter: &'a CategoryFilter,
}

impl<'a> TrainRecordDecoder<'a> {
    pub fn new(directory: &'a StationDirectory, filter: &'a CategoryFilter) -> Self {
        Self { directory, filter }
    }

    /// Decode one record.
    ///
    /// Returns `Ok(None)` when the train is filtered out.
    pub fn decode(&self, line: &str) -> Result<Option<TrainEntry>, DecodeError> {
        let record = RawTrainRecord::split(line)?;

        if !self.filter.accepts(record.code) {
            return Ok(None);
        }

        let duration = TravelDuration::parse(record.duration)
            .map_err(|e| DecodeError::MalformedDuration(e.input().to_string()))?;

        Ok(Some(TrainEntry {
            code: record.code.to_string(),
            category: TrainCategory::of_code(record.code),
            stations: StationPair {
                origin: self.station_name(record.origin),
                destination: self.station_name(record.destination),
            },
            times: TimePair {
                depart: record.depart.to_string(),
                arrive: record.arrive.to_string(),
            },
            duration,
            seats: SeatAvailability::from_record(&record),
        }))
    }

    /// Decode every record, skipping the ones that fail.
    pub fn decode_all<I, S>(&self, lines: I) -> DecodeOutcome
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut outcome = DecodeOutcome::default();

        for (index, line) in lines.into_iter().enumerate() {
            match self.decode(line.as_ref()) {
                Ok(Some(entry)) => outcome.entries.push(entry),
                Ok(None) => {}
                Err(error) => {
                    tracing::warn!(index, "skipping train record: {}", error);
                    outcome.skipped.push(SkippedRecord { index, error });
                }
            }
        }

        outcome
    }

    /// Display name for a telecode; unknown codes are shown as-is.
    fn station_name(&self, telecode: &str) -> String {
        match self.directory.resolve_name(telecode) {
            Some(name) => name.to_string(),
            None => {
                tracing::debug!(telecode, "telecode not in station directory");
                telecode.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directory() -> StationDirectory {
        StationDirectory::from_feed("@bji|北京|BJP|beijing|bj|0@sha|上海|SHH|shanghai|sh|1")
    }

    /// Build a record with the given (position, value) fields set.
    fn record(fields: &[(usize, &str)]) -> String {
        let mut parts = vec![""; MIN_FIELDS];
        for &(i, v) in fields {
            parts[i] = v;
        }
        parts.join("|")
    }

    fn g1() -> String {
        record(&[
            (3, "G1"),
            (6, "BJP"),
            (7, "SHH"),
            (8, "08:00"),
            (9, "12:00"),
            (10, "4:00"),
            (31, "5"),
        ])
    }

    #[test]
    fn split_names_fields() {
        let line = record(&[
            (3, "K101"),
            (10, "1:00"),
            (23, "a"),
            (24, "b"),
            (28, "c"),
            (29, "d"),
            (30, "e"),
            (31, "f"),
            (33, "g"),
        ]);
        let raw = RawTrainRecord::split(&line).unwrap();
        assert_eq!(raw.code, "K101");
        assert_eq!(raw.duration, "1:00");
        assert_eq!(
            [
                raw.soft_sleeper,
                raw.soft_seat,
                raw.hard_sleeper,
                raw.hard_seat,
                raw.second_class,
                raw.first_class,
                raw.no_seat
            ],
            ["a", "b", "c", "d", "e", "f", "g"]
        );
    }

    #[test]
    fn short_record_is_malformed() {
        let err = RawTrainRecord::split("a|b|c").unwrap_err();
        assert_eq!(
            err,
            DecodeError::MalformedRecord {
                fields: 3,
                expected: MIN_FIELDS
            }
        );

        let almost = vec![""; MIN_FIELDS - 1].join("|");
        assert!(RawTrainRecord::split(&almost).is_err());
    }

    #[test]
    fn decodes_full_entry() {
        let dir = directory();
        let filter = CategoryFilter::all();
        let entry = TrainRecordDecoder::new(&dir, &filter)
            .decode(&g1())
            .unwrap()
            .unwrap();

        assert_eq!(entry.code, "G1");
        assert_eq!(entry.category, Some(TrainCategory::HighSpeed));
        assert_eq!(entry.stations.origin, "北京");
        assert_eq!(entry.stations.destination, "上海");
        assert_eq!(entry.times.depart, "08:00");
        assert_eq!(entry.times.arrive, "12:00");
        assert_eq!(entry.duration.to_string(), "4时0钟");
        assert_eq!(entry.seats.first_class, "5");
        for class in SeatClass::ALL {
            if class != SeatClass::FirstClass {
                assert_eq!(entry.seats.get(class), NO_AVAILABILITY);
            }
        }
    }

    #[test]
    fn seat_values_pass_through() {
        let dir = directory();
        let filter = CategoryFilter::all();
        let line = record(&[(3, "Z19"), (10, "12:30"), (28, "有"), (29, "12"), (33, "无")]);
        let entry = TrainRecordDecoder::new(&dir, &filter)
            .decode(&line)
            .unwrap()
            .unwrap();

        assert_eq!(entry.seats.hard_sleeper, "有");
        assert_eq!(entry.seats.hard_seat, "12");
        assert_eq!(entry.seats.no_seat, "无");
        assert_eq!(entry.seats.soft_seat, NO_AVAILABILITY);
    }

    #[test]
    fn unknown_telecode_is_shown_raw() {
        let dir = directory();
        let filter = CategoryFilter::all();
        let line = record(&[(3, "D5"), (6, "XYZ"), (7, "SHH"), (10, "0:45")]);
        let entry = TrainRecordDecoder::new(&dir, &filter)
            .decode(&line)
            .unwrap()
            .unwrap();

        assert_eq!(entry.stations.origin, "XYZ");
        assert_eq!(entry.stations.destination, "上海");
    }

    #[test]
    fn filter_drops_other_categories() {
        let dir = directory();
        let filter: CategoryFilter = [TrainCategory::HighSpeed].into_iter().collect();
        let decoder = TrainRecordDecoder::new(&dir, &filter);

        assert!(decoder.decode(&g1()).unwrap().is_some());

        let lower = record(&[(3, "g7"), (10, "1:00")]);
        assert!(decoder.decode(&lower).unwrap().is_some());

        let emu = record(&[(3, "D5"), (10, "1:00")]);
        assert!(decoder.decode(&emu).unwrap().is_none());
    }

    #[test]
    fn bad_duration_is_malformed() {
        let dir = directory();
        let filter = CategoryFilter::all();
        let line = record(&[(3, "G1"), (10, "--")]);
        let err = TrainRecordDecoder::new(&dir, &filter)
            .decode(&line)
            .unwrap_err();
        assert_eq!(err, DecodeError::MalformedDuration("--".into()));
    }

    #[test]
    fn decode_all_skips_bad_records() {
        let dir = directory();
        let filter = CategoryFilter::all();
        let bad_duration = record(&[(3, "K2"), (10, "x")]);
        let lines = vec![
            "too|short".to_string(),
            g1(),
            bad_duration,
            record(&[(3, "T8"), (10, "30:01")]),
        ];

        let outcome = TrainRecordDecoder::new(&dir, &filter).decode_all(&lines);

        let codes: Vec<_> = outcome.entries.iter().map(|e| e.code.as_str()).collect();
        assert_eq!(codes, vec!["G1", "T8"]);
        assert_eq!(outcome.entries[1].duration.to_string(), "1天6时1分");

        assert_eq!(outcome.skipped.len(), 2);
        assert_eq!(outcome.skipped[0].index, 0);
        assert!(matches!(
            outcome.skipped[0].error,
            DecodeError::MalformedRecord { fields: 2, .. }
        ));
        assert_eq!(outcome.skipped[1].index, 2);
        assert_eq!(
            outcome.skipped[1].error,
            DecodeError::MalformedDuration("x".into())
        );
    }

    #[test]
    fn filtered_records_are_not_skips() {
        let dir = directory();
        let filter: CategoryFilter = [TrainCategory::Fast].into_iter().collect();
        let outcome = TrainRecordDecoder::new(&dir, &filter).decode_all([g1()]);
        assert!(outcome.entries.is_empty());
        assert!(outcome.skipped.is_empty());
    }
}
